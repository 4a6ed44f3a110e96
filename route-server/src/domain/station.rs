//! Station identity.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// The name of a station, used as its primary key for routing.
///
/// Names compare exactly. No case folding, trimming or Unicode
/// normalisation happens here, so callers must spell a station the same
/// way on every line that serves it. Two lines listing the same name share
/// that station, which is how interchanges arise.
///
/// # Examples
///
/// ```
/// use route_server::domain::StationName;
///
/// let central = StationName::new("Central");
/// assert_eq!(central.as_str(), "Central");
///
/// // Exact-string identity
/// assert_ne!(central, StationName::new("central"));
/// assert_ne!(central, StationName::new("Central "));
/// ```
#[derive(Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StationName(String);

impl StationName {
    /// Wrap a name without any normalisation.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true for the empty name, which never matches a real station.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Borrow<str> for StationName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for StationName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for StationName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl fmt::Debug for StationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationName({})", self.0)
    }
}

impl fmt::Display for StationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A caller's reference to a station.
///
/// Only `name` takes part in routing. `id` and `line` are carried through
/// for collaborators such as booking and map rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StationRef {
    /// Station name
    #[serde(default)]
    pub name: StationName,

    /// Caller-side station identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Line the caller associates with this station
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<String>,
}

impl StationRef {
    /// A reference carrying only a name.
    pub fn named(name: impl Into<StationName>) -> Self {
        Self {
            name: name.into(),
            id: None,
            line: None,
        }
    }
}
