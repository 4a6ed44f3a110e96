//! Lines and networks.

use std::borrow::Borrow;
use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::{NetworkError, StationName};

/// A stable line identifier, unique within a network.
#[derive(Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineId(String);

impl LineId {
    /// Wrap an identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for LineId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LineId({})", self.0)
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A named line: stations visited in a strict linear order.
///
/// A well-formed line lists each station once. Trains ride the line in
/// either direction, one stop at a time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    /// Stable identifier
    pub id: LineId,

    /// Display name (e.g., "Yellow Line"); empty displays as the id
    #[serde(default)]
    pub name: String,

    /// Display color, if the network defines one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    /// Stations in line order
    #[serde(default)]
    pub stations: Vec<StationName>,
}

impl Line {
    /// Create a line without a color.
    pub fn new<I, S>(id: impl Into<String>, name: impl Into<String>, stations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<StationName>,
    {
        Self {
            id: LineId::new(id),
            name: name.into(),
            color: None,
            stations: stations.into_iter().map(Into::into).collect(),
        }
    }

    /// Set the display color.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

/// An ordered collection of lines.
///
/// Serialized as a bare JSON array of lines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Network {
    lines: Vec<Line>,
}

impl Network {
    /// Create a network from lines, keeping their order.
    pub fn new(lines: Vec<Line>) -> Self {
        Self { lines }
    }

    /// Returns the lines in network order.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns true if there are no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct station names across all lines.
    pub fn station_count(&self) -> usize {
        self.lines
            .iter()
            .flat_map(|l| l.stations.iter())
            .map(StationName::as_str)
            .collect::<HashSet<_>>()
            .len()
    }

    /// Check the structural invariants, returning the first violation.
    ///
    /// Route computation tolerates violations; this exists so callers
    /// editing a network can report them.
    pub fn validate(&self) -> Result<(), NetworkError> {
        match self.problems().into_iter().next() {
            Some(problem) => Err(problem),
            None => Ok(()),
        }
    }

    /// Every structural invariant violation, in network order.
    pub fn problems(&self) -> Vec<NetworkError> {
        let mut problems = Vec::new();
        let mut seen_ids = HashSet::new();

        for line in &self.lines {
            if line.id.as_str().is_empty() {
                problems.push(NetworkError::EmptyLineId(line.name.clone()));
            } else if !seen_ids.insert(line.id.as_str()) {
                problems.push(NetworkError::DuplicateLineId(line.id.clone()));
            }

            let mut seen_stations = HashSet::new();
            let mut reported = HashSet::new();
            for station in &line.stations {
                if !seen_stations.insert(station.as_str()) && reported.insert(station.as_str()) {
                    problems.push(NetworkError::RepeatedStation {
                        line: line.id.clone(),
                        station: station.clone(),
                    });
                }
            }
        }

        problems
    }
}
