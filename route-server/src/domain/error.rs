//! Network error types.
//!
//! These describe structural problems in a network description and
//! failures reading one from disk. Route computation never returns them:
//! a malformed network simply yields fewer (or no) routes.

use super::{LineId, StationName};

/// Problems with a network description.
#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    /// Two lines share an identifier
    #[error("line id {0} is used by more than one line")]
    DuplicateLineId(LineId),

    /// A station is listed twice on the same line
    #[error("station {station} appears more than once on line {line}")]
    RepeatedStation { line: LineId, station: StationName },

    /// A line has an empty identifier
    #[error("line {0:?} has an empty id")]
    EmptyLineId(String),

    /// Reading the network file failed
    #[error("failed to read network file: {0}")]
    Io(#[from] std::io::Error),

    /// The network file is not valid network JSON
    #[error("failed to parse network JSON: {0}")]
    Json(#[from] serde_json::Error),
}
