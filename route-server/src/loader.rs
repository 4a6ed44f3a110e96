//! Loading network descriptions from JSON.
//!
//! A network file is a JSON array of lines:
//!
//! ```json
//! [
//!   { "id": "yellow", "name": "Yellow Line", "stations": ["A", "B", "C", "D"] },
//!   { "id": "blue", "name": "Blue Line", "color": "#3B82F6", "stations": ["E", "C", "F"] }
//! ]
//! ```

use std::path::Path;

use tracing::{info, warn};

use crate::domain::{Network, NetworkError};

/// Parse a network from JSON text.
pub fn parse_network(json: &str) -> Result<Network, NetworkError> {
    Ok(serde_json::from_str(json)?)
}

/// Read and parse a network file.
///
/// Structural problems (duplicate ids, repeated stations) are logged but
/// do not fail the load; routing tolerates them.
pub fn load_network(path: impl AsRef<Path>) -> Result<Network, NetworkError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;
    let network = parse_network(&text)?;

    for problem in network.problems() {
        warn!(path = %path.display(), %problem, "Network file has a structural problem");
    }
    info!(
        path = %path.display(),
        lines = network.len(),
        stations = network.station_count(),
        "Loaded network"
    );

    Ok(network)
}
