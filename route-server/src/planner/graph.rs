//! Station/line index derived from a network.
//!
//! Built fresh for every search. Maps each station name to the lines
//! serving it (in network order) and each line to its station positions,
//! so the search can ask "which lines stop here?" and "what are the
//! neighbouring stops on this line?" without scanning the network.

use std::collections::{BTreeSet, HashMap};

use tracing::warn;

use crate::domain::{Line, LineId, Network, StationName};

/// Lines serving one station.
struct StationEntry<'a> {
    name: &'a StationName,
    lines: Vec<&'a LineId>,
}

/// One line and the first position of each of its stations.
struct LineEntry<'a> {
    line: &'a Line,
    positions: HashMap<&'a str, usize>,
}

/// Adjacency model of a network, borrowing from it.
pub struct NetworkIndex<'a> {
    stations: HashMap<&'a str, StationEntry<'a>>,
    lines: HashMap<&'a str, LineEntry<'a>>,
}

impl<'a> NetworkIndex<'a> {
    /// Build the index.
    ///
    /// A line whose id repeats an earlier line's id is ignored. A station
    /// listed twice on one line is indexed at its first position.
    pub fn build(network: &'a Network) -> Self {
        let mut stations: HashMap<&'a str, StationEntry<'a>> = HashMap::new();
        let mut lines: HashMap<&'a str, LineEntry<'a>> = HashMap::new();

        for line in network.lines() {
            if lines.contains_key(line.id.as_str()) {
                warn!(line = %line.id, "Ignoring line with duplicate id");
                continue;
            }

            let mut positions = HashMap::with_capacity(line.stations.len());
            for (idx, station) in line.stations.iter().enumerate() {
                positions.entry(station.as_str()).or_insert(idx);

                let entry = stations
                    .entry(station.as_str())
                    .or_insert_with(|| StationEntry {
                        name: station,
                        lines: Vec::new(),
                    });
                if !entry.lines.contains(&&line.id) {
                    entry.lines.push(&line.id);
                }
            }

            lines.insert(line.id.as_str(), LineEntry { line, positions });
        }

        Self { stations, lines }
    }

    /// The network's own copy of a station name, if any line serves it.
    pub fn station(&self, name: &str) -> Option<&'a StationName> {
        self.stations.get(name).map(|e| e.name)
    }

    /// Lines serving a station, in network order. Empty if unknown.
    pub fn lines_at(&self, station: &str) -> &[&'a LineId] {
        self.stations
            .get(station)
            .map(|e| e.lines.as_slice())
            .unwrap_or(&[])
    }

    /// Look up a line by id.
    pub fn line(&self, id: &str) -> Option<&'a Line> {
        self.lines.get(id).map(|e| e.line)
    }

    /// Returns true if two or more lines serve the station.
    pub fn is_interchange(&self, station: &str) -> bool {
        self.lines_at(station).len() >= 2
    }

    /// All interchange station names, sorted.
    pub fn interchanges(&self) -> BTreeSet<&'a str> {
        self.stations
            .iter()
            .filter(|(_, e)| e.lines.len() >= 2)
            .map(|(_, e)| e.name.as_str())
            .collect()
    }

    /// Stations one stop away from `station` along `line`.
    ///
    /// The previous stop (if any) comes first, then the next stop.
    pub fn neighbours(&self, line: &str, station: &str) -> Vec<&'a StationName> {
        let Some(entry) = self.lines.get(line) else {
            return Vec::new();
        };
        let Some(&idx) = entry.positions.get(station) else {
            return Vec::new();
        };

        let stations: &'a [StationName] = &entry.line.stations;
        let mut out = Vec::with_capacity(2);
        if idx > 0 {
            out.push(&stations[idx - 1]);
        }
        if let Some(next) = stations.get(idx + 1) {
            out.push(next);
        }
        out
    }

    /// Number of distinct stations.
    pub fn station_count(&self) -> usize {
        self.stations.len()
    }
}
