//! Bounded breadth-first search over (station, line) states.
//!
//! A state is "standing at this station, having arrived on this line".
//! From a state we can ride one stop either way along the same line, or,
//! at an interchange, transfer to another line serving the station.
//!
//! Each (station, line) pair is claimed by the first path that reaches it;
//! later paths to the same pair are dropped. This is breadth-first with
//! first-hit pruning, not a shortest-path search: which routes are found in
//! an ambiguous network depends on exploration order, so the order of
//! seeds, rides and transfers below is part of the observable behaviour.

use std::collections::{HashSet, VecDeque};

use tracing::{debug, trace};

use super::config::SearchConfig;
use super::graph::NetworkIndex;
use crate::domain::{LineId, StationName};

/// One step of a traversal path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathNode<'a> {
    pub station: &'a StationName,
    pub line: &'a LineId,
}

/// BFS state: a path ending at (station, line) with its transfer count.
struct BfsState<'a> {
    path: Vec<PathNode<'a>>,
    transfers: usize,
}

impl<'a> BfsState<'a> {
    fn head(&self) -> PathNode<'a> {
        // Paths start with a seed node and only grow.
        self.path[self.path.len() - 1]
    }

    fn extend(&self, node: PathNode<'a>, transfers: usize) -> Self {
        let mut path = Vec::with_capacity(self.path.len() + 1);
        path.extend_from_slice(&self.path);
        path.push(node);
        Self { path, transfers }
    }
}

/// Result of the search: paths in discovery order and work done.
pub struct BfsResult<'a> {
    pub paths: Vec<Vec<PathNode<'a>>>,
    pub states_explored: usize,
}

impl BfsResult<'_> {
    fn empty() -> Self {
        Self {
            paths: Vec::new(),
            states_explored: 0,
        }
    }
}

/// Find up to `max_results` paths from `origin` to `destination`.
///
/// Seeds one state per line serving the origin, in network order. Rides
/// are enqueued before transfers; rides go to the previous stop before the
/// next one. A path that has made `max_transfers` transfers is recorded if
/// it is at the destination but never expanded.
pub fn find_paths<'a>(
    index: &NetworkIndex<'a>,
    origin: &str,
    destination: &str,
    config: &SearchConfig,
) -> BfsResult<'a> {
    if origin == destination {
        return BfsResult::empty();
    }
    let Some(origin_station) = index.station(origin) else {
        debug!(origin, "Origin is not served by any line");
        return BfsResult::empty();
    };

    let mut visited: HashSet<(&'a str, &'a str)> = HashSet::new();
    let mut queue: VecDeque<BfsState<'a>> = VecDeque::new();

    for &line in index.lines_at(origin) {
        if visited.insert((origin_station.as_str(), line.as_str())) {
            queue.push_back(BfsState {
                path: vec![PathNode {
                    station: origin_station,
                    line,
                }],
                transfers: 0,
            });
        }
    }

    let mut paths = Vec::new();
    let mut states_explored = 0;

    while paths.len() < config.max_results {
        if states_explored >= config.max_states_explored {
            debug!(states_explored, "State budget exhausted");
            break;
        }
        let Some(state) = queue.pop_front() else {
            break;
        };
        states_explored += 1;

        let head = state.head();
        trace!(
            station = %head.station,
            line = %head.line,
            transfers = state.transfers,
            "BFS exploring state"
        );

        if head.station.as_str() == destination {
            paths.push(state.path);
            continue;
        }

        if state.transfers >= config.max_transfers {
            continue;
        }

        // Ride one stop along the current line
        for station in index.neighbours(head.line.as_str(), head.station.as_str()) {
            if visited.insert((station.as_str(), head.line.as_str())) {
                let node = PathNode {
                    station,
                    line: head.line,
                };
                queue.push_back(state.extend(node, state.transfers));
            }
        }

        // Change to another line at this station
        for &line in index.lines_at(head.station.as_str()) {
            if line == head.line {
                continue;
            }
            if visited.insert((head.station.as_str(), line.as_str())) {
                let node = PathNode {
                    station: head.station,
                    line,
                };
                queue.push_back(state.extend(node, state.transfers + 1));
            }
        }
    }

    debug!(
        paths = paths.len(),
        states_explored, "BFS search complete"
    );

    BfsResult {
        paths,
        states_explored,
    }
}
