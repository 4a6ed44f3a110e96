//! Route search.
//!
//! Ties the pieces together: index the network, run the bounded BFS,
//! turn each path into a costed route, then rank.

use tracing::debug;

use crate::domain::{Network, Route, StationRef};
use crate::palette::{Palette, standard_palette};

use super::bfs::{PathNode, find_paths};
use super::config::SearchConfig;
use super::cost::{fare, total_time};
use super::graph::NetworkIndex;
use super::rank::rank_routes;
use super::segments::{build_segments, interchanges};

/// Result of route search.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Found routes, ranked best-first.
    pub routes: Vec<Route>,

    /// Number of (station, line) states dequeued during search.
    pub states_explored: usize,
}

impl SearchResult {
    /// Create an empty result.
    pub fn empty() -> Self {
        Self {
            routes: Vec::new(),
            states_explored: 0,
        }
    }
}

/// Route planner over caller-supplied networks.
///
/// Holds no per-network state: every search indexes the network it is
/// given and discards the index afterwards.
pub struct Planner<'a> {
    config: &'a SearchConfig,
    palette: &'a Palette,
}

impl<'a> Planner<'a> {
    /// Create a new planner.
    pub fn new(config: &'a SearchConfig, palette: &'a Palette) -> Self {
        Self { config, palette }
    }

    /// Search for routes between two stations.
    ///
    /// Never fails. An empty origin or destination name, identical
    /// endpoints, or an unreachable destination all give an empty result.
    pub fn search(
        &self,
        origin: &StationRef,
        destination: &StationRef,
        network: &Network,
    ) -> SearchResult {
        if origin.name.is_empty() || destination.name.is_empty() {
            debug!("Missing origin or destination");
            return SearchResult::empty();
        }
        let origin = origin.name.as_str();
        let destination = destination.name.as_str();
        if origin == destination {
            return SearchResult::empty();
        }
        if let Err(problem) = network.validate() {
            debug!(%problem, "Routing over a malformed network");
        }

        let index = NetworkIndex::build(network);
        let found = find_paths(&index, origin, destination, self.config);

        let routes = found
            .paths
            .iter()
            .enumerate()
            .map(|(i, path)| self.to_route(i, path, &index))
            .collect();
        let routes = rank_routes(routes);

        debug!(
            origin,
            destination,
            routes = routes.len(),
            states_explored = found.states_explored,
            "Route search complete"
        );

        SearchResult {
            routes,
            states_explored: found.states_explored,
        }
    }

    /// Build a costed route from a path. `discovery` numbers the id.
    fn to_route(&self, discovery: usize, path: &[PathNode<'_>], index: &NetworkIndex<'_>) -> Route {
        let segments = build_segments(path, index, self.palette, self.config);
        let interchanges = interchanges(path);
        let transfers = interchanges.len();
        let total_stops = segments.iter().map(|s| s.stops).sum();

        Route {
            id: format!("route-{}", discovery + 1),
            total_time: total_time(&segments, transfers, self.config),
            fare: fare(total_stops, self.config),
            segments,
            total_stops,
            transfers,
            interchanges,
            recommended: false,
        }
    }
}

/// Compute ranked routes with the standard policy and palette.
///
/// Returns at most three routes; an empty list means no route.
pub fn compute_routes(
    origin: &StationRef,
    destination: &StationRef,
    network: &Network,
) -> Vec<Route> {
    let config = SearchConfig::default();
    let palette = standard_palette();
    Planner::new(&config, &palette)
        .search(origin, destination, network)
        .routes
}
