//! Route planner using bounded breadth-first search.
//!
//! This module implements the route-finding engine: given a network of
//! lines and two station names, find a few candidate routes, split them
//! into per-line segments, cost them (stops, time, fare) and rank them.
//!
//! The search explores (station, line) states, riding one stop at a time
//! or transferring at interchanges, and is bounded by a transfer cap and
//! a result cap so it stays cheap enough to run inline per request.

mod bfs;
mod config;
mod cost;
mod graph;
mod rank;
mod search;
mod segments;

#[cfg(test)]
mod search_tests;

pub use config::SearchConfig;
pub use graph::NetworkIndex;
pub use rank::rank_routes;
pub use search::{Planner, SearchResult, compute_routes};
