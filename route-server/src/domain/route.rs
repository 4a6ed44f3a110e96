//! Route types.
//!
//! A `Route` is one candidate journey between two stations, made of
//! contiguous single-line segments. Routes are transient: the planner
//! builds them per request and the caller renders or books one.

use chrono::Duration;

use super::StationName;

/// A ride along one line between two stations.
///
/// Consecutive segments of a route share their boundary station: the
/// `to` of one segment is the `from` of the next (the transfer point).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteSegment {
    /// Line display name
    pub line: String,
    /// Line display color
    pub color: String,
    /// Boarding station
    pub from: StationName,
    /// Alighting station
    pub to: StationName,
    /// Number of hops ridden (not stations visited)
    pub stops: u32,
    /// Riding time
    pub duration: Duration,
}

impl RouteSegment {
    /// Riding time in whole minutes.
    pub fn duration_mins(&self) -> i64 {
        self.duration.num_minutes()
    }
}

/// A ranked candidate journey.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// Identifier, stable for a given network and request
    pub id: String,
    /// Segments in travel order (at least one)
    pub segments: Vec<RouteSegment>,
    /// Stops across all segments
    pub total_stops: u32,
    /// Riding time plus transfer penalties
    pub total_time: Duration,
    /// Number of line changes
    pub transfers: usize,
    /// Fare in currency units
    pub fare: u32,
    /// Stations where the line changes, in travel order
    pub interchanges: Vec<StationName>,
    /// True only for the top-ranked route of a result
    pub recommended: bool,
}

impl Route {
    /// Total time in whole minutes.
    pub fn total_time_mins(&self) -> i64 {
        self.total_time.num_minutes()
    }
}
