//! Data transfer objects for web requests and responses.
//!
//! Response field names are camelCase to match the browser client.

use serde::{Deserialize, Serialize};

use crate::domain::{Network, Route, RouteSegment, StationRef};
use crate::planner::{NetworkIndex, SearchResult};

/// Request to find routes.
#[derive(Debug, Default, Deserialize)]
pub struct FindRoutesRequest {
    /// Origin station
    #[serde(default)]
    pub origin: Option<StationRef>,

    /// Destination station
    #[serde(default)]
    pub destination: Option<StationRef>,

    /// Network to route over (defaults to the server's network)
    #[serde(default)]
    pub network: Option<Network>,
}

/// Response for route finding.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FindRoutesResponse {
    /// Found routes, best first. Empty means no route.
    pub routes: Vec<RouteResult>,

    /// Number of search states explored
    pub states_explored: usize,
}

/// A candidate route.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteResult {
    /// Route identifier
    pub id: String,

    /// Per-line segments in travel order
    pub segments: Vec<SegmentResult>,

    /// Stops across all segments
    pub total_stops: u32,

    /// Total time in minutes, including transfer penalties
    pub total_time_min: i64,

    /// Number of line changes
    pub transfers: usize,

    /// Fare in currency units
    pub fare: u32,

    /// Stations where the line changes
    pub interchanges: Vec<String>,

    /// Whether this is the suggested option
    pub recommended: bool,
}

/// A ride along one line.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentResult {
    /// Line display name
    pub line: String,

    /// Line display color
    pub color: String,

    /// Boarding station
    pub from: String,

    /// Alighting station
    pub to: String,

    /// Stops ridden
    pub stops: u32,

    /// Riding time in minutes
    pub duration_min: i64,
}

/// Request for a network summary.
#[derive(Debug, Default, Deserialize)]
pub struct NetworkSummaryRequest {
    /// Network to summarise (defaults to the server's network)
    #[serde(default)]
    pub network: Option<Network>,
}

/// Overview of a network for the admin UI.
#[derive(Debug, Serialize)]
pub struct NetworkSummary {
    /// Number of lines
    pub lines: usize,

    /// Number of distinct stations
    pub stations: usize,

    /// Interchange station names, sorted
    pub interchanges: Vec<String>,

    /// Structural problems, in network order
    pub problems: Vec<String>,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

// Conversion implementations

impl FindRoutesResponse {
    /// A response with no routes.
    pub fn empty() -> Self {
        Self {
            routes: Vec::new(),
            states_explored: 0,
        }
    }

    /// Create from a search result.
    pub fn from_result(result: &SearchResult) -> Self {
        Self {
            routes: result.routes.iter().map(RouteResult::from_route).collect(),
            states_explored: result.states_explored,
        }
    }
}

impl RouteResult {
    /// Create from a domain Route.
    pub fn from_route(route: &Route) -> Self {
        Self {
            id: route.id.clone(),
            segments: route.segments.iter().map(SegmentResult::from_segment).collect(),
            total_stops: route.total_stops,
            total_time_min: route.total_time_mins(),
            transfers: route.transfers,
            fare: route.fare,
            interchanges: route.interchanges.iter().map(|s| s.to_string()).collect(),
            recommended: route.recommended,
        }
    }
}

impl SegmentResult {
    /// Create from a domain RouteSegment.
    pub fn from_segment(segment: &RouteSegment) -> Self {
        Self {
            line: segment.line.clone(),
            color: segment.color.clone(),
            from: segment.from.to_string(),
            to: segment.to.to_string(),
            stops: segment.stops,
            duration_min: segment.duration_mins(),
        }
    }
}

impl NetworkSummary {
    /// Summarise a network.
    pub fn from_network(network: &Network) -> Self {
        let index = NetworkIndex::build(network);
        Self {
            lines: network.len(),
            stations: index.station_count(),
            interchanges: index.interchanges().into_iter().map(String::from).collect(),
            problems: network.problems().iter().map(|p| p.to_string()).collect(),
        }
    }
}
