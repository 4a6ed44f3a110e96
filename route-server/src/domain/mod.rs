//! Domain types for the route engine.
//!
//! These types describe a transit network (lines as ordered station
//! sequences) and the routes computed over it. Everything here is plain
//! data: the planner builds fresh values on every call and never mutates
//! the network it is given.

mod error;
mod line;
mod route;
mod station;

pub use error::NetworkError;
pub use line::{Line, LineId, Network};
pub use route::{Route, RouteSegment};
pub use station::{StationName, StationRef};
