//! Search configuration for the route planner.

use chrono::Duration;

/// Policy parameters for route search and costing.
///
/// The defaults are the passenger app's fixed policy and should not be
/// changed for production use: results from different deployments must
/// agree.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Maximum number of line changes on a route.
    /// Paths that have made this many transfers are not expanded further.
    pub max_transfers: usize,

    /// Maximum number of routes to return.
    /// Search stops as soon as this many have been found.
    pub max_results: usize,

    /// Riding time per stop (minutes).
    pub mins_per_stop: i64,

    /// Time penalty per transfer (minutes).
    pub transfer_penalty_mins: i64,

    /// Fare charged for any journey.
    pub base_fare: u32,

    /// Fare added per stop travelled.
    pub fare_per_stop: u32,

    /// Fare ceiling.
    pub max_fare: u32,

    /// Maximum number of search states to dequeue before giving up.
    pub max_states_explored: usize,
}

impl SearchConfig {
    /// Returns the riding time per stop as a Duration.
    pub fn per_stop(&self) -> Duration {
        Duration::minutes(self.mins_per_stop)
    }

    /// Returns the transfer penalty as a Duration.
    pub fn transfer_penalty(&self) -> Duration {
        Duration::minutes(self.transfer_penalty_mins)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_transfers: 3,
            max_results: 3,
            mins_per_stop: 2,
            transfer_penalty_mins: 5,
            base_fare: 10,
            fare_per_stop: 2,
            max_fare: 60,
            max_states_explored: 100_000,
        }
    }
}
