//! Fare and journey time.

use chrono::Duration;

use super::config::SearchConfig;
use crate::domain::RouteSegment;

/// Fare for a journey of `total_stops` stops: base plus per-stop, capped.
///
/// Flat across lines; only the total stop count matters.
pub fn fare(total_stops: u32, config: &SearchConfig) -> u32 {
    config
        .fare_per_stop
        .saturating_mul(total_stops)
        .saturating_add(config.base_fare)
        .min(config.max_fare)
}

/// Riding time of all segments plus one penalty per transfer.
pub fn total_time(segments: &[RouteSegment], transfers: usize, config: &SearchConfig) -> Duration {
    let riding = segments
        .iter()
        .fold(Duration::zero(), |acc, s| acc + s.duration);
    riding + config.transfer_penalty() * transfers as i32
}
