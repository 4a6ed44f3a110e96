//! Route ranking.

use std::cmp::Ordering;

use crate::domain::Route;

/// Rank routes by preference and flag the best one.
///
/// Routes are ranked by:
/// 1. Number of transfers (fewer is better)
/// 2. Total time (shorter is better)
///
/// The sort is stable, so equal routes keep discovery order. Afterwards the
/// first route, and only that route, is marked recommended.
pub fn rank_routes(mut routes: Vec<Route>) -> Vec<Route> {
    routes.sort_by(compare);

    for (i, route) in routes.iter_mut().enumerate() {
        route.recommended = i == 0;
    }

    routes
}

fn compare(a: &Route, b: &Route) -> Ordering {
    a.transfers
        .cmp(&b.transfers)
        .then_with(|| a.total_time.cmp(&b.total_time))
}
