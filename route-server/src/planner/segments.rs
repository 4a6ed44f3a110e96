//! Turning traversal paths into route segments.

use super::bfs::PathNode;
use super::config::SearchConfig;
use super::graph::NetworkIndex;
use crate::domain::{RouteSegment, StationName};
use crate::palette::{DEFAULT_LINE_COLOR, Palette};

/// Collapse a path into one segment per maximal run on the same line.
///
/// A run's first and last nodes give the segment's endpoints, so a
/// transfer station ends one segment and starts the next. Stops count
/// hops within the run.
pub fn build_segments(
    path: &[PathNode<'_>],
    index: &NetworkIndex<'_>,
    palette: &Palette,
    config: &SearchConfig,
) -> Vec<RouteSegment> {
    path.chunk_by(|a, b| a.line == b.line)
        .map(|run| {
            let first = run[0];
            let last = run[run.len() - 1];
            let stops = u32::try_from(run.len() - 1).unwrap_or(u32::MAX);
            let (line, color) = line_display(first.line.as_str(), index, palette);

            RouteSegment {
                line,
                color,
                from: first.station.clone(),
                to: last.station.clone(),
                stops,
                duration: config.per_stop() * stops as i32,
            }
        })
        .collect()
}

/// Stations where the line changes, in travel order.
pub fn interchanges(path: &[PathNode<'_>]) -> Vec<StationName> {
    path.windows(2)
        .filter(|pair| pair[0].line != pair[1].line)
        .map(|pair| pair[1].station.clone())
        .collect()
}

/// Display name and color for a line id.
///
/// Unknown ids display as themselves in the default gray, as do lines
/// with an empty name.
fn line_display(id: &str, index: &NetworkIndex<'_>, palette: &Palette) -> (String, String) {
    match index.line(id) {
        Some(line) if line.name.is_empty() => {
            (id.to_string(), palette.resolve(line).to_string())
        }
        Some(line) => (line.name.clone(), palette.resolve(line).to_string()),
        None => (id.to_string(), DEFAULT_LINE_COLOR.to_string()),
    }
}
