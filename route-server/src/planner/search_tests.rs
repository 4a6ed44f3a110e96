//! Scenario and property tests for route search.

use super::*;
use crate::domain::{Line, Network, Route, StationName, StationRef};
use crate::palette::{DEFAULT_LINE_COLOR, PaletteBuilder};

fn station(name: &str) -> StationRef {
    StationRef::named(name)
}

fn routes(origin: &str, destination: &str, network: &Network) -> Vec<Route> {
    compute_routes(&station(origin), &station(destination), network)
}

fn names(stations: &[StationName]) -> Vec<&str> {
    stations.iter().map(StationName::as_str).collect()
}

/// Yellow: A-B-C-D, Blue: E-C-F. C is the interchange.
fn yellow_blue() -> Network {
    Network::new(vec![
        Line::new("yellow", "Yellow Line", ["A", "B", "C", "D"]),
        Line::new("blue", "Blue Line", ["E", "C", "F"]),
    ])
}

#[test]
fn single_interchange_scenario() {
    let result = routes("A", "F", &yellow_blue());

    assert!(!result.is_empty());
    let top = &result[0];
    assert!(top.recommended);
    assert_eq!(top.transfers, 1);
    assert_eq!(top.segments.len(), 2);

    assert_eq!(top.segments[0].line, "Yellow Line");
    assert_eq!(top.segments[0].from.as_str(), "A");
    assert_eq!(top.segments[0].to.as_str(), "C");
    assert_eq!(top.segments[0].stops, 2);

    assert_eq!(top.segments[1].line, "Blue Line");
    assert_eq!(top.segments[1].from.as_str(), "C");
    assert_eq!(top.segments[1].to.as_str(), "F");
    assert_eq!(top.segments[1].stops, 1);

    assert_eq!(top.total_stops, 3);
    assert_eq!(top.total_time_mins(), 11);
    assert_eq!(top.fare, 16);
    assert_eq!(names(&top.interchanges), vec!["C"]);
}

#[test]
fn segment_colors_come_from_palette() {
    let result = routes("A", "F", &yellow_blue());
    assert_eq!(result[0].segments[0].color, "#EAB308");
    assert_eq!(result[0].segments[1].color, "#3B82F6");
}

#[test]
fn direct_route_on_one_line() {
    let result = routes("B", "D", &yellow_blue());

    assert_eq!(result.len(), 1);
    let top = &result[0];
    assert_eq!(top.transfers, 0);
    assert_eq!(top.segments.len(), 1);
    assert_eq!(top.segments[0].line, "Yellow Line");
    assert_eq!(top.total_stops, 2);
    assert_eq!(top.total_time_mins(), 4);
    assert_eq!(top.fare, 14);
    assert!(top.interchanges.is_empty());
}

#[test]
fn rides_backwards_along_a_line() {
    let result = routes("D", "A", &yellow_blue());

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].segments[0].from.as_str(), "D");
    assert_eq!(result[0].segments[0].to.as_str(), "A");
    assert_eq!(result[0].total_stops, 3);
}

#[test]
fn self_route_is_empty() {
    let network = yellow_blue();
    for s in ["A", "C", "F", "nowhere"] {
        assert!(routes(s, s, &network).is_empty());
    }
}

#[test]
fn missing_station_names_are_empty() {
    let network = yellow_blue();
    assert!(routes("", "F", &network).is_empty());
    assert!(routes("A", "", &network).is_empty());
}

#[test]
fn empty_network_is_empty() {
    assert!(routes("A", "F", &Network::default()).is_empty());
}

#[test]
fn unknown_stations_are_empty() {
    let network = yellow_blue();
    assert!(routes("Z", "A", &network).is_empty());
    assert!(routes("A", "Z", &network).is_empty());
}

#[test]
fn names_are_not_normalised() {
    let network = yellow_blue();
    assert!(routes("a", "F", &network).is_empty());
    assert!(routes("A ", "F", &network).is_empty());
}

#[test]
fn isolated_line_is_unreachable() {
    let mut lines = yellow_blue().lines().to_vec();
    lines.push(Line::new("island", "Island Line", ["P", "Q", "R"]));
    let network = Network::new(lines);

    assert!(routes("P", "A", &network).is_empty());
    assert!(routes("F", "R", &network).is_empty());
    // The island still routes within itself
    assert_eq!(routes("P", "R", &network).len(), 1);
}

#[test]
fn first_claim_hides_faster_route() {
    // A-l4-G-l3-Z would be 1 transfer and 15 min, but Z on l3 is claimed first
    let network = Network::new(vec![
        Line::new("l1", "Line 1", ["A", "B"]),
        Line::new("l2", "Line 2", ["B", "C"]),
        Line::new("l3", "Line 3", ["C", "Z", "G"]),
        Line::new("l4", "Line 4", ["A", "D", "E", "F", "G"]),
    ]);
    let result = routes("A", "Z", &network);

    assert_eq!(result.len(), 1);
    let only = &result[0];
    assert_eq!(only.transfers, 2);
    assert_eq!(only.total_stops, 3);
    assert_eq!(only.total_time_mins(), 16);
    assert_eq!(only.fare, 16);
    assert_eq!(names(&only.interchanges), vec!["B", "C"]);
}

#[test]
fn transfers_outrank_time() {
    // Yellow is direct but slow; Blue then Red is fast with one change
    let network = Network::new(vec![
        Line::new("yellow", "Yellow Line", ["A", "B", "C", "D", "E", "F", "G", "Z"]),
        Line::new("blue", "Blue Line", ["A", "X"]),
        Line::new("red", "Red Line", ["X", "Z"]),
    ]);
    let result = routes("A", "Z", &network);

    assert_eq!(result.len(), 2);

    // The change route is found first, so it is route-1
    assert_eq!(result[0].id, "route-2");
    assert_eq!(result[0].transfers, 0);
    assert_eq!(result[0].total_time_mins(), 14);
    assert_eq!(result[0].fare, 24);
    assert!(result[0].recommended);

    assert_eq!(result[1].id, "route-1");
    assert_eq!(result[1].transfers, 1);
    assert_eq!(result[1].total_time_mins(), 9);
    assert_eq!(names(&result[1].interchanges), vec!["X"]);
    assert!(!result[1].recommended);
}

#[test]
fn time_breaks_transfer_ties() {
    // Two direct lines of different length
    let network = Network::new(vec![
        Line::new("long", "Long Line", ["A", "B", "C", "Z"]),
        Line::new("short", "Short Line", ["A", "Z"]),
    ]);
    let result = routes("A", "Z", &network);

    assert_eq!(result.len(), 2);
    assert_eq!(result[0].segments[0].line, "Short Line");
    assert_eq!(result[1].segments[0].line, "Long Line");
}

#[test]
fn at_most_three_routes() {
    let network = Network::new(
        (0..6)
            .map(|i| Line::new(format!("l{i}"), format!("Line {i}"), ["A", "M", "Z"]))
            .collect(),
    );
    let result = routes("A", "Z", &network);

    assert_eq!(result.len(), 3);
    assert_eq!(result.iter().filter(|r| r.recommended).count(), 1);
}

#[test]
fn fare_is_capped_on_long_rides() {
    let stations: Vec<String> = (0..40).map(|i| format!("S{i}")).collect();
    let network = Network::new(vec![Line::new("long", "Long Line", stations)]);
    let result = routes("S0", "S39", &network);

    assert_eq!(result[0].total_stops, 39);
    assert_eq!(result[0].fare, 60);
}

#[test]
fn unknown_line_name_uses_default_color() {
    let network = Network::new(vec![Line::new("t1", "Heritage Tramway", ["A", "B"])]);
    let result = routes("A", "B", &network);
    assert_eq!(result[0].segments[0].color, DEFAULT_LINE_COLOR);
}

#[test]
fn planner_uses_supplied_config_and_palette() {
    let config = SearchConfig {
        mins_per_stop: 3,
        transfer_penalty_mins: 10,
        ..SearchConfig::default()
    };
    let palette = PaletteBuilder::new().add("Blue Line", "#000080").build();
    let planner = Planner::new(&config, &palette);

    let result = planner.search(&station("A"), &station("F"), &yellow_blue());

    assert!(result.states_explored > 0);
    let top = &result.routes[0];
    assert_eq!(top.total_time_mins(), 3 * 3 + 10);
    assert_eq!(top.segments[0].color, DEFAULT_LINE_COLOR);
    assert_eq!(top.segments[1].color, "#000080");
}

#[test]
fn station_ref_extras_are_ignored() {
    let origin = StationRef {
        name: StationName::new("A"),
        id: Some("st-1".into()),
        line: Some("blue".into()),
    };
    let result = compute_routes(&origin, &station("F"), &yellow_blue());
    assert_eq!(result.len(), 1);
}

mod proptests {
    use super::*;
    use proptest::prelude::*;

    const POOL: usize = 8;

    fn pool() -> Vec<String> {
        (0..POOL).map(|i| format!("S{i}")).collect()
    }

    /// Networks of 1-4 lines, each a shuffled run of distinct pool stations.
    fn network_strategy() -> impl Strategy<Value = Network> {
        prop::collection::vec(
            prop::sample::subsequence(pool(), 2..=6).prop_shuffle(),
            1..5,
        )
        .prop_map(|lines| {
            Network::new(
                lines
                    .into_iter()
                    .enumerate()
                    .map(|(i, stations)| Line::new(format!("l{i}"), format!("Line {i}"), stations))
                    .collect(),
            )
        })
    }

    fn endpoints() -> impl Strategy<Value = (String, String)> {
        (0..POOL, 0..POOL).prop_map(|(a, b)| (format!("S{a}"), format!("S{b}")))
    }

    proptest! {
        #[test]
        fn results_are_capped_and_ranked(network in network_strategy(), (a, b) in endpoints()) {
            let result = routes(&a, &b, &network);

            prop_assert!(result.len() <= 3);
            for route in &result {
                prop_assert!(route.transfers <= 3);
            }
            for window in result.windows(2) {
                let x = (window[0].transfers, window[0].total_time);
                let y = (window[1].transfers, window[1].total_time);
                prop_assert!(x <= y, "Not ranked: {:?} before {:?}", x, y);
            }
        }

        #[test]
        fn first_route_is_the_only_recommended(network in network_strategy(), (a, b) in endpoints()) {
            let result = routes(&a, &b, &network);

            if let Some(first) = result.first() {
                prop_assert!(first.recommended);
                prop_assert_eq!(result.iter().filter(|r| r.recommended).count(), 1);
            }
        }

        #[test]
        fn costs_follow_the_model(network in network_strategy(), (a, b) in endpoints()) {
            for route in routes(&a, &b, &network) {
                let stops: u32 = route.segments.iter().map(|s| s.stops).sum();
                prop_assert_eq!(route.total_stops, stops);

                prop_assert!((10..=60).contains(&route.fare));
                prop_assert_eq!(route.fare, (10 + 2 * route.total_stops).min(60));

                let riding: i64 = route.segments.iter().map(|s| s.duration_mins()).sum();
                prop_assert_eq!(route.total_time_mins(), riding + 5 * route.transfers as i64);
                for segment in &route.segments {
                    prop_assert_eq!(segment.duration_mins(), 2 * i64::from(segment.stops));
                }
            }
        }

        #[test]
        fn segments_chain_from_origin_to_destination(network in network_strategy(), (a, b) in endpoints()) {
            for route in routes(&a, &b, &network) {
                let first = route.segments.first().map(|s| s.from.as_str());
                let last = route.segments.last().map(|s| s.to.as_str());
                prop_assert_eq!(first, Some(a.as_str()));
                prop_assert_eq!(last, Some(b.as_str()));
                prop_assert_eq!(route.segments.len(), route.transfers + 1);
                prop_assert_eq!(route.interchanges.len(), route.transfers);

                for (i, window) in route.segments.windows(2).enumerate() {
                    prop_assert_eq!(&window[0].to, &window[1].from);
                    prop_assert_eq!(&window[0].to, &route.interchanges[i]);
                }
            }
        }

        #[test]
        fn self_routes_are_empty(network in network_strategy(), i in 0..POOL) {
            let s = format!("S{i}");
            prop_assert!(routes(&s, &s, &network).is_empty());
        }

        #[test]
        fn island_lines_are_unreachable(network in network_strategy(), i in 0..POOL) {
            let mut lines = network.lines().to_vec();
            lines.push(Line::new("island", "Island Line", ["I0", "I1", "I2"]));
            let network = Network::new(lines);

            let s = format!("S{i}");
            prop_assert!(routes("I0", &s, &network).is_empty());
            prop_assert!(routes(&s, "I2", &network).is_empty());
        }
    }
}
