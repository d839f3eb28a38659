//! End-to-end behaviour of `ReverseGeocoder::locate` against in-memory
//! collaborators.
//!
//! Coordinates sit near the equator so a degree of longitude is roughly
//! 111.3 km; an x offset of 1e-5 degrees is about 1.1 m of snap distance.

use std::sync::Arc;

use geo::{Coord, LineString};
use kerbside_core::test_support::{FailingGraph, FailingSnapper, HaversineSnapper, MemoryGraph};
use kerbside_core::{
    Angle, Distance, Edge, LocateError, MatchConfig, Percent, Request, ReverseGeocoder, RoadName,
    RoadNameMatcher, RoadNameStandardizer,
};
use rstest::rstest;

const ORIGIN: Coord<f64> = Coord { x: 0.0, y: 0.0 };

fn edge(id: u64, x_offset: f64, heading: f64, names: &[&str]) -> Edge {
    Edge::new(
        id,
        LineString::from(vec![
            Coord {
                x: x_offset,
                y: -0.001,
            },
            Coord {
                x: x_offset,
                y: 0.001,
            },
        ]),
        Angle::degrees(heading).expect("finite heading"),
        names
            .iter()
            .map(|name| RoadName::new(*name).expect("non-blank name"))
            .collect(),
    )
}

fn config(within_metres: f64) -> MatchConfig {
    MatchConfig::builder(Distance::metres(within_metres).expect("valid radius"))
        .build()
        .expect("valid config")
}

fn geocoder(
    edges: impl IntoIterator<Item = Edge>,
    config: MatchConfig,
) -> ReverseGeocoder<MemoryGraph, HaversineSnapper> {
    ReverseGeocoder::new(MemoryGraph::with_edges(edges), HaversineSnapper, config)
}

fn named_request(name: &str) -> Request {
    Request {
        road_name: Some(RoadName::new(name).expect("non-blank name")),
        ..Request::at(ORIGIN)
    }
}

/// Matcher double that scores a candidate by its own name, ignoring the
/// desired name. Lets scenarios pin exact closeness values.
struct ScoreByCandidateName;

impl RoadNameMatcher for ScoreByCandidateName {
    fn matches(&self, candidate: &RoadName, _desired: &RoadName) -> Percent {
        match candidate.as_str() {
            "strong" => Percent::new(95.0).expect("in range"),
            "weak" => Percent::new(90.0).expect("in range"),
            _ => Percent::ZERO,
        }
    }
}

#[rstest]
fn returns_none_when_no_edge_lies_within_the_radius() {
    // 0.01° is about 1.1 km away; the radius only reaches 50 m.
    let geocoder = geocoder([edge(1, 0.01, 0.0, &[])], config(50.0));
    let found = geocoder.locate(&Request::at(ORIGIN)).expect("no failure");
    assert!(found.is_none());
}

#[rstest]
fn returns_the_geometrically_closest_edge_when_no_name_is_requested() {
    let geocoder = geocoder(
        [edge(1, 5e-5, 0.0, &["Far St"]), edge(2, 2e-5, 0.0, &[])],
        config(50.0),
    );
    let found = geocoder
        .locate(&Request::at(ORIGIN))
        .expect("no failure")
        .expect("a match");
    assert_eq!(found.edge.id, 2);
    assert_eq!(found.closeness, Percent::HUNDRED);
}

#[rstest]
#[case(90.0, None)]
#[case(30.0, Some(1))]
#[case(350.0, Some(1))]
fn heading_gate_admits_edges_within_tolerance(
    #[case] edge_heading: f64,
    #[case] expected: Option<u64>,
) {
    let geocoder = geocoder([edge(1, 2e-5, edge_heading, &[])], config(50.0));
    let request = Request {
        heading: Some(Angle::degrees(10.0).expect("finite heading")),
        ..Request::at(ORIGIN)
    };
    let found = geocoder.locate(&request).expect("no failure");
    assert_eq!(found.map(|m| m.edge.id), expected);
}

#[rstest]
fn ignores_edge_headings_when_the_request_has_none() {
    let geocoder = geocoder([edge(1, 2e-5, 237.0, &[])], config(50.0));
    let found = geocoder.locate(&Request::at(ORIGIN)).expect("no failure");
    assert!(found.is_some());
}

#[rstest]
fn stronger_name_wins_over_shorter_snap_distance() {
    // The weak-name edge is closer, but the strong-name edge is scanned
    // later with both a higher closeness and a new shortest distance, so
    // name quality decides.
    let config = MatchConfig::builder(Distance::metres(50.0).expect("valid radius"))
        .road_name_closeness(Percent::new(80.0).expect("in range"))
        .matcher(Arc::new(ScoreByCandidateName))
        .build()
        .expect("valid config");
    let geocoder = geocoder(
        [edge(1, 5e-5, 0.0, &["weak"]), edge(2, 2e-5, 0.0, &["strong"])],
        config,
    );
    let found = geocoder
        .locate(&named_request("anything"))
        .expect("no failure")
        .expect("a match");
    assert_eq!(found.edge.id, 2);
    assert_eq!(found.closeness.value(), 95.0);
}

#[rstest]
fn keeps_the_recorded_match_when_a_stronger_name_snaps_farther() {
    // The shortest snap distance recorded so far is never relaxed when a
    // higher closeness appears, so the closer weak-name edge survives.
    let config = MatchConfig::builder(Distance::metres(50.0).expect("valid radius"))
        .road_name_closeness(Percent::new(80.0).expect("in range"))
        .matcher(Arc::new(ScoreByCandidateName))
        .build()
        .expect("valid config");
    let geocoder = geocoder(
        [edge(1, 2e-5, 0.0, &["weak"]), edge(2, 5e-5, 0.0, &["strong"])],
        config,
    );
    let found = geocoder
        .locate(&named_request("anything"))
        .expect("no failure")
        .expect("a match");
    assert_eq!(found.edge.id, 1);
    assert_eq!(found.closeness.value(), 90.0);
}

#[rstest]
#[case(70.0, false)]
#[case(60.0, false)]
#[case(50.0, true)]
fn name_gate_requires_closeness_strictly_above_the_threshold(
    #[case] threshold: f64,
    #[case] accepted: bool,
) {
    // "Maple Stroot" vs "Maple Street": distance 2 over length 12 is 83%,
    // but the stub pins the candidate at 60% to probe the threshold edge.
    struct Fixed;
    impl RoadNameMatcher for Fixed {
        fn matches(&self, _candidate: &RoadName, _desired: &RoadName) -> Percent {
            Percent::new(60.0).expect("in range")
        }
    }

    let config = MatchConfig::builder(Distance::metres(50.0).expect("valid radius"))
        .road_name_closeness(Percent::new(threshold).expect("in range"))
        .matcher(Arc::new(Fixed))
        .build()
        .expect("valid config");
    let geocoder = geocoder([edge(1, 2e-5, 0.0, &["Maple Street"])], config);
    let found = geocoder.locate(&named_request("Maple Street")).expect("no failure");
    assert_eq!(found.is_some(), accepted);
}

#[rstest]
fn unnamed_edges_fail_the_gate_when_a_name_is_requested() {
    let geocoder = geocoder([edge(1, 2e-5, 0.0, &[])], config(50.0));
    let found = geocoder.locate(&named_request("Main St")).expect("no failure");
    assert!(found.is_none());
}

#[rstest]
fn augments_undirected_candidate_names_with_the_edge_heading() {
    // Edge heading 0° reads as north, so "Main St" competes as
    // "Main St N" and matches the directed request exactly.
    let geocoder = geocoder([edge(1, 2e-5, 0.0, &["Main St"])], config(50.0));
    let found = geocoder
        .locate(&named_request("Main St N"))
        .expect("no failure")
        .expect("a match");
    assert_eq!(found.closeness, Percent::HUNDRED);
}

#[rstest]
fn augmentation_respects_conflicting_directions() {
    // Heading 180° augments to "Main St S", which hard-rejects against
    // the northbound request under the default matcher.
    let geocoder = geocoder([edge(1, 2e-5, 180.0, &["Main St"])], config(50.0));
    let found = geocoder.locate(&named_request("Main St N")).expect("no failure");
    assert!(found.is_none());
}

#[rstest]
fn picks_the_best_name_on_a_multi_named_edge() {
    let geocoder = geocoder(
        [edge(1, 2e-5, 0.0, &["State Route 99", "Elm Ave"])],
        config(50.0),
    );
    let found = geocoder
        .locate(&named_request("Elm Ave"))
        .expect("no failure")
        .expect("a match");
    assert_eq!(found.closeness, Percent::HUNDRED);
}

#[rstest]
fn standardizes_both_the_request_and_candidate_names() {
    struct StreetAbbreviator;
    impl RoadNameStandardizer for StreetAbbreviator {
        fn standardize(&self, name: &RoadName) -> RoadName {
            RoadName::new(name.as_str().replace("Street", "St"))
                .unwrap_or_else(|_| name.clone())
        }
    }

    let config = MatchConfig::builder(Distance::metres(50.0).expect("valid radius"))
        .road_name_closeness(Percent::new(90.0).expect("in range"))
        .standardizer(Arc::new(StreetAbbreviator))
        .build()
        .expect("valid config");
    let geocoder = geocoder([edge(1, 2e-5, 0.0, &["Main St"])], config);
    let found = geocoder
        .locate(&named_request("Main Street"))
        .expect("no failure")
        .expect("a match");
    assert_eq!(found.closeness, Percent::HUNDRED);
}

#[rstest]
fn graph_failure_aborts_the_call() {
    let geocoder = ReverseGeocoder::new(FailingGraph, HaversineSnapper, config(50.0));
    let error = geocoder.locate(&Request::at(ORIGIN)).expect_err("graph fails");
    assert!(matches!(error, LocateError::Graph { .. }));
}

#[rstest]
fn snapper_failure_aborts_the_call() {
    let geocoder = ReverseGeocoder::new(
        MemoryGraph::with_edge(edge(3, 2e-5, 0.0, &[])),
        FailingSnapper,
        config(50.0),
    );
    let error = geocoder.locate(&Request::at(ORIGIN)).expect_err("snapper fails");
    assert!(matches!(error, LocateError::Snap { edge: 3, .. }));
}

#[rstest]
fn reports_the_snap_distance_of_the_winner() {
    let geocoder = geocoder([edge(1, 2e-5, 0.0, &[])], config(50.0));
    let found = geocoder
        .locate(&Request::at(ORIGIN))
        .expect("no failure")
        .expect("a match");
    // 2e-5 degrees of longitude at the equator is about 2.2 m.
    let metres = found.snap.distance_to_source.as_metres();
    assert!((metres - 2.23).abs() < 0.1, "unexpected distance {metres}");
}
