//! Shared test utilities for `sentiero-core`.

use proptest::test_runner::Config as ProptestConfig;
use sentiero_test_support::ci::property_test_profile::ProptestRunProfile;

use crate::{Graph, geometry::Point};

/// Builds a standard proptest configuration from the shared CI profile.
///
/// Keeps property suites aligned on the same `SENTIERO_PBT_CASES` and
/// `SENTIERO_PBT_FORK` interpretation.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// Builds the reference six-node graph.
#[must_use]
pub(crate) fn fixed_graph() -> Graph {
    crate::Scenario::fixed()
        .build_graph()
        .expect("fixed scenario must be valid")
}

/// Builds a graph from coordinate tuples, panicking on invalid input.
#[must_use]
pub(crate) fn graph_from(coords: &[(f64, f64)], edges: &[(usize, usize)]) -> Graph {
    let positions: Vec<Point> = coords.iter().copied().map(Point::from).collect();
    Graph::build(&positions, edges).expect("test graph must be valid")
}
