//! Fixture types for propagation property tests.

use test_strategy::Arbitrary;

use crate::geometry::Point;

/// Topology family for a generated graph.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Arbitrary)]
pub(super) enum Topology {
    /// A random spanning tree plus a few extra edges.
    #[weight(3)]
    Connected,
    /// Every pair connected with high probability.
    #[weight(2)]
    Dense,
    /// Two or more components with no edges between them.
    #[weight(2)]
    Disconnected,
    /// Random index pairs, as produced by the random scenario builder.
    #[weight(2)]
    Scattered,
}

/// Generated input for a property run.
#[derive(Clone, Debug)]
pub(super) struct GraphFixture {
    /// Node positions in index order.
    pub positions: Vec<Point>,
    /// Distinct, non-looping edges.
    pub edges: Vec<(usize, usize)>,
    /// Node the propagation is seeded at.
    pub source: usize,
    /// Topology used during generation.
    pub topology: Topology,
}
