//! Benchmark parameter types.

use std::fmt;

/// Parameters for a propagation or planning benchmark run.
#[derive(Clone, Debug)]
pub struct RouteBenchParams {
    /// Number of nodes in the scenario.
    pub node_count: usize,
    /// Number of edges that survived generation.
    pub edge_count: usize,
}

impl fmt::Display for RouteBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},e={}", self.node_count, self.edge_count)
    }
}
