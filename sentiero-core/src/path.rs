//! Backtracking over predecessor links to recover the shortest route.

use tracing::{debug, instrument};

use crate::{
    Result,
    error::GraphError,
    geometry::Segment,
    graph::Graph,
};

/// A reconstructed shortest path, stored from destination back to source.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ShortestPath {
    nodes: Vec<usize>,
    segments: Vec<Segment>,
    total_cost: f64,
}

impl ShortestPath {
    /// Node indices from destination to source, both included.
    #[must_use]
    #[rustfmt::skip]
    pub fn nodes(&self) -> &[usize] { &self.nodes }

    /// Segments from each node to its predecessor, destination first.
    #[must_use]
    #[rustfmt::skip]
    pub fn segments(&self) -> &[Segment] { &self.segments }

    /// Travel cost recorded at the destination.
    #[must_use]
    #[rustfmt::skip]
    pub const fn total_cost(&self) -> f64 { self.total_cost }

    /// Number of segments along the route.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns `true` when source and destination coincide.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Node indices in travel order, from source to destination.
    #[must_use]
    pub fn source_to_destination(&self) -> Vec<usize> {
        self.nodes.iter().rev().copied().collect()
    }
}

/// Outcome of reconstructing a route after propagation.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "status", rename_all = "snake_case"))]
pub enum Route {
    /// The destination was reached from the source.
    Reachable(ShortestPath),
    /// The destination lies in a different component from the source.
    Unreachable,
}

impl Route {
    /// Returns `true` for [`Route::Reachable`].
    #[must_use]
    pub const fn is_reachable(&self) -> bool {
        matches!(self, Self::Reachable(_))
    }

    /// Borrows the path when one exists.
    #[must_use]
    pub const fn path(&self) -> Option<&ShortestPath> {
        match self {
            Self::Reachable(path) => Some(path),
            Self::Unreachable => None,
        }
    }

    /// Total travel cost, if the destination was reached.
    #[must_use]
    pub fn total_cost(&self) -> Option<f64> {
        self.path().map(ShortestPath::total_cost)
    }
}

/// Follows predecessor links from `destination` back to `source`.
///
/// Must be called after [`crate::propagate`] was seeded at `source`. A walk
/// that meets a node without a predecessor before reaching `source` means the
/// destination is unreachable, which is reported as [`Route::Unreachable`].
///
/// # Errors
/// - [`GraphError::NodeOutOfRange`] when either endpoint is not a node.
/// - [`GraphError::PredecessorCycle`] when the walk exceeds the node count,
///   which only happens if predecessor links were corrupted.
///
/// # Examples
/// ```
/// use sentiero_core::{Graph, Point, Route, propagate, reconstruct};
///
/// let mut graph = Graph::build(
///     &[Point::new(0.0, 0.0), Point::new(3.0, 4.0), Point::new(9.0, 4.0)],
///     &[(0, 1), (1, 2)],
/// )?;
/// propagate(&mut graph, 0)?;
/// let Route::Reachable(path) = reconstruct(&graph, 0, 2)? else {
///     panic!("node 2 is connected to node 0");
/// };
/// assert_eq!(path.nodes(), &[2, 1, 0]);
/// assert_eq!(path.total_cost(), 11.0);
/// # Ok::<(), sentiero_core::GraphError>(())
/// ```
#[instrument(name = "core.reconstruct", err, skip(graph), fields(nodes = graph.len()))]
pub fn reconstruct(graph: &Graph, source: usize, destination: usize) -> Result<Route> {
    graph.ensure_node(source)?;
    let target = graph.checked_node(destination)?;

    let mut nodes = vec![destination];
    let mut segments = Vec::new();
    let mut node = target;

    while node.index() != source {
        if segments.len() >= graph.len() {
            return Err(GraphError::PredecessorCycle { start: destination });
        }
        let Some(previous) = node.predecessor() else {
            debug!(destination, "destination unreachable");
            return Ok(Route::Unreachable);
        };
        let next = graph.checked_node(previous)?;
        segments.push(Segment::new(node.position(), next.position()));
        nodes.push(previous);
        node = next;
    }

    let total_cost = target.cost();
    debug!(segments = segments.len(), total_cost, "route reconstructed");
    Ok(Route::Reachable(ShortestPath {
        nodes,
        segments,
        total_cost,
    }))
}
