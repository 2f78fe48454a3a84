//! Per-node storage: position, adjacency and relaxation state.

use crate::geometry::Point;

/// A vertex in the graph arena.
///
/// `cost` starts at [`f64::INFINITY`] and only decreases while a propagation
/// run is in progress. `predecessor` is set exactly when the node was reached
/// through a neighbour; the source keeps `None` with a cost of zero.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    index: usize,
    position: Point,
    neighbours: Vec<usize>,
    cost: f64,
    predecessor: Option<usize>,
}

impl Node {
    pub(crate) fn new(index: usize, position: Point) -> Self {
        Self {
            index,
            position,
            neighbours: Vec::new(),
            cost: f64::INFINITY,
            predecessor: None,
        }
    }

    /// Stable index of this node within its graph.
    #[must_use]
    #[rustfmt::skip]
    pub const fn index(&self) -> usize { self.index }

    /// Position in the plane.
    #[must_use]
    #[rustfmt::skip]
    pub const fn position(&self) -> Point { self.position }

    /// Indices of directly connected nodes, in discovery order.
    #[must_use]
    #[rustfmt::skip]
    pub fn neighbours(&self) -> &[usize] { &self.neighbours }

    /// Current travel cost from the last propagation source.
    #[must_use]
    #[rustfmt::skip]
    pub const fn cost(&self) -> f64 { self.cost }

    /// Neighbour through which the current cost was achieved.
    #[must_use]
    #[rustfmt::skip]
    pub const fn predecessor(&self) -> Option<usize> { self.predecessor }

    /// Returns `true` once a finite cost has been assigned.
    #[must_use]
    pub fn is_reached(&self) -> bool {
        self.cost.is_finite()
    }

    pub(super) fn push_neighbour(&mut self, neighbour: usize) {
        debug_assert!(
            !self.neighbours.contains(&neighbour),
            "duplicate edges are rejected before adjacency is filled"
        );
        self.neighbours.push(neighbour);
    }

    pub(super) fn reset(&mut self) {
        self.cost = f64::INFINITY;
        self.predecessor = None;
    }

    pub(super) fn assign(&mut self, cost: f64, predecessor: Option<usize>) {
        debug_assert!(cost <= self.cost, "travel cost must never increase");
        self.cost = cost;
        self.predecessor = predecessor;
    }
}
