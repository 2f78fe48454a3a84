//! Arena-backed undirected graph embedded in the plane.
//!
//! Nodes live in a single owned `Vec` and refer to their neighbours and
//! predecessors by index. Edge weights are derived from node positions on
//! demand. Only the propagation routines mutate per-node cost state.

mod node;

use std::collections::HashMap;

use tracing::{debug, instrument};

use crate::{
    Result,
    error::{GraphError, InvalidEdgeReason, signed_index},
    geometry::{Point, Segment, euclidean_distance},
};

pub use self::node::Node;

/// An undirected edge between two node indices.
///
/// Endpoints keep the orientation supplied by the caller so renderers can
/// draw edges as they were declared.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Edge {
    left: usize,
    right: usize,
}

impl Edge {
    /// Returns the first endpoint as declared.
    #[must_use]
    #[rustfmt::skip]
    pub const fn left(&self) -> usize { self.left }

    /// Returns the second endpoint as declared.
    #[must_use]
    #[rustfmt::skip]
    pub const fn right(&self) -> usize { self.right }

    /// Returns the endpoints ordered as `(min, max)`.
    #[must_use]
    pub fn canonical(&self) -> (usize, usize) {
        if self.left <= self.right {
            (self.left, self.right)
        } else {
            (self.right, self.left)
        }
    }
}

/// Ordered collection of nodes plus the edge list used to connect them.
///
/// # Examples
/// ```
/// use sentiero_core::{Graph, Point};
///
/// let graph = Graph::build(
///     &[Point::new(0.0, 0.0), Point::new(3.0, 4.0), Point::new(6.0, 0.0)],
///     &[(0, 1), (1, 2)],
/// )?;
/// assert_eq!(graph.neighbours(1), Some(&[0, 2][..]));
/// assert_eq!(graph.edges().len(), 2);
/// # Ok::<(), sentiero_core::GraphError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Graph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

impl Graph {
    /// Builds a graph from node positions and index-pair edges.
    ///
    /// Each node's adjacency lists its neighbours in the order the edges were
    /// supplied. Every node starts unreached.
    ///
    /// # Errors
    /// - [`GraphError::NonFinitePosition`] when a coordinate is NaN or infinite.
    /// - [`GraphError::InvalidEdge`] when an endpoint is out of range or an edge
    ///   is a self-loop.
    /// - [`GraphError::DuplicateEdge`] when an unordered pair repeats.
    /// - [`GraphError::WeightOverflow`] when an edge length, or the sum of all
    ///   edge lengths, is not finite.
    #[instrument(
        name = "core.build_graph",
        err,
        skip_all,
        fields(nodes = positions.len(), edges = edges.len()),
    )]
    pub fn build(positions: &[Point], edges: &[(usize, usize)]) -> Result<Self> {
        let mut nodes = positions
            .iter()
            .enumerate()
            .map(|(index, &position)| {
                if position.is_finite() {
                    Ok(Node::new(index, position))
                } else {
                    Err(GraphError::NonFinitePosition {
                        index,
                        x: position.x,
                        y: position.y,
                    })
                }
            })
            .collect::<Result<Vec<_>>>()?;

        let node_count = nodes.len();
        let mut seen: HashMap<(usize, usize), usize> = HashMap::with_capacity(edges.len());
        let mut accepted = Vec::with_capacity(edges.len());
        let mut total_length = 0.0_f64;

        for (position, &(left, right)) in edges.iter().enumerate() {
            let edge = validate_edge(position, left, right, node_count)?;
            if let Some(&first) = seen.get(&edge.canonical()) {
                return Err(GraphError::DuplicateEdge {
                    position,
                    first,
                    left,
                    right,
                });
            }
            seen.insert(edge.canonical(), position);
            total_length += euclidean_distance(positions[left], positions[right]);
            if !total_length.is_finite() {
                return Err(GraphError::WeightOverflow {
                    position,
                    left,
                    right,
                });
            }
            accepted.push(edge);
        }

        for edge in &accepted {
            if let Some(node) = nodes.get_mut(edge.left) {
                node.push_neighbour(edge.right);
            }
            if let Some(node) = nodes.get_mut(edge.right) {
                node.push_neighbour(edge.left);
            }
        }

        debug!(nodes = node_count, edges = accepted.len(), "graph built");
        Ok(Self {
            nodes,
            edges: accepted,
        })
    }

    /// Number of nodes in the graph.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` when the graph has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the node stored at `index`.
    #[must_use]
    pub fn node(&self, index: usize) -> Option<&Node> {
        self.nodes.get(index)
    }

    /// Returns every node in index order.
    #[must_use]
    #[rustfmt::skip]
    pub fn nodes(&self) -> &[Node] { &self.nodes }

    /// Returns the accepted edges in declaration order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// Returns the neighbour indices of `index`.
    #[must_use]
    pub fn neighbours(&self, index: usize) -> Option<&[usize]> {
        self.nodes.get(index).map(Node::neighbours)
    }

    /// Euclidean length of `edge`, recomputed from the current positions.
    ///
    /// Returns `None` when `edge` does not belong to this graph's index range.
    #[must_use]
    pub fn edge_weight(&self, edge: &Edge) -> Option<f64> {
        let left = self.nodes.get(edge.left)?;
        let right = self.nodes.get(edge.right)?;
        Some(euclidean_distance(left.position(), right.position()))
    }

    /// Segment joining the two endpoints of `edge`.
    #[must_use]
    pub fn edge_segment(&self, edge: &Edge) -> Option<Segment> {
        let left = self.nodes.get(edge.left)?;
        let right = self.nodes.get(edge.right)?;
        Some(Segment::new(left.position(), right.position()))
    }

    /// Restores every node to "unreached": infinite cost, no predecessor.
    pub fn reset_costs(&mut self) {
        for node in &mut self.nodes {
            node.reset();
        }
    }

    /// Fails with [`GraphError::NodeOutOfRange`] unless `index` names a node.
    pub(crate) fn ensure_node(&self, index: usize) -> Result<()> {
        self.checked_node(index).map(|_| ())
    }

    /// Like [`Graph::node`], but reports a missing index as an error.
    pub(crate) fn checked_node(&self, index: usize) -> Result<&Node> {
        self.nodes.get(index).ok_or(GraphError::NodeOutOfRange {
            index,
            node_count: self.nodes.len(),
        })
    }

    /// Distance between two nodes known to exist.
    pub(crate) fn distance_between(&self, left: usize, right: usize) -> f64 {
        euclidean_distance(self.nodes[left].position(), self.nodes[right].position())
    }

    pub(crate) fn cost_of(&self, index: usize) -> f64 {
        self.nodes[index].cost()
    }

    pub(crate) fn neighbour_at(&self, index: usize, slot: usize) -> Option<usize> {
        self.nodes[index].neighbours().get(slot).copied()
    }

    pub(crate) fn seed_source(&mut self, index: usize) {
        self.nodes[index].assign(0.0, None);
    }

    pub(crate) fn assign(&mut self, index: usize, cost: f64, predecessor: usize) {
        self.nodes[index].assign(cost, Some(predecessor));
    }
}

fn validate_edge(position: usize, left: usize, right: usize, node_count: usize) -> Result<Edge> {
    if left >= node_count || right >= node_count {
        return Err(GraphError::InvalidEdge {
            position,
            left: signed_index(left),
            right: signed_index(right),
            reason: InvalidEdgeReason::OutOfRange { node_count },
        });
    }
    if left == right {
        return Err(GraphError::InvalidEdge {
            position,
            left: signed_index(left),
            right: signed_index(right),
            reason: InvalidEdgeReason::SelfLoop,
        });
    }
    Ok(Edge { left, right })
}

/// Converts signed endpoint pairs, as found in scenario files, to node indices.
///
/// Negative indices and indices at or beyond `node_count` are rejected here so
/// they surface as [`GraphError::InvalidEdge`] rather than wrapping around.
///
/// # Errors
/// Returns [`GraphError::InvalidEdge`] with [`InvalidEdgeReason::OutOfRange`]
/// for the first offending pair.
///
/// # Examples
/// ```
/// use sentiero_core::{GraphError, edges_from_signed};
///
/// assert_eq!(edges_from_signed(&[(0, 1)], 2)?, vec![(0, 1)]);
/// assert!(matches!(
///     edges_from_signed(&[(-1, 1)], 2),
///     Err(GraphError::InvalidEdge { position: 0, left: -1, .. })
/// ));
/// # Ok::<(), GraphError>(())
/// ```
pub fn edges_from_signed(edges: &[(i64, i64)], node_count: usize) -> Result<Vec<(usize, usize)>> {
    edges
        .iter()
        .enumerate()
        .map(|(position, &(left, right))| {
            let convert = |value: i64| usize::try_from(value).ok().filter(|&v| v < node_count);
            match (convert(left), convert(right)) {
                (Some(l), Some(r)) => Ok((l, r)),
                _ => Err(GraphError::InvalidEdge {
                    position,
                    left,
                    right,
                    reason: InvalidEdgeReason::OutOfRange { node_count },
                }),
            }
        })
        .collect()
}
