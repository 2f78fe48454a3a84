//! Draw data handed to an external renderer once per frame.

use std::fmt;

use crate::{
    geometry::{Point, Segment},
    graph::Graph,
    path::Route,
};

/// Travel cost label attached to a node.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum NodeCost {
    /// Finite cost from the source.
    Reached(f64),
    /// No path from the source exists.
    Unreached,
}

impl NodeCost {
    fn from_cost(cost: f64) -> Self {
        if cost.is_finite() {
            Self::Reached(cost)
        } else {
            Self::Unreached
        }
    }

    /// Cost rounded to the nearest integer, ties to even.
    #[must_use]
    pub fn rounded(self) -> Option<f64> {
        match self {
            Self::Reached(cost) => Some(cost.round_ties_even()),
            Self::Unreached => None,
        }
    }
}

impl fmt::Display for NodeCost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.rounded() {
            Some(rounded) => write!(f, "{rounded}"),
            None => f.write_str("inf"),
        }
    }
}

/// Highlight applied to a node.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum NodeRole {
    /// Route start.
    Source,
    /// Route end.
    Destination,
    /// Any other node.
    Plain,
}

impl NodeRole {
    /// Lowercase label used in text output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Source => "source",
            Self::Destination => "destination",
            Self::Plain => "plain",
        }
    }
}

/// Per-node draw data.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NodeView {
    /// Node index.
    pub index: usize,
    /// Position of the node's centre.
    pub position: Point,
    /// Travel cost label.
    pub cost: NodeCost,
    /// Highlight colour selector.
    pub role: NodeRole,
}

/// Route overlay.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "status", rename_all = "snake_case"))]
pub enum PathView {
    /// Segments from destination back to source, with the destination cost.
    Route {
        /// Route segments, destination first.
        segments: Vec<Segment>,
        /// Destination travel cost.
        total_cost: f64,
    },
    /// The destination could not be reached.
    NoRoute,
}

/// Everything a renderer needs to draw one frame.
///
/// # Examples
/// ```
/// use sentiero_core::{NodeRole, PathView, RoutePlanner, Scenario};
///
/// let frame = RoutePlanner::default().plan(&Scenario::fixed())?.frame();
/// assert_eq!(frame.nodes.len(), 6);
/// assert_eq!(frame.nodes[0].role, NodeRole::Source);
/// assert!(matches!(frame.path, PathView::Route { ref segments, .. } if segments.len() == 3));
/// # Ok::<(), sentiero_core::GraphError>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Frame {
    /// Route start.
    pub source: usize,
    /// Route end.
    pub destination: usize,
    /// Nodes in index order.
    pub nodes: Vec<NodeView>,
    /// One segment per graph edge, in declaration order.
    pub edges: Vec<Segment>,
    /// Route overlay.
    pub path: PathView,
}

impl Frame {
    /// Collects draw data from a propagated graph and its route.
    #[must_use]
    pub fn new(graph: &Graph, source: usize, destination: usize, route: &Route) -> Self {
        let nodes = graph
            .nodes()
            .iter()
            .map(|node| NodeView {
                index: node.index(),
                position: node.position(),
                cost: NodeCost::from_cost(node.cost()),
                role: match node.index() {
                    i if i == source => NodeRole::Source,
                    i if i == destination => NodeRole::Destination,
                    _ => NodeRole::Plain,
                },
            })
            .collect();
        let edges = graph
            .edges()
            .iter()
            .filter_map(|edge| graph.edge_segment(edge))
            .collect();
        let path = match route {
            Route::Reachable(path) => PathView::Route {
                segments: path.segments().to_vec(),
                total_cost: path.total_cost(),
            },
            Route::Unreachable => PathView::NoRoute,
        };
        Self {
            source,
            destination,
            nodes,
            edges,
            path,
        }
    }
}
