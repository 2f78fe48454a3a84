//! Sentiero core library.
//!
//! Builds a small undirected graph embedded in the plane, picks the two most
//! distant nodes, propagates travel costs from one to the other and walks the
//! predecessor links back to recover the shortest route.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;
mod extremes;
mod frame;
mod geometry;
mod graph;
mod path;
mod planner;
mod propagate;
mod scenario;
#[cfg(test)]
pub(crate) mod test_utils;

pub use crate::{
    error::{GraphError, GraphErrorCode, InvalidEdgeReason, Result},
    extremes::{FarthestPair, select_extremes},
    frame::{Frame, NodeCost, NodeRole, NodeView, PathView},
    geometry::{Point, Segment, euclidean_distance},
    graph::{Edge, Graph, Node, edges_from_signed},
    path::{Route, ShortestPath, reconstruct},
    planner::{Endpoints, RoutePlan, RoutePlanner, RoutePlannerBuilder},
    propagate::{
        NoopObserver, PropagationStats, PropagationStrategy, Relaxation, RelaxationObserver,
        propagate, propagate_with,
    },
    scenario::{RandomScenarioConfig, Scenario},
};
