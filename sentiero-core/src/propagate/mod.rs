//! Single-source travel-cost propagation.
//!
//! Both strategies relax an edge only when the candidate cost is strictly
//! smaller than the neighbour's current cost, so costs never increase during a
//! run and every reachable node ends with its shortest-path cost.

mod dijkstra;
mod label_correcting;

#[cfg(test)]
mod property;

use std::fmt;

use tracing::{debug, instrument, trace};

use crate::{Result, graph::Graph};

/// Relaxation order used by [`propagate_with`].
///
/// # Examples
/// ```
/// use sentiero_core::PropagationStrategy;
///
/// assert_eq!(PropagationStrategy::default(), PropagationStrategy::Dijkstra);
/// assert_eq!(PropagationStrategy::LabelCorrecting.to_string(), "label-correcting");
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum PropagationStrategy {
    /// Settle nodes in increasing cost order from a binary-heap frontier.
    #[default]
    Dijkstra,
    /// Depth-first relaxation that re-enters a node whenever its cost drops.
    ///
    /// Nodes are never finalised, so dense graphs can trigger an exponential
    /// number of revisits.
    LabelCorrecting,
}

impl PropagationStrategy {
    /// Stable lowercase name used in logs and command-line flags.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dijkstra => "dijkstra",
            Self::LabelCorrecting => "label-correcting",
        }
    }
}

impl fmt::Display for PropagationStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A successful cost update.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Relaxation {
    /// Node whose cost decreased.
    pub node: usize,
    /// Cost held before the update; infinite when first reached.
    pub previous_cost: f64,
    /// Newly assigned cost.
    pub cost: f64,
    /// Neighbour through which `cost` was achieved.
    pub predecessor: usize,
}

/// Receives every successful relaxation in the order it happens.
///
/// Closures taking `&Relaxation` implement this trait.
pub trait RelaxationObserver {
    /// Called after `relaxation` has been applied to the graph.
    fn on_relaxation(&mut self, relaxation: &Relaxation);
}

impl<F> RelaxationObserver for F
where
    F: FnMut(&Relaxation),
{
    fn on_relaxation(&mut self, relaxation: &Relaxation) {
        self(relaxation);
    }
}

/// Observer that ignores every relaxation.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl RelaxationObserver for NoopObserver {
    fn on_relaxation(&mut self, _relaxation: &Relaxation) {}
}

/// Work performed by a propagation run.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PropagationStats {
    /// Number of times a node's neighbours were expanded.
    pub visits: usize,
    /// Number of strictly improving cost updates.
    pub relaxations: usize,
}

/// Propagates travel costs from `source` using the default strategy.
///
/// # Errors
/// Returns [`crate::GraphError::NodeOutOfRange`] when `source` is not a node.
///
/// # Examples
/// ```
/// use sentiero_core::{Graph, Point, propagate};
///
/// let mut graph = Graph::build(
///     &[Point::new(0.0, 0.0), Point::new(3.0, 4.0), Point::new(3.0, 0.0)],
///     &[(0, 1), (1, 2)],
/// )?;
/// propagate(&mut graph, 0)?;
/// assert_eq!(graph.node(2).map(|node| node.cost()), Some(9.0));
/// # Ok::<(), sentiero_core::GraphError>(())
/// ```
pub fn propagate(graph: &mut Graph, source: usize) -> Result<PropagationStats> {
    propagate_with(
        graph,
        source,
        PropagationStrategy::default(),
        &mut NoopObserver,
    )
}

/// Propagates travel costs from `source`, reporting each update to `observer`.
///
/// Every node is reset to "unreached" first, then the source is seeded with a
/// cost of zero and no predecessor. Nodes in other components keep an infinite
/// cost.
///
/// # Errors
/// Returns [`crate::GraphError::NodeOutOfRange`] when `source` is not a node.
/// The graph is left untouched in that case.
#[instrument(
    name = "core.propagate",
    err,
    skip(graph, observer),
    fields(nodes = graph.len(), strategy = %strategy),
)]
pub fn propagate_with<O>(
    graph: &mut Graph,
    source: usize,
    strategy: PropagationStrategy,
    observer: &mut O,
) -> Result<PropagationStats>
where
    O: RelaxationObserver + ?Sized,
{
    graph.ensure_node(source)?;
    graph.reset_costs();
    graph.seed_source(source);

    let mut relaxer = Relaxer::new(graph, observer);
    match strategy {
        PropagationStrategy::Dijkstra => dijkstra::run(&mut relaxer, source),
        PropagationStrategy::LabelCorrecting => label_correcting::run(&mut relaxer, source),
    }
    let stats = relaxer.stats;

    #[cfg(feature = "metrics")]
    {
        metrics::counter!("propagation_visits").increment(stats.visits as u64);
        metrics::counter!("propagation_relaxations").increment(stats.relaxations as u64);
    }

    debug!(
        visits = stats.visits,
        relaxations = stats.relaxations,
        "propagation finished"
    );
    Ok(stats)
}

/// Shared relaxation step used by both strategies.
pub(super) struct Relaxer<'a, O: ?Sized> {
    graph: &'a mut Graph,
    observer: &'a mut O,
    stats: PropagationStats,
}

impl<'a, O> Relaxer<'a, O>
where
    O: RelaxationObserver + ?Sized,
{
    fn new(graph: &'a mut Graph, observer: &'a mut O) -> Self {
        Self {
            graph,
            observer,
            stats: PropagationStats::default(),
        }
    }

    fn graph(&self) -> &Graph {
        &*self.graph
    }

    fn record_visit(&mut self) {
        self.stats.visits += 1;
    }

    /// Tries to improve `to` through `from`; returns the new cost on success.
    fn relax(&mut self, from: usize, to: usize) -> Option<f64> {
        let candidate = self.graph.cost_of(from) + self.graph.distance_between(from, to);
        let previous_cost = self.graph.cost_of(to);
        if candidate >= previous_cost {
            return None;
        }

        self.graph.assign(to, candidate, from);
        self.stats.relaxations += 1;
        let relaxation = Relaxation {
            node: to,
            previous_cost,
            cost: candidate,
            predecessor: from,
        };
        trace!(node = to, predecessor = from, cost = candidate, "relaxed");
        self.observer.on_relaxation(&relaxation);
        Some(candidate)
    }
}
