//! End-to-end route planning over a [`Scenario`].
//!
//! Exposes the endpoint selection surface and the builder used to configure
//! [`RoutePlanner`] instances.

use tracing::{info, instrument};

use crate::{
    Result,
    extremes::select_extremes,
    frame::Frame,
    graph::Graph,
    path::{Route, reconstruct},
    propagate::{NoopObserver, PropagationStats, PropagationStrategy, propagate_with},
    scenario::Scenario,
};

/// How the planner chooses the route's endpoints.
///
/// # Examples
/// ```
/// use sentiero_core::Endpoints;
///
/// assert_eq!(Endpoints::default(), Endpoints::Farthest);
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Endpoints {
    /// Use the two nodes with the largest Euclidean separation.
    #[default]
    Farthest,
    /// Use caller-chosen nodes.
    Explicit {
        /// Node from which costs are propagated.
        source: usize,
        /// Node the route is reconstructed from.
        destination: usize,
    },
}

/// Configures and constructs [`RoutePlanner`] instances.
///
/// # Examples
/// ```
/// use sentiero_core::{Endpoints, PropagationStrategy, RoutePlannerBuilder};
///
/// let planner = RoutePlannerBuilder::new()
///     .with_strategy(PropagationStrategy::LabelCorrecting)
///     .with_endpoints(Endpoints::Explicit { source: 1, destination: 4 })
///     .build();
/// assert_eq!(planner.strategy(), PropagationStrategy::LabelCorrecting);
/// assert_eq!(planner.endpoints(), Endpoints::Explicit { source: 1, destination: 4 });
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct RoutePlannerBuilder {
    strategy: PropagationStrategy,
    endpoints: Endpoints,
}

impl RoutePlannerBuilder {
    /// Creates a builder using Dijkstra and farthest-pair endpoints.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the propagation strategy.
    #[must_use]
    pub fn with_strategy(mut self, strategy: PropagationStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Sets how endpoints are chosen.
    #[must_use]
    pub fn with_endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    /// Returns the configured strategy.
    #[must_use]
    pub fn strategy(&self) -> PropagationStrategy {
        self.strategy
    }

    /// Returns the configured endpoint selection.
    #[must_use]
    pub fn endpoints(&self) -> Endpoints {
        self.endpoints
    }

    /// Finalises the configuration.
    #[must_use]
    pub fn build(self) -> RoutePlanner {
        RoutePlanner {
            strategy: self.strategy,
            endpoints: self.endpoints,
        }
    }
}

/// Runs graph construction, endpoint selection, propagation and
/// reconstruction for a scenario.
///
/// # Examples
/// ```
/// use sentiero_core::{RoutePlanner, Scenario};
///
/// let plan = RoutePlanner::default().plan(&Scenario::fixed())?;
/// assert_eq!((plan.source(), plan.destination()), (0, 5));
/// let path = plan.route().path().expect("fixed scenario is connected");
/// assert_eq!(path.nodes(), &[5, 3, 2, 0]);
/// # Ok::<(), sentiero_core::GraphError>(())
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct RoutePlanner {
    strategy: PropagationStrategy,
    endpoints: Endpoints,
}

impl RoutePlanner {
    /// Returns the strategy this planner propagates with.
    #[must_use]
    pub fn strategy(&self) -> PropagationStrategy {
        self.strategy
    }

    /// Returns the endpoint selection this planner applies.
    #[must_use]
    pub fn endpoints(&self) -> Endpoints {
        self.endpoints
    }

    /// Plans the shortest route for `scenario`.
    ///
    /// # Errors
    /// - Any structural error from [`Graph::build`].
    /// - [`crate::GraphError::InsufficientNodes`] when farthest-pair selection
    ///   sees fewer than two nodes.
    /// - [`crate::GraphError::NodeOutOfRange`] when explicit endpoints are not
    ///   nodes of the scenario.
    #[instrument(
        name = "core.plan",
        err,
        skip(self, scenario),
        fields(
            nodes = scenario.positions().len(),
            edges = scenario.edges().len(),
            strategy = %self.strategy,
        ),
    )]
    pub fn plan(&self, scenario: &Scenario) -> Result<RoutePlan> {
        let mut graph = scenario.build_graph()?;

        let (source, destination) = match self.endpoints {
            Endpoints::Farthest => {
                let pair = select_extremes(graph.nodes())?;
                (pair.source, pair.destination)
            }
            Endpoints::Explicit {
                source,
                destination,
            } => {
                graph.ensure_node(source)?;
                graph.ensure_node(destination)?;
                (source, destination)
            }
        };

        let stats = propagate_with(&mut graph, source, self.strategy, &mut NoopObserver)?;
        let route = reconstruct(&graph, source, destination)?;

        info!(
            source,
            destination,
            reachable = route.is_reachable(),
            total_cost = route.total_cost(),
            "route planned"
        );
        Ok(RoutePlan {
            graph,
            source,
            destination,
            strategy: self.strategy,
            route,
            stats,
        })
    }
}

/// Result of [`RoutePlanner::plan`]: the propagated graph plus its route.
#[derive(Clone, Debug)]
pub struct RoutePlan {
    graph: Graph,
    source: usize,
    destination: usize,
    strategy: PropagationStrategy,
    route: Route,
    stats: PropagationStats,
}

impl RoutePlan {
    /// Graph carrying the propagated costs.
    #[must_use]
    #[rustfmt::skip]
    pub fn graph(&self) -> &Graph { &self.graph }

    /// Node the costs were propagated from.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> usize { self.source }

    /// Node the route was reconstructed from.
    #[must_use]
    #[rustfmt::skip]
    pub const fn destination(&self) -> usize { self.destination }

    /// Strategy used to propagate costs.
    #[must_use]
    #[rustfmt::skip]
    pub const fn strategy(&self) -> PropagationStrategy { self.strategy }

    /// Reconstructed route.
    #[must_use]
    #[rustfmt::skip]
    pub const fn route(&self) -> &Route { &self.route }

    /// Work performed during propagation.
    #[must_use]
    #[rustfmt::skip]
    pub const fn stats(&self) -> PropagationStats { self.stats }

    /// Draw data for a renderer.
    #[must_use]
    pub fn frame(&self) -> Frame {
        Frame::new(&self.graph, self.source, self.destination, &self.route)
    }
}
