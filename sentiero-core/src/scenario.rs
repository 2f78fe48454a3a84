//! Scenario inputs: node positions plus undirected index-pair edges.
//!
//! A scenario is plain data. Building it into a [`Graph`] performs the
//! structural validation.

#[cfg(feature = "random")]
use rand::Rng;

use crate::{Result, geometry::Point, graph::Graph};

/// Positions and edges describing one routing problem.
///
/// # Examples
/// ```
/// use sentiero_core::Scenario;
///
/// let scenario = Scenario::fixed();
/// let graph = scenario.build_graph()?;
/// assert_eq!(graph.len(), 6);
/// assert_eq!(graph.edges().len(), 6);
/// # Ok::<(), sentiero_core::GraphError>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scenario {
    positions: Vec<Point>,
    edges: Vec<(usize, usize)>,
}

impl Scenario {
    /// Wraps caller-supplied positions and edges without validating them.
    #[must_use]
    pub fn new(positions: Vec<Point>, edges: Vec<(usize, usize)>) -> Self {
        Self { positions, edges }
    }

    /// The six-node reference layout.
    ///
    /// Nodes 0 and 5 are farthest apart. The route `0 -> 2 -> 3 -> 5` is
    /// shorter than `0 -> 1 -> 4 -> 5`.
    #[must_use]
    pub fn fixed() -> Self {
        let positions = [
            (100.0, 350.0),
            (400.0, 600.0),
            (400.0, 100.0),
            (700.0, 150.0),
            (400.0, 350.0),
            (1000.0, 350.0),
        ]
        .into_iter()
        .map(Point::from)
        .collect();
        let edges = vec![(0, 1), (0, 2), (2, 3), (1, 4), (3, 5), (4, 5)];
        Self { positions, edges }
    }

    /// Generates integer-valued positions and random connections.
    ///
    /// `x` is drawn from `[100, 1100]` and `y` from `[100, 600]`. Each of the
    /// `connection_attempts` draws picks two node indices; self-loops and pairs
    /// already present in either orientation are skipped, so fewer edges than
    /// attempts may be produced.
    ///
    /// # Examples
    /// ```
    /// use rand::{SeedableRng, rngs::SmallRng};
    /// use sentiero_core::{RandomScenarioConfig, Scenario};
    ///
    /// let mut rng = SmallRng::seed_from_u64(7);
    /// let scenario = Scenario::random(&RandomScenarioConfig::default(), &mut rng);
    /// assert_eq!(scenario.positions().len(), 10);
    /// assert!(scenario.edges().len() <= 30);
    /// assert!(scenario.build_graph().is_ok());
    /// ```
    #[cfg(feature = "random")]
    #[cfg_attr(docsrs, doc(cfg(feature = "random")))]
    #[must_use]
    pub fn random<R: Rng + ?Sized>(config: &RandomScenarioConfig, rng: &mut R) -> Self {
        let positions: Vec<Point> = (0..config.node_count)
            .map(|_| {
                let x: u32 = rng.gen_range(RandomScenarioConfig::X_RANGE);
                let y: u32 = rng.gen_range(RandomScenarioConfig::Y_RANGE);
                Point::new(f64::from(x), f64::from(y))
            })
            .collect();

        let mut edges: Vec<(usize, usize)> = Vec::new();
        if config.node_count > 0 {
            for _ in 0..config.connection_attempts {
                let left = rng.gen_range(0..config.node_count);
                let right = rng.gen_range(0..config.node_count);
                let known = edges
                    .iter()
                    .any(|&edge| edge == (left, right) || edge == (right, left));
                if left != right && !known {
                    edges.push((left, right));
                }
            }
        }

        tracing::debug!(
            nodes = positions.len(),
            edges = edges.len(),
            attempts = config.connection_attempts,
            "random scenario generated"
        );
        Self { positions, edges }
    }

    /// Node positions in index order.
    #[must_use]
    #[rustfmt::skip]
    pub fn positions(&self) -> &[Point] { &self.positions }

    /// Edges as supplied.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[(usize, usize)] { &self.edges }

    /// Validates the scenario and builds its graph.
    ///
    /// # Errors
    /// Propagates any structural error reported by [`Graph::build`].
    pub fn build_graph(&self) -> Result<Graph> {
        Graph::build(&self.positions, &self.edges)
    }
}

/// Parameters for `Scenario::random`.
///
/// # Examples
/// ```
/// use sentiero_core::RandomScenarioConfig;
///
/// let config = RandomScenarioConfig::default().with_node_count(4);
/// assert_eq!(config.node_count(), 4);
/// assert_eq!(config.connection_attempts(), 30);
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RandomScenarioConfig {
    node_count: usize,
    connection_attempts: usize,
}

impl Default for RandomScenarioConfig {
    fn default() -> Self {
        Self {
            node_count: 10,
            connection_attempts: 30,
        }
    }
}

impl RandomScenarioConfig {
    #[cfg(feature = "random")]
    const X_RANGE: core::ops::RangeInclusive<u32> = 100..=1100;
    #[cfg(feature = "random")]
    const Y_RANGE: core::ops::RangeInclusive<u32> = 100..=600;

    /// Overrides the number of generated nodes.
    #[must_use]
    pub fn with_node_count(mut self, node_count: usize) -> Self {
        self.node_count = node_count;
        self
    }

    /// Overrides the number of random connection draws.
    #[must_use]
    pub fn with_connection_attempts(mut self, attempts: usize) -> Self {
        self.connection_attempts = attempts;
        self
    }

    /// Number of generated nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Number of random connection draws.
    #[must_use]
    pub fn connection_attempts(&self) -> usize {
        self.connection_attempts
    }
}
