//! Seeded scenario generators for benchmarking.
//!
//! [`random_scenario`] reuses the core random layout with larger node counts,
//! while [`lattice_scenario`] builds a connected square grid whose farthest
//! pair sits on opposite corners.

use rand::{SeedableRng, rngs::SmallRng};
use sentiero_core::{Point, RandomScenarioConfig, Scenario};

/// Spacing between neighbouring lattice nodes.
const LATTICE_SPACING: u32 = 50;

/// Errors that may occur during synthetic scenario generation.
#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
pub enum SyntheticError {
    /// Fewer than two nodes were requested.
    #[error("a scenario needs at least two nodes, got {node_count}")]
    TooFewNodes {
        /// Requested node count.
        node_count: usize,
    },
    /// The lattice side length overflowed the node index range.
    #[error("lattice side {side} is too large")]
    LatticeTooLarge {
        /// Requested side length.
        side: u32,
    },
}

/// Configuration for seeded random scenarios.
#[derive(Clone, Debug)]
pub struct SyntheticConfig {
    /// Number of nodes to place.
    pub node_count: usize,
    /// Number of random connection draws.
    pub connection_attempts: usize,
    /// RNG seed for reproducibility.
    pub seed: u64,
}

/// Generates a random scenario from a fixed seed.
///
/// # Errors
/// Returns [`SyntheticError::TooFewNodes`] if fewer than two nodes are
/// requested.
///
/// # Examples
/// ```
/// use sentiero_benches::source::{SyntheticConfig, random_scenario};
///
/// let config = SyntheticConfig { node_count: 32, connection_attempts: 96, seed: 42 };
/// let scenario = random_scenario(&config).expect("valid config");
/// assert_eq!(scenario.positions().len(), 32);
/// ```
pub fn random_scenario(config: &SyntheticConfig) -> Result<Scenario, SyntheticError> {
    if config.node_count < 2 {
        return Err(SyntheticError::TooFewNodes {
            node_count: config.node_count,
        });
    }
    let random = RandomScenarioConfig::default()
        .with_node_count(config.node_count)
        .with_connection_attempts(config.connection_attempts);
    let mut rng = SmallRng::seed_from_u64(config.seed);
    Ok(Scenario::random(&random, &mut rng))
}

/// Builds a `side` x `side` grid with edges to the right and downward
/// neighbours.
///
/// # Errors
/// Returns [`SyntheticError::TooFewNodes`] for `side < 2` and
/// [`SyntheticError::LatticeTooLarge`] if coordinates overflow.
pub fn lattice_scenario(side: u32) -> Result<Scenario, SyntheticError> {
    if side < 2 {
        return Err(SyntheticError::TooFewNodes {
            node_count: usize::try_from(side.saturating_mul(side)).unwrap_or(usize::MAX),
        });
    }
    let too_large = || SyntheticError::LatticeTooLarge { side };
    let width = usize::try_from(side).map_err(|_| too_large())?;
    side.checked_mul(LATTICE_SPACING).ok_or_else(too_large)?;

    let mut positions = Vec::with_capacity(width.saturating_mul(width));
    let mut edges = Vec::new();
    for row in 0..side {
        for col in 0..side {
            let index = positions.len();
            positions.push(Point::new(
                f64::from(col * LATTICE_SPACING),
                f64::from(row * LATTICE_SPACING),
            ));
            if col + 1 < side {
                edges.push((index, index + 1));
            }
            if row + 1 < side {
                edges.push((index, index + width));
            }
        }
    }
    Ok(Scenario::new(positions, edges))
}
