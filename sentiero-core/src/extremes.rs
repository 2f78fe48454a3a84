//! Selection of the two most distant nodes.

use tracing::{debug, instrument};

use crate::{Result, error::GraphError, geometry::euclidean_distance, graph::Node};

/// The most distant pair of nodes, used as route endpoints.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FarthestPair {
    /// Lower-indexed node of the pair; propagation is seeded here.
    pub source: usize,
    /// Higher-indexed node of the pair.
    pub destination: usize,
    /// Euclidean separation between the two nodes.
    pub distance: f64,
}

/// Returns the pair of nodes with the largest Euclidean separation.
///
/// Pairs are scanned with `i` ascending and `j` ascending over `i + 1..n`, and
/// only a strictly greater distance replaces the current best, so the first
/// pair in index order wins exact ties.
///
/// # Errors
/// Returns [`GraphError::InsufficientNodes`] when fewer than two nodes exist.
///
/// # Examples
/// ```
/// use sentiero_core::{Graph, Point, select_extremes};
///
/// let graph = Graph::build(
///     &[Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(5.0, 0.0)],
///     &[],
/// )?;
/// let pair = select_extremes(graph.nodes())?;
/// assert_eq!((pair.source, pair.destination), (0, 2));
/// # Ok::<(), sentiero_core::GraphError>(())
/// ```
#[instrument(name = "core.select_extremes", err, skip_all, fields(nodes = nodes.len()))]
pub fn select_extremes(nodes: &[Node]) -> Result<FarthestPair> {
    if nodes.len() < 2 {
        return Err(GraphError::InsufficientNodes { nodes: nodes.len() });
    }

    let mut best = FarthestPair {
        source: 0,
        destination: 1,
        distance: f64::NEG_INFINITY,
    };
    for (i, left) in nodes.iter().enumerate() {
        for (offset, right) in nodes.iter().skip(i + 1).enumerate() {
            let distance = euclidean_distance(left.position(), right.position());
            if distance > best.distance {
                best = FarthestPair {
                    source: i,
                    destination: i + 1 + offset,
                    distance,
                };
            }
        }
    }

    debug!(
        source = best.source,
        destination = best.destination,
        distance = best.distance,
        "farthest pair selected"
    );
    Ok(best)
}
