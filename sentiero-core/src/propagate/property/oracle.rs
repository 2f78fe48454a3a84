//! Bellman-Ford reference costs.

use crate::geometry::{Point, euclidean_distance};

/// Computes single-source costs by relaxing every edge `n - 1` times.
pub(super) fn bellman_ford(positions: &[Point], edges: &[(usize, usize)], source: usize) -> Vec<f64> {
    let mut costs = vec![f64::INFINITY; positions.len()];
    costs[source] = 0.0;
    for _ in 1..positions.len() {
        let mut changed = false;
        for &(left, right) in edges {
            let weight = euclidean_distance(positions[left], positions[right]);
            for (from, to) in [(left, right), (right, left)] {
                let candidate = costs[from] + weight;
                if candidate < costs[to] {
                    costs[to] = candidate;
                    changed = true;
                }
            }
        }
        if !changed {
            break;
        }
    }
    costs
}
