//! Strategy builders for propagation property tests.

use std::collections::HashSet;

use proptest::prelude::*;
use rand::{Rng, SeedableRng, rngs::SmallRng};

use crate::geometry::Point;

use super::types::{GraphFixture, Topology};

const MIN_NODES: usize = 2;
const MAX_NODES: usize = 16;
/// Label-correcting can revisit exponentially often on dense inputs.
const DENSE_MAX_NODES: usize = 8;

pub(super) fn graph_fixture_strategy() -> impl Strategy<Value = GraphFixture> {
    (any::<Topology>(), any::<u64>()).prop_map(|(topology, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(topology, &mut rng)
    })
}

pub(super) fn generate_fixture(topology: Topology, rng: &mut SmallRng) -> GraphFixture {
    let max_nodes = match topology {
        Topology::Dense => DENSE_MAX_NODES,
        _ => MAX_NODES,
    };
    let node_count = rng.gen_range(MIN_NODES..=max_nodes);
    let positions = (0..node_count)
        .map(|_| {
            Point::new(
                f64::from(rng.gen_range(0_u32..=1000)),
                f64::from(rng.gen_range(0_u32..=1000)),
            )
        })
        .collect();
    let edges = match topology {
        Topology::Connected => connected_edges(node_count, rng),
        Topology::Dense => dense_edges(node_count, rng),
        Topology::Disconnected => disconnected_edges(node_count, rng),
        Topology::Scattered => scattered_edges(node_count, rng),
    };
    let source = rng.gen_range(0..node_count);
    GraphFixture {
        positions,
        edges,
        source,
        topology,
    }
}

/// Accumulates edges while skipping self-loops and repeated pairs.
#[derive(Default)]
struct EdgeSet {
    seen: HashSet<(usize, usize)>,
    edges: Vec<(usize, usize)>,
}

impl EdgeSet {
    fn insert(&mut self, left: usize, right: usize) {
        if left == right {
            return;
        }
        if self.seen.insert((left.min(right), left.max(right))) {
            self.edges.push((left, right));
        }
    }
}

fn connected_edges(node_count: usize, rng: &mut SmallRng) -> Vec<(usize, usize)> {
    let mut set = EdgeSet::default();
    for node in 1..node_count {
        let parent = rng.gen_range(0..node);
        if rng.gen_bool(0.5) {
            set.insert(node, parent);
        } else {
            set.insert(parent, node);
        }
    }
    for _ in 0..node_count / 2 {
        set.insert(rng.gen_range(0..node_count), rng.gen_range(0..node_count));
    }
    set.edges
}

fn dense_edges(node_count: usize, rng: &mut SmallRng) -> Vec<(usize, usize)> {
    let mut set = EdgeSet::default();
    let probability = rng.gen_range(0.7..=0.95);
    for left in 0..node_count {
        for right in left + 1..node_count {
            if rng.gen_bool(probability) {
                set.insert(left, right);
            }
        }
    }
    set.edges
}

fn disconnected_edges(node_count: usize, rng: &mut SmallRng) -> Vec<(usize, usize)> {
    let split = rng.gen_range(1..node_count);
    let mut set = EdgeSet::default();
    for _ in 0..node_count {
        let left = rng.gen_range(0..split);
        let right = rng.gen_range(0..split);
        set.insert(left, right);
        let left = rng.gen_range(split..node_count);
        let right = rng.gen_range(split..node_count);
        set.insert(left, right);
    }
    set.edges
}

fn scattered_edges(node_count: usize, rng: &mut SmallRng) -> Vec<(usize, usize)> {
    let mut set = EdgeSet::default();
    for _ in 0..node_count * 2 {
        set.insert(rng.gen_range(0..node_count), rng.gen_range(0..node_count));
    }
    set.edges
}
