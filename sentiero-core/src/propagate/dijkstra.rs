//! Binary-heap Dijkstra over non-negative Euclidean weights.

use std::{cmp::Ordering, collections::BinaryHeap};

use super::{RelaxationObserver, Relaxer};

/// Frontier entry ordered so the heap pops the cheapest node first.
///
/// Ties are broken on the lower node index for deterministic visiting order.
#[derive(Clone, Copy, Debug)]
struct Frontier {
    cost: f64,
    node: usize,
}

impl PartialEq for Frontier {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Frontier {}

impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

pub(super) fn run<O>(relaxer: &mut Relaxer<'_, O>, source: usize)
where
    O: RelaxationObserver + ?Sized,
{
    let mut frontier = BinaryHeap::new();
    frontier.push(Frontier {
        cost: 0.0,
        node: source,
    });

    while let Some(Frontier { cost, node }) = frontier.pop() {
        // Stale entry: the node was improved after this one was queued.
        if cost > relaxer.graph().cost_of(node) {
            continue;
        }
        relaxer.record_visit();

        let mut slot = 0;
        while let Some(neighbour) = relaxer.graph().neighbour_at(node, slot) {
            slot += 1;
            if let Some(improved) = relaxer.relax(node, neighbour) {
                frontier.push(Frontier {
                    cost: improved,
                    node: neighbour,
                });
            }
        }
    }
}
