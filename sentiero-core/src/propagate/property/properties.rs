//! Property runners shared by the proptest and rstest entry points.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{
    Graph,
    extremes::select_extremes,
    geometry::euclidean_distance,
    path::{Route, reconstruct},
    propagate::{PropagationStrategy, Relaxation, propagate_with},
};

use super::{oracle::bellman_ford, types::GraphFixture};

/// Relative tolerance for comparing sums accumulated in different orders.
const TOLERANCE: f64 = 1e-9;

fn close(left: f64, right: f64) -> bool {
    if left.is_infinite() || right.is_infinite() {
        return left == right;
    }
    (left - right).abs() <= TOLERANCE * left.abs().max(right.abs()).max(1.0)
}

fn build(fixture: &GraphFixture) -> Result<Graph, TestCaseError> {
    Graph::build(&fixture.positions, &fixture.edges).map_err(|err| {
        TestCaseError::fail(format!(
            "build failed: {err} (topology={:?}, nodes={}, edges={})",
            fixture.topology,
            fixture.positions.len(),
            fixture.edges.len(),
        ))
    })
}

fn run(
    fixture: &GraphFixture,
    strategy: PropagationStrategy,
) -> Result<(Graph, Vec<Relaxation>), TestCaseError> {
    let mut graph = build(fixture)?;
    let mut seen = Vec::new();
    propagate_with(
        &mut graph,
        fixture.source,
        strategy,
        &mut |relaxation: &Relaxation| seen.push(*relaxation),
    )
    .map_err(|err| TestCaseError::fail(format!("propagation failed: {err}")))?;
    Ok((graph, seen))
}

/// Every neighbour relation is mirrored and appears once.
pub(super) fn run_adjacency_symmetry_property(fixture: &GraphFixture) -> TestCaseResult {
    let graph = build(fixture)?;
    for node in graph.nodes() {
        let neighbours = node.neighbours();
        for (slot, &neighbour) in neighbours.iter().enumerate() {
            if neighbours[..slot].contains(&neighbour) {
                return Err(TestCaseError::fail(format!(
                    "node {} lists neighbour {neighbour} twice",
                    node.index()
                )));
            }
            let mirrored = graph
                .neighbours(neighbour)
                .is_some_and(|back| back.contains(&node.index()));
            if !mirrored {
                return Err(TestCaseError::fail(format!(
                    "edge {} -> {neighbour} is not mirrored",
                    node.index()
                )));
            }
        }
    }
    let degree_sum: usize = graph.nodes().iter().map(|node| node.neighbours().len()).sum();
    expect_count(degree_sum, 2 * fixture.edges.len(), "degree sum")
}

fn expect_count(actual: usize, expected: usize, what: &str) -> TestCaseResult {
    if actual == expected {
        Ok(())
    } else {
        Err(TestCaseError::fail(format!(
            "{what}: expected {expected}, got {actual}"
        )))
    }
}

/// Final costs match the oracle and the source invariants hold.
pub(super) fn run_oracle_equivalence_property(
    fixture: &GraphFixture,
    strategy: PropagationStrategy,
) -> TestCaseResult {
    let (graph, _) = run(fixture, strategy)?;
    let expected = bellman_ford(&fixture.positions, &fixture.edges, fixture.source);

    for (node, &oracle) in graph.nodes().iter().zip(&expected) {
        if !close(node.cost(), oracle) {
            return Err(TestCaseError::fail(format!(
                "{strategy}: node {} cost {} differs from oracle {oracle} (topology={:?})",
                node.index(),
                node.cost(),
                fixture.topology,
            )));
        }
        let has_predecessor = node.predecessor().is_some();
        let expects_predecessor = node.is_reached() && node.index() != fixture.source;
        if has_predecessor != expects_predecessor {
            return Err(TestCaseError::fail(format!(
                "{strategy}: node {} predecessor {:?} inconsistent with cost {}",
                node.index(),
                node.predecessor(),
                node.cost(),
            )));
        }
    }
    Ok(())
}

/// Observed updates strictly decrease and each node's last update is final.
pub(super) fn run_monotonicity_property(
    fixture: &GraphFixture,
    strategy: PropagationStrategy,
) -> TestCaseResult {
    let (graph, seen) = run(fixture, strategy)?;
    let mut last = vec![f64::INFINITY; graph.len()];
    for relaxation in &seen {
        if relaxation.cost >= relaxation.previous_cost {
            return Err(TestCaseError::fail(format!(
                "{strategy}: node {} moved from {} to {}",
                relaxation.node, relaxation.previous_cost, relaxation.cost,
            )));
        }
        if relaxation.previous_cost != last[relaxation.node] {
            return Err(TestCaseError::fail(format!(
                "{strategy}: node {} update skipped a reported cost",
                relaxation.node
            )));
        }
        last[relaxation.node] = relaxation.cost;
    }
    for node in graph.nodes() {
        if node.index() != fixture.source && last[node.index()] != node.cost() {
            return Err(TestCaseError::fail(format!(
                "{strategy}: node {} final cost {} was never reported",
                node.index(),
                node.cost()
            )));
        }
    }
    Ok(())
}

/// Reconstructed routes sum to the destination cost and end at the source.
pub(super) fn run_path_consistency_property(
    fixture: &GraphFixture,
    strategy: PropagationStrategy,
) -> TestCaseResult {
    let (graph, _) = run(fixture, strategy)?;
    for node in graph.nodes() {
        let route = reconstruct(&graph, fixture.source, node.index())
            .map_err(|err| TestCaseError::fail(format!("reconstruct failed: {err}")))?;
        match route {
            Route::Reachable(path) => {
                if path.nodes().last() != Some(&fixture.source) {
                    return Err(TestCaseError::fail(format!(
                        "route to {} ends at {:?}",
                        node.index(),
                        path.nodes().last()
                    )));
                }
                let walked: f64 = path.segments().iter().map(|segment| segment.length()).sum();
                if !close(walked, path.total_cost()) {
                    return Err(TestCaseError::fail(format!(
                        "route to {} walks {walked} but costs {}",
                        node.index(),
                        path.total_cost()
                    )));
                }
            }
            Route::Unreachable => {
                if node.is_reached() {
                    return Err(TestCaseError::fail(format!(
                        "reached node {} reported unreachable",
                        node.index()
                    )));
                }
            }
        }
    }
    Ok(())
}

/// Both strategies agree on every final cost.
pub(super) fn run_strategy_equivalence_property(fixture: &GraphFixture) -> TestCaseResult {
    let (dijkstra, _) = run(fixture, PropagationStrategy::Dijkstra)?;
    let (label_correcting, _) = run(fixture, PropagationStrategy::LabelCorrecting)?;
    for (left, right) in dijkstra.nodes().iter().zip(label_correcting.nodes()) {
        if !close(left.cost(), right.cost()) {
            return Err(TestCaseError::fail(format!(
                "node {}: dijkstra {} vs label-correcting {}",
                left.index(),
                left.cost(),
                right.cost()
            )));
        }
    }
    Ok(())
}

/// The selected pair is maximal, first in index order and stable.
pub(super) fn run_farthest_pair_property(fixture: &GraphFixture) -> TestCaseResult {
    let graph = build(fixture)?;
    let pair = select_extremes(graph.nodes())
        .map_err(|err| TestCaseError::fail(format!("selection failed: {err}")))?;

    let positions = &fixture.positions;
    for i in 0..positions.len() {
        for j in i + 1..positions.len() {
            let distance = euclidean_distance(positions[i], positions[j]);
            if distance > pair.distance {
                return Err(TestCaseError::fail(format!(
                    "pair ({i}, {j}) at {distance} beats selected {pair:?}"
                )));
            }
            if distance == pair.distance && (i, j) < (pair.source, pair.destination) {
                return Err(TestCaseError::fail(format!(
                    "tie ({i}, {j}) precedes selected {pair:?}"
                )));
            }
        }
    }
    let again = select_extremes(graph.nodes())
        .map_err(|err| TestCaseError::fail(format!("selection failed: {err}")))?;
    if again != pair {
        return Err(TestCaseError::fail(format!(
            "selection changed from {pair:?} to {again:?}"
        )));
    }
    Ok(())
}
