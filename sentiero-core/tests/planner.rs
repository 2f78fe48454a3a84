//! End-to-end tests for route planning over complete scenarios.

mod common;

use common::{FIXED_LONGER_COST, FIXED_SHORTEST_COST, TOLERANCE, scenario, two_components};
use rstest::rstest;
use sentiero_core::{
    Endpoints, NodeCost, NodeRole, PathView, PropagationStrategy, Route, RoutePlanner,
    RoutePlannerBuilder, Scenario, propagate, reconstruct, select_extremes,
};

fn planner(strategy: PropagationStrategy) -> RoutePlanner {
    RoutePlannerBuilder::new().with_strategy(strategy).build()
}

#[rstest]
#[case::dijkstra(PropagationStrategy::Dijkstra)]
#[case::label_correcting(PropagationStrategy::LabelCorrecting)]
fn fixed_scenario_takes_the_southern_route(#[case] strategy: PropagationStrategy) {
    let plan = planner(strategy)
        .plan(&Scenario::fixed())
        .expect("fixed scenario plans");

    assert_eq!((plan.source(), plan.destination()), (0, 5));
    let path = plan.route().path().expect("destination is reachable");
    assert_eq!(path.nodes(), &[5, 3, 2, 0]);
    assert_eq!(path.nodes().last(), Some(&0));
    assert!((path.total_cost() - FIXED_SHORTEST_COST).abs() < TOLERANCE);
    assert!(path.total_cost() < FIXED_LONGER_COST);

    let walked: f64 = path.segments().iter().map(|segment| segment.length()).sum();
    assert!((walked - path.total_cost()).abs() < 1e-9);
}

#[test]
fn fixed_scenario_frame_labels_every_node() {
    let frame = RoutePlanner::default()
        .plan(&Scenario::fixed())
        .expect("fixed scenario plans")
        .frame();

    let labels: Vec<String> = frame.nodes.iter().map(|node| node.cost.to_string()).collect();
    assert_eq!(labels, ["0", "391", "391", "695", "641", "1055"]);
    assert_eq!(frame.nodes[0].role, NodeRole::Source);
    assert_eq!(frame.nodes[5].role, NodeRole::Destination);
    assert_eq!(frame.edges.len(), 6);
    match frame.path {
        PathView::Route {
            segments,
            total_cost,
        } => {
            assert_eq!(segments.len(), 3);
            assert_eq!(segments[0].from, frame.nodes[5].position);
            assert_eq!(segments[2].to, frame.nodes[0].position);
            assert!((total_cost - FIXED_SHORTEST_COST).abs() < TOLERANCE);
        }
        PathView::NoRoute => panic!("fixed scenario is connected"),
    }
}

#[rstest]
#[case::dijkstra(PropagationStrategy::Dijkstra)]
#[case::label_correcting(PropagationStrategy::LabelCorrecting)]
fn separate_components_have_no_route(#[case] strategy: PropagationStrategy) {
    let plan = planner(strategy)
        .plan(&two_components())
        .expect("scenario is structurally valid");

    assert_eq!((plan.source(), plan.destination()), (0, 5));
    assert_eq!(plan.route(), &Route::Unreachable);

    let frame = plan.frame();
    assert_eq!(frame.path, PathView::NoRoute);
    for node in &frame.nodes[3..] {
        assert_eq!(node.cost, NodeCost::Unreached);
    }
    for node in &frame.nodes[..3] {
        assert!(matches!(node.cost, NodeCost::Reached(_)));
    }
}

#[test]
fn single_edge_selects_its_endpoints() {
    let scenario = scenario(&[(10.0, 10.0), (13.0, 14.0)], &[(0, 1)]);
    let mut graph = scenario.build_graph().expect("valid scenario");

    let pair = select_extremes(graph.nodes()).expect("two nodes");
    assert_eq!((pair.source, pair.destination), (0, 1));

    propagate(&mut graph, pair.source).expect("source exists");
    let route = reconstruct(&graph, pair.source, pair.destination).expect("valid endpoints");
    assert_eq!(route.total_cost(), Some(5.0));
    assert_eq!(route.path().map(|path| path.len()), Some(1));
}

#[test]
fn explicit_source_equal_to_destination_is_an_empty_route() {
    let plan = RoutePlannerBuilder::new()
        .with_endpoints(Endpoints::Explicit {
            source: 2,
            destination: 2,
        })
        .build()
        .plan(&Scenario::fixed())
        .expect("endpoints exist");
    let path = plan.route().path().expect("node reaches itself");
    assert!(path.is_empty());
    assert_eq!(path.total_cost(), 0.0);
    assert_eq!(plan.frame().nodes[2].role, NodeRole::Source);
}

#[test]
fn planning_twice_gives_identical_results() {
    let planner = RoutePlanner::default();
    let first = planner.plan(&Scenario::fixed()).expect("plans");
    let second = planner.plan(&Scenario::fixed()).expect("plans");
    assert_eq!(first.frame(), second.frame());
    assert_eq!(first.stats(), second.stats());
}

#[cfg(feature = "random")]
#[rstest]
#[case(3)]
#[case(17)]
#[case(2024)]
fn random_scenarios_plan_with_both_strategies(#[case] seed: u64) {
    use rand::{SeedableRng, rngs::SmallRng};
    use sentiero_core::RandomScenarioConfig;

    let mut rng = SmallRng::seed_from_u64(seed);
    let scenario = Scenario::random(&RandomScenarioConfig::default(), &mut rng);

    let dijkstra = planner(PropagationStrategy::Dijkstra)
        .plan(&scenario)
        .expect("random scenarios are valid");
    let label_correcting = planner(PropagationStrategy::LabelCorrecting)
        .plan(&scenario)
        .expect("random scenarios are valid");

    assert_eq!(dijkstra.source(), label_correcting.source());
    assert_eq!(dijkstra.destination(), label_correcting.destination());
    match (
        dijkstra.route().total_cost(),
        label_correcting.route().total_cost(),
    ) {
        (Some(left), Some(right)) => assert!((left - right).abs() < 1e-9),
        (None, None) => {}
        other => panic!("strategies disagree on reachability: {other:?}"),
    }
}
