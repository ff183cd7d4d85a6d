use super::*;
use crate::construction::RouteEvaluator;
use crate::construction::heuristics::NearestNeighborConstruction;
use crate::helpers::models::*;
use crate::helpers::utils::random::FakeRandom;
use crate::solver::search::{CustomerRemoval, DestroyResult, OperatorConfig, RouteRemoval};
use std::sync::Arc;

fn create_grid_solution(evaluator: &RouteEvaluator) -> Solution {
    with_context(evaluator, 0, |ctx| NearestNeighborConstruction.construct(ctx)).expect("cannot build solution")
}

fn create_removals() -> Vec<(&'static str, Arc<dyn CustomerRemoval + Send + Sync>)> {
    vec![
        ("random", Arc::new(RandomRemoval)),
        ("worst_distance", Arc::new(WorstDistanceRemoval)),
        ("worst_time", Arc::new(WorstTimeRemoval)),
        ("shaw", Arc::new(ShawRemoval::new(NeighbourExtension::None))),
        ("shaw_previous", Arc::new(ShawRemoval::new(NeighbourExtension::Previous))),
        ("shaw_next", Arc::new(ShawRemoval::new(NeighbourExtension::Next))),
        ("zone", Arc::new(ZoneRemoval::new(NeighbourExtension::None))),
        ("zone_previous", Arc::new(ZoneRemoval::new(NeighbourExtension::Previous))),
        ("zone_next", Arc::new(ZoneRemoval::new(NeighbourExtension::Next))),
    ]
}

#[test]
fn can_remove_customers_within_limits_with_every_removal() {
    let evaluator = create_grid_instance_builder().load_capacity(40.).build_evaluator();
    let instance = evaluator.instance();
    let solution = create_grid_solution(&evaluator);

    for (name, removal) in create_removals() {
        for seed in 0..20 {
            let result = with_context(&evaluator, seed, |ctx| removal.remove(ctx, &solution));
            let DestroyResult::Customers { partial, removed } = result else { panic!("{name}: unexpected result") };

            let mut served = partial.customers(instance).chain(removed.iter().copied()).collect::<Vec<_>>();
            served.sort();

            assert!((1..=3).contains(&removed.len()), "{name}: removed {}", removed.len());
            assert_eq!(served, instance.customers().to_vec(), "{name}: lost or duplicated customers");
            assert_eq!(partial.route_count(), solution.route_count(), "{name}: routes are removed");
            assert!(partial.routes().iter().all(|route| route.has_customers(instance) || route.is_empty_tour(instance)));
        }
    }
}

#[test]
fn can_get_removal_count_in_range() {
    let evaluator = create_grid_instance_builder().build_evaluator();

    (0..50).for_each(|seed| {
        with_context(&evaluator, seed, |ctx| {
            assert!((10..=30).contains(&get_removal_count(ctx, 100)));
            assert_eq!(get_removal_count(ctx, 1), 1);
            assert_eq!(get_removal_count(ctx, 0), 0);
        })
    });
}

#[test]
fn can_pick_ranked_items() {
    let random = FakeRandom::new(vec![], vec![0., 0.99, 0.5]);

    let picked = pick_ranked(vec![10, 11, 12, 13], 3, 1., &random);

    assert_eq!(picked, vec![10, 13, 12]);
}

parameterized_test! {can_extend_with_neighbours, (selected, count, extension, expected), {
    can_extend_with_neighbours_impl(selected, count, extension, expected);
}}

can_extend_with_neighbours! {
    case_01_none: (&["C2", "C3"], 1, NeighbourExtension::None, &["C2"]),
    case_02_previous: (&["C3", "C1"], 2, NeighbourExtension::Previous, &["C3", "C2"]),
    case_03_next: (&["C1", "C3"], 3, NeighbourExtension::Next, &["C1", "C2", "C3"]),
    case_04_skip_station: (&["C4", "C1"], 2, NeighbourExtension::Previous, &["C4", "C1"]),
    case_05_skip_depot: (&["C1", "C4"], 3, NeighbourExtension::Previous, &["C1", "C4"]),
}

fn can_extend_with_neighbours_impl(selected: &[&str], count: usize, extension: NeighbourExtension, expected: &[&str]) {
    let instance = TestInstanceBuilder::default()
        .station("S1", (5., 5.))
        .simple_customer("C1", (1., 0.))
        .simple_customer("C2", (2., 0.))
        .simple_customer("C3", (3., 0.))
        .simple_customer("C4", (4., 0.))
        .build();
    let solution = to_solution(&instance, &[&["D0", "C1", "C2", "C3", "D0_end"], &["D0", "S1", "C4", "D0_end"]]);

    let result = extend_with_neighbours(&instance, &solution, to_nodes(&instance, selected), count, extension);

    assert_eq!(result, to_nodes(&instance, expected));
}

#[test]
fn can_turn_routes_without_customers_into_empty_tours() {
    let instance = TestInstanceBuilder::default()
        .station("S1", (5., 5.))
        .simple_customer("C1", (1., 0.))
        .simple_customer("C2", (2., 0.))
        .build();
    let solution = to_solution(&instance, &[&["D0", "S1", "C1", "D0_end"], &["D0", "C2", "D0_end"]]);

    let partial = remove_customers(&instance, &solution, &to_nodes(&instance, &["C1"]));

    assert_eq!(partial.ids(&instance), vec![vec!["D0", "D0_end"], vec!["D0", "C2", "D0_end"]]);
}

fn create_triangle_evaluator() -> RouteEvaluator {
    TestInstanceBuilder::default()
        .simple_customer("C1", (10., 0.))
        .simple_customer("C2", (20., 0.))
        .simple_customer("C3", (15., 30.))
        .build_evaluator()
}

#[test]
fn can_remove_customer_with_longest_detour() {
    let evaluator = create_triangle_evaluator();
    let instance = evaluator.instance();
    let solution = to_solution(instance, &[&["D0", "C1", "C3", "C2", "D0_end"]]);
    let random = FakeRandom::new(vec![1], vec![0.]);
    let config = OperatorConfig::default();

    let result = WorstDistanceRemoval.remove(&SearchContext::new(&evaluator, &random, &config), &solution);

    assert_eq!(result.into_parts().1, to_nodes(instance, &["C3"]));
}

#[test]
fn can_remove_customer_served_latest() {
    let evaluator = create_triangle_evaluator();
    let instance = evaluator.instance();
    let solution = to_solution(instance, &[&["D0", "C1", "C2", "D0_end"], &["D0", "C3", "D0_end"]]);
    let random = FakeRandom::new(vec![1], vec![0.]);
    let config = OperatorConfig::default();

    let result = WorstTimeRemoval.remove(&SearchContext::new(&evaluator, &random, &config), &solution);

    assert_eq!(result.into_parts().1, to_nodes(instance, &["C3"]));
}

#[test]
fn can_remove_whole_routes() {
    let evaluator = create_grid_instance_builder().load_capacity(20.).build_evaluator();
    let instance = evaluator.instance();
    let solution = create_grid_solution(&evaluator);
    assert_eq!(solution.route_count(), 5);

    for seed in 0..20 {
        let result = with_context(&evaluator, seed, |ctx| RandomRouteRemoval.remove(ctx, &solution));
        let DestroyResult::Routes { remaining, evicted } = result else { panic!("unexpected result") };

        let removed_routes = solution.route_count() - remaining.route_count();
        assert!((1..=2).contains(&removed_routes));
        assert_eq!(evicted.len(), 2 * removed_routes);
        assert_eq!(remaining.customers(instance).count() + evicted.len(), instance.customers().len());
    }
}

#[test]
fn can_handle_solution_without_routes() {
    let evaluator = create_grid_instance_builder().build_evaluator();

    let result = with_context(&evaluator, 0, |ctx| RandomRouteRemoval.remove(ctx, &Solution::default()));

    assert_eq!(result, DestroyResult::Routes { remaining: Solution::default(), evicted: vec![] });
}
