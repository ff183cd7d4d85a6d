use super::*;
use crate::helpers::models::*;
use crate::helpers::utils::random::FakeRandom;
use crate::solver::operators::RouteRemovalKind;
use crate::solver::search::{DestroyResult, RandomRouteRemoval, RouteRemoval};
use alns::utils::Quota;
use std::sync::atomic::{AtomicUsize, Ordering};

fn create_test_config(iterations: usize) -> SolverConfig {
    SolverConfig {
        iterations,
        customer_segment: 20,
        station_segment: 40,
        route_period: 7,
        station_period: 10,
        route_cycles: 3,
        ..SolverConfig::default()
    }
}

fn create_solver(evaluator: RouteEvaluator, config: SolverConfig, seed: u64) -> Solver {
    Solver::new(Arc::new(evaluator), config, Arc::new(Environment::new_repeatable(seed))).expect("cannot create solver")
}

parameterized_test! {can_classify_candidate, (candidate, real, expected), {
    can_classify_candidate_impl(SolutionCost::new(candidate.0, candidate.1), real, expected);
}}

can_classify_candidate! {
    case_01_fewer_routes_than_best: ((1, 200.), 0.5, AcceptanceTier::NewBest),
    case_02_shorter_than_best: ((2, 90.), 0.5, AcceptanceTier::NewBest),
    case_03_shorter_than_current: ((2, 98.), 0.5, AcceptanceTier::Improved),
    case_04_longer_accepted: ((2, 105.), 0., AcceptanceTier::Annealed),
    case_05_longer_rejected: ((2, 105.), 0.99, AcceptanceTier::Rejected),
    case_06_more_routes: ((3, 50.), 0., AcceptanceTier::Rejected),
    case_07_same_cost: ((2, 100.), 0., AcceptanceTier::Rejected),
}

fn can_classify_candidate_impl(candidate: SolutionCost, real: Float, expected: AcceptanceTier) {
    let current = SolutionCost::new(2, 100.);
    let best = SolutionCost::new(2, 95.);
    let annealing = Annealing::new(10., 1.);
    let random = FakeRandom::new(vec![], vec![real]);

    let tier = classify_candidate(&candidate, &current, &best, &annealing, &random);

    assert_eq!(tier, expected);
}

#[test]
fn can_apply_tiers_to_search_state() {
    let instance = TestInstanceBuilder::default().simple_customer("C1", (10., 0.)).simple_customer("C2", (20., 0.)).build();
    let initial = to_solution(&instance, &[&["D0", "C1", "D0_end"], &["D0", "C2", "D0_end"]]);
    let candidate = to_solution(&instance, &[&["D0", "C1", "C2", "D0_end"]]);
    let (initial_cost, candidate_cost) = (SolutionCost::new(2, 60.), SolutionCost::new(1, 40.));
    let mut state = SearchState::new(initial.clone(), initial_cost);

    state.apply(AcceptanceTier::Rejected, candidate.clone(), candidate_cost);
    assert_eq!((state.current_cost, state.best_cost), (initial_cost, initial_cost));

    state.apply(AcceptanceTier::Annealed, candidate.clone(), candidate_cost);
    assert_eq!((&state.current, &state.best), (&candidate, &initial));

    state.apply(AcceptanceTier::NewBest, candidate.clone(), candidate_cost);
    assert_eq!((&state.current, &state.best), (&candidate, &candidate));
    assert_eq!(state.best_cost, candidate_cost);
}

#[test]
fn can_prune_empty_routes() {
    let evaluator = TestInstanceBuilder::default().simple_customer("C1", (10., 0.)).build_evaluator();
    let instance = evaluator.instance();
    let solution = to_solution(instance, &[&["D0", "D0_end"], &["D0", "C1", "D0_end"]]);
    let mut state = SearchState::new(solution, SolutionCost::new(2, 20.));

    state.prune_empty_routes(&evaluator);

    assert_eq!(state.best.ids(instance), vec![vec!["D0", "C1", "D0_end"]]);
    assert_eq!(state.current_cost, SolutionCost::new(1, 20.));
    assert_eq!(state.best_cost, SolutionCost::new(1, 20.));
}

parameterized_test! {can_merge_tiers, (left, right, expected), {
    assert_eq!(merge_tiers(left, right), expected);
}}

can_merge_tiers! {
    case_01: (AcceptanceTier::Rejected, AcceptanceTier::Rejected, AcceptanceTier::Rejected),
    case_02: (AcceptanceTier::Rejected, AcceptanceTier::Annealed, AcceptanceTier::Annealed),
    case_03: (AcceptanceTier::Improved, AcceptanceTier::Annealed, AcceptanceTier::Improved),
    case_04: (AcceptanceTier::Improved, AcceptanceTier::NewBest, AcceptanceTier::NewBest),
}

#[test]
fn can_solve_single_customer_problem() {
    let evaluator = TestInstanceBuilder::default().simple_customer("C1", (10., 0.)).build_evaluator();
    let instance = evaluator.shared_instance();
    let solver = create_solver(evaluator, SolverConfig { iterations: 1, ..SolverConfig::default() }, 0);

    let output = solver.solve().expect("cannot solve");

    assert_eq!(output.iterations, 1);
    assert_eq!(output.best_routes(&instance), vec![vec!["D0", "C1", "D0_end"]]);
    assert_eq!((output.best_route_count, output.initial_route_count), (1, 1));
    assert_eq!(output.best_distance, output.initial_distance);
    assert!((output.best_distance - 20.).abs() < 1E-9);
    assert!(output.metrics.is_none());
}

#[test]
fn can_improve_grid_solution_keeping_best_monotonic() {
    let evaluator = create_grid_instance_builder().load_capacity(40.).build_evaluator();
    let config = SolverConfig { track_best: Some(1), ..create_test_config(300) };
    let solver = create_solver(evaluator.clone(), config, 7);

    let output = solver.solve().expect("cannot solve");
    let metrics = output.metrics.expect("no metrics");

    assert_eq!(output.iterations, 300);
    assert_eq!(metrics.evolution.len(), 300);
    assert_eq!(metrics.outcomes.iter().sum::<usize>(), 300);
    assert!(evaluator.is_feasible_solution(&output.best_solution));
    assert!(
        metrics.evolution.windows(2).all(|pair| !pair[0].best.is_better_than(&pair[1].best)),
        "best cost should never get worse"
    );
    assert!(metrics.evolution.windows(2).all(|pair| pair[1].temperature <= pair[0].temperature));
    assert!(
        (output.best_route_count, output.best_distance) <= (output.initial_route_count, output.initial_distance + 1E-9)
    );
    assert_eq!(evaluator.total_distance(&output.best_solution), output.best_distance);
}

#[test]
fn can_solve_problem_which_needs_stations() {
    let evaluator = TestInstanceBuilder::default()
        .battery(60.)
        .station("S1", (50., 0.))
        .simple_customer("C1", (10., 0.))
        .simple_customer("C2", (70., 0.))
        .dummies(2)
        .build_evaluator();
    let solver = create_solver(evaluator.clone(), create_test_config(100), 3);

    let output = solver.solve().expect("cannot solve");

    assert!(evaluator.is_feasible_solution(&output.best_solution));
    assert!(output.best_solution.routes().iter().any(|route| route.nodes().iter().any(|&node| evaluator.instance().is_station(node))));
    assert!(output.best_distance <= output.initial_distance + 1E-9);
}

struct CountingRouteRemoval(Arc<AtomicUsize>);

impl RouteRemoval for CountingRouteRemoval {
    fn remove(&self, ctx: &SearchContext, solution: &Solution) -> DestroyResult {
        self.0.fetch_add(1, Ordering::Relaxed);
        RandomRouteRemoval.remove(ctx, solution)
    }
}

#[test]
fn can_run_route_removal_cycles_within_one_iteration() {
    let evaluator = create_grid_instance_builder().load_capacity(40.).build_evaluator();
    let calls = Arc::new(AtomicUsize::new(0));
    let registry = OperatorRegistry::default()
        .with_route_removal(RouteRemovalKind::Random, Arc::new(CountingRouteRemoval(calls.clone())));
    // route iterations: 7, 14, 21, 28; station iterations take precedence on 10, 20, 30
    let config = SolverConfig { track_best: Some(1), ..create_test_config(30) };

    let output = Builder::new(Arc::new(evaluator.clone()))
        .with_environment(Arc::new(Environment::new_repeatable(11)))
        .with_config(config)
        .with_registry(registry)
        .build()
        .and_then(|solver| solver.solve())
        .expect("cannot solve");
    let metrics = output.metrics.expect("no metrics");

    assert_eq!(calls.load(Ordering::Relaxed), 4 * 3);
    assert_eq!(output.iterations, 30);
    assert_eq!(metrics.evolution.len(), 30);
    assert_eq!(metrics.outcomes.iter().sum::<usize>(), 30);
    assert!(evaluator.is_feasible_solution(&output.best_solution));
}

struct ReachedQuota;

impl Quota for ReachedQuota {
    fn is_reached(&self) -> bool {
        true
    }
}

#[test]
fn can_stop_search_when_quota_is_reached() {
    let evaluator = create_grid_instance_builder().build_evaluator();
    let environment = Environment { quota: Some(Arc::new(ReachedQuota)), ..Environment::new_repeatable(0) };
    let solver = Solver::new(Arc::new(evaluator), create_test_config(100), Arc::new(environment)).expect("no solver");

    let output = solver.solve().expect("cannot solve");

    assert_eq!(output.iterations, 0);
    assert_eq!(output.best_distance, output.initial_distance);
}

#[test]
fn can_use_provided_initial_solution() {
    let evaluator = TestInstanceBuilder::default().simple_customer("C1", (10., 0.)).simple_customer("C2", (10., 5.)).build_evaluator();
    let instance = evaluator.shared_instance();
    let initial = to_solution(&instance, &[&["D0", "C1", "D0_end"], &["D0", "C2", "D0_end"]]);

    let output = Builder::new(Arc::new(evaluator))
        .with_environment(Arc::new(Environment::new_repeatable(0)))
        .with_config(create_test_config(50))
        .with_initial_solution(initial)
        .build()
        .and_then(|solver| solver.solve())
        .expect("cannot solve");

    assert_eq!(output.initial_route_count, 2);
    assert_eq!(output.best_route_count, 1);
    assert!((output.best_distance - (15. + (125. as Float).sqrt())).abs() < 1E-9);
}

#[test]
fn can_reject_infeasible_initial_solution() {
    let evaluator = TestInstanceBuilder::default().simple_customer("C1", (10., 0.)).simple_customer("C2", (-10., 0.)).build_evaluator();
    let instance = evaluator.shared_instance();
    let initial = to_solution(&instance, &[&["D0", "C1", "D0_end"]]);

    let result = Builder::new(Arc::new(evaluator))
        .with_environment(Arc::new(Environment::new_repeatable(0)))
        .with_initial_solution(initial)
        .build()
        .and_then(|solver| solver.solve());

    assert_eq!(result.err().map(|err| err.to_string()), Some("initial solution is not feasible".to_string()));
}

parameterized_test! {can_validate_config, (config, expected), {
    can_validate_config_impl(config, expected);
}}

can_validate_config! {
    case_01_zero_period: (SolverConfig { station_period: 0, ..SolverConfig::default() }, "station period should be positive"),
    case_02_reaction: (SolverConfig { reaction_factor: 1.5, ..SolverConfig::default() }, "reaction factor should be in [0, 1], got 1.5"),
    case_03_cooling: (SolverConfig { cooling_rate: 0., ..SolverConfig::default() }, "cooling rate should be in (0, 1], got 0"),
    case_04_log_best: (SolverConfig { log_best: Some(0), ..SolverConfig::default() }, "log and track frequencies should be positive"),
}

fn can_validate_config_impl(config: SolverConfig, expected: &str) {
    let evaluator = TestInstanceBuilder::default().simple_customer("C1", (10., 0.)).build_evaluator();

    let result = Builder::new(Arc::new(evaluator)).with_config(config).build();

    assert_eq!(result.err().map(|err| err.to_string()), Some(expected.to_string()));
}

#[test]
fn can_reject_incomplete_registry() {
    let evaluator = TestInstanceBuilder::default().simple_customer("C1", (10., 0.)).build_evaluator();

    let result = Builder::new(Arc::new(evaluator)).with_registry(OperatorRegistry::empty()).build();

    assert!(result.is_err());
}

#[test]
fn can_override_iterations() {
    let evaluator = TestInstanceBuilder::default().simple_customer("C1", (10., 0.)).build_evaluator();
    let environment = Arc::new(Environment::new_repeatable(0));

    let solver = Builder::new(Arc::new(evaluator))
        .with_environment(environment)
        .with_max_iterations(Some(42))
        .with_max_iterations(None)
        .build()
        .expect("no solver");

    assert_eq!(solver.config().iterations, 42);
}
