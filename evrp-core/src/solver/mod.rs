//! The solver module contains the adaptive large neighbourhood search: every iteration destroys
//! and repairs the current solution with adaptively chosen operators and decides whether the
//! candidate replaces the current and the best solutions.
//!
//! Iteration `i` runs one of three steps:
//!
//! - `i % NSR == 0`: station removal followed by station insertion into every route
//! - otherwise `i % NRR == 0`: `nRR` cycles of route removal and customer insertion
//! - otherwise: customer removal and customer insertion
//!
//! A feasible candidate is classified into a tier and the operators which produced it are rewarded
//! accordingly. Weights are recalibrated every `Nc` (customer operators) and `Ns` (station operators)
//! iterations. Empty routes are pruned after each iteration.

#[cfg(test)]
#[path = "../../tests/unit/solver/solver_test.rs"]
mod solver_test;

use crate::construction::RouteEvaluator;
use crate::construction::heuristics::NearestNeighborConstruction;
use crate::models::problem::Instance;
use crate::models::solution::{Solution, SolutionCost};
use crate::solver::search::{SearchContext, removal_cost};
use alns::acceptance::{AcceptanceTier, Annealing};
use alns::utils::{Environment, Float, GenericResult, Random, Timer};
use std::sync::Arc;

mod builder;
pub use self::builder::Builder;

mod config;
pub use self::config::SolverConfig;

pub mod operators;
use self::operators::{OperatorPools, OperatorRegistry};

pub mod search;

pub mod telemetry;
use self::telemetry::{Telemetry, TelemetryMetrics, TelemetryMode};

/// Keeps the current and the best known solutions with their costs.
#[derive(Clone, Debug)]
pub struct SearchState {
    /// Current solution.
    pub current: Solution,
    /// Cost of current solution.
    pub current_cost: SolutionCost,
    /// Best known solution.
    pub best: Solution,
    /// Cost of best known solution.
    pub best_cost: SolutionCost,
}

impl SearchState {
    /// Creates a new instance of `SearchState`.
    pub fn new(initial: Solution, cost: SolutionCost) -> Self {
        Self { current: initial.clone(), current_cost: cost, best: initial, best_cost: cost }
    }

    /// Replaces current (and best) solution depending on the acceptance tier.
    pub fn apply(&mut self, tier: AcceptanceTier, candidate: Solution, cost: SolutionCost) {
        match tier {
            AcceptanceTier::NewBest => {
                self.best = candidate.clone();
                self.best_cost = cost;
                self.current = candidate;
                self.current_cost = cost;
            }
            AcceptanceTier::Improved | AcceptanceTier::Annealed => {
                self.current = candidate;
                self.current_cost = cost;
            }
            AcceptanceTier::Rejected => {}
        }
    }

    /// Removes `[depot start, depot end]` routes from current and best solutions.
    pub fn prune_empty_routes(&mut self, evaluator: &RouteEvaluator) {
        let instance = evaluator.instance();

        if self.current.has_empty_routes(instance) {
            self.current = self.current.without_empty_routes(instance);
            self.current_cost = evaluator.cost(&self.current);
        }

        if self.best.has_empty_routes(instance) {
            self.best = self.best.without_empty_routes(instance);
            self.best_cost = evaluator.cost(&self.best);
        }
    }
}

/// Classifies a feasible candidate:
/// - new best: fewer routes than the best, or as many routes and shorter
/// - improved: as many routes as the current and shorter
/// - annealed: as many routes as the current, longer, and accepted by annealing
/// - rejected: anything else, including candidates with more routes than the current
pub fn classify_candidate(
    candidate: &SolutionCost,
    current: &SolutionCost,
    best: &SolutionCost,
    annealing: &Annealing,
    random: &dyn Random,
) -> AcceptanceTier {
    let same_routes = candidate.routes == current.routes;

    if candidate.is_better_than(best) {
        AcceptanceTier::NewBest
    } else if same_routes && candidate.distance < current.distance {
        AcceptanceTier::Improved
    } else if same_routes
        && candidate.distance > current.distance
        && annealing.accepts(candidate.distance - current.distance, random)
    {
        AcceptanceTier::Annealed
    } else {
        AcceptanceTier::Rejected
    }
}

/// Search results.
pub struct SolverOutput {
    /// The best found solution.
    pub best_solution: Solution,
    /// Total distance of the best solution.
    pub best_distance: Float,
    /// Amount of routes in the best solution.
    pub best_route_count: usize,
    /// Total distance of the initial solution.
    pub initial_distance: Float,
    /// Amount of routes in the initial solution.
    pub initial_route_count: usize,
    /// Search duration in seconds.
    pub duration: Float,
    /// Amount of completed iterations.
    pub iterations: usize,
    /// Collected metrics, if enabled.
    pub metrics: Option<TelemetryMetrics>,
}

impl SolverOutput {
    /// Returns best routes as lists of node ids.
    pub fn best_routes(&self, instance: &Instance) -> Vec<Vec<String>> {
        self.best_solution.ids(instance)
    }
}

/// Runs the adaptive large neighbourhood search. Use [`Builder`] for finer configuration.
pub struct Solver {
    evaluator: Arc<RouteEvaluator>,
    config: SolverConfig,
    environment: Arc<Environment>,
    registry: OperatorRegistry,
    initial: Option<Solution>,
}

impl Solver {
    /// Creates a solver with the full operator set.
    pub fn new(
        evaluator: Arc<RouteEvaluator>,
        config: SolverConfig,
        environment: Arc<Environment>,
    ) -> GenericResult<Self> {
        Builder::new(evaluator).with_config(config).with_environment(environment).build()
    }

    /// Returns solver config.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Runs the search. Fails when no feasible initial solution can be constructed.
    pub fn solve(&self) -> GenericResult<SolverOutput> {
        let evaluator = self.evaluator.as_ref();
        let config = &self.config;
        let ctx = SearchContext::new(evaluator, self.environment.random.as_ref(), &config.operators);
        let mut telemetry =
            Telemetry::new(TelemetryMode::new(self.environment.logger.clone(), config.log_best, config.track_best));
        let timer = Timer::start();

        let initial = match &self.initial {
            Some(initial) => initial.clone(),
            None => NearestNeighborConstruction.construct(&ctx)?,
        };

        if !evaluator.is_feasible_solution(&initial) {
            return Err("initial solution is not feasible".into());
        }

        let initial_cost = evaluator.cost(&initial);
        telemetry.on_initial(&initial_cost, timer.clone());

        let mut state = SearchState::new(initial, initial_cost);
        let mut annealing =
            Annealing::with_initial_cost(config.start_temperature_control, initial_cost.distance, config.cooling_rate);
        let mut pools = OperatorPools::new(&self.registry);
        let mut completed = 0;

        for iteration in 1..=config.iterations {
            if self.environment.is_quota_reached() {
                telemetry.log(format!("quota is reached, stopping after {completed} iterations").as_str());
                break;
            }

            let tier = if iteration % config.station_period == 0 {
                self.run_station_step(&ctx, &mut state, &mut pools, &annealing)
            } else if iteration % config.route_period == 0 {
                (0..config.route_cycles).fold(AcceptanceTier::Rejected, |outcome, _| {
                    merge_tiers(outcome, self.run_route_step(&ctx, &mut state, &mut pools, &annealing))
                })
            } else {
                self.run_customer_step(&ctx, &mut state, &mut pools, &annealing)
            };

            if iteration % config.customer_segment == 0 {
                pools.recalibrate_customer_pools(config.reaction_factor);
                telemetry.on_recalibration(iteration, pools.describe().as_slice());
            }

            if iteration % config.station_segment == 0 {
                pools.recalibrate_station_pools(config.reaction_factor);
            }

            annealing.cool();
            state.prune_empty_routes(evaluator);
            completed = iteration;

            telemetry.on_iteration(iteration, tier, &state.best_cost, &state.current_cost, annealing.temperature());
        }

        telemetry.on_result(&initial_cost, &state.best_cost);

        Ok(SolverOutput {
            best_distance: state.best_cost.distance,
            best_route_count: state.best_cost.routes,
            best_solution: state.best,
            initial_distance: initial_cost.distance,
            initial_route_count: initial_cost.routes,
            duration: timer.elapsed_secs_as_float(),
            iterations: completed,
            metrics: telemetry.take_metrics(),
        })
    }

    fn run_customer_step(
        &self,
        ctx: &SearchContext,
        state: &mut SearchState,
        pools: &mut OperatorPools,
        annealing: &Annealing,
    ) -> AcceptanceTier {
        let removal_kind = pools.customer_removal.select(ctx.random);
        let insertion_kind = pools.customer_insertion.select(ctx.random);

        let (Some(removal), Some(insertion)) =
            (self.registry.customer_removal(removal_kind), self.registry.customer_insertion(insertion_kind))
        else {
            return AcceptanceTier::Rejected;
        };

        let (partial, removed) = removal.remove(ctx, &state.current).into_parts();
        let candidate = insertion.insert(ctx, partial, removed.as_slice(), &removal_cost);

        let tier = self.accept(ctx, state, annealing, candidate);
        if let Some(reward) = self.config.rewards.reward(tier) {
            pools.customer_removal.reward(removal_kind, reward);
            pools.customer_insertion.reward(insertion_kind, reward);
        }

        tier
    }

    fn run_route_step(
        &self,
        ctx: &SearchContext,
        state: &mut SearchState,
        pools: &mut OperatorPools,
        annealing: &Annealing,
    ) -> AcceptanceTier {
        let removal_kind = pools.route_removal.select(ctx.random);
        let insertion_kind = pools.customer_insertion.select(ctx.random);

        let (Some(removal), Some(insertion)) =
            (self.registry.route_removal(removal_kind), self.registry.customer_insertion(insertion_kind))
        else {
            return AcceptanceTier::Rejected;
        };

        let (remaining, evicted) = removal.remove(ctx, &state.current).into_parts();
        let candidate = insertion.insert(ctx, remaining, evicted.as_slice(), &removal_cost);

        let tier = self.accept(ctx, state, annealing, candidate);
        if let Some(reward) = self.config.rewards.reward(tier) {
            pools.route_removal.reward(removal_kind, reward);
            pools.customer_insertion.reward(insertion_kind, reward);
        }

        tier
    }

    fn run_station_step(
        &self,
        ctx: &SearchContext,
        state: &mut SearchState,
        pools: &mut OperatorPools,
        annealing: &Annealing,
    ) -> AcceptanceTier {
        let removal_kind = pools.station_removal.select(ctx.random);
        let insertion_kind = pools.station_insertion.select(ctx.random);

        let (Some(removal), Some(insertion)) =
            (self.registry.station_removal(removal_kind), self.registry.station_insertion(insertion_kind))
        else {
            return AcceptanceTier::Rejected;
        };

        let routes = removal.remove(ctx, &state.current);
        let candidate = Solution::new(routes.into_iter().map(|route| insertion.insert(ctx, route)).collect());

        let tier = self.accept(ctx, state, annealing, candidate);
        if let Some(reward) = self.config.rewards.reward(tier) {
            pools.station_removal.reward(removal_kind, reward);
            pools.station_insertion.reward(insertion_kind, reward);
        }

        tier
    }

    fn accept(
        &self,
        ctx: &SearchContext,
        state: &mut SearchState,
        annealing: &Annealing,
        candidate: Solution,
    ) -> AcceptanceTier {
        if !ctx.evaluator.is_feasible_solution(&candidate) {
            return AcceptanceTier::Rejected;
        }

        let cost = ctx.evaluator.cost(&candidate);
        let tier = classify_candidate(&cost, &state.current_cost, &state.best_cost, annealing, ctx.random);
        state.apply(tier, candidate, cost);

        tier
    }
}

/// Returns the most rewarding of two tiers.
fn merge_tiers(left: AcceptanceTier, right: AcceptanceTier) -> AcceptanceTier {
    use AcceptanceTier::*;

    match (left, right) {
        (NewBest, _) | (_, NewBest) => NewBest,
        (Improved, _) | (_, Improved) => Improved,
        (Annealed, _) | (_, Annealed) => Annealed,
        _ => Rejected,
    }
}
