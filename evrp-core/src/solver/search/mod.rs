//! The search module contains destroy (ruin) and repair (recreate) operators for customers,
//! routes and recharging stations.

#[cfg(test)]
#[path = "../../../tests/unit/solver/search/search_test.rs"]
mod search_test;

use crate::construction::RouteEvaluator;
use crate::models::common::{Distance, NodeIdx};
use crate::models::problem::Instance;
use crate::models::solution::{Route, Solution};
use alns::utils::{Float, Random};

mod recreate;
pub use self::recreate::*;

mod ruin;
pub use self::ruin::*;

mod stations;
pub use self::stations::*;

/// Estimates the marginal cost of having `node` between `prev` and `next`.
pub type RemovalCostFn = dyn Fn(&Instance, NodeIdx, NodeIdx, NodeIdx) -> Distance + Send + Sync;

/// Returns distance saved by removing `node` between `prev` and `next`. The same value is the
/// cost of inserting it there.
pub fn removal_cost(instance: &Instance, prev: NodeIdx, node: NodeIdx, next: NodeIdx) -> Distance {
    instance.distance(prev, node) + instance.distance(node, next) - instance.distance(prev, next)
}

/// Keeps everything an operator needs to produce a new solution.
pub struct SearchContext<'a> {
    /// Route evaluator.
    pub evaluator: &'a RouteEvaluator,
    /// Random source.
    pub random: &'a dyn Random,
    /// Operator parameters.
    pub config: &'a OperatorConfig,
}

impl<'a> SearchContext<'a> {
    /// Creates a new instance of `SearchContext`.
    pub fn new(evaluator: &'a RouteEvaluator, random: &'a dyn Random, config: &'a OperatorConfig) -> Self {
        Self { evaluator, random, config }
    }

    /// Returns instance.
    pub fn instance(&self) -> &Instance {
        self.evaluator.instance()
    }
}

/// Weights of Shaw relatedness terms.
#[derive(Clone, Debug, PartialEq)]
pub struct ShawWeights {
    /// Weight of normalized distance.
    pub distance: Float,
    /// Weight of normalized ready time difference.
    pub time: Float,
    /// Weight of normalized demand difference.
    pub demand: Float,
    /// Penalty for being in different routes.
    pub route: Float,
}

impl Default for ShawWeights {
    fn default() -> Self {
        Self { distance: 9., time: 3., demand: 2., route: 5. }
    }
}

/// Parameters shared by destroy and repair operators.
#[derive(Clone, Debug, PartialEq)]
pub struct OperatorConfig {
    /// Minimum share of customers removed by a customer removal.
    pub removal_min_ratio: Float,
    /// Maximum share of customers removed by a customer removal.
    pub removal_max_ratio: Float,
    /// Maximum share of routes removed by a route removal.
    pub route_removal_ratio: Float,
    /// Randomization exponent of worst removals: higher is more deterministic.
    pub worst_determinism: Float,
    /// Randomization exponent of Shaw removals.
    pub shaw_determinism: Float,
    /// Shaw relatedness weights.
    pub shaw_weights: ShawWeights,
    /// A range of zone width and height as share of the customer bounding box.
    pub zone_ratio: (Float, Float),
    /// How many energy infeasible positions per route are tried with station repair on insertion.
    pub repair_attempts: usize,
}

impl Default for OperatorConfig {
    fn default() -> Self {
        Self {
            removal_min_ratio: 0.1,
            removal_max_ratio: 0.3,
            route_removal_ratio: 0.3,
            worst_determinism: 3.,
            shaw_determinism: 6.,
            shaw_weights: ShawWeights::default(),
            zone_ratio: (0.2, 0.5),
            repair_attempts: 3,
        }
    }
}

/// A result of a destroy step.
#[derive(Clone, Debug, PartialEq)]
pub enum DestroyResult {
    /// Some customers were removed from their routes.
    Customers {
        /// A solution without removed customers. Emptied routes are kept as `[depot, depot end]`.
        partial: Solution,
        /// Removed customers.
        removed: Vec<NodeIdx>,
    },
    /// Whole routes were removed.
    Routes {
        /// A solution with the rest of the routes.
        remaining: Solution,
        /// Customers served by removed routes.
        evicted: Vec<NodeIdx>,
    },
}

impl DestroyResult {
    /// Returns partial solution and customers to be reinserted.
    pub fn into_parts(self) -> (Solution, Vec<NodeIdx>) {
        match self {
            DestroyResult::Customers { partial, removed } => (partial, removed),
            DestroyResult::Routes { remaining, evicted } => (remaining, evicted),
        }
    }
}

/// Removes customers from a solution.
pub trait CustomerRemoval {
    /// Returns a partial solution and removed customers.
    fn remove(&self, ctx: &SearchContext, solution: &Solution) -> DestroyResult;
}

/// Removes whole routes from a solution.
pub trait RouteRemoval {
    /// Returns remaining routes and evicted customers.
    fn remove(&self, ctx: &SearchContext, solution: &Solution) -> DestroyResult;
}

/// Inserts customers back into a partial solution.
pub trait CustomerInsertion {
    /// Returns a new solution. Customers which cannot be served anywhere are omitted, so
    /// such a solution is infeasible.
    fn insert(&self, ctx: &SearchContext, partial: Solution, removed: &[NodeIdx], removal_cost: &RemovalCostFn)
    -> Solution;
}

/// Removes station visits from a solution.
pub trait StationRemoval {
    /// Returns routes without some station visits. Routes may become energy infeasible.
    fn remove(&self, ctx: &SearchContext, solution: &Solution) -> Vec<Route>;
}

/// Inserts stations into a single route.
pub trait StationInsertion {
    /// Returns a route which is energy feasible when a repair was found.
    fn insert(&self, ctx: &SearchContext, route: Route) -> Route;
}
