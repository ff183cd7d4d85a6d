#[cfg(test)]
#[path = "../../../tests/unit/construction/heuristics/nearest_neighbor_test.rs"]
mod nearest_neighbor_test;

use crate::models::common::NodeIdx;
use crate::models::solution::{Route, Solution};
use crate::solver::search::{GreedyStationInsertion, SearchContext, StationInsertion};
use alns::utils::{GenericResult, compare_floats};

/// Builds routes one at a time by appending the nearest unserved customer which keeps the route
/// feasible, repairing energy with stations when needed. A new route is opened when nothing fits.
#[derive(Default)]
pub struct NearestNeighborConstruction;

impl NearestNeighborConstruction {
    /// Returns a feasible solution or an error when some customer cannot be served even by
    /// a dedicated route.
    pub fn construct(&self, ctx: &SearchContext) -> GenericResult<Solution> {
        let instance = ctx.instance();
        let mut unserved = instance.customers().to_vec();
        let mut routes = Vec::new();

        while !unserved.is_empty() {
            let mut route = Route::empty(instance);

            while let Some((customer, extended)) = self.find_next(ctx, &route, unserved.as_slice()) {
                unserved.retain(|&idx| idx != customer);
                route = extended;
            }

            if !route.has_customers(instance) {
                let ids = unserved.iter().map(|&idx| instance.id(idx)).collect::<Vec<_>>().join(", ");
                return Err(format!("cannot serve customers with a dedicated route: [{ids}]").into());
            }

            routes.push(route);
        }

        Ok(Solution::new(routes))
    }

    /// Returns the nearest unserved customer which can be appended to the route.
    fn find_next(&self, ctx: &SearchContext, route: &Route, unserved: &[NodeIdx]) -> Option<(NodeIdx, Route)> {
        let instance = ctx.instance();
        let evaluator = ctx.evaluator;
        let position = route.len() - 1;
        let last = route.nodes()[position - 1];

        let mut candidates = unserved.to_vec();
        candidates.sort_by(|&a, &b| compare_floats(instance.distance(last, a), instance.distance(last, b)));

        candidates.into_iter().find_map(|customer| {
            let extended = route.inserted(position, customer);

            if !evaluator.check_capacity(extended.nodes()) || !evaluator.check_time_only(extended.nodes()) {
                return None;
            }

            let extended = if evaluator.check_time_and_energy(extended.nodes()) {
                extended
            } else {
                GreedyStationInsertion.insert(ctx, extended)
            };

            evaluator.check_time_and_energy(extended.nodes()).then_some((customer, extended))
        })
    }
}
