//! Customer insertion operators.

#[cfg(test)]
#[path = "../../../../tests/unit/solver/search/recreate/recreate_test.rs"]
mod recreate_test;

use super::{GreedyStationInsertion, RemovalCostFn, SearchContext, StationInsertion};
use crate::models::common::{Distance, NodeIdx};
use crate::models::solution::{Route, Solution};
use alns::utils::compare_floats;

mod greedy_insertion;
pub use self::greedy_insertion::GreedyInsertion;

mod regret_insertion;
pub use self::regret_insertion::RegretInsertion;

/// A feasible route with a new customer and the cost of having it there.
#[derive(Clone, Debug)]
pub(crate) struct Placement {
    pub route: Route,
    pub cost: Distance,
}

/// Finds the cheapest feasible position of the customer in the route. Positions which violate
/// only the battery get a greedy station repair, a limited amount of times per route.
pub(crate) fn find_placement(
    ctx: &SearchContext,
    route: &Route,
    customer: NodeIdx,
    removal_cost: &RemovalCostFn,
) -> Option<Placement> {
    let instance = ctx.instance();
    let evaluator = ctx.evaluator;
    let nodes = route.nodes();

    if nodes.len() < 2 || !evaluator.check_capacity(route.inserted(1, customer).nodes()) {
        return None;
    }

    let mut positions = (1..nodes.len())
        .map(|position| (position, removal_cost(instance, nodes[position - 1], customer, nodes[position])))
        .collect::<Vec<_>>();
    positions.sort_by(|(_, a), (_, b)| compare_floats(*a, *b));

    let base_distance = route.distance(instance);
    let mut best: Option<Placement> = None;
    let mut repairs = 0;

    for (position, cost) in positions {
        // a repaired route is never cheaper than its plain insertion cost
        if best.as_ref().is_some_and(|best| cost >= best.cost) {
            break;
        }

        let candidate = route.inserted(position, customer);
        if evaluator.check_time_and_energy(candidate.nodes()) {
            best = Some(Placement { route: candidate, cost });
            break;
        }

        if repairs < ctx.config.repair_attempts && evaluator.check_time_only(candidate.nodes()) {
            repairs += 1;

            let repaired = GreedyStationInsertion.insert(ctx, candidate);
            if evaluator.check_time_and_energy(repaired.nodes()) {
                let cost = repaired.distance(instance) - base_distance;
                if best.as_ref().is_none_or(|best| cost < best.cost) {
                    best = Some(Placement { route: repaired, cost });
                }
            }
        }
    }

    best
}

/// Creates a new route for the customer, with stations if needed.
pub(crate) fn open_route(ctx: &SearchContext, customer: NodeIdx) -> Option<Route> {
    let evaluator = ctx.evaluator;
    let route = Route::with_visits(ctx.instance(), &[customer]);

    if !evaluator.check_capacity(route.nodes()) || !evaluator.check_time_only(route.nodes()) {
        return None;
    }

    if evaluator.check_time_and_energy(route.nodes()) {
        return Some(route);
    }

    Some(GreedyStationInsertion.insert(ctx, route)).filter(|route| evaluator.check_time_and_energy(route.nodes()))
}

/// Returns the cheapest placement among all routes with its route index.
pub(crate) fn find_best_route(placements: impl Iterator<Item = (usize, Placement)>) -> Option<(usize, Placement)> {
    placements.min_by(|(_, a), (_, b)| compare_floats(a.cost, b.cost))
}
