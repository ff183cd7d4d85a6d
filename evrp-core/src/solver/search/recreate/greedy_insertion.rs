use super::*;
use crate::solver::search::CustomerInsertion;
use rand::seq::SliceRandom;

/// Inserts customers one by one, in random order, at their cheapest feasible position.
/// A customer without any position gets a new route.
#[derive(Default)]
pub struct GreedyInsertion;

impl CustomerInsertion for GreedyInsertion {
    fn insert(
        &self,
        ctx: &SearchContext,
        partial: Solution,
        removed: &[NodeIdx],
        removal_cost: &RemovalCostFn,
    ) -> Solution {
        let mut routes = partial.into_routes();
        let mut customers = removed.to_vec();
        customers.shuffle(&mut ctx.random.get_rng());

        for customer in customers {
            let best = find_best_route(
                routes
                    .iter()
                    .enumerate()
                    .filter_map(|(idx, route)| find_placement(ctx, route, customer, removal_cost).map(|p| (idx, p))),
            );

            match best {
                Some((idx, placement)) => routes[idx] = placement.route,
                None => routes.extend(open_route(ctx, customer)),
            }
        }

        Solution::new(routes)
    }
}
