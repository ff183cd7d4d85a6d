use super::*;
use crate::solver::search::CustomerInsertion;
use alns::utils::Float;
use std::cmp::Ordering;

/// Inserts first the customer with the largest regret: the sum of cost differences between its
/// best route and each of its next `k - 1` best routes. Customers with fewer than `k` options
/// go first.
pub struct RegretInsertion {
    k: usize,
}

impl RegretInsertion {
    /// Creates a new instance of `RegretInsertion`.
    pub fn new(k: usize) -> Self {
        assert!(k > 1, "regret insertion needs at least two options");
        Self { k }
    }

    fn priority(&self, options: &[Option<Placement>]) -> (usize, Float, Float) {
        let mut costs = options.iter().flatten().map(|placement| placement.cost).collect::<Vec<_>>();
        costs.sort_by(|a, b| compare_floats(*a, *b));

        let best = costs.first().copied().unwrap_or(Float::MAX);
        let regret = costs.iter().take(self.k).skip(1).map(|cost| cost - best).sum();

        (costs.len().min(self.k), regret, best)
    }
}

impl CustomerInsertion for RegretInsertion {
    fn insert(
        &self,
        ctx: &SearchContext,
        partial: Solution,
        removed: &[NodeIdx],
        removal_cost: &RemovalCostFn,
    ) -> Solution {
        let mut routes = partial.into_routes();
        let mut pending = removed.to_vec();
        let mut options = pending
            .iter()
            .map(|&customer| routes.iter().map(|route| find_placement(ctx, route, customer, removal_cost)).collect())
            .collect::<Vec<Vec<_>>>();

        while !pending.is_empty() {
            let chosen = (0..pending.len())
                .map(|idx| (idx, self.priority(options[idx].as_slice())))
                .max_by(|(_, a), (_, b)| compare_priority(a, b))
                .map_or(0, |(idx, _)| idx);

            let customer = pending.remove(chosen);
            let best = find_best_route(
                options.remove(chosen).into_iter().enumerate().filter_map(|(idx, placement)| placement.map(|p| (idx, p))),
            );

            let changed = match best {
                Some((idx, placement)) => {
                    routes[idx] = placement.route;
                    Some(idx)
                }
                None => open_route(ctx, customer).map(|route| {
                    routes.push(route);
                    options.iter_mut().for_each(|route_options| route_options.push(None));
                    routes.len() - 1
                }),
            };

            if let Some(idx) = changed {
                pending.iter().zip(options.iter_mut()).for_each(|(&customer, route_options)| {
                    route_options[idx] = find_placement(ctx, &routes[idx], customer, removal_cost);
                });
            }
        }

        Solution::new(routes)
    }
}

/// Fewer options first, then larger regret, then cheaper best option.
fn compare_priority(a: &(usize, Float, Float), b: &(usize, Float, Float)) -> Ordering {
    b.0.cmp(&a.0).then_with(|| compare_floats(a.1, b.1)).then_with(|| compare_floats(b.2, a.2))
}
