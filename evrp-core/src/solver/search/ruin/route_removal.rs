use super::*;
use crate::solver::search::{DestroyResult, RouteRemoval};
use rand::seq::SliceRandom;

/// Removes randomly chosen routes with all their customers.
#[derive(Default)]
pub struct RandomRouteRemoval;

impl RouteRemoval for RandomRouteRemoval {
    fn remove(&self, ctx: &SearchContext, solution: &Solution) -> DestroyResult {
        let instance = ctx.instance();
        let total = solution.route_count();

        if total == 0 {
            return DestroyResult::Routes { remaining: solution.clone(), evicted: vec![] };
        }

        let max = ((ctx.config.route_removal_ratio * total as Float).round() as usize).clamp(1, total);
        let count = ctx.random.uniform_int(1, max as i32) as usize;

        let mut indices = (0..total).collect::<Vec<_>>();
        indices.shuffle(&mut ctx.random.get_rng());
        let removed = indices.into_iter().take(count).collect::<FxHashSet<_>>();

        let (evicted, remaining): (Vec<_>, Vec<_>) =
            solution.routes().iter().enumerate().partition(|(idx, _)| removed.contains(idx));

        DestroyResult::Routes {
            remaining: remaining.into_iter().map(|(_, route)| route.clone()).collect::<Vec<_>>().into(),
            evicted: evicted.into_iter().flat_map(|(_, route)| route.customers(instance)).collect(),
        }
    }
}
