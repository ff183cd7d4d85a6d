use super::*;
use crate::solver::search::{CustomerRemoval, DestroyResult};
use rand::seq::SliceRandom;

/// Removes randomly chosen customers.
#[derive(Default)]
pub struct RandomRemoval;

impl CustomerRemoval for RandomRemoval {
    fn remove(&self, ctx: &SearchContext, solution: &Solution) -> DestroyResult {
        let instance = ctx.instance();
        let mut customers = solution.customers(instance).collect::<Vec<_>>();
        let count = get_removal_count(ctx, customers.len());

        customers.shuffle(&mut ctx.random.get_rng());
        customers.truncate(count);

        DestroyResult::Customers { partial: remove_customers(instance, solution, &customers), removed: customers }
    }
}
