use super::*;
use crate::solver::search::{CustomerRemoval, DestroyResult, removal_cost};
use alns::utils::compare_floats;

/// Removes customers whose visit adds the longest detour. The choice is randomized towards
/// the top of the list.
#[derive(Default)]
pub struct WorstDistanceRemoval;

impl CustomerRemoval for WorstDistanceRemoval {
    fn remove(&self, ctx: &SearchContext, solution: &Solution) -> DestroyResult {
        let instance = ctx.instance();

        let scores = solution
            .routes()
            .iter()
            .flat_map(|route| {
                route.nodes().windows(3).filter(|window| instance.is_customer(window[1])).map(|window| {
                    (window[1], removal_cost(instance, window[0], window[1], window[2]))
                })
            })
            .collect::<Vec<_>>();

        remove_worst(ctx, solution, scores)
    }
}

/// Removes customers served latest within their time windows.
#[derive(Default)]
pub struct WorstTimeRemoval;

impl CustomerRemoval for WorstTimeRemoval {
    fn remove(&self, ctx: &SearchContext, solution: &Solution) -> DestroyResult {
        let instance = ctx.instance();

        let scores = solution
            .routes()
            .iter()
            .flat_map(|route| {
                let arrivals = ctx.evaluator.extract_arrival_times(route.nodes()).unwrap_or_default();

                route
                    .nodes()
                    .iter()
                    .zip(arrivals)
                    .filter(|(node, _)| instance.is_customer(**node))
                    .filter_map(|(&node, arrival)| instance.node(node).map(|data| (node, arrival - data.ready_time)))
                    .collect::<Vec<_>>()
            })
            .collect::<Vec<_>>();

        remove_worst(ctx, solution, scores)
    }
}

fn remove_worst(ctx: &SearchContext, solution: &Solution, scores: Vec<(NodeIdx, Float)>) -> DestroyResult {
    let instance = ctx.instance();
    let count = get_removal_count(ctx, solution.customers(instance).count());

    let mut scores = scores;
    scores.sort_by(|(_, a), (_, b)| compare_floats(*b, *a));

    let ranked = scores.into_iter().map(|(node, _)| node).collect();
    let removed = pick_ranked(ranked, count, ctx.config.worst_determinism, ctx.random);

    DestroyResult::Customers { partial: remove_customers(instance, solution, &removed), removed }
}
