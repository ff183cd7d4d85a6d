use super::*;
use crate::solver::search::{CustomerRemoval, DestroyResult};
use alns::utils::compare_floats;

/// Removes customers related to each other by distance, ready time, demand and route.
#[derive(Default)]
pub struct ShawRemoval {
    extension: NeighbourExtension,
}

impl ShawRemoval {
    /// Creates a new instance of `ShawRemoval`.
    pub fn new(extension: NeighbourExtension) -> Self {
        Self { extension }
    }
}

impl CustomerRemoval for ShawRemoval {
    fn remove(&self, ctx: &SearchContext, solution: &Solution) -> DestroyResult {
        let instance = ctx.instance();
        let customers = solution.customers(instance).collect::<Vec<_>>();
        let count = get_removal_count(ctx, customers.len());

        if count == 0 {
            return DestroyResult::Customers { partial: solution.clone(), removed: vec![] };
        }

        let positions = get_customer_positions(instance, solution);
        let nodes = instance.nodes();
        let weights = &ctx.config.shaw_weights;

        let range = |value: &dyn Fn(NodeIdx) -> Float| {
            let (min, max) = customers
                .iter()
                .map(|&idx| value(idx))
                .fold((Float::MAX, Float::MIN), |(min, max), value| (min.min(value), max.max(value)));
            if max > min { max - min } else { 1. }
        };
        let time_range = range(&|idx| nodes[idx].ready_time);
        let demand_range = range(&|idx| nodes[idx].demand);
        let max_distance = instance.arcs().max_distance().max(Float::EPSILON);

        let relatedness = |a: NodeIdx, b: NodeIdx| {
            let same_route = positions.get(&a).map(|(route, _)| route) == positions.get(&b).map(|(route, _)| route);

            weights.distance * instance.distance(a, b) / max_distance
                + weights.time * (nodes[a].ready_time - nodes[b].ready_time).abs() / time_range
                + weights.demand * (nodes[a].demand - nodes[b].demand).abs() / demand_range
                + if same_route { 0. } else { weights.route }
        };

        let mut remaining = customers;
        let seed = remaining.remove(ctx.random.uniform_int(0, remaining.len() as i32 - 1) as usize);
        let mut selected = vec![seed];

        while selected.len() < count && !remaining.is_empty() {
            let reference = selected[ctx.random.uniform_int(0, selected.len() as i32 - 1) as usize];
            remaining.sort_by(|&a, &b| compare_floats(relatedness(reference, a), relatedness(reference, b)));

            let idx = get_ranked_index(remaining.len(), ctx.config.shaw_determinism, ctx.random);
            selected.push(remaining.remove(idx));
        }

        let removed = extend_with_neighbours(instance, solution, selected, count, self.extension);

        DestroyResult::Customers { partial: remove_customers(instance, solution, &removed), removed }
    }
}
