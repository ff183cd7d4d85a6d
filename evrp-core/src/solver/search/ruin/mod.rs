//! Customer and route removal operators.

#[cfg(test)]
#[path = "../../../../tests/unit/solver/search/ruin/ruin_test.rs"]
mod ruin_test;

use super::SearchContext;
use crate::models::common::NodeIdx;
use crate::models::problem::Instance;
use crate::models::solution::{Route, Solution};
use alns::utils::{Float, Random};
use rustc_hash::{FxHashMap, FxHashSet};

mod random_removal;
pub use self::random_removal::RandomRemoval;

mod route_removal;
pub use self::route_removal::RandomRouteRemoval;

mod shaw_removal;
pub use self::shaw_removal::ShawRemoval;

mod worst_removal;
pub use self::worst_removal::{WorstDistanceRemoval, WorstTimeRemoval};

mod zone_removal;
pub use self::zone_removal::ZoneRemoval;

/// Specifies whether a removal also takes route neighbours of selected customers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NeighbourExtension {
    /// Only selected customers are removed.
    #[default]
    None,
    /// A customer visited right before each selected one is removed too.
    Previous,
    /// A customer visited right after each selected one is removed too.
    Next,
}

/// Returns how many customers to remove: uniform in `[min_ratio * n, max_ratio * n]`, at least one.
pub(crate) fn get_removal_count(ctx: &SearchContext, total: usize) -> usize {
    if total == 0 {
        return 0;
    }

    let min = ((ctx.config.removal_min_ratio * total as Float).round() as usize).clamp(1, total);
    let max = ((ctx.config.removal_max_ratio * total as Float).round() as usize).clamp(min, total);

    ctx.random.uniform_int(min as i32, max as i32) as usize
}

/// Returns served customers with their route index and position.
pub(crate) fn get_customer_positions(instance: &Instance, solution: &Solution) -> FxHashMap<NodeIdx, (usize, usize)> {
    solution
        .routes()
        .iter()
        .enumerate()
        .flat_map(|(route_idx, route)| {
            route
                .nodes()
                .iter()
                .enumerate()
                .filter(|(_, node)| instance.is_customer(**node))
                .map(move |(position, node)| (*node, (route_idx, position)))
        })
        .collect()
}

/// Takes items from a list sorted by preference: each pick is at `floor(y^p * len)` for uniform `y`.
pub(crate) fn pick_ranked(
    ranked: Vec<NodeIdx>,
    count: usize,
    determinism: Float,
    random: &dyn Random,
) -> Vec<NodeIdx> {
    let mut ranked = ranked;
    let mut picked = Vec::with_capacity(count);

    while picked.len() < count && !ranked.is_empty() {
        let idx = get_ranked_index(ranked.len(), determinism, random);
        picked.push(ranked.remove(idx));
    }

    picked
}

/// Returns an index in a non empty ranked list of given length, skewed towards its head.
pub(crate) fn get_ranked_index(len: usize, determinism: Float, random: &dyn Random) -> usize {
    let y = random.uniform_real(0., 1.);
    ((y.powf(determinism) * len as Float) as usize).min(len - 1)
}

/// Extends selected customers with their route neighbours keeping the total amount.
pub(crate) fn extend_with_neighbours(
    instance: &Instance,
    solution: &Solution,
    selected: Vec<NodeIdx>,
    count: usize,
    extension: NeighbourExtension,
) -> Vec<NodeIdx> {
    let offset: isize = match extension {
        NeighbourExtension::None => return selected.into_iter().take(count).collect(),
        NeighbourExtension::Previous => -1,
        NeighbourExtension::Next => 1,
    };

    let positions = get_customer_positions(instance, solution);
    let mut seen = FxHashSet::default();
    let mut result = Vec::with_capacity(count);

    for customer in selected {
        let neighbour = positions.get(&customer).and_then(|&(route_idx, position)| {
            let nodes = solution.routes()[route_idx].nodes();
            position.checked_add_signed(offset).and_then(|idx| nodes.get(idx)).copied()
        });

        for node in std::iter::once(customer).chain(neighbour.filter(|&node| instance.is_customer(node))) {
            if result.len() < count && seen.insert(node) {
                result.push(node);
            }
        }

        if result.len() >= count {
            break;
        }
    }

    result
}

/// Returns a solution without given customers. Routes left without customers become empty tours.
pub(crate) fn remove_customers(instance: &Instance, solution: &Solution, customers: &[NodeIdx]) -> Solution {
    let customers = customers.iter().copied().collect::<FxHashSet<_>>();

    solution
        .routes()
        .iter()
        .map(|route| {
            let mut route = route.clone();
            route.retain(|node| !customers.contains(node));

            if route.has_customers(instance) { route } else { Route::empty(instance) }
        })
        .collect::<Vec<_>>()
        .into()
}
