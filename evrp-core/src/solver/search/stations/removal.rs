use super::*;
use rand::seq::SliceRandom;

/// A station visit: route index and position.
type StationVisit = (usize, usize);

/// Removes randomly chosen station visits.
#[derive(Default)]
pub struct RandomStationRemoval;

impl StationRemoval for RandomStationRemoval {
    fn remove(&self, ctx: &SearchContext, solution: &Solution) -> Vec<Route> {
        let mut visits = get_station_visits(ctx.instance(), solution);
        visits.shuffle(&mut ctx.random.get_rng());

        remove_top(ctx, solution, visits)
    }
}

/// Removes station visits which add the longest detours.
#[derive(Default)]
pub struct WorstDistanceStationRemoval;

impl StationRemoval for WorstDistanceStationRemoval {
    fn remove(&self, ctx: &SearchContext, solution: &Solution) -> Vec<Route> {
        let instance = ctx.instance();
        let visits = rank_visits(solution, get_station_visits(instance, solution), |_, route, position| {
            let nodes = route.nodes();
            removal_cost(instance, nodes[position - 1], nodes[position], nodes[position + 1])
        });

        remove_top(ctx, solution, visits)
    }
}

/// Removes station visits where the vehicle arrives with the most energy left.
#[derive(Default)]
pub struct WorstChargeStationRemoval;

impl StationRemoval for WorstChargeStationRemoval {
    fn remove(&self, ctx: &SearchContext, solution: &Solution) -> Vec<Route> {
        let levels = solution
            .routes()
            .iter()
            .map(|route| ctx.evaluator.extract_energy_levels(route.nodes()).unwrap_or_default())
            .collect::<Vec<_>>();

        let visits = rank_visits(solution, get_station_visits(ctx.instance(), solution), |route_idx, _, position| {
            levels[route_idx].get(position).copied().unwrap_or(Float::MIN)
        });

        remove_top(ctx, solution, visits)
    }
}

/// Removes all station visits.
#[derive(Default)]
pub struct FullStationRemoval;

impl StationRemoval for FullStationRemoval {
    fn remove(&self, ctx: &SearchContext, solution: &Solution) -> Vec<Route> {
        remove_visits(solution, &get_station_visits(ctx.instance(), solution))
    }
}

fn get_station_visits(instance: &Instance, solution: &Solution) -> Vec<StationVisit> {
    solution
        .routes()
        .iter()
        .enumerate()
        .flat_map(|(route_idx, route)| {
            let last = route.len().saturating_sub(1);
            route
                .nodes()
                .iter()
                .enumerate()
                .filter(move |(position, node)| *position > 0 && *position < last && instance.is_station(**node))
                .map(move |(position, _)| (route_idx, position))
        })
        .collect()
}

/// Sorts visits by descending score.
fn rank_visits<F>(solution: &Solution, visits: Vec<StationVisit>, score_fn: F) -> Vec<StationVisit>
where
    F: Fn(usize, &Route, usize) -> Float,
{
    let mut scored = visits
        .into_iter()
        .map(|(route_idx, position)| {
            let score = score_fn(route_idx, &solution.routes()[route_idx], position);
            ((route_idx, position), score)
        })
        .collect::<Vec<_>>();
    scored.sort_by(|(_, a), (_, b)| compare_floats(*b, *a));

    scored.into_iter().map(|(visit, _)| visit).collect()
}

/// Removes a random amount of visits from the head of the list.
fn remove_top(ctx: &SearchContext, solution: &Solution, visits: Vec<StationVisit>) -> Vec<Route> {
    if visits.is_empty() {
        return solution.routes().to_vec();
    }

    let count = ctx.random.uniform_int(1, visits.len() as i32) as usize;

    remove_visits(solution, &visits[..count])
}

fn remove_visits(solution: &Solution, visits: &[StationVisit]) -> Vec<Route> {
    solution
        .routes()
        .iter()
        .enumerate()
        .map(|(route_idx, route)| {
            let nodes = route
                .nodes()
                .iter()
                .enumerate()
                .filter(|(position, _)| !visits.contains(&(route_idx, *position)))
                .map(|(_, node)| *node)
                .collect();
            Route::new(nodes)
        })
        .collect()
}
