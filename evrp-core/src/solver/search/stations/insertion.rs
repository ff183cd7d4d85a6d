use super::*;
use crate::models::common::Energy;

/// A station which can be inserted before the given position.
struct Candidate {
    position: usize,
    station: NodeIdx,
    detour: Float,
}

/// Inserts the cheapest reachable station at the latest position before the battery runs out.
#[derive(Default)]
pub struct GreedyStationInsertion;

impl StationInsertion for GreedyStationInsertion {
    fn insert(&self, ctx: &SearchContext, route: Route) -> Route {
        repair_route(ctx, route, |route, profile, failure| {
            (1..=failure + 1).rev().find_map(|position| find_station(ctx, route, profile, position, false))
        })
    }
}

/// Compares the latest reachable position with the one before it and takes the cheaper
/// detour. Candidates have to keep the route prefix within time windows.
#[derive(Default)]
pub struct ComparisonStationInsertion;

impl StationInsertion for ComparisonStationInsertion {
    fn insert(&self, ctx: &SearchContext, route: Route) -> Route {
        repair_route(ctx, route, |route, profile, failure| {
            let latest =
                (1..=failure + 1).rev().find_map(|position| find_station(ctx, route, profile, position, true))?;
            let previous = (latest.position > 1)
                .then(|| find_station(ctx, route, profile, latest.position - 1, true))
                .flatten();

            Some(previous.filter(|previous| previous.detour < latest.detour).unwrap_or(latest))
        })
    }
}

/// Tries every reachable position and station, taking the cheapest detour which keeps the
/// route prefix within time windows.
#[derive(Default)]
pub struct BestStationInsertion;

impl StationInsertion for BestStationInsertion {
    fn insert(&self, ctx: &SearchContext, route: Route) -> Route {
        repair_route(ctx, route, |route, profile, failure| {
            (1..=failure + 1)
                .filter_map(|position| find_station(ctx, route, profile, position, true))
                .min_by(|a, b| compare_floats(a.detour, b.detour))
        })
    }
}

/// Inserts stations until the route is energy feasible or no candidate is left. Each step
/// receives the route, its departure energy profile and the index of the first failed arc.
fn repair_route<F>(ctx: &SearchContext, route: Route, choose_fn: F) -> Route
where
    F: Fn(&Route, &[Energy], usize) -> Option<Candidate>,
{
    let mut route = route;

    for _ in 0..=route.len() {
        let Some(failure) = ctx.evaluator.first_energy_failure(route.nodes()) else { break };

        let profile = ctx.evaluator.departure_energy_profile(route.nodes());
        let Some(candidate) = choose_fn(&route, profile.as_slice(), failure) else { break };

        let station = get_station_replica(ctx.instance(), &route, candidate.station);
        route.insert(candidate.position, station);
    }

    route
}

/// Finds the cheapest station reachable from the node before `position`.
fn find_station(
    ctx: &SearchContext,
    route: &Route,
    profile: &[Energy],
    position: usize,
    check_time: bool,
) -> Option<Candidate> {
    let instance = ctx.instance();
    let nodes = route.nodes();
    let (prev, next) = (*nodes.get(position - 1)?, *nodes.get(position)?);
    let energy = *profile.get(position - 1)?;

    if instance.is_station(prev) {
        return None;
    }

    instance
        .original_stations()
        .iter()
        .copied()
        .filter(|&station| instance.distance(prev, station) > 0.)
        .filter(|&station| !(instance.is_station(next) && instance.distance(station, next) == 0.))
        .filter(|&station| instance.arcs().net_energy(prev, station).is_some_and(|net| energy - net >= 0.))
        .filter(|&station| {
            !check_time || {
                let mut prefix = nodes[..position].to_vec();
                prefix.push(station);
                ctx.evaluator.check_partial(prefix.as_slice())
            }
        })
        .map(|station| Candidate { position, station, detour: removal_cost(instance, prev, station, next) })
        .min_by(|a, b| compare_floats(a.detour, b.detour))
}
