#[cfg(test)]
#[path = "../../tests/unit/construction/evaluator_test.rs"]
mod evaluator_test;

use crate::models::common::{Distance, Energy, NodeIdx, Timestamp};
use crate::models::problem::Instance;
use crate::models::solution::{Solution, SolutionCost};
use alns::utils::{DefaultDistributionSampler, DistributionSampler, Float, GenericError, Random};
use rustc_hash::FxHashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

/// An error returned when per node values are requested from an infeasible route.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InfeasibleRoute {
    /// Route node ids.
    pub route: Vec<String>,
}

impl Display for InfeasibleRoute {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "route is not feasible: [{}]", self.route.join(", "))
    }
}

impl Error for InfeasibleRoute {}

impl From<InfeasibleRoute> for GenericError {
    fn from(error: InfeasibleRoute) -> Self {
        error.to_string().into()
    }
}

/// Specifies which dimensions the forward simulation enforces.
#[derive(Clone, Copy)]
struct SimulationMode {
    time: bool,
    energy: bool,
    recharge_time: bool,
}

const TIME_AND_ENERGY: SimulationMode = SimulationMode { time: true, energy: true, recharge_time: true };
const TIME_ONLY: SimulationMode = SimulationMode { time: true, energy: false, recharge_time: false };
const ENERGY_ONLY: SimulationMode = SimulationMode { time: false, energy: true, recharge_time: false };

/// A state of the vehicle at a route node.
#[derive(Clone, Copy, Debug)]
struct Visit {
    arrival: Timestamp,
    arrival_energy: Energy,
    departure_energy: Energy,
}

/// Checks routes against time windows, battery and load capacity and extracts per node
/// schedules. Keeps its own copy of travel times which can be perturbed and reset.
#[derive(Clone, Debug)]
pub struct RouteEvaluator {
    instance: Arc<Instance>,
    travel_times: Vec<Timestamp>,
}

impl RouteEvaluator {
    /// Creates a new instance of `RouteEvaluator`.
    pub fn new(instance: Arc<Instance>) -> Self {
        let travel_times = instance.arcs().travel_times().to_vec();
        Self { instance, travel_times }
    }

    /// Returns evaluated instance.
    pub fn instance(&self) -> &Instance {
        self.instance.as_ref()
    }

    /// Returns shared reference to evaluated instance.
    pub fn shared_instance(&self) -> Arc<Instance> {
        self.instance.clone()
    }

    /// Returns active (possibly perturbed) travel time between two nodes.
    pub fn travel_time(&self, from: NodeIdx, to: NodeIdx) -> Option<Timestamp> {
        self.instance.arcs().index(from, to).map(|idx| self.travel_times[idx])
    }

    /// Replaces active travel times with base times where every arc between distinct nodes gets,
    /// with given probability, a normal noise with deviation `scale * stdev(window spans)`.
    /// Noise which makes travel time non positive is discarded.
    pub fn perturb_times(&mut self, probability: Float, scale: Float, random: Arc<dyn Random + Send + Sync>) {
        let size = self.instance.size();
        let std_dev = scale * self.instance.window_stdev();
        let sampler = DefaultDistributionSampler::new(random.clone());

        self.travel_times = self
            .instance
            .arcs()
            .travel_times()
            .iter()
            .enumerate()
            .map(|(idx, &time)| {
                if idx / size == idx % size || !random.is_hit(probability) {
                    return time;
                }

                let perturbed = time + sampler.normal(0., std_dev);
                if perturbed > 0. { perturbed } else { time }
            })
            .collect();
    }

    /// Restores base travel times.
    pub fn reset_times(&mut self) {
        self.travel_times = self.instance.arcs().travel_times().to_vec();
    }

    /// Checks time windows and battery with full recharge (and recharge time) at stations.
    pub fn check_time_and_energy(&self, route: &[NodeIdx]) -> bool {
        self.is_well_formed(route) && self.simulate(route, TIME_AND_ENERGY, |_, _| {}).is_ok()
    }

    /// Checks time windows only: stations are passed through without any recharge time.
    pub fn check_time_only(&self, route: &[NodeIdx]) -> bool {
        self.is_well_formed(route) && self.simulate(route, TIME_ONLY, |_, _| {}).is_ok()
    }

    /// Checks battery only.
    pub fn check_energy_only(&self, route: &[NodeIdx]) -> bool {
        self.is_well_formed(route) && self.simulate(route, ENERGY_ONLY, |_, _| {}).is_ok()
    }

    /// Checks that total customer demand fits into the vehicle.
    pub fn check_capacity(&self, route: &[NodeIdx]) -> bool {
        self.route_load(route).is_some_and(|load| load <= self.instance.vehicle().load_capacity)
    }

    /// Checks time windows and battery of a route prefix which has not returned to the depot yet.
    pub fn check_partial(&self, prefix: &[NodeIdx]) -> bool {
        prefix.first().is_none_or(|&first| first == self.instance.depot_start())
            && self.simulate(prefix, TIME_AND_ENERGY, |_, _| {}).is_ok()
    }

    /// Returns index of the first arc where battery is depleted, ignoring time windows.
    pub fn first_energy_failure(&self, route: &[NodeIdx]) -> Option<usize> {
        self.simulate(route, ENERGY_ONLY, |_, _| {}).err()
    }

    /// Returns battery level when leaving each node of a route until the first energy failure.
    pub(crate) fn departure_energy_profile(&self, route: &[NodeIdx]) -> Vec<Energy> {
        let mut profile = Vec::with_capacity(route.len());
        let _ = self.simulate(route, ENERGY_ONLY, |_, visit| profile.push(visit.departure_energy));

        profile
    }

    /// Returns arrival time (after waiting for the ready time) at each node.
    pub fn extract_arrival_times(&self, route: &[NodeIdx]) -> Result<Vec<Timestamp>, InfeasibleRoute> {
        self.extract(route, |visit| visit.arrival)
    }

    /// Returns battery level on arrival at each node.
    pub fn extract_energy_levels(&self, route: &[NodeIdx]) -> Result<Vec<Energy>, InfeasibleRoute> {
        self.extract(route, |visit| visit.arrival_energy)
    }

    /// Returns battery level right after any station recharge at each node.
    pub fn extract_departure_energy_levels(&self, route: &[NodeIdx]) -> Result<Vec<Energy>, InfeasibleRoute> {
        self.extract(route, |visit| visit.departure_energy)
    }

    /// Returns route distance.
    pub fn route_distance(&self, route: &[NodeIdx]) -> Distance {
        route.windows(2).map(|arc| self.instance.distance(arc[0], arc[1])).sum()
    }

    /// Returns total distance of the solution.
    pub fn total_distance(&self, solution: &Solution) -> Distance {
        solution.routes().iter().map(|route| self.route_distance(route.nodes())).sum()
    }

    /// Returns lexicographic cost of the solution.
    pub fn cost(&self, solution: &Solution) -> SolutionCost {
        SolutionCost::new(solution.route_count(), self.total_distance(solution))
    }

    /// Checks a single complete route: its shape, visited node kinds, load and schedule.
    pub fn is_feasible_route(&self, route: &[NodeIdx]) -> bool {
        let interior_ok = route.len() >= 2
            && route[1..route.len() - 1]
                .iter()
                .all(|&idx| self.instance.is_customer(idx) || self.instance.is_station(idx));

        interior_ok && self.check_capacity(route) && self.check_time_and_energy(route)
    }

    /// Checks that every route is feasible and every customer is served exactly once.
    pub fn is_feasible_solution(&self, solution: &Solution) -> bool {
        if !solution.routes().iter().all(|route| self.is_feasible_route(route.nodes())) {
            return false;
        }

        let mut visits: FxHashMap<NodeIdx, usize> = FxHashMap::default();
        solution.customers(self.instance()).for_each(|customer| *visits.entry(customer).or_default() += 1);

        visits.len() == self.instance.customers().len() && visits.values().all(|&count| count == 1)
    }

    fn route_load(&self, route: &[NodeIdx]) -> Option<Float> {
        route.iter().try_fold(0., |load, &idx| self.instance.node(idx).map(|node| load + node.demand))
    }

    fn is_well_formed(&self, route: &[NodeIdx]) -> bool {
        match route {
            [] | [_] => true,
            [first, .., last] => *first == self.instance.depot_start() && *last == self.instance.depot_end(),
        }
    }

    fn extract<F>(&self, route: &[NodeIdx], map_fn: F) -> Result<Vec<Float>, InfeasibleRoute>
    where
        F: Fn(&Visit) -> Float,
    {
        if !self.check_time_and_energy(route) {
            return Err(InfeasibleRoute { route: route.iter().map(|&idx| self.instance.id(idx).to_string()).collect() });
        }

        let mut values = Vec::with_capacity(route.len());
        let _ = self.simulate(route, TIME_AND_ENERGY, |_, visit| values.push(map_fn(visit)));

        Ok(values)
    }

    /// Runs forward simulation along the route calling `on_visit` for every reached node.
    /// Returns index of the failed arc (or of the arc leading to an unknown node) as error.
    fn simulate<F>(&self, route: &[NodeIdx], mode: SimulationMode, mut on_visit: F) -> Result<(), usize>
    where
        F: FnMut(usize, &Visit),
    {
        let Some(&first) = route.first() else { return Ok(()) };

        let instance = self.instance.as_ref();
        let vehicle = instance.vehicle();
        let capacity = vehicle.battery_capacity;

        let mut node = instance.node(first).ok_or(0_usize)?;
        let mut time = node.ready_time;
        let mut energy = capacity;

        for (idx, arc) in route.windows(2).enumerate() {
            let (from, to) = (arc[0], arc[1]);
            let (arrival, arrival_energy) = (time, energy);

            if node.kind.is_station() {
                if mode.recharge_time && energy < capacity {
                    time += (capacity - energy) / vehicle.inverse_recharge_rate;
                }
                energy = capacity;
            } else {
                time += node.service_time;
            }

            on_visit(idx, &Visit { arrival, arrival_energy, departure_energy: energy });

            let next = instance.node(to).ok_or(idx)?;
            let (travel_time, net_energy) =
                self.travel_time(from, to).zip(instance.arcs().net_energy(from, to)).ok_or(idx)?;

            time += travel_time;
            energy -= net_energy;

            if mode.time && (!time.is_finite() || time > next.due_date) {
                return Err(idx);
            }

            if mode.energy && (energy.is_nan() || energy < 0.) {
                return Err(idx);
            }

            time = time.max(next.ready_time);
            node = next;
        }

        let departure_energy = if node.kind.is_station() { capacity } else { energy };
        on_visit(route.len() - 1, &Visit { arrival: time, arrival_energy: energy, departure_energy });

        Ok(())
    }
}
