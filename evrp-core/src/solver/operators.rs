//! Operator identities, their implementations and the adaptive pools to choose from them.

#[cfg(test)]
#[path = "../../tests/unit/solver/operators_test.rs"]
mod operators_test;

use crate::solver::search::*;
use alns::selection::AdaptivePool;
use alns::utils::Float;
use std::sync::Arc;

/// Customer removal operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CustomerRemovalKind {
    /// Random customers.
    Random,
    /// Customers with the longest detours.
    WorstDistance,
    /// Customers served latest within their time windows.
    WorstTime,
    /// Related customers.
    Shaw,
    /// Related customers with their route predecessors.
    ShawPrevious,
    /// Related customers with their route successors.
    ShawNext,
    /// Customers in a random zone.
    Zone,
    /// Customers in a random zone with their route predecessors.
    ZonePrevious,
    /// Customers in a random zone with their route successors.
    ZoneNext,
}

/// Route removal operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RouteRemovalKind {
    /// Random routes.
    Random,
}

/// Customer insertion operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CustomerInsertionKind {
    /// Cheapest position, one customer at a time.
    Greedy,
    /// Regret with two options.
    Regret2,
    /// Regret with three options.
    Regret3,
}

/// Station removal operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StationRemovalKind {
    /// Random station visits.
    Random,
    /// Station visits with the longest detours.
    WorstDistance,
    /// Station visits reached with the most energy left.
    WorstCharge,
    /// All station visits.
    Full,
}

/// Station insertion operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StationInsertionKind {
    /// The latest reachable position.
    Greedy,
    /// The cheaper of the two latest reachable positions.
    GreedyComparison,
    /// The cheapest reachable position.
    Best,
}

type Registered<K, T> = Vec<(K, Arc<T>)>;

/// Keeps operator implementations by their identities. Only registered operators take part in
/// the search.
#[derive(Clone)]
pub struct OperatorRegistry {
    customer_removals: Registered<CustomerRemovalKind, dyn CustomerRemoval + Send + Sync>,
    route_removals: Registered<RouteRemovalKind, dyn RouteRemoval + Send + Sync>,
    customer_insertions: Registered<CustomerInsertionKind, dyn CustomerInsertion + Send + Sync>,
    station_removals: Registered<StationRemovalKind, dyn StationRemoval + Send + Sync>,
    station_insertions: Registered<StationInsertionKind, dyn StationInsertion + Send + Sync>,
}

impl Default for OperatorRegistry {
    fn default() -> Self {
        use CustomerRemovalKind as CR;
        use NeighbourExtension as NE;

        Self::empty()
            .with_customer_removal(CR::Random, Arc::new(RandomRemoval))
            .with_customer_removal(CR::WorstDistance, Arc::new(WorstDistanceRemoval))
            .with_customer_removal(CR::WorstTime, Arc::new(WorstTimeRemoval))
            .with_customer_removal(CR::Shaw, Arc::new(ShawRemoval::new(NE::None)))
            .with_customer_removal(CR::ShawPrevious, Arc::new(ShawRemoval::new(NE::Previous)))
            .with_customer_removal(CR::ShawNext, Arc::new(ShawRemoval::new(NE::Next)))
            .with_customer_removal(CR::Zone, Arc::new(ZoneRemoval::new(NE::None)))
            .with_customer_removal(CR::ZonePrevious, Arc::new(ZoneRemoval::new(NE::Previous)))
            .with_customer_removal(CR::ZoneNext, Arc::new(ZoneRemoval::new(NE::Next)))
            .with_route_removal(RouteRemovalKind::Random, Arc::new(RandomRouteRemoval))
            .with_customer_insertion(CustomerInsertionKind::Greedy, Arc::new(GreedyInsertion))
            .with_customer_insertion(CustomerInsertionKind::Regret2, Arc::new(RegretInsertion::new(2)))
            .with_customer_insertion(CustomerInsertionKind::Regret3, Arc::new(RegretInsertion::new(3)))
            .with_station_removal(StationRemovalKind::Random, Arc::new(RandomStationRemoval))
            .with_station_removal(StationRemovalKind::WorstDistance, Arc::new(WorstDistanceStationRemoval))
            .with_station_removal(StationRemovalKind::WorstCharge, Arc::new(WorstChargeStationRemoval))
            .with_station_removal(StationRemovalKind::Full, Arc::new(FullStationRemoval))
            .with_station_insertion(StationInsertionKind::Greedy, Arc::new(GreedyStationInsertion))
            .with_station_insertion(StationInsertionKind::GreedyComparison, Arc::new(ComparisonStationInsertion))
            .with_station_insertion(StationInsertionKind::Best, Arc::new(BestStationInsertion))
    }
}

impl OperatorRegistry {
    /// Creates a registry without any operators.
    pub fn empty() -> Self {
        Self {
            customer_removals: vec![],
            route_removals: vec![],
            customer_insertions: vec![],
            station_removals: vec![],
            station_insertions: vec![],
        }
    }

    /// Registers or replaces a customer removal.
    pub fn with_customer_removal(
        mut self,
        kind: CustomerRemovalKind,
        operator: Arc<dyn CustomerRemoval + Send + Sync>,
    ) -> Self {
        register(&mut self.customer_removals, kind, operator);
        self
    }

    /// Registers or replaces a route removal.
    pub fn with_route_removal(mut self, kind: RouteRemovalKind, operator: Arc<dyn RouteRemoval + Send + Sync>) -> Self {
        register(&mut self.route_removals, kind, operator);
        self
    }

    /// Registers or replaces a customer insertion.
    pub fn with_customer_insertion(
        mut self,
        kind: CustomerInsertionKind,
        operator: Arc<dyn CustomerInsertion + Send + Sync>,
    ) -> Self {
        register(&mut self.customer_insertions, kind, operator);
        self
    }

    /// Registers or replaces a station removal.
    pub fn with_station_removal(
        mut self,
        kind: StationRemovalKind,
        operator: Arc<dyn StationRemoval + Send + Sync>,
    ) -> Self {
        register(&mut self.station_removals, kind, operator);
        self
    }

    /// Registers or replaces a station insertion.
    pub fn with_station_insertion(
        mut self,
        kind: StationInsertionKind,
        operator: Arc<dyn StationInsertion + Send + Sync>,
    ) -> Self {
        register(&mut self.station_insertions, kind, operator);
        self
    }

    /// Returns customer removal by its kind.
    pub fn customer_removal(&self, kind: CustomerRemovalKind) -> Option<&(dyn CustomerRemoval + Send + Sync)> {
        lookup(&self.customer_removals, kind)
    }

    /// Returns route removal by its kind.
    pub fn route_removal(&self, kind: RouteRemovalKind) -> Option<&(dyn RouteRemoval + Send + Sync)> {
        lookup(&self.route_removals, kind)
    }

    /// Returns customer insertion by its kind.
    pub fn customer_insertion(&self, kind: CustomerInsertionKind) -> Option<&(dyn CustomerInsertion + Send + Sync)> {
        lookup(&self.customer_insertions, kind)
    }

    /// Returns station removal by its kind.
    pub fn station_removal(&self, kind: StationRemovalKind) -> Option<&(dyn StationRemoval + Send + Sync)> {
        lookup(&self.station_removals, kind)
    }

    /// Returns station insertion by its kind.
    pub fn station_insertion(&self, kind: StationInsertionKind) -> Option<&(dyn StationInsertion + Send + Sync)> {
        lookup(&self.station_insertions, kind)
    }

    /// Returns true if every operator family has at least one operator.
    pub fn is_complete(&self) -> bool {
        !(self.customer_removals.is_empty()
            || self.route_removals.is_empty()
            || self.customer_insertions.is_empty()
            || self.station_removals.is_empty()
            || self.station_insertions.is_empty())
    }
}

fn register<K: PartialEq, T: ?Sized>(registered: &mut Registered<K, T>, kind: K, operator: Arc<T>) {
    match registered.iter_mut().find(|(key, _)| *key == kind) {
        Some((_, existing)) => *existing = operator,
        None => registered.push((kind, operator)),
    }
}

fn lookup<K: PartialEq, T: ?Sized>(registered: &Registered<K, T>, kind: K) -> Option<&T> {
    registered.iter().find(|(key, _)| *key == kind).map(|(_, operator)| operator.as_ref())
}

/// Five adaptive pools: customer removal, route removal and customer insertion are
/// recalibrated together, station removal and insertion have their own segment.
pub struct OperatorPools {
    /// Customer removal pool.
    pub customer_removal: AdaptivePool<CustomerRemovalKind>,
    /// Route removal pool.
    pub route_removal: AdaptivePool<RouteRemovalKind>,
    /// Customer insertion pool.
    pub customer_insertion: AdaptivePool<CustomerInsertionKind>,
    /// Station removal pool.
    pub station_removal: AdaptivePool<StationRemovalKind>,
    /// Station insertion pool.
    pub station_insertion: AdaptivePool<StationInsertionKind>,
}

impl OperatorPools {
    /// Creates pools with unit weights for all registered operators.
    pub fn new(registry: &OperatorRegistry) -> Self {
        fn keys<K: Copy, T: ?Sized>(registered: &Registered<K, T>) -> Vec<K> {
            registered.iter().map(|(key, _)| *key).collect()
        }

        Self {
            customer_removal: AdaptivePool::new("customer removal", keys(&registry.customer_removals)),
            route_removal: AdaptivePool::new("route removal", keys(&registry.route_removals)),
            customer_insertion: AdaptivePool::new("customer insertion", keys(&registry.customer_insertions)),
            station_removal: AdaptivePool::new("station removal", keys(&registry.station_removals)),
            station_insertion: AdaptivePool::new("station insertion", keys(&registry.station_insertions)),
        }
    }

    /// Recalibrates customer removal, route removal and customer insertion pools.
    pub fn recalibrate_customer_pools(&mut self, reaction_factor: Float) {
        self.customer_removal.recalibrate(reaction_factor);
        self.route_removal.recalibrate(reaction_factor);
        self.customer_insertion.recalibrate(reaction_factor);
    }

    /// Recalibrates station removal and insertion pools.
    pub fn recalibrate_station_pools(&mut self, reaction_factor: Float) {
        self.station_removal.recalibrate(reaction_factor);
        self.station_insertion.recalibrate(reaction_factor);
    }

    /// Returns pools state as text, one line per pool.
    pub fn describe(&self) -> Vec<String> {
        vec![
            self.customer_removal.to_string(),
            self.route_removal.to_string(),
            self.customer_insertion.to_string(),
            self.station_removal.to_string(),
            self.station_insertion.to_string(),
        ]
    }
}

