#[cfg(test)]
#[path = "../../../tests/unit/models/problem/instance_test.rs"]
mod instance_test;

use super::{ArcMatrix, Node, NodeKind, VehicleParams, WirelessCoverage};
use crate::models::common::{Distance, NodeIdx, Timestamp};
use alns::utils::{Float, GenericError, GenericResult, get_mean_slice, get_sample_stdev};
use rustc_hash::FxHashMap;

/// A static, read-only problem instance: nodes, fleet parameters and precomputed arc data.
///
/// Besides the nodes given on creation, the instance contains a depot end copy (`<depot>_end`)
/// placed right after them and, optionally, dummy station replicas named `S_dummy<k>`.
#[derive(Clone, Debug)]
pub struct Instance {
    nodes: Vec<Node>,
    vehicle: VehicleParams,
    coverage: WirelessCoverage,
    arcs: ArcMatrix,
    depot_start: NodeIdx,
    depot_end: NodeIdx,
    customers: Vec<NodeIdx>,
    stations: Vec<NodeIdx>,
    original_stations: Vec<NodeIdx>,
    replica_origins: Vec<NodeIdx>,
    replicas: FxHashMap<NodeIdx, Vec<NodeIdx>>,
    index: FxHashMap<String, NodeIdx>,
    window_mean: Timestamp,
    window_stdev: Timestamp,
}

impl Instance {
    /// Creates a new instance from a depot, stations and customers. `dummies` specifies how many
    /// times the whole station set is replicated.
    pub fn new(
        nodes: Vec<Node>,
        vehicle: VehicleParams,
        coverage: WirelessCoverage,
        dummies: usize,
    ) -> GenericResult<Self> {
        let depots = nodes.iter().filter(|node| node.kind == NodeKind::DepotStart).collect::<Vec<_>>();
        let depot = match depots.as_slice() {
            [depot] => (*depot).clone(),
            _ => return Err(format!("expected exactly one depot, got {}", depots.len()).into()),
        };

        if let Some(node) = nodes.iter().find(|node| matches!(node.kind, NodeKind::DepotEnd | NodeKind::DummyStation)) {
            return Err(format!("node '{}' has a kind which is reserved for generated nodes", node.id).into());
        }

        if vehicle.velocity <= 0. || vehicle.battery_capacity <= 0. {
            return Err("vehicle velocity and battery capacity should be positive".into());
        }

        let original = nodes.iter().filter(|node| node.kind == NodeKind::Station).cloned().collect::<Vec<_>>();

        let mut nodes = nodes;
        nodes.push(Node { id: format!("{}_end", depot.id), kind: NodeKind::DepotEnd, ..depot });
        nodes.extend((0..dummies).flat_map(|_| original.iter()).enumerate().map(|(k, station)| Node {
            id: format!("S_dummy{k}"),
            kind: NodeKind::DummyStation,
            ..station.clone()
        }));

        let mut index = FxHashMap::default();
        for (idx, node) in nodes.iter().enumerate() {
            if index.insert(node.id.clone(), idx).is_some() {
                return Err(format!("duplicate node id: '{}'", node.id).into());
            }
        }

        Self::from_nodes(nodes, vehicle, coverage, index)
    }

    /// Creates a copy of the instance evaluated under another wireless coverage.
    pub fn with_coverage(&self, coverage: WirelessCoverage) -> Self {
        Self { arcs: ArcMatrix::new(&self.nodes, &self.vehicle, coverage), coverage, ..self.clone() }
    }

    fn from_nodes(
        nodes: Vec<Node>,
        vehicle: VehicleParams,
        coverage: WirelessCoverage,
        index: FxHashMap<String, NodeIdx>,
    ) -> GenericResult<Self> {
        let find_kind = |kind: NodeKind| nodes.iter().position(|node| node.kind == kind);
        let depot_start = find_kind(NodeKind::DepotStart).ok_or_else(|| GenericError::from("no depot start"))?;
        let depot_end = find_kind(NodeKind::DepotEnd).ok_or_else(|| GenericError::from("no depot end"))?;

        let collect_kind =
            |filter: &dyn Fn(&NodeKind) -> bool| (0..nodes.len()).filter(|&idx| filter(&nodes[idx].kind)).collect::<Vec<_>>();
        let customers = collect_kind(&|kind| *kind == NodeKind::Customer);
        let stations = collect_kind(&|kind| kind.is_station());
        let original_stations = collect_kind(&|kind| *kind == NodeKind::Station);

        // replicas are generated in rounds over original stations
        let mut generated = 0..;
        let replica_origins = (0..nodes.len())
            .map(|idx| match nodes[idx].kind {
                NodeKind::DummyStation => generated
                    .next()
                    .and_then(|k| original_stations.get(k % original_stations.len().max(1)))
                    .copied()
                    .unwrap_or(idx),
                _ => idx,
            })
            .collect::<Vec<_>>();

        let mut replicas: FxHashMap<NodeIdx, Vec<NodeIdx>> = FxHashMap::default();
        stations.iter().for_each(|&station| replicas.entry(replica_origins[station]).or_default().push(station));

        let spans = customers.iter().map(|&idx| nodes[idx].due_date - nodes[idx].ready_time).collect::<Vec<_>>();
        let window_mean = get_mean_slice(spans.as_slice());
        let window_stdev = get_sample_stdev(spans.as_slice());

        let arcs = ArcMatrix::new(&nodes, &vehicle, coverage);

        Ok(Self {
            nodes,
            vehicle,
            coverage,
            arcs,
            depot_start,
            depot_end,
            customers,
            stations,
            original_stations,
            replica_origins,
            replicas,
            index,
            window_mean,
            window_stdev,
        })
    }

    /// Returns all nodes including generated ones.
    pub fn nodes(&self) -> &[Node] {
        self.nodes.as_slice()
    }

    /// Returns node by its index.
    pub fn node(&self, idx: NodeIdx) -> Option<&Node> {
        self.nodes.get(idx)
    }

    /// Returns total amount of nodes.
    pub fn size(&self) -> usize {
        self.nodes.len()
    }

    /// Finds node index by its id.
    pub fn find(&self, id: &str) -> Option<NodeIdx> {
        self.index.get(id).copied()
    }

    /// Returns node id or an empty string for unknown index.
    pub fn id(&self, idx: NodeIdx) -> &str {
        self.nodes.get(idx).map_or("", |node| node.id.as_str())
    }

    /// Returns fleet parameters.
    pub fn vehicle(&self) -> &VehicleParams {
        &self.vehicle
    }

    /// Returns wireless coverage used to build the arc data.
    pub fn coverage(&self) -> WirelessCoverage {
        self.coverage
    }

    /// Returns precomputed arc data.
    pub fn arcs(&self) -> &ArcMatrix {
        &self.arcs
    }

    /// Returns index of depot start.
    pub fn depot_start(&self) -> NodeIdx {
        self.depot_start
    }

    /// Returns index of depot end.
    pub fn depot_end(&self) -> NodeIdx {
        self.depot_end
    }

    /// Returns customer indices.
    pub fn customers(&self) -> &[NodeIdx] {
        self.customers.as_slice()
    }

    /// Returns all station indices including dummy replicas.
    pub fn stations(&self) -> &[NodeIdx] {
        self.stations.as_slice()
    }

    /// Returns station indices without dummy replicas.
    pub fn original_stations(&self) -> &[NodeIdx] {
        self.original_stations.as_slice()
    }

    /// Returns true if the node is a customer.
    pub fn is_customer(&self, idx: NodeIdx) -> bool {
        self.nodes.get(idx).is_some_and(|node| node.kind == NodeKind::Customer)
    }

    /// Returns true if the node is a station or its replica.
    pub fn is_station(&self, idx: NodeIdx) -> bool {
        self.nodes.get(idx).is_some_and(|node| node.kind.is_station())
    }

    /// Returns the original station for a dummy replica, or the node itself.
    pub fn station_origin(&self, idx: NodeIdx) -> NodeIdx {
        self.replica_origins.get(idx).copied().unwrap_or(idx)
    }

    /// Returns the original station followed by its dummy replicas.
    pub fn station_replicas(&self, idx: NodeIdx) -> &[NodeIdx] {
        self.replicas.get(&self.station_origin(idx)).map_or(&[], |replicas| replicas.as_slice())
    }

    /// Returns distance between two nodes or infinity when any of them is unknown.
    pub fn distance(&self, from: NodeIdx, to: NodeIdx) -> Distance {
        self.arcs.distance(from, to).unwrap_or(Float::INFINITY)
    }

    /// Returns mean of customer time window spans.
    pub fn window_mean(&self) -> Timestamp {
        self.window_mean
    }

    /// Returns sample standard deviation of customer time window spans.
    pub fn window_stdev(&self) -> Timestamp {
        self.window_stdev
    }
}
