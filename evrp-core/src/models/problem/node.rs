use crate::models::common::{Demand, Location, Timestamp};

/// Specifies a role of the node in the instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// A depot where every route starts.
    DepotStart,
    /// A copy of the depot where every route ends.
    DepotEnd,
    /// A customer which has to be visited exactly once.
    Customer,
    /// A recharging station.
    Station,
    /// A replica of a recharging station which allows to visit the same station several times
    /// within one route.
    DummyStation,
}

impl NodeKind {
    /// Returns true if the node recharges the battery.
    pub fn is_station(&self) -> bool {
        matches!(self, NodeKind::Station | NodeKind::DummyStation)
    }

    /// Returns true if the node is a depot start or end.
    pub fn is_depot(&self) -> bool {
        matches!(self, NodeKind::DepotStart | NodeKind::DepotEnd)
    }
}

/// Represents a single location to be visited by a vehicle.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    /// A unique node id.
    pub id: String,
    /// A node kind.
    pub kind: NodeKind,
    /// A node location.
    pub location: Location,
    /// A demand to be delivered, zero for depots and stations.
    pub demand: Demand,
    /// The earliest service start time.
    pub ready_time: Timestamp,
    /// The latest arrival time.
    pub due_date: Timestamp,
    /// A service duration.
    pub service_time: Timestamp,
}

impl Node {
    /// Creates a new instance of `Node`.
    pub fn new(
        id: &str,
        kind: NodeKind,
        location: Location,
        demand: Demand,
        ready_time: Timestamp,
        due_date: Timestamp,
        service_time: Timestamp,
    ) -> Self {
        Self { id: id.to_string(), kind, location, demand, ready_time, due_date, service_time }
    }
}
