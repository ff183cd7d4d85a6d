//! Station removal and insertion operators.

#[cfg(test)]
#[path = "../../../../tests/unit/solver/search/stations/stations_test.rs"]
mod stations_test;

use super::{SearchContext, StationInsertion, StationRemoval, removal_cost};
use crate::models::common::NodeIdx;
use crate::models::problem::Instance;
use crate::models::solution::{Route, Solution};
use alns::utils::{Float, compare_floats};

mod insertion;
pub use self::insertion::{BestStationInsertion, ComparisonStationInsertion, GreedyStationInsertion};

mod removal;
pub use self::removal::{
    FullStationRemoval, RandomStationRemoval, WorstChargeStationRemoval, WorstDistanceStationRemoval,
};

/// Returns the station itself or its first replica which is not yet visited by the route.
pub(crate) fn get_station_replica(instance: &Instance, route: &Route, station: NodeIdx) -> NodeIdx {
    instance.station_replicas(station).iter().copied().find(|&replica| !route.contains(replica)).unwrap_or(station)
}
