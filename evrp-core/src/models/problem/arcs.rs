#[cfg(test)]
#[path = "../../../tests/unit/models/problem/arcs_test.rs"]
mod arcs_test;

use super::{Node, VehicleParams, WIRELESS_CHARGE_RATE, WirelessCoverage};
use crate::models::common::{Distance, Energy, NodeIdx, Timestamp};
use alns::utils::Float;

/// A dense matrix of arc attributes between every ordered pair of nodes.
///
/// Net energy of an arc is `h * d - 0.9 * fraction * d`: consumption minus the energy regained
/// on its wireless segment. It is negative when the vehicle gains more than it spends.
#[derive(Clone, Debug)]
pub struct ArcMatrix {
    size: usize,
    distances: Vec<Distance>,
    travel_times: Vec<Timestamp>,
    wireless_charges: Vec<Energy>,
    net_energies: Vec<Energy>,
}

impl ArcMatrix {
    /// Creates a new instance of `ArcMatrix`.
    pub fn new(nodes: &[Node], vehicle: &VehicleParams, coverage: WirelessCoverage) -> Self {
        let size = nodes.len();
        let fraction = coverage.fraction();

        let distances = nodes
            .iter()
            .flat_map(|from| nodes.iter().map(move |to| from.location.distance_to(&to.location)))
            .collect::<Vec<_>>();

        let travel_times = distances.iter().map(|distance| distance / vehicle.velocity).collect();
        let wireless_charges =
            distances.iter().map(|distance| WIRELESS_CHARGE_RATE * fraction * distance).collect::<Vec<_>>();
        let net_energies = distances
            .iter()
            .zip(wireless_charges.iter())
            .map(|(distance, charge)| vehicle.consumption_rate * distance - charge)
            .collect();

        Self { size, distances, travel_times, wireless_charges, net_energies }
    }

    /// Returns amount of nodes.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns distance between two nodes, if both exist.
    pub fn distance(&self, from: NodeIdx, to: NodeIdx) -> Option<Distance> {
        self.index(from, to).map(|idx| self.distances[idx])
    }

    /// Returns travel time between two nodes, if both exist.
    pub fn travel_time(&self, from: NodeIdx, to: NodeIdx) -> Option<Timestamp> {
        self.index(from, to).map(|idx| self.travel_times[idx])
    }

    /// Returns energy regained on a wireless segment of the arc, if both nodes exist.
    pub fn wireless_charge(&self, from: NodeIdx, to: NodeIdx) -> Option<Energy> {
        self.index(from, to).map(|idx| self.wireless_charges[idx])
    }

    /// Returns net energy spent on the arc, if both nodes exist.
    pub fn net_energy(&self, from: NodeIdx, to: NodeIdx) -> Option<Energy> {
        self.index(from, to).map(|idx| self.net_energies[idx])
    }

    /// Returns travel times as a flat row-major table.
    pub fn travel_times(&self) -> &[Timestamp] {
        self.travel_times.as_slice()
    }

    /// Returns a flat index of the arc.
    pub fn index(&self, from: NodeIdx, to: NodeIdx) -> Option<usize> {
        (from < self.size && to < self.size).then_some(from * self.size + to)
    }

    /// Returns the largest distance in the matrix.
    pub fn max_distance(&self) -> Distance {
        self.distances.iter().copied().fold(0., Float::max)
    }
}
