use crate::models::common::{Demand, Energy};
use alns::utils::Float;

/// Keeps parameters of the homogeneous electric vehicle fleet.
#[derive(Clone, Debug, PartialEq)]
pub struct VehicleParams {
    /// Battery capacity `Q`.
    pub battery_capacity: Energy,
    /// Load capacity `C`.
    pub load_capacity: Demand,
    /// Inverse recharging rate `g`: recharging the missing energy `e` takes `e / g` time units.
    pub inverse_recharge_rate: Float,
    /// Energy consumption rate `h` per distance unit.
    pub consumption_rate: Float,
    /// Average velocity `v`.
    pub velocity: Float,
}

impl VehicleParams {
    /// Creates a new instance of `VehicleParams`.
    pub fn new(
        battery_capacity: Energy,
        load_capacity: Demand,
        inverse_recharge_rate: Float,
        consumption_rate: Float,
        velocity: Float,
    ) -> Self {
        Self { battery_capacity, load_capacity, inverse_recharge_rate, consumption_rate, velocity }
    }
}
