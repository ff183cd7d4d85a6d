use alns::utils::{Float, GenericError};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// A rate at which a vehicle regains energy per distance unit driven over a wireless segment.
pub const WIRELESS_CHARGE_RATE: Float = 0.9;

/// Specifies which share of every arc is covered by in-motion wireless charging.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum WirelessCoverage {
    /// No wireless charging.
    #[default]
    None,
    /// 20% of every arc is covered.
    Light,
    /// 40% of every arc is covered.
    Moderate,
    /// 60% of every arc is covered.
    High,
}

impl WirelessCoverage {
    /// Returns covered fraction of an arc.
    pub fn fraction(&self) -> Float {
        match self {
            WirelessCoverage::None => 0.,
            WirelessCoverage::Light => 0.2,
            WirelessCoverage::Moderate => 0.4,
            WirelessCoverage::High => 0.6,
        }
    }
}

impl FromStr for WirelessCoverage {
    type Err = GenericError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "none" => Ok(WirelessCoverage::None),
            "light" => Ok(WirelessCoverage::Light),
            "moderate" => Ok(WirelessCoverage::Moderate),
            "high" => Ok(WirelessCoverage::High),
            _ => Err(format!("unknown wireless coverage: '{value}', expected one of: none, light, moderate, high").into()),
        }
    }
}

impl Display for WirelessCoverage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            WirelessCoverage::None => "none",
            WirelessCoverage::Light => "light",
            WirelessCoverage::Moderate => "moderate",
            WirelessCoverage::High => "high",
        };

        write!(f, "{name}")
    }
}
