use crate::solver::search::OperatorConfig;
use alns::acceptance::RewardScheme;
use alns::utils::{Float, GenericResult};

/// Parameters of the adaptive large neighbourhood search.
#[derive(Clone, Debug, PartialEq)]
pub struct SolverConfig {
    /// Rewards paid for new best, improved and annealed candidates.
    pub rewards: RewardScheme,
    /// Reaction factor `rho` used to blend segment performance into weights.
    pub reaction_factor: Float,
    /// Cooling factor `epsilon` applied to the temperature every iteration.
    pub cooling_rate: Float,
    /// Start temperature control `mu`: a solution `mu` times worse than the initial one is
    /// accepted with probability one half.
    pub start_temperature_control: Float,
    /// Total amount of iterations `N`.
    pub iterations: usize,
    /// Customer and route operators are recalibrated every `Nc` iterations.
    pub customer_segment: usize,
    /// Station operators are recalibrated every `Ns` iterations.
    pub station_segment: usize,
    /// Route removal runs every `NRR` iterations.
    pub route_period: usize,
    /// Station removal and insertion runs every `NSR` iterations.
    pub station_period: usize,
    /// Amount of route removal and customer insertion cycles `nRR` in one route iteration.
    pub route_cycles: usize,
    /// Destroy and repair operator parameters.
    pub operators: OperatorConfig,
    /// Specifies how often the search state is logged, if at all.
    pub log_best: Option<usize>,
    /// Specifies how often the search state is recorded into metrics, if at all.
    pub track_best: Option<usize>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            rewards: RewardScheme::default(),
            reaction_factor: 0.45,
            cooling_rate: 0.9994,
            start_temperature_control: 0.05,
            iterations: 25000,
            customer_segment: 200,
            station_segment: 1000,
            route_period: 6000,
            station_period: 10,
            route_cycles: 1250,
            operators: OperatorConfig::default(),
            log_best: None,
            track_best: None,
        }
    }
}

impl SolverConfig {
    /// Checks parameter ranges.
    pub fn validate(&self) -> GenericResult<()> {
        let periods = [
            ("customer segment", self.customer_segment),
            ("station segment", self.station_segment),
            ("route period", self.route_period),
            ("station period", self.station_period),
        ];

        if let Some((name, _)) = periods.iter().find(|(_, period)| *period == 0) {
            return Err(format!("{name} should be positive").into());
        }

        if !(0. ..=1.).contains(&self.reaction_factor) {
            return Err(format!("reaction factor should be in [0, 1], got {}", self.reaction_factor).into());
        }

        if !(self.cooling_rate > 0. && self.cooling_rate <= 1.) {
            return Err(format!("cooling rate should be in (0, 1], got {}", self.cooling_rate).into());
        }

        if self.start_temperature_control < 0. {
            return Err("start temperature control should not be negative".into());
        }

        let operators = &self.operators;
        if !(0. < operators.removal_min_ratio && operators.removal_min_ratio <= operators.removal_max_ratio) {
            return Err("removal ratios should satisfy 0 < min <= max".into());
        }

        if matches!(self.log_best, Some(0)) || matches!(self.track_best, Some(0)) {
            return Err("log and track frequencies should be positive".into());
        }

        Ok(())
    }
}
