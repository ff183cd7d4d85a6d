//! Solver configuration.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/solve/config_test.rs"]
mod config_test;

extern crate serde_json;

use evrp_core::prelude::*;
use evrp_core::solver::search::{OperatorConfig, ShawWeights};
use serde::Deserialize;
use std::io::{BufReader, Read};

/// An algorithm configuration. Every field is optional: missing values keep solver defaults.
#[derive(Clone, Default, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Specifies rewards paid to operators.
    pub rewards: Option<RewardsConfig>,
    /// Specifies operator weights adaptation.
    pub adaptation: Option<AdaptationConfig>,
    /// Specifies simulated annealing acceptance.
    pub annealing: Option<AnnealingConfig>,
    /// Specifies iteration schedule.
    pub schedule: Option<ScheduleConfig>,
    /// Specifies destroy and repair operators parameters.
    pub operators: Option<OperatorsConfig>,
    /// Specifies telemetry configuration.
    pub telemetry: Option<TelemetryConfig>,
}

/// Operator rewards.
#[derive(Clone, Default, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RewardsConfig {
    /// A reward for a new best solution. Default is 30.
    pub new_best: Option<Float>,
    /// A reward for an improved current solution. Default is 20.
    pub improved: Option<Float>,
    /// A reward for an accepted worse solution. Default is 13.
    pub annealed: Option<Float>,
}

/// Adaptive weights configuration.
#[derive(Clone, Default, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AdaptationConfig {
    /// A reaction factor. Default is 0.45.
    pub reaction_factor: Option<Float>,
    /// Customer and route pools recalibration period. Default is 200.
    pub customer_segment: Option<usize>,
    /// Station pools recalibration period. Default is 1000.
    pub station_segment: Option<usize>,
}

/// Simulated annealing configuration.
#[derive(Clone, Default, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AnnealingConfig {
    /// A cooling rate. Default is 0.9994.
    pub cooling_rate: Option<Float>,
    /// A start temperature control. Default is 0.05.
    pub start_temperature_control: Option<Float>,
}

/// Iteration schedule.
#[derive(Clone, Default, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleConfig {
    /// Total amount of iterations. Default is 25000.
    pub iterations: Option<usize>,
    /// Route removal period. Default is 6000.
    pub route_period: Option<usize>,
    /// Station removal and insertion period. Default is 10.
    pub station_period: Option<usize>,
    /// Amount of inner cycles in route removal iteration. Default is 1250.
    pub route_cycles: Option<usize>,
}

/// Destroy and repair operators parameters.
#[derive(Clone, Default, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct OperatorsConfig {
    /// Minimum share of removed customers. Default is 0.1.
    pub removal_min_ratio: Option<Float>,
    /// Maximum share of removed customers. Default is 0.3.
    pub removal_max_ratio: Option<Float>,
    /// Maximum share of removed routes. Default is 0.3.
    pub route_removal_ratio: Option<Float>,
    /// Worst removal determinism. Default is 3.
    pub worst_determinism: Option<Float>,
    /// Shaw removal determinism. Default is 6.
    pub shaw_determinism: Option<Float>,
    /// Shaw relatedness weights.
    pub shaw_weights: Option<ShawWeightsConfig>,
    /// Zone size range as share of customers bounding box. Default is [0.2, 0.5].
    pub zone_ratio: Option<(Float, Float)>,
    /// Station repair attempts per route on insertion. Default is 3.
    pub repair_attempts: Option<usize>,
}

/// Shaw relatedness weights.
#[derive(Clone, Default, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ShawWeightsConfig {
    /// Distance weight.
    pub distance: Option<Float>,
    /// Ready time weight.
    pub time: Option<Float>,
    /// Demand weight.
    pub demand: Option<Float>,
    /// Different route penalty.
    pub route: Option<Float>,
}

/// Telemetry configuration.
#[derive(Clone, Default, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct TelemetryConfig {
    /// Log search state every n iterations.
    pub log_best: Option<usize>,
    /// Track search state every n iterations.
    pub track_best: Option<usize>,
}

/// Reads config from json.
pub fn read_config<R: Read>(reader: BufReader<R>) -> GenericResult<Config> {
    serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize config: '{err}'").into())
}

/// Creates a validated solver config: values missing in given config are taken from defaults.
pub fn create_solver_config(config: &Config) -> GenericResult<SolverConfig> {
    let mut solver_config = SolverConfig::default();

    if let Some(rewards) = &config.rewards {
        let target = &mut solver_config.rewards;
        configure(&mut target.new_best, rewards.new_best);
        configure(&mut target.improved, rewards.improved);
        configure(&mut target.annealed, rewards.annealed);
    }

    if let Some(adaptation) = &config.adaptation {
        configure(&mut solver_config.reaction_factor, adaptation.reaction_factor);
        configure(&mut solver_config.customer_segment, adaptation.customer_segment);
        configure(&mut solver_config.station_segment, adaptation.station_segment);
    }

    if let Some(annealing) = &config.annealing {
        configure(&mut solver_config.cooling_rate, annealing.cooling_rate);
        configure(&mut solver_config.start_temperature_control, annealing.start_temperature_control);
    }

    if let Some(schedule) = &config.schedule {
        configure(&mut solver_config.iterations, schedule.iterations);
        configure(&mut solver_config.route_period, schedule.route_period);
        configure(&mut solver_config.station_period, schedule.station_period);
        configure(&mut solver_config.route_cycles, schedule.route_cycles);
    }

    if let Some(operators) = &config.operators {
        configure_operators(&mut solver_config.operators, operators);
    }

    if let Some(telemetry) = &config.telemetry {
        solver_config.log_best = telemetry.log_best.or(solver_config.log_best);
        solver_config.track_best = telemetry.track_best.or(solver_config.track_best);
    }

    solver_config.validate()?;

    Ok(solver_config)
}

/// Reads config from json and creates a validated solver config.
pub fn create_solver_config_from_file<R: Read>(reader: BufReader<R>) -> GenericResult<SolverConfig> {
    read_config(reader).and_then(|config| create_solver_config(&config))
}

fn configure_operators(target: &mut OperatorConfig, operators: &OperatorsConfig) {
    configure(&mut target.removal_min_ratio, operators.removal_min_ratio);
    configure(&mut target.removal_max_ratio, operators.removal_max_ratio);
    configure(&mut target.route_removal_ratio, operators.route_removal_ratio);
    configure(&mut target.worst_determinism, operators.worst_determinism);
    configure(&mut target.shaw_determinism, operators.shaw_determinism);
    configure(&mut target.zone_ratio, operators.zone_ratio);
    configure(&mut target.repair_attempts, operators.repair_attempts);

    if let Some(weights) = &operators.shaw_weights {
        configure_shaw_weights(&mut target.shaw_weights, weights);
    }
}

fn configure_shaw_weights(target: &mut ShawWeights, weights: &ShawWeightsConfig) {
    configure(&mut target.distance, weights.distance);
    configure(&mut target.time, weights.time);
    configure(&mut target.demand, weights.demand);
    configure(&mut target.route, weights.route);
}

fn configure<T>(target: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *target = value;
    }
}
