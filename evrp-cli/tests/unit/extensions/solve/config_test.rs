use super::*;
use std::fs::File;

fn create_config(json: &str) -> GenericResult<SolverConfig> {
    create_solver_config_from_file(BufReader::new(json.as_bytes()))
}

#[test]
fn can_read_full_config() {
    let file = File::open("../data/config/config.json").expect("cannot read config from file");

    let config = create_solver_config_from_file(BufReader::new(file)).unwrap();

    assert_eq!(config, SolverConfig { track_best: Some(10), ..SolverConfig::default() });
}

#[test]
fn can_use_defaults_for_empty_config() {
    let config = create_config("{}").unwrap();

    assert_eq!(config, SolverConfig::default());
}

#[test]
fn can_override_only_specified_values() {
    let config = create_config(
        r#"{
            "rewards": { "newBest": 40 },
            "schedule": { "iterations": 100, "stationPeriod": 5 },
            "operators": { "shawWeights": { "demand": 4 }, "zoneRatio": [0.1, 0.3] },
            "telemetry": { "logBest": 50 }
        }"#,
    )
    .unwrap();

    let defaults = SolverConfig::default();
    assert_eq!(config.rewards.new_best, 40.);
    assert_eq!(config.rewards.improved, defaults.rewards.improved);
    assert_eq!(config.iterations, 100);
    assert_eq!(config.station_period, 5);
    assert_eq!(config.route_period, defaults.route_period);
    assert_eq!(config.operators.shaw_weights, ShawWeights { demand: 4., ..ShawWeights::default() });
    assert_eq!(config.operators.zone_ratio, (0.1, 0.3));
    assert_eq!(config.operators.removal_max_ratio, defaults.operators.removal_max_ratio);
    assert_eq!(config.log_best, Some(50));
    assert_eq!(config.track_best, None);
}

#[test]
fn can_validate_config_values() {
    let cases = [
        (r#"{ "annealing": { "coolingRate": 1.5 } }"#, "cooling rate should be in (0, 1], got 1.5"),
        (r#"{ "adaptation": { "reactionFactor": -0.1 } }"#, "reaction factor should be in [0, 1], got -0.1"),
        (r#"{ "schedule": { "stationPeriod": 0 } }"#, "station period should be positive"),
        (r#"{ "operators": { "removalMinRatio": 0.5 } }"#, "removal ratios should satisfy 0 < min <= max"),
        (r#"{ "telemetry": { "trackBest": 0 } }"#, "log and track frequencies should be positive"),
    ];

    for (json, expected) in cases {
        assert_eq!(create_config(json).unwrap_err().to_string(), expected);
    }
}

#[test]
fn can_report_malformed_config() {
    for json in ["", "{", r#"{ "schedule": { "iterations": "many" } }"#, r#"{ "operators": { "zoneRatio": 1 } }"#] {
        let result = create_config(json);

        assert!(result.unwrap_err().to_string().starts_with("cannot deserialize config"));
    }
}
