use super::*;
use evrp_core::solver::telemetry::TelemetryIteration;
use std::sync::Arc;

fn create_instance() -> Arc<Instance> {
    let nodes = vec![
        Node::new("D0", NodeKind::DepotStart, Location::new(0., 0.), 0., 0., 1000., 0.),
        Node::new("C1", NodeKind::Customer, Location::new(3., 4.), 10., 0., 1000., 10.),
    ];

    Arc::new(Instance::new(nodes, VehicleParams::new(100., 200., 3.39, 1., 1.), WirelessCoverage::None, 0).unwrap())
}

fn create_output(instance: &Instance, metrics: Option<TelemetryMetrics>) -> SolverOutput {
    let route = Route::new(vec![instance.depot_start(), instance.find("C1").unwrap(), instance.depot_end()]);

    SolverOutput {
        best_solution: Solution::new(vec![route]),
        best_distance: 10.,
        best_route_count: 1,
        initial_distance: 12.,
        initial_route_count: 2,
        duration: 0.5,
        iterations: 100,
        metrics,
    }
}

#[test]
fn can_create_summary_without_metrics() {
    let instance = create_instance();

    let summary = create_summary(&create_output(&instance, None), &instance);

    assert_eq!(summary.best_distance, 10.);
    assert_eq!(summary.best_route_count, 1);
    assert_eq!(summary.initial_distance, 12.);
    assert_eq!(summary.initial_route_count, 2);
    assert_eq!(summary.iterations, 100);
    assert_eq!(summary.routes, vec![vec!["D0".to_string(), "C1".to_string(), "D0_end".to_string()]]);
    assert!(summary.metrics.is_none());
}

#[test]
fn can_create_summary_with_metrics() {
    let instance = create_instance();
    let metrics = TelemetryMetrics {
        duration: 0,
        iterations: 100,
        speed: 200.,
        outcomes: [1, 2, 3, 94],
        evolution: vec![TelemetryIteration {
            number: 50,
            timestamp: 0.25,
            best: SolutionCost::new(1, 10.),
            current: SolutionCost::new(1, 11.),
            temperature: 0.7,
        }],
    };

    let summary = create_summary(&create_output(&instance, Some(metrics)), &instance);

    let metrics = summary.metrics.unwrap();
    assert_eq!(metrics.speed, 200.);
    assert_eq!(metrics.outcomes, [1, 2, 3, 94]);
    assert_eq!(metrics.evolution.len(), 1);
    let iteration = &metrics.evolution[0];
    assert_eq!((iteration.number, iteration.best_routes, iteration.best_distance), (50, 1, 10.));
    assert_eq!((iteration.current_routes, iteration.current_distance, iteration.temperature), (1, 11., 0.7));
}

#[test]
fn can_write_summary_as_json() {
    let instance = create_instance();
    let summary = create_summary(&create_output(&instance, None), &instance);
    let mut buffer = Vec::new();

    write_summary(BufWriter::new(&mut buffer), &summary).unwrap();

    let json = String::from_utf8(buffer).unwrap();
    assert!(json.contains("\"bestDistance\": 10.0"));
    assert!(json.contains("\"initialRouteCount\": 2"));
    assert!(!json.contains("metrics"));
    assert!(json.ends_with("}\n"));

    let restored: SolveSummary = serde_json::from_str(json.as_str()).unwrap();
    assert_eq!(restored.routes, summary.routes);
}
