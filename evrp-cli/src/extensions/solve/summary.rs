//! Serializable search result.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/solve/summary_test.rs"]
mod summary_test;

use evrp_core::prelude::*;
use evrp_core::solver::telemetry::TelemetryMetrics;
use serde::{Deserialize, Serialize};
use std::io::{BufWriter, Write};

/// A search result summary.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SolveSummary {
    /// Total distance of the best solution.
    pub best_distance: Float,
    /// Amount of routes in the best solution.
    pub best_route_count: usize,
    /// Total distance of the initial solution.
    pub initial_distance: Float,
    /// Amount of routes in the initial solution.
    pub initial_route_count: usize,
    /// Search duration in seconds.
    pub duration: Float,
    /// Amount of completed iterations.
    pub iterations: usize,
    /// Best routes as lists of node ids.
    pub routes: Vec<Vec<String>>,
    /// Search metrics, if tracked.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<MetricsSummary>,
}

/// Search metrics.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsSummary {
    /// Iterations per second.
    pub speed: Float,
    /// Counts of new best, improved, annealed and rejected candidates.
    pub outcomes: [usize; 4],
    /// Tracked search states.
    pub evolution: Vec<IterationSummary>,
}

/// A tracked search state.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IterationSummary {
    /// Iteration number.
    pub number: usize,
    /// Elapsed time in seconds.
    pub timestamp: Float,
    /// Routes in the best solution.
    pub best_routes: usize,
    /// Distance of the best solution.
    pub best_distance: Float,
    /// Routes in the current solution.
    pub current_routes: usize,
    /// Distance of the current solution.
    pub current_distance: Float,
    /// Annealing temperature.
    pub temperature: Float,
}

/// Creates summary of solver output.
pub fn create_summary(output: &SolverOutput, instance: &Instance) -> SolveSummary {
    SolveSummary {
        best_distance: output.best_distance,
        best_route_count: output.best_route_count,
        initial_distance: output.initial_distance,
        initial_route_count: output.initial_route_count,
        duration: output.duration,
        iterations: output.iterations,
        routes: output.best_routes(instance),
        metrics: output.metrics.as_ref().map(create_metrics_summary),
    }
}

/// Writes summary as pretty json.
pub fn write_summary<W: Write>(writer: BufWriter<W>, summary: &SolveSummary) -> GenericResult<()> {
    let mut writer = writer;

    serde_json::to_writer_pretty(&mut writer, summary).map_err(|err| format!("cannot write summary: '{err}'"))?;
    writer.write_all(b"\n")?;
    writer.flush()?;

    Ok(())
}

fn create_metrics_summary(metrics: &TelemetryMetrics) -> MetricsSummary {
    MetricsSummary {
        speed: metrics.speed,
        outcomes: metrics.outcomes,
        evolution: metrics
            .evolution
            .iter()
            .map(|iteration| IterationSummary {
                number: iteration.number,
                timestamp: iteration.timestamp,
                best_routes: iteration.best.routes,
                best_distance: iteration.best.distance,
                current_routes: iteration.current.routes,
                current_distance: iteration.current.distance,
                temperature: iteration.temperature,
            })
            .collect(),
    }
}
