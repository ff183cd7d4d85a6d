//! A module which collects metrics about the search and writes its progress into the log.

#[cfg(test)]
#[path = "../../tests/unit/solver/telemetry_test.rs"]
mod telemetry_test;

use crate::models::solution::SolutionCost;
use alns::acceptance::AcceptanceTier;
use alns::utils::{Float, InfoLogger, Timer};

/// Encapsulates different measurements regarding search execution.
pub struct TelemetryMetrics {
    /// Search duration in seconds.
    pub duration: usize,
    /// Total amount of iterations.
    pub iterations: usize,
    /// Speed: iterations per second.
    pub speed: Float,
    /// Counts of acceptance outcomes: new best, improved, annealed, rejected.
    pub outcomes: [usize; 4],
    /// Search progress.
    pub evolution: Vec<TelemetryIteration>,
}

/// Represents the search state after an iteration.
pub struct TelemetryIteration {
    /// Iteration sequence number.
    pub number: usize,
    /// Time since search started.
    pub timestamp: Float,
    /// Cost of the best solution.
    pub best: SolutionCost,
    /// Cost of the current solution.
    pub current: SolutionCost,
    /// Annealing temperature.
    pub temperature: Float,
}

/// Specifies a telemetry mode.
#[derive(Clone)]
pub enum TelemetryMode {
    /// No telemetry at all.
    None,
    /// Only logging.
    OnlyLogging {
        /// A logger type.
        logger: InfoLogger,
        /// Specifies how often the search state is logged.
        log_best: usize,
    },
    /// Only metrics collection.
    OnlyMetrics {
        /// Specifies how often the search state is tracked.
        track_best: usize,
    },
    /// Both logging and metrics collection.
    All {
        /// A logger type.
        logger: InfoLogger,
        /// Specifies how often the search state is logged.
        log_best: usize,
        /// Specifies how often the search state is tracked.
        track_best: usize,
    },
}

impl TelemetryMode {
    /// Creates telemetry mode from optional frequencies.
    pub fn new(logger: InfoLogger, log_best: Option<usize>, track_best: Option<usize>) -> Self {
        match (log_best, track_best) {
            (Some(log_best), Some(track_best)) => TelemetryMode::All { logger, log_best, track_best },
            (Some(log_best), None) => TelemetryMode::OnlyLogging { logger, log_best },
            (None, Some(track_best)) => TelemetryMode::OnlyMetrics { track_best },
            (None, None) => TelemetryMode::None,
        }
    }
}

/// Provides way to collect metrics and write information into log.
pub struct Telemetry {
    metrics: TelemetryMetrics,
    time: Timer,
    mode: TelemetryMode,
}

impl Telemetry {
    /// Creates a new instance of `Telemetry`.
    pub fn new(mode: TelemetryMode) -> Self {
        Self {
            time: Timer::start(),
            metrics: TelemetryMetrics { duration: 0, iterations: 0, speed: 0., outcomes: [0; 4], evolution: vec![] },
            mode,
        }
    }

    /// Reports initial solution statistics.
    pub fn on_initial(&mut self, cost: &SolutionCost, item_time: Timer) {
        self.log(
            format!(
                "[{}s] created initial solution in {}ms, {}",
                self.time.elapsed_secs(),
                item_time.elapsed_millis(),
                cost
            )
            .as_str(),
        );
    }

    /// Reports iteration outcome.
    pub fn on_iteration(
        &mut self,
        number: usize,
        tier: AcceptanceTier,
        best: &SolutionCost,
        current: &SolutionCost,
        temperature: Float,
    ) {
        self.metrics.iterations = number;
        self.metrics.outcomes[tier_index(tier)] += 1;

        let (log_best, track_best) = match &self.mode {
            TelemetryMode::None => return,
            TelemetryMode::OnlyLogging { log_best, .. } => (Some(*log_best), None),
            TelemetryMode::OnlyMetrics { track_best } => (None, Some(*track_best)),
            TelemetryMode::All { log_best, track_best, .. } => (Some(*log_best), Some(*track_best)),
        };

        if number % log_best.unwrap_or(usize::MAX) == 0 {
            self.log(
                format!(
                    "[{}s] iteration {number}: best ({best}), current ({current}), temperature: {temperature:.3}",
                    self.time.elapsed_secs()
                )
                .as_str(),
            );
        }

        if number % track_best.unwrap_or(usize::MAX) == 0 {
            self.metrics.evolution.push(TelemetryIteration {
                number,
                timestamp: self.time.elapsed_secs_as_float(),
                best: *best,
                current: *current,
                temperature,
            });
        }
    }

    /// Reports operator weights after recalibration.
    pub fn on_recalibration(&self, number: usize, pools: &[String]) {
        if let TelemetryMode::All { log_best, .. } | TelemetryMode::OnlyLogging { log_best, .. } = &self.mode {
            if number % log_best == 0 {
                pools.iter().for_each(|pool| self.log(format!("\t{pool}").as_str()));
            }
        }
    }

    /// Reports final statistic.
    pub fn on_result(&mut self, initial: &SolutionCost, best: &SolutionCost) {
        let iterations = self.metrics.iterations;
        let elapsed = self.time.elapsed_secs() as usize;
        let speed = iterations as Float / self.time.elapsed_secs_as_float().max(Float::EPSILON);
        let [new_best, improved, annealed, rejected] = self.metrics.outcomes;

        self.log(format!("[{elapsed}s] total iterations: {iterations}, speed: {speed:.2} iter/sec").as_str());
        self.log(format!("\toutcomes: {new_best} best, {improved} improved, {annealed} annealed, {rejected} rejected").as_str());
        self.log(format!("\tinitial ({initial}), best ({best})").as_str());

        self.metrics.duration = elapsed;
        self.metrics.speed = speed;
    }

    /// Gets metrics.
    pub fn take_metrics(self) -> Option<TelemetryMetrics> {
        match &self.mode {
            TelemetryMode::OnlyMetrics { .. } | TelemetryMode::All { .. } => Some(self.metrics),
            _ => None,
        }
    }

    /// Writes log message.
    pub fn log(&self, message: &str) {
        match &self.mode {
            TelemetryMode::OnlyLogging { logger, .. } => (logger)(message),
            TelemetryMode::All { logger, .. } => (logger)(message),
            _ => {}
        }
    }
}

fn tier_index(tier: AcceptanceTier) -> usize {
    match tier {
        AcceptanceTier::NewBest => 0,
        AcceptanceTier::Improved => 1,
        AcceptanceTier::Annealed => 2,
        AcceptanceTier::Rejected => 3,
    }
}
