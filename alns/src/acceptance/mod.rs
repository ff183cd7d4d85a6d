//! The acceptance module contains a simulated annealing schedule and the reward tiers used to
//! score operators by the outcome of their destroy/repair attempt.

#[cfg(test)]
#[path = "../../tests/unit/acceptance/annealing_test.rs"]
mod annealing_test;

use crate::utils::{Float, Random};

/// Specifies an outcome of comparing a feasible candidate with the search state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AcceptanceTier {
    /// Candidate is better than the best known solution.
    NewBest,
    /// Candidate is better than the current solution, but not than the best known.
    Improved,
    /// Candidate is worse than the current solution, but accepted by annealing.
    Annealed,
    /// Candidate is discarded.
    Rejected,
}

/// Rewards paid to the operators which produced an accepted candidate.
#[derive(Clone, Debug, PartialEq)]
pub struct RewardScheme {
    /// A reward for a new best solution.
    pub new_best: Float,
    /// A reward for an improvement of the current solution.
    pub improved: Float,
    /// A reward for an accepted worse solution.
    pub annealed: Float,
}

impl RewardScheme {
    /// Returns reward for given tier, if any.
    pub fn reward(&self, tier: AcceptanceTier) -> Option<Float> {
        match tier {
            AcceptanceTier::NewBest => Some(self.new_best),
            AcceptanceTier::Improved => Some(self.improved),
            AcceptanceTier::Annealed => Some(self.annealed),
            AcceptanceTier::Rejected => None,
        }
    }
}

impl Default for RewardScheme {
    fn default() -> Self {
        Self { new_best: 30., improved: 20., annealed: 13. }
    }
}

/// A geometric annealing schedule: temperature is multiplied by the cooling factor once
/// per iteration, so it never increases.
#[derive(Clone, Debug)]
pub struct Annealing {
    temperature: Float,
    cooling: Float,
}

impl Annealing {
    /// Creates a new instance of `Annealing`.
    pub fn new(temperature: Float, cooling: Float) -> Self {
        assert!(cooling > 0. && cooling <= 1., "cooling factor must be in (0, 1]");

        Self { temperature: temperature.max(0.), cooling }
    }

    /// Creates a schedule whose initial temperature accepts a solution which is `mu` times the
    /// initial cost worse with probability one half: `T = -(mu * cost) / ln(0.5)`.
    pub fn with_initial_cost(mu: Float, cost: Float, cooling: Float) -> Self {
        Self::new(-(mu * cost) / (0.5 as Float).ln(), cooling)
    }

    /// Returns current temperature.
    pub fn temperature(&self) -> Float {
        self.temperature
    }

    /// Lowers the temperature.
    pub fn cool(&mut self) {
        self.temperature *= self.cooling;
    }

    /// Returns probability to accept a solution which is `delta` worse.
    pub fn acceptance_probability(&self, delta: Float) -> Float {
        if self.temperature > 0. { (-delta / self.temperature).exp() } else { 0. }
    }

    /// Draws the acceptance decision for a solution which is `delta` worse.
    pub fn accepts(&self, delta: Float, random: &dyn Random) -> bool {
        let probability = self.acceptance_probability(delta);

        probability > 0. && random.uniform_real(0., 1.) <= probability
    }
}
