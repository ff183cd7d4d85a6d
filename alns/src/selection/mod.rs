//! The selection module contains adaptive operator pools: each pool keeps a weight per operator,
//! draws operators proportionally to their weights and periodically recalibrates the weights
//! from the rewards collected during the last segment of iterations.

#[cfg(test)]
#[path = "../../tests/unit/selection/adaptive_pool_test.rs"]
mod adaptive_pool_test;

use crate::utils::{Float, Random};
use std::fmt::{Debug, Display, Formatter};

/// Keeps adaptive statistics of one operator.
#[derive(Clone, Debug, PartialEq)]
pub struct OperatorRecord {
    /// Selection weight, never negative.
    pub weight: Float,
    /// A reward accumulated within the current segment.
    pub segment_reward: Float,
    /// How many times the operator was selected within the current segment.
    pub segment_uses: usize,
}

impl Default for OperatorRecord {
    fn default() -> Self {
        Self { weight: 1., segment_reward: 0., segment_uses: 0 }
    }
}

impl OperatorRecord {
    /// Applies exponential smoothing to the weight using the segment average reward and starts
    /// a new segment. An operator without uses keeps its weight.
    pub fn recalibrate(&mut self, rho: Float) {
        if self.segment_uses > 0 {
            self.weight = self.weight * (1. - rho) + rho * (self.segment_reward / self.segment_uses as Float);
        }

        self.segment_reward = 0.;
        self.segment_uses = 0;
    }
}

/// A pool of interchangeable operators identified by a tag.
pub struct AdaptivePool<K> {
    name: String,
    operators: Vec<(K, OperatorRecord)>,
}

impl<K> AdaptivePool<K>
where
    K: Copy + Eq + Debug,
{
    /// Creates a new pool where each operator starts with unit weight and an empty segment.
    pub fn new(name: &str, keys: impl IntoIterator<Item = K>) -> Self {
        let operators = keys.into_iter().map(|key| (key, OperatorRecord::default())).collect::<Vec<_>>();
        assert!(!operators.is_empty(), "adaptive pool '{name}' has no operators");

        Self { name: name.to_string(), operators }
    }

    /// Draws an operator with probability proportional to its weight. The use counter of the
    /// drawn operator is increased immediately, before the outcome is known.
    pub fn select(&mut self, random: &dyn Random) -> K {
        let weights = self.operators.iter().map(|(_, record)| record.weight).collect::<Vec<_>>();
        let (key, record) = &mut self.operators[random.weighted(weights.as_slice())];

        record.segment_uses += 1;

        *key
    }

    /// Adds the reward to the operator's segment score. Unknown keys are ignored.
    pub fn reward(&mut self, key: K, amount: Float) {
        if let Some((_, record)) = self.operators.iter_mut().find(|(other, _)| *other == key) {
            record.segment_reward += amount;
        }
    }

    /// Recalibrates weights of all operators in the pool and resets the segment statistics.
    pub fn recalibrate(&mut self, rho: Float) {
        self.operators.iter_mut().for_each(|(_, record)| record.recalibrate(rho));
    }

    /// Returns the record of the given operator.
    pub fn record(&self, key: K) -> Option<&OperatorRecord> {
        self.operators.iter().find(|(other, _)| *other == key).map(|(_, record)| record)
    }

    /// Returns all operators with their records.
    pub fn iter(&self) -> impl Iterator<Item = (K, &OperatorRecord)> + '_ {
        self.operators.iter().map(|(key, record)| (*key, record))
    }

    /// Returns amount of operators in the pool.
    pub fn size(&self) -> usize {
        self.operators.len()
    }
}

impl<K> Display for AdaptivePool<K>
where
    K: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let weights = self
            .operators
            .iter()
            .map(|(key, record)| format!("{key:?}={:.3}", record.weight))
            .collect::<Vec<_>>()
            .join(",");

        write!(f, "{}: [{}]", self.name, weights)
    }
}
