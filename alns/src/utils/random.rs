#[cfg(test)]
#[path = "../../tests/unit/utils/random_test.rs"]
mod random_test;

use crate::utils::Float;
use rand::prelude::*;
use rand_distr::{Distribution, Normal};
use std::sync::{Arc, Mutex};

/// Specifies underlying random generator type handed out to the callers which need an `Rng`
/// (e.g. for shuffling).
pub type RandomGen = SmallRng;

/// Provides the way to use randomized values in generic way.
pub trait Random {
    /// Produces integral random value, uniformly distributed on the closed interval [min, max]
    fn uniform_int(&self, min: i32, max: i32) -> i32;

    /// Produces real random value, uniformly distributed on the interval [min, max)
    fn uniform_real(&self, min: Float, max: Float) -> Float;

    /// Tests probability value in [0., 1.] range.
    fn is_hit(&self, probability: Float) -> bool;

    /// Returns an index from collection with probability proportional to its weight.
    /// Zero weights are never selected unless all weights are zero: then the choice is uniform.
    fn weighted(&self, weights: &[Float]) -> usize;

    /// Returns RNG derived from the internal state.
    fn get_rng(&self) -> RandomGen;
}

/// A default random implementation backed by a small fast generator. When created with
/// [`DefaultRandom::new_repeatable`], the whole sequence of produced values is reproducible.
pub struct DefaultRandom {
    rng: Mutex<SmallRng>,
}

impl DefaultRandom {
    /// Creates a new instance of `DefaultRandom` which produces the same sequence for the same seed.
    pub fn new_repeatable(seed: u64) -> Self {
        Self { rng: Mutex::new(SmallRng::seed_from_u64(seed)) }
    }

    fn with_rng<R>(&self, func: impl FnOnce(&mut SmallRng) -> R) -> R {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        func(&mut rng)
    }
}

impl Default for DefaultRandom {
    fn default() -> Self {
        Self { rng: Mutex::new(SmallRng::from_entropy()) }
    }
}

impl Random for DefaultRandom {
    fn uniform_int(&self, min: i32, max: i32) -> i32 {
        if min == max {
            return min;
        }

        assert!(min < max);
        self.with_rng(|rng| rng.gen_range(min..max + 1))
    }

    fn uniform_real(&self, min: Float, max: Float) -> Float {
        if (min - max).abs() < Float::EPSILON {
            return min;
        }

        assert!(min < max);
        self.with_rng(|rng| rng.gen_range(min..max))
    }

    fn is_hit(&self, probability: Float) -> bool {
        self.with_rng(|rng| rng.gen_bool(probability.clamp(0., 1.)))
    }

    fn weighted(&self, weights: &[Float]) -> usize {
        assert!(!weights.is_empty());

        if weights.iter().all(|weight| *weight <= 0.) {
            return self.uniform_int(0, weights.len() as i32 - 1) as usize;
        }

        // exponential race: the smallest sample of Exp(weight) wins with probability weight / sum
        weights
            .iter()
            .enumerate()
            .filter(|(_, weight)| **weight > 0.)
            .map(|(idx, weight)| (-(1. - self.uniform_real(0., 1.)).ln() / weight, idx))
            .min_by(|(a, _), (b, _)| a.total_cmp(b))
            .map(|(_, idx)| idx)
            .unwrap_or_default()
    }

    fn get_rng(&self) -> RandomGen {
        self.with_rng(|rng| SmallRng::seed_from_u64(rng.next_u64()))
    }
}

/// Samples values from common continuous distributions.
pub trait DistributionSampler {
    /// Returns a sample from normal distribution with given mean and standard deviation.
    fn normal(&self, mean: Float, std_dev: Float) -> Float;
}

/// A distribution sampler which takes its randomness from [`Random`].
#[derive(Clone)]
pub struct DefaultDistributionSampler(Arc<dyn Random + Send + Sync>);

impl DefaultDistributionSampler {
    /// Creates a new instance of `DefaultDistributionSampler`.
    pub fn new(random: Arc<dyn Random + Send + Sync>) -> Self {
        Self(random)
    }
}

impl DistributionSampler for DefaultDistributionSampler {
    fn normal(&self, mean: Float, std_dev: Float) -> Float {
        // NOTE a degenerate (zero or invalid) deviation means no noise at all
        Normal::new(mean, std_dev).map_or(mean, |normal| normal.sample(&mut self.0.get_rng()))
    }
}
