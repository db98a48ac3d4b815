//! Sources of loader progress increments.
//!
//! The loader asks its source for one increment per tick, passing the
//! configured exclusive upper bound. Tests inject fixed or scripted values;
//! the browser uses [`RandomIncrements`].

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

#[cfg(test)]
#[path = "increments_test.rs"]
mod increments_test;

/// Supplies the amount progress grows by on each tick.
pub trait IncrementSource {
    /// Next increment, nominally drawn from `[0, max)`.
    fn next_increment(&mut self, max: f64) -> f64;
}

/// Uniform random increments from `[0, max)`.
#[derive(Clone, Debug)]
pub struct RandomIncrements {
    rng: SmallRng,
}

impl RandomIncrements {
    /// Deterministic stream for a given seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self { rng: SmallRng::seed_from_u64(seed) }
    }
}

impl IncrementSource for RandomIncrements {
    fn next_increment(&mut self, max: f64) -> f64 {
        if !(max.is_finite() && max > 0.0) {
            return 0.0;
        }
        self.rng.random_range(0.0..max)
    }
}

/// The same increment on every tick, ignoring the bound.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedIncrements(pub f64);

impl IncrementSource for FixedIncrements {
    fn next_increment(&mut self, _max: f64) -> f64 {
        self.0
    }
}

impl<F> IncrementSource for F
where
    F: FnMut(f64) -> f64,
{
    fn next_increment(&mut self, max: f64) -> f64 {
        self(max)
    }
}

/// Clean up a raw draw so progress can only move forward.
#[must_use]
pub fn sanitize(increment: f64) -> f64 {
    if increment.is_finite() && increment > 0.0 { increment } else { 0.0 }
}
