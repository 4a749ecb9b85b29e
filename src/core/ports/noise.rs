//! Randomness port for the trending feed
//!
//! The trending order gets an occasional swap near the top so it does not
//! look frozen. The randomness is injected so tests can script it.

use std::ops::Range;

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// Source of the random draws used by the trending swap
pub trait TrendingNoise {
    /// True with the given probability (clamped to `[0, 1]`)
    fn chance(&mut self, probability: f64) -> bool;

    /// A uniformly chosen index in a non-empty range
    fn index(&mut self, range: Range<usize>) -> usize;
}

/// Noise drawn from any [`rand::Rng`]
#[derive(Debug, Clone)]
pub struct RngNoise<R> {
    rng: R,
}

impl<R: Rng> RngNoise<R> {
    /// Wrap a generator
    #[must_use]
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngNoise<ThreadRng> {
    /// Noise from the thread-local generator
    #[must_use]
    pub fn thread() -> Self {
        Self::new(rand::thread_rng())
    }
}

impl RngNoise<StdRng> {
    /// Reproducible noise from a seed
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> TrendingNoise for RngNoise<R> {
    fn chance(&mut self, probability: f64) -> bool {
        self.rng.gen_bool(probability.clamp(0.0, 1.0))
    }

    fn index(&mut self, range: Range<usize>) -> usize {
        self.rng.gen_range(range)
    }
}

/// Noise that never fires; trending becomes a plain score sort
#[derive(Debug, Clone, Copy, Default)]
pub struct NoNoise;

impl TrendingNoise for NoNoise {
    fn chance(&mut self, _probability: f64) -> bool {
        false
    }

    fn index(&mut self, range: Range<usize>) -> usize {
        range.start
    }
}
