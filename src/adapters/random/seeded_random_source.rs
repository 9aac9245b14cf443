//! `StdRng`-backed random source.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::{Mutex, MutexGuard};

use crate::ports::RandomSource;

/// Random source over a seedable `StdRng`.
///
/// The same seed always yields the same sequence of draws.
#[derive(Debug)]
pub struct SeededRandomSource {
    rng: Mutex<StdRng>,
}

impl SeededRandomSource {
    /// Reproducible source.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Source seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    fn rng(&self) -> MutexGuard<'_, StdRng> {
        self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl RandomSource for SeededRandomSource {
    fn next_unit(&self) -> f64 {
        self.rng().gen::<f64>()
    }

    fn next_below(&self, bound: u32) -> u32 {
        self.rng().gen_range(0..bound.max(1))
    }
}
