//! Scripted random source for tests.
//!
//! Returns queued values in order, then falls back to fixed defaults.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::ports::RandomSource;

#[derive(Debug, Default)]
struct Script {
    units: VecDeque<f64>,
    numbers: VecDeque<u32>,
    draws: usize,
}

/// Deterministic random source.
///
/// With nothing queued, `next_unit` returns the fallback (0.5 unless set,
/// which never trips the default 5% failure rate) and `next_below` returns 0.
#[derive(Debug, Clone)]
pub struct ScriptedRandomSource {
    script: Arc<Mutex<Script>>,
    fallback_unit: f64,
}

impl Default for ScriptedRandomSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ScriptedRandomSource {
    pub fn new() -> Self {
        Self {
            script: Arc::new(Mutex::new(Script::default())),
            fallback_unit: 0.5,
        }
    }

    /// Queues values for `next_unit`.
    pub fn with_units(self, units: impl IntoIterator<Item = f64>) -> Self {
        self.lock().units.extend(units);
        self
    }

    /// Queues values for `next_below` (reduced modulo the bound).
    pub fn with_numbers(self, numbers: impl IntoIterator<Item = u32>) -> Self {
        self.lock().numbers.extend(numbers);
        self
    }

    /// Value returned by `next_unit` once the queue is empty.
    pub fn with_fallback_unit(mut self, unit: f64) -> Self {
        self.fallback_unit = unit;
        self
    }

    /// Number of draws made so far.
    pub fn draw_count(&self) -> usize {
        self.lock().draws
    }

    fn lock(&self) -> MutexGuard<'_, Script> {
        self.script.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl RandomSource for ScriptedRandomSource {
    fn next_unit(&self) -> f64 {
        let mut script = self.lock();
        script.draws += 1;
        script.units.pop_front().unwrap_or(self.fallback_unit)
    }

    fn next_below(&self, bound: u32) -> u32 {
        let mut script = self.lock();
        script.draws += 1;
        script.numbers.pop_front().unwrap_or(0) % bound.max(1)
    }
}
