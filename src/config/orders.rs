//! Simulated order service configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use super::MAX_DELAY_MS;

/// Behaviour of the simulated order-management backend
#[derive(Debug, Clone, Deserialize)]
pub struct OrdersConfig {
    /// Processing delay of every call, in milliseconds
    #[serde(default = "default_latency_ms")]
    pub latency_ms: u64,

    /// Share of calls that fail with a transient error
    #[serde(default = "default_failure_rate")]
    pub failure_rate: f64,

    /// Seed for reproducible failures and return ids
    pub seed: Option<u64>,
}

impl OrdersConfig {
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(0.0..=1.0).contains(&self.failure_rate) {
            return Err(ValidationError::InvalidFailureRate(self.failure_rate));
        }
        if self.latency_ms > MAX_DELAY_MS {
            return Err(ValidationError::DelayTooLong("orders.latency_ms"));
        }
        Ok(())
    }
}

impl Default for OrdersConfig {
    fn default() -> Self {
        Self {
            latency_ms: default_latency_ms(),
            failure_rate: default_failure_rate(),
            seed: None,
        }
    }
}

fn default_latency_ms() -> u64 {
    1000
}

fn default_failure_rate() -> f64 {
    0.05
}
