//! Clock Port - Time source for timestamps and simulated delays.
//!
//! Everything that waits (typing indicator, backend latency) or stamps a
//! message goes through this port, so tests can swap in a clock that
//! never actually sleeps.

use async_trait::async_trait;
use std::time::Duration;

use crate::domain::foundation::Timestamp;

/// Port for reading the time and waiting.
#[async_trait]
pub trait Clock: Send + Sync {
    /// Current time.
    fn now(&self) -> Timestamp;

    /// Suspends the caller for `duration`.
    async fn sleep(&self, duration: Duration);
}
