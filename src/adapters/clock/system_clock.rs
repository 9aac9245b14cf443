//! System clock backed by the tokio timer.

use async_trait::async_trait;
use std::time::Duration;

use crate::domain::foundation::Timestamp;
use crate::ports::Clock;

/// Real time; `sleep` suspends on the tokio timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::now()
    }

    async fn sleep(&self, duration: Duration) {
        if !duration.is_zero() {
            tokio::time::sleep(duration).await;
        }
    }
}
