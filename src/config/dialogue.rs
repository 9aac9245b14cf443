//! Dialogue pacing configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use super::MAX_DELAY_MS;
use crate::application::PacingConfig;

/// How long the assistant "types" before replying
#[derive(Debug, Clone, Deserialize)]
pub struct DialogueConfig {
    /// Delay before each turn's replies, in milliseconds
    #[serde(default = "default_typing_delay_ms")]
    pub typing_delay_ms: u64,

    /// Extra delay before a follow-up reply, in milliseconds
    #[serde(default = "default_follow_up_delay_ms")]
    pub follow_up_delay_ms: u64,
}

impl DialogueConfig {
    pub fn pacing(&self) -> PacingConfig {
        PacingConfig {
            typing_delay: Duration::from_millis(self.typing_delay_ms),
            follow_up_delay: Duration::from_millis(self.follow_up_delay_ms),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.typing_delay_ms > MAX_DELAY_MS {
            return Err(ValidationError::DelayTooLong("dialogue.typing_delay_ms"));
        }
        if self.follow_up_delay_ms > MAX_DELAY_MS {
            return Err(ValidationError::DelayTooLong("dialogue.follow_up_delay_ms"));
        }
        Ok(())
    }
}

impl Default for DialogueConfig {
    fn default() -> Self {
        Self {
            typing_delay_ms: default_typing_delay_ms(),
            follow_up_delay_ms: default_follow_up_delay_ms(),
        }
    }
}

fn default_typing_delay_ms() -> u64 {
    1500
}

fn default_follow_up_delay_ms() -> u64 {
    500
}
