//! Cancellation receipts.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of the return opened for a cancelled order, e.g. `RET-4821`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReturnId(String);

impl ReturnId {
    /// Builds the id from the numeric part the backend allocated.
    pub fn from_number(n: u32) -> Self {
        Self(format!("RET-{}", n))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReturnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What the order-management system hands back after a cancellation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancellationReceipt {
    pub return_id: ReturnId,
    pub instructions: String,
}
