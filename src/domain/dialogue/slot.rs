//! Slot-filling state machine.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::StateMachine;

/// Which piece of information the assistant is waiting for, if any.
///
/// - `Idle`: nothing pending, the next input is a fresh request
/// - `AwaitingOrderId`: the intent is known, the order number is not
/// - `AwaitingReason`: the order is cancellable, waiting for the reason
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PendingSlot {
    #[default]
    Idle,
    AwaitingOrderId,
    AwaitingReason,
}

impl PendingSlot {
    /// Returns true while a slot is being collected.
    pub fn is_pending(&self) -> bool {
        !matches!(self, Self::Idle)
    }
}

impl StateMachine for PendingSlot {
    fn can_transition_to(&self, target: &Self) -> bool {
        use PendingSlot::*;
        matches!(
            (self, target),
            // Fresh turns end idle, ask for an id, or (after a lookup) ask for a reason
            (Idle, Idle) | (Idle, AwaitingOrderId) | (Idle, AwaitingReason) |
            // Bad or unknown ids re-prompt; a good one is handed to the lookup
            (AwaitingOrderId, AwaitingOrderId) | (AwaitingOrderId, Idle) |
            // The reason is consumed by the cancellation request
            (AwaitingReason, Idle)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use PendingSlot::*;
        match self {
            Idle => vec![Idle, AwaitingOrderId, AwaitingReason],
            AwaitingOrderId => vec![AwaitingOrderId, Idle],
            AwaitingReason => vec![Idle],
        }
    }
}
