//! Conversation-scoped dialogue state.

use serde::Serialize;

use super::intent::Intent;
use super::slot::PendingSlot;
use crate::domain::foundation::StateMachine;
use crate::domain::order::OrderId;

/// Everything the assistant remembers between turns.
///
/// Built only through the constructors below, which keep these invariants:
///
/// - `AwaitingOrderId` always has an intent
/// - `AwaitingReason` always has an order id and the `Cancel` intent
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct SessionState {
    pending_slot: PendingSlot,
    intent: Option<Intent>,
    order_id: Option<OrderId>,
}

impl SessionState {
    /// Nothing pending, no intent, no order.
    pub fn idle() -> Self {
        Self::default()
    }

    /// Waiting for an order number to serve `intent`.
    pub fn awaiting_order_id(intent: Intent) -> Self {
        Self {
            pending_slot: PendingSlot::AwaitingOrderId,
            intent: Some(intent),
            order_id: None,
        }
    }

    /// An order has been resolved for `intent` and is being looked up.
    pub fn resolving(intent: Intent, order_id: OrderId) -> Self {
        Self {
            pending_slot: PendingSlot::Idle,
            intent: Some(intent),
            order_id: Some(order_id),
        }
    }

    /// Waiting for the reason to cancel `order_id`.
    pub fn awaiting_reason(order_id: OrderId) -> Self {
        Self {
            pending_slot: PendingSlot::AwaitingReason,
            intent: Some(Intent::Cancel),
            order_id: Some(order_id),
        }
    }

    /// Moves to `next`, checking the slot transition in debug builds.
    pub fn advance(&self, next: SessionState) -> SessionState {
        debug_assert!(
            self.pending_slot.can_transition_to(&next.pending_slot),
            "illegal slot transition {:?} -> {:?}",
            self.pending_slot,
            next.pending_slot
        );
        next
    }

    pub fn pending_slot(&self) -> PendingSlot {
        self.pending_slot
    }

    pub fn intent(&self) -> Option<Intent> {
        self.intent
    }

    pub fn order_id(&self) -> Option<&OrderId> {
        self.order_id.as_ref()
    }

    /// True when no slot is pending and no request is remembered.
    pub fn is_reset(&self) -> bool {
        self.pending_slot == PendingSlot::Idle && self.intent.is_none() && self.order_id.is_none()
    }

    /// Checks the slot invariants.
    pub fn is_consistent(&self) -> bool {
        match self.pending_slot {
            PendingSlot::Idle => true,
            PendingSlot::AwaitingOrderId => self.intent.is_some(),
            PendingSlot::AwaitingReason => {
                self.order_id.is_some() && self.intent == Some(Intent::Cancel)
            }
        }
    }
}
