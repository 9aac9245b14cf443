//! DialogueSession - the scripted assistant's turn logic.
//!
//! Pure transitions over [`SessionState`]: a turn starts with
//! [`DialogueSession::begin_turn`], which either answers straight away or
//! asks the caller to run an order-service request. The request's outcome
//! goes back through [`DialogueSession::after_lookup`] or
//! [`DialogueSession::after_cancellation`]. No I/O happens here.
//!
//! ```text
//!   Idle ──status/cancel, no id──▶ AwaitingOrderId ──bad id──▶ AwaitingOrderId
//!    │                                  │
//!    └──────── valid id ──▶ lookup ◀────┘
//!                            │  not found ──▶ AwaitingOrderId
//!                            │  cancel, not delivered ──▶ AwaitingReason ──reason──▶ cancel ──▶ Idle
//!                            └─ anything else ──▶ Idle
//! ```

use super::formatter::ResponseFormatter;
use super::intent::{Intent, IntentRecognizer};
use super::message::MessageKind;
use super::slot::PendingSlot;
use super::state::SessionState;
use crate::domain::order::{CancellationReceipt, OrderId, OrderRecord};

/// How an order-service request failed, as far as the dialogue cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceFailure {
    /// The order id is unknown to the backend.
    NotFound,
    /// Backend instability; not retried automatically.
    Transient,
    /// Any other failure.
    Unexpected,
}

/// When a reply should become visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pacing {
    /// Right after the typing delay.
    Immediate,
    /// After a further short pause, as a separate follow-up.
    FollowUp,
}

/// An assistant message the turn wants to emit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub kind: Option<MessageKind>,
    pub pacing: Pacing,
}

impl Reply {
    fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: None,
            pacing: Pacing::Immediate,
        }
    }

    fn success(text: impl Into<String>) -> Self {
        Self {
            kind: Some(MessageKind::Success),
            ..Self::plain(text)
        }
    }

    fn error(text: impl Into<String>) -> Self {
        Self {
            kind: Some(MessageKind::Error),
            ..Self::plain(text)
        }
    }

    fn follow_up(text: impl Into<String>) -> Self {
        Self {
            pacing: Pacing::FollowUp,
            ..Self::plain(text)
        }
    }
}

/// Resulting state plus the replies to emit, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: SessionState,
    pub replies: Vec<Reply>,
}

impl Transition {
    fn new(state: SessionState, reply: Reply) -> Self {
        Self {
            state,
            replies: vec![reply],
        }
    }
}

/// What to do after a user turn has been read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Nothing to fetch; emit the replies.
    Reply(Transition),
    /// Fetch the order, then call [`DialogueSession::after_lookup`].
    LookupOrder {
        state: SessionState,
        intent: Intent,
        order_id: OrderId,
    },
    /// Cancel the order, then call [`DialogueSession::after_cancellation`].
    CancelOrder {
        state: SessionState,
        order_id: OrderId,
        reason: String,
    },
}

/// The dialogue state machine.
#[derive(Debug, Clone, Copy, Default)]
pub struct DialogueSession {
    recognizer: IntentRecognizer,
    formatter: ResponseFormatter,
}

impl DialogueSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn formatter(&self) -> &ResponseFormatter {
        &self.formatter
    }

    /// Reads one user turn against the current state.
    ///
    /// `text` is expected trimmed and non-empty.
    pub fn begin_turn(&self, state: &SessionState, text: &str) -> Step {
        match (state.pending_slot(), state.intent(), state.order_id()) {
            (PendingSlot::AwaitingOrderId, Some(intent), _) => {
                let candidate = self
                    .recognizer
                    .extract_order_id(text)
                    .unwrap_or_else(|| text.to_uppercase());
                self.resolve_order_and_proceed(state, intent, &candidate)
            }
            (PendingSlot::AwaitingReason, _, Some(order_id)) => Step::CancelOrder {
                state: state.advance(SessionState::resolving(Intent::Cancel, order_id.clone())),
                order_id: order_id.clone(),
                reason: text.to_string(),
            },
            _ => self.fresh_turn(state, text),
        }
    }

    /// Validates `candidate` and either re-prompts or requests the lookup.
    ///
    /// Shared by fresh turns that carry an id and by the order-id slot.
    pub fn resolve_order_and_proceed(
        &self,
        state: &SessionState,
        intent: Intent,
        candidate: &str,
    ) -> Step {
        match OrderId::parse(candidate) {
            Ok(order_id) => Step::LookupOrder {
                state: state.advance(SessionState::resolving(intent, order_id.clone())),
                intent,
                order_id,
            },
            Err(_) => Step::Reply(Transition::new(
                state.advance(SessionState::awaiting_order_id(intent)),
                Reply::error(self.formatter.invalid_order_id()),
            )),
        }
    }

    /// Continues a turn once the order lookup has finished.
    pub fn after_lookup(
        &self,
        state: &SessionState,
        intent: Intent,
        order_id: &OrderId,
        result: Result<OrderRecord, ServiceFailure>,
    ) -> Transition {
        match (intent, result) {
            (Intent::Status, Ok(record)) => Transition::new(
                state.advance(SessionState::idle()),
                Reply::success(self.formatter.format_status(&record, order_id)),
            ),
            (Intent::Cancel, Ok(record)) if record.status.is_delivered() => Transition::new(
                state.advance(SessionState::idle()),
                Reply::error(self.formatter.already_delivered()),
            ),
            (Intent::Cancel, Ok(_)) => Transition::new(
                state.advance(SessionState::awaiting_reason(order_id.clone())),
                Reply::plain(self.formatter.reason_prompt()),
            ),
            (_, Err(ServiceFailure::NotFound)) => Transition::new(
                state.advance(SessionState::awaiting_order_id(intent)),
                Reply::error(self.formatter.order_not_found()),
            ),
            (_, Err(ServiceFailure::Transient)) => Transition::new(
                state.advance(SessionState::idle()),
                Reply::error(self.formatter.lookup_unavailable()),
            ),
            (_, Err(ServiceFailure::Unexpected)) => Transition::new(
                state.advance(SessionState::idle()),
                Reply::error(self.formatter.unexpected_failure()),
            ),
        }
    }

    /// Continues a turn once the cancellation request has finished.
    ///
    /// Every outcome except an unknown order ends the request; a transient
    /// failure clears the order just like it does for lookups.
    pub fn after_cancellation(
        &self,
        state: &SessionState,
        result: Result<CancellationReceipt, ServiceFailure>,
    ) -> Transition {
        match result {
            Ok(receipt) => Transition {
                state: state.advance(SessionState::idle()),
                replies: vec![
                    Reply::success(self.formatter.format_cancellation(&receipt)),
                    Reply::follow_up(self.formatter.anything_else()),
                ],
            },
            Err(ServiceFailure::NotFound) => Transition::new(
                state.advance(SessionState::awaiting_order_id(Intent::Cancel)),
                Reply::error(self.formatter.order_not_found()),
            ),
            Err(ServiceFailure::Transient) => Transition::new(
                state.advance(SessionState::idle()),
                Reply::error(self.formatter.cancellation_unavailable()),
            ),
            Err(ServiceFailure::Unexpected) => Transition::new(
                state.advance(SessionState::idle()),
                Reply::error(self.formatter.unexpected_failure()),
            ),
        }
    }

    fn fresh_turn(&self, state: &SessionState, text: &str) -> Step {
        let Some(intent) = self.recognizer.detect_intent(text) else {
            return Step::Reply(Transition::new(
                state.advance(SessionState::idle()),
                Reply::plain(self.formatter.out_of_scope()),
            ));
        };

        match self.recognizer.extract_order_id(text) {
            Some(candidate) => self.resolve_order_and_proceed(state, intent, &candidate),
            None => Step::Reply(Transition::new(
                state.advance(SessionState::awaiting_order_id(intent)),
                Reply::plain(self.formatter.order_id_prompt(intent)),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::{LineItem, ReturnId};

    fn session() -> DialogueSession {
        DialogueSession::new()
    }

    fn id(raw: &str) -> OrderId {
        OrderId::parse(raw).unwrap()
    }

    fn shipped() -> OrderRecord {
        OrderRecord::new("shipped", "2025-06-21 by 6:00 PM")
            .with_item(LineItem::new("Wireless Headphones", 1, 99.99))
    }

    fn delivered() -> OrderRecord {
        OrderRecord::new("delivered", "Delivered on 2025-06-18")
            .with_item(LineItem::new("Bluetooth Speaker", 1, 79.99))
    }

    fn expect_reply(step: Step) -> Transition {
        match step {
            Step::Reply(transition) => transition,
            other => panic!("expected a direct reply, got {:?}", other),
        }
    }

    mod fresh_turns {
        use super::*;

        #[test]
        fn small_talk_is_deflected() {
            let t = expect_reply(session().begin_turn(&SessionState::idle(), "hello"));
            assert!(t.state.is_reset());
            assert_eq!(t.replies.len(), 1);
            assert_eq!(t.replies[0].kind, None);
            assert!(t.replies[0].text.starts_with("I specialize in"));
        }

        #[test]
        fn status_without_id_asks_for_it() {
            let t = expect_reply(session().begin_turn(&SessionState::idle(), "Where is my order?"));
            assert_eq!(t.state, SessionState::awaiting_order_id(Intent::Status));
            assert!(t.replies[0].text.contains("order number"));
        }

        #[test]
        fn cancel_without_id_asks_for_it() {
            let t = expect_reply(session().begin_turn(&SessionState::idle(), "I want to cancel my order"));
            assert_eq!(t.state, SessionState::awaiting_order_id(Intent::Cancel));
        }

        #[test]
        fn status_with_id_requests_lookup() {
            let step = session().begin_turn(&SessionState::idle(), "status ORD-11111");
            assert_eq!(
                step,
                Step::LookupOrder {
                    state: SessionState::resolving(Intent::Status, id("ORD-11111")),
                    intent: Intent::Status,
                    order_id: id("ORD-11111"),
                }
            );
        }

        #[test]
        fn cancel_with_bare_digits_requests_lookup() {
            match session().begin_turn(&SessionState::idle(), "cancel 67890") {
                Step::LookupOrder { intent, order_id, .. } => {
                    assert_eq!(intent, Intent::Cancel);
                    assert_eq!(order_id, id("ORD-67890"));
                }
                other => panic!("unexpected step {:?}", other),
            }
        }
    }

    mod awaiting_order_id {
        use super::*;

        #[test]
        fn invalid_id_reprompts_and_keeps_intent() {
            let state = SessionState::awaiting_order_id(Intent::Cancel);
            let t = expect_reply(session().begin_turn(&state, "not sure"));
            assert_eq!(t.state, state);
            assert_eq!(t.replies[0].kind, Some(MessageKind::Error));
            assert!(t.replies[0].text.contains("ORD-12345"));
        }

        #[test]
        fn repeated_invalid_ids_emit_the_same_reprompt() {
            let state = SessionState::awaiting_order_id(Intent::Status);
            let first = expect_reply(session().begin_turn(&state, "abc"));
            let second = expect_reply(session().begin_turn(&first.state, "ORD-12"));
            assert_eq!(first.replies, second.replies);
            assert_eq!(second.state.intent(), Some(Intent::Status));
        }

        #[test]
        fn lowercase_canonical_id_is_accepted() {
            let state = SessionState::awaiting_order_id(Intent::Status);
            match session().begin_turn(&state, "ord-12345") {
                Step::LookupOrder { order_id, .. } => assert_eq!(order_id, id("ORD-12345")),
                other => panic!("unexpected step {:?}", other),
            }
        }

        #[test]
        fn keywords_are_ignored_while_waiting_for_an_id() {
            let state = SessionState::awaiting_order_id(Intent::Status);
            match session().begin_turn(&state, "cancel 55555") {
                Step::LookupOrder { intent, .. } => assert_eq!(intent, Intent::Status),
                other => panic!("unexpected step {:?}", other),
            }
        }
    }

    mod lookups {
        use super::*;

        fn resolving(intent: Intent, raw: &str) -> SessionState {
            SessionState::resolving(intent, id(raw))
        }

        #[test]
        fn status_success_formats_record_and_resets() {
            let state = resolving(Intent::Status, "ORD-12345");
            let t = session().after_lookup(&state, Intent::Status, &id("ORD-12345"), Ok(shipped()));
            assert!(t.state.is_reset());
            assert_eq!(t.replies.len(), 1);
            assert_eq!(t.replies[0].kind, Some(MessageKind::Success));
            assert!(t.replies[0].text.contains("ORD-12345"));
        }

        #[test]
        fn cancel_of_open_order_asks_for_reason() {
            let state = resolving(Intent::Cancel, "ORD-67890");
            let record = OrderRecord::new("processing", "2025-06-22 by 5:00 PM");
            let t = session().after_lookup(&state, Intent::Cancel, &id("ORD-67890"), Ok(record));
            assert_eq!(t.state, SessionState::awaiting_reason(id("ORD-67890")));
            assert_eq!(t.replies[0].kind, None);
            assert!(t.replies[0].text.contains("reason"));
        }

        #[test]
        fn cancel_of_delivered_order_points_to_returns() {
            let state = resolving(Intent::Cancel, "ORD-11111");
            let t = session().after_lookup(&state, Intent::Cancel, &id("ORD-11111"), Ok(delivered()));
            assert!(t.state.is_reset());
            assert_eq!(t.replies.len(), 1);
            assert_eq!(t.replies[0].kind, Some(MessageKind::Error));
            assert!(t.replies[0].text.contains("returns portal"));
        }

        #[test]
        fn not_found_reprompts_with_same_intent() {
            let state = resolving(Intent::Cancel, "ORD-99999");
            let t = session().after_lookup(
                &state,
                Intent::Cancel,
                &id("ORD-99999"),
                Err(ServiceFailure::NotFound),
            );
            assert_eq!(t.state, SessionState::awaiting_order_id(Intent::Cancel));
            assert!(t.replies[0].text.contains("specialist"));
        }

        #[test]
        fn transient_failure_abandons_the_order() {
            let state = resolving(Intent::Status, "ORD-12345");
            let t = session().after_lookup(
                &state,
                Intent::Status,
                &id("ORD-12345"),
                Err(ServiceFailure::Transient),
            );
            assert!(t.state.is_reset());
            assert!(t.replies[0].text.contains("human agent"));
        }

        #[test]
        fn unexpected_failure_uses_generic_apology() {
            let state = resolving(Intent::Status, "ORD-12345");
            let t = session().after_lookup(
                &state,
                Intent::Status,
                &id("ORD-12345"),
                Err(ServiceFailure::Unexpected),
            );
            assert!(t.state.is_reset());
            assert_eq!(t.replies[0].text, "Sorry, something went wrong. Please try again.");
        }
    }

    mod cancellations {
        use super::*;

        fn receipt() -> CancellationReceipt {
            CancellationReceipt {
                return_id: ReturnId::from_number(4821),
                instructions: "Refuse delivery.".to_string(),
            }
        }

        #[test]
        fn reason_turn_requests_cancellation() {
            let state = SessionState::awaiting_reason(id("ORD-67890"));
            match session().begin_turn(&state, "wrong size") {
                Step::CancelOrder { state, order_id, reason } => {
                    assert_eq!(state.pending_slot(), PendingSlot::Idle);
                    assert_eq!(order_id, id("ORD-67890"));
                    assert_eq!(reason, "wrong size");
                }
                other => panic!("unexpected step {:?}", other),
            }
        }

        #[test]
        fn success_confirms_then_follows_up() {
            let state = SessionState::resolving(Intent::Cancel, id("ORD-67890"));
            let t = session().after_cancellation(&state, Ok(receipt()));
            assert!(t.state.is_reset());
            assert_eq!(t.replies.len(), 2);
            assert_eq!(t.replies[0].kind, Some(MessageKind::Success));
            assert!(t.replies[0].text.contains("RET-4821"));
            assert_eq!(t.replies[1].pacing, Pacing::FollowUp);
            assert!(t.replies[1].text.contains("anything else"));
        }

        #[test]
        fn transient_failure_offers_phone_line_and_resets() {
            let state = SessionState::resolving(Intent::Cancel, id("ORD-67890"));
            let t = session().after_cancellation(&state, Err(ServiceFailure::Transient));
            assert!(t.state.is_reset());
            assert_eq!(t.replies.len(), 1);
            assert!(t.replies[0].text.contains("1-800-555-1234"));
        }
    }
}
