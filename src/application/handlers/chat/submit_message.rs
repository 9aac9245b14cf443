//! SubmitMessageHandler - Run one user turn through the dialogue.
//!
//! A turn is: record the user's message, show typing for the configured
//! delay, let the dialogue decide, call the order service if it asked to,
//! then append the replies. Follow-up replies wait a little longer so they
//! read as separate messages.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::application::ChatSession;
use crate::domain::dialogue::{
    DialogueSession, Message, Pacing, ServiceFailure, SessionState, Step, Transition,
};
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::{Clock, OrderService, OrderServiceError};

/// Delays applied while the assistant "types".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PacingConfig {
    /// Pause before a turn's first reply.
    pub typing_delay: Duration,
    /// Extra pause before each follow-up reply.
    pub follow_up_delay: Duration,
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            typing_delay: Duration::from_millis(1500),
            follow_up_delay: Duration::from_millis(500),
        }
    }
}

/// Command to submit a user message
#[derive(Debug, Clone)]
pub struct SubmitMessageCommand {
    pub text: String,
}

impl SubmitMessageCommand {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Result of a completed turn
#[derive(Debug, Clone)]
pub struct SubmitMessageResult {
    /// The recorded user message.
    pub user_message: Message,
    /// Assistant messages appended this turn, in order.
    pub replies: Vec<Message>,
    /// Dialogue state after the turn.
    pub state: SessionState,
}

/// Error type for submitting messages
#[derive(Debug, Clone)]
pub enum SubmitMessageError {
    /// Input was empty after trimming; nothing was recorded.
    EmptyInput,
    /// Another turn is still in flight.
    Busy,
    /// Domain error
    Domain(DomainError),
}

impl SubmitMessageError {
    pub fn code(&self) -> ErrorCode {
        match self {
            SubmitMessageError::EmptyInput => ErrorCode::EmptyField,
            SubmitMessageError::Busy => ErrorCode::TurnInProgress,
            SubmitMessageError::Domain(err) => err.code,
        }
    }
}

impl std::fmt::Display for SubmitMessageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmitMessageError::EmptyInput => write!(f, "Message text cannot be empty"),
            SubmitMessageError::Busy => write!(f, "The assistant is still replying"),
            SubmitMessageError::Domain(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for SubmitMessageError {}

impl From<DomainError> for SubmitMessageError {
    fn from(err: DomainError) -> Self {
        SubmitMessageError::Domain(err)
    }
}

/// Handler for user turns
pub struct SubmitMessageHandler {
    orders: Arc<dyn OrderService>,
    clock: Arc<dyn Clock>,
    dialogue: DialogueSession,
    pacing: PacingConfig,
}

impl SubmitMessageHandler {
    pub fn new(orders: Arc<dyn OrderService>, clock: Arc<dyn Clock>) -> Self {
        Self::with_pacing(orders, clock, PacingConfig::default())
    }

    pub fn with_pacing(
        orders: Arc<dyn OrderService>,
        clock: Arc<dyn Clock>,
        pacing: PacingConfig,
    ) -> Self {
        Self {
            orders,
            clock,
            dialogue: DialogueSession::new(),
            pacing,
        }
    }

    pub fn pacing(&self) -> PacingConfig {
        self.pacing
    }

    pub async fn handle(
        &self,
        session: &ChatSession,
        cmd: SubmitMessageCommand,
    ) -> Result<SubmitMessageResult, SubmitMessageError> {
        // 1. Blank input never reaches the transcript
        let text = cmd.text.trim();
        if text.is_empty() {
            return Err(SubmitMessageError::EmptyInput);
        }

        // 2. One turn at a time
        let mut turn = session.begin_turn().ok_or(SubmitMessageError::Busy)?;

        // 3. Record the user's message
        let user_message = Message::user(text, self.clock.now())?;
        session.append(user_message.clone()).await;
        info!(
            message_id = %user_message.id(),
            slot = ?turn.state().pending_slot(),
            "Handling user turn"
        );

        // 4. Typing indicator
        self.clock.sleep(self.pacing.typing_delay).await;

        // 5. Decide, calling the order service if needed
        let transition = self.run_step(turn.state(), text).await;

        // 6. Emit replies
        let mut replies = Vec::with_capacity(transition.replies.len());
        for reply in transition.replies {
            if reply.pacing == Pacing::FollowUp {
                self.clock.sleep(self.pacing.follow_up_delay).await;
            }
            let message = Message::assistant(reply.text, reply.kind, self.clock.now())?;
            session.append(message.clone()).await;
            replies.push(message);
        }

        // 7. Commit the new state
        debug!(slot = ?transition.state.pending_slot(), "Turn complete");
        turn.commit(transition.state.clone());

        Ok(SubmitMessageResult {
            user_message,
            replies,
            state: transition.state,
        })
    }

    async fn run_step(&self, state: &SessionState, text: &str) -> Transition {
        match self.dialogue.begin_turn(state, text) {
            Step::Reply(transition) => transition,
            Step::LookupOrder {
                state,
                intent,
                order_id,
            } => {
                debug!(%order_id, ?intent, "Requesting order lookup");
                let result = self
                    .orders
                    .get_order_status(&order_id)
                    .await
                    .map_err(|err| Self::failure(&err));
                self.dialogue.after_lookup(&state, intent, &order_id, result)
            }
            Step::CancelOrder {
                state,
                order_id,
                reason,
            } => {
                debug!(%order_id, "Requesting cancellation");
                let result = self
                    .orders
                    .cancel_order(&order_id, &reason)
                    .await
                    .map_err(|err| Self::failure(&err));
                self.dialogue.after_cancellation(&state, result)
            }
        }
    }

    fn failure(err: &OrderServiceError) -> ServiceFailure {
        warn!(
            error = %err,
            code = %err.error_code(),
            status = err.status_code(),
            retryable = err.is_retryable(),
            "Order service call failed"
        );
        ServiceFailure::from(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{demo_catalog, ManualClock, ScriptedRandomSource, SimulatedOrderService};
    use crate::domain::dialogue::{Intent, MessageKind, PendingSlot, ResponseFormatter};
    use crate::domain::foundation::Timestamp;
    use crate::domain::order::{CancellationReceipt, OrderId, OrderRecord};
    use async_trait::async_trait;

    // ════════════════════════════════════════════════════════════════════════
    // Fixtures
    // ════════════════════════════════════════════════════════════════════════

    struct Fixture {
        clock: ManualClock,
        handler: SubmitMessageHandler,
        session: ChatSession,
    }

    fn fixture_with(random: ScriptedRandomSource) -> Fixture {
        let clock = ManualClock::default();
        let orders = SimulatedOrderService::new(Arc::new(clock.clone()), Arc::new(random))
            .with_catalog(demo_catalog());
        let handler = SubmitMessageHandler::new(Arc::new(orders), Arc::new(clock.clone()));
        let session = ChatSession::with_greeting(
            Message::assistant("Hi!", None, Timestamp::now()).unwrap(),
        );
        Fixture {
            clock,
            handler,
            session,
        }
    }

    fn fixture() -> Fixture {
        fixture_with(ScriptedRandomSource::new())
    }

    fn formatter() -> ResponseFormatter {
        ResponseFormatter::new()
    }

    /// Order service whose every call fails unexpectedly.
    struct BrokenOrderService;

    #[async_trait]
    impl OrderService for BrokenOrderService {
        async fn get_order_status(&self, _: &OrderId) -> Result<OrderRecord, OrderServiceError> {
            Err(OrderServiceError::Unexpected("malformed payload".into()))
        }

        async fn cancel_order(
            &self,
            _: &OrderId,
            _: &str,
        ) -> Result<CancellationReceipt, OrderServiceError> {
            Err(OrderServiceError::Unexpected("malformed payload".into()))
        }
    }

    // ════════════════════════════════════════════════════════════════════════
    // Input handling
    // ════════════════════════════════════════════════════════════════════════

    mod input {
        use super::*;

        #[tokio::test]
        async fn blank_input_is_rejected_without_a_trace() {
            let f = fixture();
            let err = f
                .handler
                .handle(&f.session, SubmitMessageCommand::new("   \t "))
                .await
                .unwrap_err();

            assert!(matches!(err, SubmitMessageError::EmptyInput));
            assert_eq!(err.code(), ErrorCode::EmptyField);
            assert_eq!(f.session.transcript().await.len(), 1);
            assert!(f.clock.sleeps().is_empty());
        }

        #[tokio::test]
        async fn user_text_is_recorded_trimmed() {
            let f = fixture();
            let result = f
                .handler
                .handle(&f.session, SubmitMessageCommand::new("  hello there  "))
                .await
                .unwrap();
            assert_eq!(result.user_message.text(), "hello there");
            assert!(result.user_message.is_user());
        }

        #[tokio::test]
        async fn submission_during_a_turn_is_busy() {
            let f = fixture();
            let _turn = f.session.begin_turn().unwrap();

            let err = f
                .handler
                .handle(&f.session, SubmitMessageCommand::new("track my order"))
                .await
                .unwrap_err();

            assert!(matches!(err, SubmitMessageError::Busy));
            assert_eq!(err.code(), ErrorCode::TurnInProgress);
            assert_eq!(f.session.transcript().await.len(), 1);
        }
    }

    // ════════════════════════════════════════════════════════════════════════
    // Turn flow
    // ════════════════════════════════════════════════════════════════════════

    mod flow {
        use super::*;

        #[tokio::test]
        async fn status_request_without_id_prompts_for_it() {
            let f = fixture();
            let result = f
                .handler
                .handle(&f.session, SubmitMessageCommand::new("where is my order?"))
                .await
                .unwrap();

            assert_eq!(result.replies.len(), 1);
            assert_eq!(
                result.replies[0].text(),
                formatter().order_id_prompt(Intent::Status)
            );
            assert_eq!(result.state, SessionState::awaiting_order_id(Intent::Status));
            assert_eq!(f.session.try_state(), Some(result.state.clone()));
            assert!(!f.session.is_typing());
        }

        #[tokio::test]
        async fn status_with_id_looks_up_the_order() {
            let f = fixture();
            let result = f
                .handler
                .handle(&f.session, SubmitMessageCommand::new("status of ORD-12345"))
                .await
                .unwrap();

            let reply = &result.replies[0];
            assert_eq!(reply.kind(), Some(MessageKind::Success));
            assert!(reply.text().contains("Order ORD-12345"));
            assert!(result.state.is_reset());
            assert_eq!(
                f.clock.sleeps(),
                vec![Duration::from_millis(1500), Duration::from_millis(1000)]
            );
        }

        #[tokio::test]
        async fn cancellation_success_adds_a_delayed_follow_up() {
            let random = ScriptedRandomSource::new().with_numbers([4821]);
            let f = fixture_with(random);

            f.handler
                .handle(&f.session, SubmitMessageCommand::new("cancel ORD-67890"))
                .await
                .unwrap();
            assert_eq!(f.session.try_state().unwrap().pending_slot(), PendingSlot::AwaitingReason);

            let result = f
                .handler
                .handle(&f.session, SubmitMessageCommand::new("ordered by mistake"))
                .await
                .unwrap();

            assert_eq!(result.replies.len(), 2);
            assert!(result.replies[0].text().contains("Return ID: RET-4821."));
            assert_eq!(result.replies[1].text(), formatter().anything_else());
            assert!(result.state.is_reset());
            assert_eq!(
                f.clock.sleeps().last().copied(),
                Some(Duration::from_millis(500))
            );
            assert!(result.replies[1].timestamp().as_datetime() > result.replies[0].timestamp().as_datetime());
        }

        #[tokio::test]
        async fn transient_lookup_failure_resets_the_dialogue() {
            let random = ScriptedRandomSource::new().with_units([0.01]);
            let f = fixture_with(random);

            let result = f
                .handler
                .handle(&f.session, SubmitMessageCommand::new("track ORD-12345"))
                .await
                .unwrap();

            assert_eq!(result.replies[0].text(), formatter().lookup_unavailable());
            assert_eq!(result.replies[0].kind(), Some(MessageKind::Error));
            assert!(result.state.is_reset());
        }

        #[tokio::test]
        async fn unexpected_failure_uses_the_generic_apology() {
            let clock = ManualClock::default();
            let handler = SubmitMessageHandler::with_pacing(
                Arc::new(BrokenOrderService),
                Arc::new(clock),
                PacingConfig {
                    typing_delay: Duration::ZERO,
                    follow_up_delay: Duration::ZERO,
                },
            );
            let session =
                ChatSession::with_greeting(Message::assistant("Hi!", None, Timestamp::now()).unwrap());

            let result = handler
                .handle(&session, SubmitMessageCommand::new("track ORD-12345"))
                .await
                .unwrap();

            assert_eq!(result.replies[0].text(), formatter().unexpected_failure());
            assert!(result.state.is_reset());
        }

        #[tokio::test]
        async fn transcript_grows_by_user_then_replies() {
            let f = fixture();
            f.handler
                .handle(&f.session, SubmitMessageCommand::new("what's the weather?"))
                .await
                .unwrap();

            let transcript = f.session.transcript().await;
            assert_eq!(transcript.len(), 3);
            assert!(transcript.messages()[1].is_user());
            assert_eq!(transcript.messages()[2].text(), formatter().out_of_scope());
        }
    }
}
