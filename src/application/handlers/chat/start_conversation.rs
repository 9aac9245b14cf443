//! StartConversationHandler - Open a conversation with the greeting.

use std::sync::Arc;

use crate::application::ChatSession;
use crate::domain::dialogue::{Message, ResponseFormatter};
use crate::domain::foundation::DomainError;
use crate::ports::Clock;

/// Command to open a conversation
#[derive(Debug, Clone, Default)]
pub struct StartConversationCommand {
    /// Replaces the standard greeting when set.
    pub greeting: Option<String>,
}

/// Result of opening a conversation
#[derive(Debug, Clone)]
pub struct StartConversationResult {
    pub session: Arc<ChatSession>,
    pub greeting: Message,
}

/// Error type for opening conversations
#[derive(Debug, Clone)]
pub enum StartConversationError {
    /// Domain error
    Domain(DomainError),
}

impl std::fmt::Display for StartConversationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StartConversationError::Domain(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for StartConversationError {}

impl From<DomainError> for StartConversationError {
    fn from(err: DomainError) -> Self {
        StartConversationError::Domain(err)
    }
}

/// Handler for opening conversations
pub struct StartConversationHandler {
    clock: Arc<dyn Clock>,
    formatter: ResponseFormatter,
}

impl StartConversationHandler {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            formatter: ResponseFormatter::new(),
        }
    }

    pub fn handle(
        &self,
        cmd: StartConversationCommand,
    ) -> Result<StartConversationResult, StartConversationError> {
        let text = cmd
            .greeting
            .unwrap_or_else(|| self.formatter.greeting().to_string());
        let greeting = Message::assistant(text, None, self.clock.now())?;

        tracing::info!(message_id = %greeting.id(), "Conversation started");

        Ok(StartConversationResult {
            session: Arc::new(ChatSession::with_greeting(greeting.clone())),
            greeting,
        })
    }
}
