//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer drives the dialogue state machine: it runs the order-service
//! requests the domain asks for, paces replies on the injected clock and
//! keeps one turn in flight per conversation.

pub mod chat_session;
pub mod handlers;

pub use chat_session::ChatSession;
pub use handlers::{
    GetTranscriptHandler, GetTranscriptQuery, GetTranscriptResult, PacingConfig,
    StartConversationCommand, StartConversationError, StartConversationHandler,
    StartConversationResult, SubmitMessageCommand, SubmitMessageError, SubmitMessageHandler,
    SubmitMessageResult,
};
