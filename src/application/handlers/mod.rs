//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod chat;

pub use chat::{
    // Commands and Results
    GetTranscriptHandler,
    GetTranscriptQuery,
    GetTranscriptResult,
    PacingConfig,
    StartConversationCommand,
    StartConversationError,
    StartConversationHandler,
    StartConversationResult,
    SubmitMessageCommand,
    SubmitMessageError,
    SubmitMessageHandler,
    SubmitMessageResult,
};
