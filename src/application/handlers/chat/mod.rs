//! Chat handlers - open a conversation, run a turn, read the transcript.

mod get_transcript;
mod start_conversation;
mod submit_message;

pub use get_transcript::{GetTranscriptHandler, GetTranscriptQuery, GetTranscriptResult};
pub use start_conversation::{
    StartConversationCommand, StartConversationError, StartConversationHandler,
    StartConversationResult,
};
pub use submit_message::{
    PacingConfig, SubmitMessageCommand, SubmitMessageError, SubmitMessageHandler,
    SubmitMessageResult,
};
