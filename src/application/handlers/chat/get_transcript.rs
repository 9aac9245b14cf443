//! GetTranscriptHandler - Read what a renderer has not shown yet.

use crate::application::ChatSession;
use crate::domain::dialogue::Message;

/// Query for transcript messages
#[derive(Debug, Clone, Copy, Default)]
pub struct GetTranscriptQuery {
    /// Index of the first message wanted.
    pub since: usize,
}

/// Transcript slice plus the typing indicator
#[derive(Debug, Clone)]
pub struct GetTranscriptResult {
    pub messages: Vec<Message>,
    /// Pass as `since` on the next poll.
    pub next_index: usize,
    pub is_typing: bool,
}

/// Handler for transcript reads
#[derive(Debug, Clone, Copy, Default)]
pub struct GetTranscriptHandler;

impl GetTranscriptHandler {
    pub fn new() -> Self {
        Self
    }

    pub async fn handle(&self, session: &ChatSession, query: GetTranscriptQuery) -> GetTranscriptResult {
        let is_typing = session.is_typing();
        let (messages, next_index) = session.messages_since(query.since).await;
        GetTranscriptResult {
            messages,
            next_index,
            is_typing,
        }
    }
}
