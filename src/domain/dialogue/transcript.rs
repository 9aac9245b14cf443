//! Append-only message log.

use serde::Serialize;

use super::message::Message;

/// Ordered log of every message in a conversation.
///
/// Messages can only be appended; nothing is ever edited or removed.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Messages appended at or after position `from`.
    pub fn since(&self, from: usize) -> &[Message] {
        self.messages.get(from..).unwrap_or(&[])
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
