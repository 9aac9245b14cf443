//! Message entity for the chat transcript.
//!
//! Messages are immutable records of user/assistant exchanges.
//! Each message has an author, text, timestamp and an optional kind
//! the renderer uses to pick an icon.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::foundation::{DomainError, Timestamp};

/// Unique identifier for a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(Uuid);

impl MessageId {
    /// Creates a new random MessageId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for MessageId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for MessageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Who wrote a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Author {
    User,
    Assistant,
}

/// Presentation hint attached to assistant messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    Status,
    Cancellation,
    Error,
    Success,
}

/// An immutable chat message.
///
/// # Invariants
///
/// - `text` is non-empty (validated at construction)
/// - user messages never carry a kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    id: MessageId,
    text: String,
    author: Author,
    timestamp: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    kind: Option<MessageKind>,
}

impl Message {
    /// Creates a user message.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if text is blank
    pub fn user(text: impl Into<String>, timestamp: Timestamp) -> Result<Self, DomainError> {
        Self::new(Author::User, text.into(), None, timestamp)
    }

    /// Creates an assistant message.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if text is blank
    pub fn assistant(
        text: impl Into<String>,
        kind: Option<MessageKind>,
        timestamp: Timestamp,
    ) -> Result<Self, DomainError> {
        Self::new(Author::Assistant, text.into(), kind, timestamp)
    }

    fn new(
        author: Author,
        text: String,
        kind: Option<MessageKind>,
        timestamp: Timestamp,
    ) -> Result<Self, DomainError> {
        if text.trim().is_empty() {
            return Err(DomainError::validation("text", "Message text cannot be empty"));
        }
        Ok(Self {
            id: MessageId::new(),
            text,
            author,
            timestamp,
            kind,
        })
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &MessageId {
        &self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn author(&self) -> Author {
        self.author
    }

    pub fn timestamp(&self) -> &Timestamp {
        &self.timestamp
    }

    pub fn kind(&self) -> Option<MessageKind> {
        self.kind
    }

    pub fn is_user(&self) -> bool {
        self.author == Author::User
    }

    pub fn is_assistant(&self) -> bool {
        self.author == Author::Assistant
    }
}
