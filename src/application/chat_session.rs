//! ChatSession - one live conversation.
//!
//! Holds the dialogue state, the transcript and the typing flag. The state
//! sits behind an async mutex that doubles as the turn latch: whoever holds
//! it owns the in-flight turn, and a second submission is turned away
//! instead of queued. The transcript has its own lock so a renderer can
//! keep reading while a turn is running.

use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::{Mutex, MutexGuard, RwLock};

use crate::domain::dialogue::{Message, SessionState, Transcript};

/// A single conversation between one user and the assistant.
#[derive(Debug)]
pub struct ChatSession {
    state: Mutex<SessionState>,
    transcript: RwLock<Transcript>,
    typing: AtomicBool,
}

impl ChatSession {
    /// Opens a conversation whose first message is `greeting`.
    pub fn with_greeting(greeting: Message) -> Self {
        let mut transcript = Transcript::new();
        transcript.push(greeting);
        Self {
            state: Mutex::new(SessionState::idle()),
            transcript: RwLock::new(transcript),
            typing: AtomicBool::new(false),
        }
    }

    /// True while the assistant is working on a reply.
    pub fn is_typing(&self) -> bool {
        self.typing.load(Ordering::Acquire)
    }

    /// Current dialogue state, or `None` while a turn is in flight.
    pub fn try_state(&self) -> Option<SessionState> {
        self.state.try_lock().ok().map(|state| state.clone())
    }

    /// Copy of the full transcript.
    pub async fn transcript(&self) -> Transcript {
        self.transcript.read().await.clone()
    }

    /// Messages appended at or after position `from`, plus the new length.
    pub async fn messages_since(&self, from: usize) -> (Vec<Message>, usize) {
        let transcript = self.transcript.read().await;
        (transcript.since(from).to_vec(), transcript.len())
    }

    /// Claims the turn latch, raising the typing flag until the guard drops.
    pub(crate) fn begin_turn(&self) -> Option<TurnGuard<'_>> {
        let state = self.state.try_lock().ok()?;
        self.typing.store(true, Ordering::Release);
        Some(TurnGuard {
            state,
            typing: &self.typing,
        })
    }

    pub(crate) async fn append(&self, message: Message) {
        self.transcript.write().await.push(message);
    }
}

/// Exclusive access to the dialogue state for the duration of one turn.
pub(crate) struct TurnGuard<'a> {
    state: MutexGuard<'a, SessionState>,
    typing: &'a AtomicBool,
}

impl TurnGuard<'_> {
    pub(crate) fn state(&self) -> &SessionState {
        &self.state
    }

    pub(crate) fn commit(&mut self, next: SessionState) {
        *self.state = next;
    }
}

impl Drop for TurnGuard<'_> {
    fn drop(&mut self) {
        self.typing.store(false, Ordering::Release);
    }
}
