//! Dialogue domain module.
//!
//! The scripted assistant's conversation core: intent recognition,
//! slot-filling state, message log and the pure turn transitions.
//! Nothing in here performs I/O; collaborator calls are requested
//! through [`Step`] and their outcomes fed back by the application layer.

mod formatter;
mod intent;
mod message;
mod session;
mod slot;
mod state;
mod transcript;

pub use formatter::ResponseFormatter;
pub use intent::{Intent, IntentRecognizer};
pub use message::{Author, Message, MessageId, MessageKind};
pub use session::{DialogueSession, Pacing, Reply, ServiceFailure, Step, Transition};
pub use slot::PendingSlot;
pub use state::SessionState;
pub use transcript::Transcript;
