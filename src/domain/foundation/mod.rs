//! Foundation module - Shared domain primitives.
//!
//! Contains the value objects, error types and state machine trait
//! that form the vocabulary of the order assistant domain.

mod errors;
mod state_machine;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
