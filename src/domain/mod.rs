//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (timestamps, errors, state machine trait)
//! - `order` - Order identifiers, records and cancellation receipts
//! - `dialogue` - Intent recognition, slot-filling state and turn transitions

pub mod dialogue;
pub mod foundation;
pub mod order;
