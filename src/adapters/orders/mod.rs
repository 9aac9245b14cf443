//! Order service adapters.
//!
//! - `SimulatedOrderService` - In-memory catalog with latency and failure injection
//! - `demo_catalog` - The three sample orders the assistant ships with

mod demo_catalog;
mod simulated_order_service;

pub use demo_catalog::demo_catalog;
pub use simulated_order_service::{SimulatedOrderService, CANCELLATION_INSTRUCTIONS};
