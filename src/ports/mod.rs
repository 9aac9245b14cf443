//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `OrderService` - The order-management system of record
//! - `Clock` - Timestamps and simulated delays
//! - `RandomSource` - Failure injection and return id allocation

mod clock;
mod order_service;
mod random_source;

pub use clock::Clock;
pub use order_service::{OrderService, OrderServiceError};
pub use random_source::RandomSource;
