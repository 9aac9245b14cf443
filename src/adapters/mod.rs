//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `orders` - Simulated order-management backend
//! - `clock` - System and manual clocks
//! - `random` - Seeded and scripted random sources

pub mod clock;
pub mod orders;
pub mod random;

pub use clock::{ManualClock, SystemClock};
pub use orders::{demo_catalog, SimulatedOrderService, CANCELLATION_INSTRUCTIONS};
pub use random::{ScriptedRandomSource, SeededRandomSource};
