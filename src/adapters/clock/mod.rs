//! Clock adapters.
//!
//! - `SystemClock` - Wall-clock time and real tokio sleeps
//! - `ManualClock` - Virtual time for tests; sleeping only advances it

mod manual_clock;
mod system_clock;

pub use manual_clock::ManualClock;
pub use system_clock::SystemClock;
