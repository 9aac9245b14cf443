//! Random source adapters.
//!
//! - `SeededRandomSource` - `StdRng`, seeded for reproducible runs or from entropy
//! - `ScriptedRandomSource` - Replays queued values for tests

mod scripted_random_source;
mod seeded_random_source;

pub use scripted_random_source::ScriptedRandomSource;
pub use seeded_random_source::SeededRandomSource;
