//! Tracing subscriber setup for the binary.
//!
//! Logs go to stderr so they never interleave with the chat on stdout.

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Builds the filter: `RUST_LOG` wins, then the configured level, then `info`.
pub fn env_filter(logging: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(logging.level.trim()))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Installs the global subscriber. A second call is a no-op.
pub fn init(logging: &LoggingConfig) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(logging))
        .with_target(true)
        .with_writer(std::io::stderr);

    let _ = if logging.json {
        builder.json().try_init()
    } else {
        builder.with_ansi(false).try_init()
    };
}
