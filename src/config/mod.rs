//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `ORDER_ASSISTANT` prefix and nested values use double underscores as separators.
//! Every value has a default, so an empty environment yields a working setup.
//!
//! # Example
//!
//! ```no_run
//! use order_assistant::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Orders fail {}% of the time", config.orders.failure_rate * 100.0);
//! ```

mod dialogue;
mod error;
mod logging;
mod orders;

pub use dialogue::DialogueConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;
pub use orders::OrdersConfig;

use serde::Deserialize;
use std::path::Path;

const ENV_PREFIX: &str = "ORDER_ASSISTANT";

/// Upper bound for any configured delay.
const MAX_DELAY_MS: u64 = 60_000;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Typing and follow-up delays
    #[serde(default)]
    pub dialogue: DialogueConfig,

    /// Simulated order backend (latency, failure rate, seed)
    #[serde(default)]
    pub orders: OrdersConfig,

    /// Log filter and output format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from the environment
    ///
    /// A `.env` file in the working directory is read first when present.
    /// Variables take the form `ORDER_ASSISTANT__<SECTION>__<KEY>`:
    ///
    /// - `ORDER_ASSISTANT__ORDERS__FAILURE_RATE=0.0` -> `orders.failure_rate = 0.0`
    /// - `ORDER_ASSISTANT__DIALOGUE__TYPING_DELAY_MS=0` -> `dialogue.typing_delay_ms = 0`
    ///
    /// Unset keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a value cannot be parsed into its field type.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(Self::environment())
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Load a configuration file, with environment variables taking precedence
    ///
    /// The format follows the file extension (`.toml`, `.json`, ...).
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file is missing or unreadable, or if
    /// values cannot be parsed into expected types.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::File::from(path.as_ref()).required(true))
            .add_source(Self::environment())
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.dialogue.validate()?;
        self.orders.validate()?;
        self.logging.validate()?;
        Ok(())
    }

    fn environment() -> config::Environment {
        config::Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("__")
            .separator("__")
            .try_parsing(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::io::Write;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: [&str; 4] = [
        "ORDER_ASSISTANT__DIALOGUE__TYPING_DELAY_MS",
        "ORDER_ASSISTANT__ORDERS__FAILURE_RATE",
        "ORDER_ASSISTANT__ORDERS__SEED",
        "ORDER_ASSISTANT__LOGGING__JSON",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    fn toml_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_with_empty_environment_uses_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();

        let config = AppConfig::load().unwrap();

        assert_eq!(config.dialogue.typing_delay_ms, 1500);
        assert_eq!(config.dialogue.follow_up_delay_ms, 500);
        assert_eq!(config.orders.latency_ms, 1000);
        assert_eq!(config.orders.failure_rate, 0.05);
        assert_eq!(config.logging.level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("ORDER_ASSISTANT__DIALOGUE__TYPING_DELAY_MS", "0");
        env::set_var("ORDER_ASSISTANT__ORDERS__FAILURE_RATE", "0.0");
        env::set_var("ORDER_ASSISTANT__ORDERS__SEED", "42");
        env::set_var("ORDER_ASSISTANT__LOGGING__JSON", "true");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.dialogue.typing_delay_ms, 0);
        assert_eq!(config.orders.failure_rate, 0.0);
        assert_eq!(config.orders.seed, Some(42));
        assert!(config.logging.json);
    }

    #[test]
    fn test_load_from_file() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let file = toml_file(
            r#"
[orders]
latency_ms = 250
seed = 7

[logging]
level = "debug"
"#,
        );

        let config = AppConfig::load_from_file(file.path()).unwrap();

        assert_eq!(config.orders.latency_ms, 250);
        assert_eq!(config.orders.seed, Some(7));
        assert_eq!(config.orders.failure_rate, 0.05);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_environment_overrides_file() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let file = toml_file("[orders]\nfailure_rate = 0.5\n");
        env::set_var("ORDER_ASSISTANT__ORDERS__FAILURE_RATE", "0.25");
        let result = AppConfig::load_from_file(file.path());
        clear_env();

        assert_eq!(result.unwrap().orders.failure_rate, 0.25);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let result = AppConfig::load_from_file("/definitely/not/here.toml");
        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }

    #[test]
    fn test_validate_reports_first_bad_section() {
        let mut config = AppConfig::default();
        config.orders.failure_rate = -0.1;
        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidFailureRate(-0.1))
        );
    }
}
