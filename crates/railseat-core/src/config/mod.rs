//! Application configuration schemas.
//!
//! All configuration structs are deserialized from a TOML file via the
//! `config` crate, overlaid with `RAILSEAT_`-prefixed environment
//! variables. Each sub-module represents a logical configuration section.

pub mod engine;
pub mod logging;

use serde::{Deserialize, Serialize};

pub use self::engine::{EngineConfig, SeatSpec};
pub use self::logging::LoggingConfig;

use crate::error::{AppError, ErrorKind};

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Allocation engine settings.
    #[serde(default)]
    pub engine: EngineConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    ///
    /// A missing file is not an error; every field has a default. Values
    /// from environment variables prefixed with `RAILSEAT_` (nested keys
    /// separated by `__`) take precedence over the file.
    pub fn load(path: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::with_prefix("RAILSEAT")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        let config: Self = config
            .try_deserialize()
            .map_err(|e| {
                let message = format!("Failed to deserialize config: {e}");
                // Section parse failures reach us as serde custom errors.
                if message.contains(&ErrorKind::InvalidSection.to_string()) {
                    AppError::new(ErrorKind::InvalidSection, message)
                } else {
                    AppError::configuration(message)
                }
            })?;

        config.validate()?;
        Ok(config)
    }

    /// Check constraints that serde cannot express.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.engine.rac_capacity == 0 {
            return Err(AppError::configuration(
                "engine.rac_capacity must be at least 1",
            ));
        }

        match self.logging.format.as_str() {
            "json" | "pretty" => {}
            other => {
                return Err(AppError::configuration(format!(
                    "logging.format must be 'json' or 'pretty', got '{other}'"
                )));
            }
        }

        Ok(())
    }
}
