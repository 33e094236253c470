//! Application configuration schemas.
//!
//! All configuration structs are deserialized from an optional TOML file
//! merged with `SHOPDESK__`-prefixed environment variables via the
//! `config` crate. Every field has a default so the console runs with no
//! configuration file at all.

pub mod api;
pub mod dashboard;
pub mod logging;
pub mod session;

use serde::{Deserialize, Serialize};

pub use self::api::{ApiConfig, EndpointsConfig};
pub use self::dashboard::DashboardConfig;
pub use self::logging::LoggingConfig;
pub use self::session::SessionConfig;

use crate::error::AppError;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Remote API settings.
    #[serde(default)]
    pub api: ApiConfig,
    /// Local session persistence settings.
    #[serde(default)]
    pub session: SessionConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Listing and dashboard presentation settings.
    #[serde(default)]
    pub dashboard: DashboardConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    ///
    /// The file is optional. Values from environment variables prefixed with
    /// `SHOPDESK__` override the file (e.g. `SHOPDESK__API__BASE_URL`).
    pub fn load(path: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::with_prefix("SHOPDESK")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }
}
