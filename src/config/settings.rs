//! Application settings and configuration structures.

use config::{builder::DefaultState, Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;

/// Root configuration structure containing all application settings.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Human-readable application title
    pub app_title: String,

    /// Short description of the deployment
    pub description: String,

    /// Database configuration (PostgreSQL)
    pub database: DatabaseSettings,

    /// Emit logs as JSON lines
    pub json_logs: bool,

    /// Current environment (development, staging, production)
    pub environment: String,
}

/// PostgreSQL database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    /// Database connection URL
    pub url: String,

    /// Maximum number of connections in the pool
    pub max_connections: u32,

    /// Minimum number of connections to maintain
    pub min_connections: u32,

    /// Connection acquire timeout in seconds
    pub acquire_timeout: u64,
}

impl Settings {
    /// Load settings from environment variables and configuration files.
    ///
    /// The loading order is:
    /// 1. Built-in defaults
    /// 2. config/default.toml and config/{RUN_ENV}.toml, if present
    /// 3. `APP__`-prefixed environment variables
    /// 4. `DATABASE_URL` (highest priority)
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if configuration cannot be loaded or parsed,
    /// or if no database URL is configured.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let environment = std::env::var("RUN_ENV").unwrap_or_else(|_| "development".into());

        let builder = Self::defaults(&environment)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // APP__DATABASE__MAX_CONNECTIONS=20 -> database.max_connections = 20
            .add_source(
                Environment::default()
                    .prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("database.url", std::env::var("DATABASE_URL").ok())?;

        Self::from_builder(builder)
    }

    /// Built-in default values.
    pub fn defaults(environment: &str) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("environment", environment)?
            .set_default("app_title", "Meeting room reservations")?
            .set_default("description", "Book meeting rooms for a time window")?
            .set_default("json_logs", false)?
            .set_default("database.url", "")?
            .set_default("database.max_connections", 10)?
            .set_default("database.min_connections", 2)?
            .set_default("database.acquire_timeout", 30)
    }

    /// Build and check settings from a prepared builder.
    pub fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        builder
            .build()?
            .try_deserialize()
            .and_then(|settings: Self| {
                if settings.database.url.trim().is_empty() {
                    return Err(ConfigError::Message(
                        "database.url must be set (DATABASE_URL or APP__DATABASE__URL)".into(),
                    ));
                }
                Ok(settings)
            })
    }
}

impl DatabaseSettings {
    /// Get the connection URL.
    pub fn connection_url(&self) -> &str {
        &self.url
    }
}
