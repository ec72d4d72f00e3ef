//! Configuration management

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::constants;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub database: DatabaseSettings,
    pub logging: LoggingSettings,
    pub billing: BillingSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub env: String,
    pub host: String,
    pub port: u16,
    pub name: String,
    /// Browser origin allowed by CORS.
    pub cors_origin: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseSettings {
    /// `postgres://...` in deployments, `sqlite::memory:` or `sqlite://file.db` locally.
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout_secs: u64,
    pub run_migrations: bool,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    Pretty,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingSettings {
    /// Fallback filter directive when `RUST_LOG` is unset.
    pub level: String,
    pub format: LogFormat,
    /// Directory for daily-rolling log files. Stdout only when absent.
    pub directory: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BillingSettings {
    pub default_daily_penalty_rate: i64,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        Self::builder()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("APP").separator("__").try_parsing(true))
            .build()?
            .try_deserialize()
    }

    /// Built-in defaults only, without touching files or the environment.
    pub fn defaults() -> Result<Self, ConfigError> {
        Self::builder()?.build()?.try_deserialize()
    }

    fn builder() -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Config::builder()
            .set_default("app.env", "development")?
            .set_default("app.host", constants::DEFAULT_HOST)?
            .set_default("app.port", constants::DEFAULT_PORT)?
            .set_default("app.name", "estate-server")?
            .set_default("app.cors_origin", constants::DEFAULT_CORS_ORIGIN)?
            .set_default("database.url", constants::DEFAULT_DATABASE_URL)?
            .set_default("database.max_connections", constants::DEFAULT_MAX_CONNECTIONS)?
            .set_default("database.min_connections", 1)?
            .set_default("database.acquire_timeout_secs", constants::DEFAULT_ACQUIRE_TIMEOUT_SECS)?
            .set_default("database.run_migrations", true)?
            .set_default("logging.level", constants::DEFAULT_LOG_LEVEL)?
            .set_default("logging.format", "json")?
            .set_default(
                "billing.default_daily_penalty_rate",
                constants::DEFAULT_DAILY_PENALTY_RATE,
            )
    }
}
