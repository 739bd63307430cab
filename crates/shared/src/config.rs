//! Application configuration management.

use serde::Deserialize;

use crate::error::AppResult;
use crate::types::Currency;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Database configuration.
    pub database: DatabaseConfig,
    /// Report generation configuration.
    #[serde(default)]
    pub report: ReportConfig,
}

/// Database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Database connection URL.
    pub url: String,
    /// Maximum number of connections in the pool.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Minimum number of connections in the pool.
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

/// Report generation configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct ReportConfig {
    /// Currency every ledger amount is expressed in.
    #[serde(default)]
    pub currency: Currency,
}

impl AppConfig {
    /// Loads configuration from `.env`, config files and the environment.
    ///
    /// Sources are layered in this order (later wins):
    /// `config/default`, `config/{RUN_MODE}`, then `FINRECON__*` variables
    /// such as `FINRECON__DATABASE__URL`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Configuration`](crate::AppError::Configuration)
    /// if configuration cannot be loaded.
    pub fn load() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("FINRECON").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}
