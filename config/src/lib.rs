//! # Configuration Management for BaseStation
//!
//! This crate provides the centralized configuration structures for the
//! basestation workspace: where the SQLite log database lives, how the
//! connection pool is sized, and the query defaults (row limit, join keyword,
//! SQL tracing).
//!
//! ## Quick Start
//!
//! ### Programmatic Configuration
//! ```rust
//! use config::DatabaseConfig;
//!
//! let db_config = DatabaseConfig::new(
//!     "BaseStation.sqb".to_string(),
//!     1, 5, 30, 600,
//!     500, "inner".to_string(), false,
//! );
//! ```
//!
//! ### TOML File Configuration
//! ```toml
//! [database]
//! path = "BaseStation.sqb"
//! min_connections = 1
//! max_connections = 5
//! connection_timeout_seconds = 30
//! idle_timeout_seconds = 600
//! default_limit = 500
//! join = "inner"
//! trace_sql = false
//! ```
//!
//! Load configuration:
//! ```rust,no_run
//! use config::AppConfig;
//!
//! // Load from basestation.toml, or the path in BASESTATION_CONFIG
//! let config = AppConfig::load()?;
//! # Ok::<(), config::ConfigError>(())
//! ```

use serde::{Deserialize, Serialize};
use std::{env, path::Path};
use thiserror::Error;

const DEFAULT_CONFIG_PATH: &str = "./basestation.toml";

/// Join keywords accepted by the query layer.
pub const JOIN_KEYWORDS: &[&str] = &["inner", "left", "cross"];

/// Default hard cap on rows returned by a single search.
pub const DEFAULT_LIMIT: i64 = 500;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Environment variable error: {0}")]
    Env(#[from] env::VarError),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Complete application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub database: DatabaseConfig,
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Filesystem path of the SQLite log database.
    pub path: String,
    pub min_connections: u32,
    pub max_connections: u32,
    pub connection_timeout_seconds: u64,
    pub idle_timeout_seconds: u64,
    /// Hard cap appended to every search as `LIMIT n`.
    pub default_limit: i64,
    /// Join keyword used when an entity has a child table: `inner`, `left`
    /// or `cross`.
    pub join: String,
    /// When set, every composed SQL statement is logged before execution.
    pub trace_sql: bool,
}

impl AppConfig {
    /// Load configuration from the TOML file named in `BASESTATION_CONFIG`
    /// (also honored from a `.env` file), falling back to `./basestation.toml`.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = if let Ok(config_path) = env::var("BASESTATION_CONFIG") {
            Self::from_file(&config_path)
        } else if Path::new(DEFAULT_CONFIG_PATH).exists() {
            Self::from_file(DEFAULT_CONFIG_PATH)
        } else {
            Err(ConfigError::Invalid(format!(
                "Config path must be specified as BASESTATION_CONFIG or in {} file",
                DEFAULT_CONFIG_PATH
            )))
        }?;

        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.database.validate()
    }
}

impl DatabaseConfig {
    /// Create a new database configuration
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        path: String,
        min_connections: u32,
        max_connections: u32,
        connection_timeout_seconds: u64,
        idle_timeout_seconds: u64,
        default_limit: i64,
        join: String,
        trace_sql: bool,
    ) -> Self {
        Self {
            path,
            min_connections,
            max_connections,
            connection_timeout_seconds,
            idle_timeout_seconds,
            default_limit,
            join,
            trace_sql,
        }
    }

    /// Configuration for a database file with pool and query defaults.
    pub fn for_path(path: impl Into<String>) -> Self {
        Self::new(path.into(), 1, 5, 30, 600, DEFAULT_LIMIT, "inner".to_string(), false)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.path.is_empty() {
            return Err(ConfigError::Invalid(
                "Database path cannot be empty".to_string(),
            ));
        }
        if self.max_connections == 0 {
            return Err(ConfigError::Invalid(
                "Database max_connections must be greater than 0".to_string(),
            ));
        }
        if self.min_connections > self.max_connections {
            return Err(ConfigError::Invalid(
                "Database min_connections cannot be greater than max_connections".to_string(),
            ));
        }
        if self.connection_timeout_seconds == 0 {
            return Err(ConfigError::Invalid(
                "Database connection_timeout_seconds must be greater than 0".to_string(),
            ));
        }
        if self.default_limit <= 0 {
            return Err(ConfigError::Invalid(
                "Database default_limit must be greater than 0".to_string(),
            ));
        }
        if !JOIN_KEYWORDS.contains(&self.join.to_ascii_lowercase().as_str()) {
            return Err(ConfigError::Invalid(format!(
                "Unknown join keyword '{}' (expected one of {:?})",
                self.join, JOIN_KEYWORDS
            )));
        }
        Ok(())
    }
}
