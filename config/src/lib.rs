//! # Configuration Management for Daolite
//!
//! This crate provides the configuration structures consumed by the daolite
//! repository layer: the database location and the logical-delete policy.
//!
//! ## Quick Start
//!
//! ### Programmatic Configuration
//! ```rust
//! use config::{DatabaseConfig, LogicalDeleteConfig};
//!
//! let db_config = DatabaseConfig::new("app.db".to_string(), 5);
//! let logical_delete = LogicalDeleteConfig::new(true, Some("is_deleted".to_string()));
//! ```
//!
//! ### TOML File Configuration
//! ```toml
//! [database]
//! path = "app.db"
//! busy_timeout_seconds = 5
//!
//! [logical_delete]
//! enabled = true
//! column = "is_deleted"
//! ```
//!
//! Load configuration:
//! ```rust,no_run
//! use config::AppConfig;
//!
//! // Load from DAOLITE_CONFIG or ./daolite.toml
//! let config = AppConfig::load()?;
//!
//! // Or load from custom path
//! let config = AppConfig::from_file("config/production.toml")?;
//! # Ok::<(), config::ConfigError>(())
//! ```

use serde::{Deserialize, Serialize};
use std::{env, path::Path};
use thiserror::Error;

const DEFAULT_CONFIG_PATH: &str = "./daolite.toml";

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
    #[serde(default)]
    pub logical_delete: LogicalDeleteConfig,
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub path: String,
    #[serde(default = "default_busy_timeout")]
    pub busy_timeout_seconds: u64,
}

fn default_busy_timeout() -> u64 {
    5
}

/// Logical-delete policy: when enabled, deletes flag the configured column
/// instead of removing rows.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LogicalDeleteConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub column: Option<String>,
}

impl AppConfig {
    /// Load configuration from the path in `DAOLITE_CONFIG` or the default file
    pub fn load() -> Result<Self, ConfigError> {
        // .env is optional; a missing file is not an error
        let _ = dotenvy::dotenv();

        let config = if let Ok(config_path) = env::var("DAOLITE_CONFIG") {
            Self::from_file(&config_path)
        } else if Path::new(DEFAULT_CONFIG_PATH).exists() {
            Self::from_file(DEFAULT_CONFIG_PATH)
        } else {
            Err(ConfigError::Invalid(format!(
                "Config path must be specified in .env as DAOLITE_CONFIG or in {} file",
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
        if self.database.path.is_empty() {
            return Err(ConfigError::Invalid(
                "Database path cannot be empty".to_string(),
            ));
        }
        self.logical_delete.validate()?;
        Ok(())
    }
}

impl DatabaseConfig {
    /// Create a new database configuration
    pub fn new(path: String, busy_timeout_seconds: u64) -> Self {
        Self {
            path,
            busy_timeout_seconds,
        }
    }
}

impl LogicalDeleteConfig {
    /// Create a new logical-delete configuration
    pub fn new(enabled: bool, column: Option<String>) -> Self {
        Self { enabled, column }
    }

    /// Validate that a flag column is configured whenever the policy is on
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.enabled {
            match &self.column {
                Some(column) if !column.is_empty() => {}
                _ => {
                    return Err(ConfigError::Invalid(
                        "logical_delete.column is required when logical_delete.enabled is true"
                            .to_string(),
                    ))
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_config() {
        let config: AppConfig = toml::from_str(
            r#"
            [database]
            path = "app.db"
            busy_timeout_seconds = 10

            [logical_delete]
            enabled = true
            column = "is_deleted"
            "#,
        )
        .unwrap();

        assert_eq!(config.database.path, "app.db");
        assert_eq!(config.database.busy_timeout_seconds, 10);
        assert!(config.logical_delete.enabled);
        assert_eq!(config.logical_delete.column.as_deref(), Some("is_deleted"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn logical_delete_defaults_to_disabled() {
        let config: AppConfig = toml::from_str(
            r#"
            [database]
            path = "app.db"
            "#,
        )
        .unwrap();

        assert!(!config.logical_delete.enabled);
        assert!(config.logical_delete.column.is_none());
        assert_eq!(config.database.busy_timeout_seconds, 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_enabled_logical_delete_without_column() {
        let config: AppConfig = toml::from_str(
            r#"
            [database]
            path = "app.db"

            [logical_delete]
            enabled = true
            "#,
        )
        .unwrap();

        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn rejects_empty_database_path() {
        let config: AppConfig = toml::from_str(
            r#"
            [database]
            path = ""
            "#,
        )
        .unwrap();

        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }
}
