//! Error types for the daolite facade

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DaoliteError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error(transparent)]
    Dao(#[from] dao_core::DaoError),
}
