//! Error types for the daolite core
//!
//! Every repository operation returns one of these variants instead of a
//! sentinel value, so "no matching row" (`Ok(None)`) and "the operation
//! failed" (`Err`) stay distinguishable at the call site.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DaoError {
    #[error("Connection unavailable: {message}")]
    ConnectionUnavailable { message: String },

    #[error("Statement execution failed on {table} ({operation}): {source}")]
    Execution {
        table: String,
        operation: &'static str,
        #[source]
        source: rusqlite::Error,
    },

    #[error("Row mapping failed on {table}: {source}")]
    RowMapping {
        table: String,
        #[source]
        source: rusqlite::Error,
    },

    #[error("Parameter binding failed on {table}: {source}")]
    Parameter {
        table: String,
        #[source]
        source: rusqlite::Error,
    },

    #[error("Invalid metadata for {table}: {message}")]
    InvalidMetadata { table: String, message: String },
}

impl DaoError {
    pub fn connection_unavailable(message: impl Into<String>) -> Self {
        Self::ConnectionUnavailable {
            message: message.into(),
        }
    }

    pub fn execution(table: &str, operation: &'static str, source: rusqlite::Error) -> Self {
        Self::Execution {
            table: table.to_string(),
            operation,
            source,
        }
    }

    pub fn row_mapping(table: &str, source: rusqlite::Error) -> Self {
        Self::RowMapping {
            table: table.to_string(),
            source,
        }
    }

    pub fn parameter(table: &str, source: rusqlite::Error) -> Self {
        Self::Parameter {
            table: table.to_string(),
            source,
        }
    }

    pub fn invalid_metadata(table: &str, message: impl Into<String>) -> Self {
        Self::InvalidMetadata {
            table: table.to_string(),
            message: message.into(),
        }
    }
}
