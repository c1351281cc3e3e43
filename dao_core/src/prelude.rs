//! Convenience re-exports for common dao-core usage

// Core traits
pub use crate::traits::{Entity, FromRow};

// Error type
pub use crate::errors::DaoError;

// Repository and ad-hoc query
pub use crate::generic_repo::{query, Repository};

// Metadata and SQL building
pub use crate::metadata::EntityMetadata;
pub use crate::sql::SqlStatement;

// Connection acquisition
pub use crate::provider::{ConnectionProvider, FileProvider, ProviderConn, SharedProvider};

// Configuration consumed at repository construction
pub use config::{AppConfig, ConfigError, DatabaseConfig, LogicalDeleteConfig};

// Common external types
pub use rusqlite::{Connection, Row, ToSql};
