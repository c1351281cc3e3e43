//! DAO Core - generic repository layer for daolite
//!
//! This crate provides the foundational pieces of the mapping engine: the
//! entity traits, runtime table metadata, the pure SQL builder, the
//! connection-provider seam and the generic repository that executes
//! statements and maps rows.

pub mod errors;
pub mod generic_repo;
pub mod metadata;
pub mod prelude;
pub mod provider;
pub mod row;
pub mod sql;
pub mod traits;

pub use errors::DaoError;
pub use generic_repo::{query, Repository};
pub use metadata::EntityMetadata;
pub use provider::{ConnectionProvider, FileProvider, ProviderConn, SharedProvider};
pub use sql::SqlStatement;
pub use traits::{Entity, FromRow};

// Re-exported for macro-generated code and callers binding raw parameters
pub use rusqlite;
