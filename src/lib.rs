//! # Daolite
//!
//! A lightweight generic DAO layer for SQLite: derive table metadata from an
//! entity type, generate parameterized SQL per operation, and map result rows
//! back into fresh instances by column name.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use daolite::prelude::*;
//!
//! #[derive(Debug, Clone, Default, PartialEq, Entity)]
//! pub struct Student {
//!     #[primary_key]
//!     pub id: i64,
//!     pub name: String,
//!     pub age: i64,
//! }
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = AppConfig::from_file("daolite.toml")?;
//!     let daolite = Daolite::new(&config);
//!
//!     let students: Repository<Student> = daolite.repository()?;
//!
//!     let ann = Student { id: 1, name: "Ann".to_string(), age: 20 };
//!     students.insert(&ann)?;
//!
//!     let found = students.find_by_id(&1)?;
//!     println!("found: {:?}", found);
//!
//!     Ok(())
//! }
//! ```

/// Conditional debug logging macros
/// These macros only compile in code when the `debug-logging` feature is enabled
#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        tracing::trace!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {};
}

pub mod core;
pub mod errors;
pub mod prelude;

// Re-export the main public types for convenience
pub use crate::core::Daolite;
pub use errors::DaoliteError;

// Re-export centralized config
pub use config::{AppConfig, ConfigError, DatabaseConfig, LogicalDeleteConfig};

// Re-export internal crates used by macros and public API
// These MUST be public for the generated macro code to work correctly
pub use dao_core;
pub use entity_derive;

// Re-export external dependencies used in public API
pub use rusqlite;
