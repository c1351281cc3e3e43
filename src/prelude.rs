//! Convenience re-exports for common Daolite usage
//!
//! ```rust
//! use daolite::prelude::*;
//! ```

// Core Daolite components
pub use crate::core::Daolite;
pub use crate::errors::DaoliteError;

// Re-export centralized config
pub use config::{AppConfig, ConfigError, DatabaseConfig, LogicalDeleteConfig};

// Re-export commonly used dao-core types for convenience
pub use dao_core::prelude::*;

// Re-export dao_core module for macro-generated code
pub use dao_core;

// Re-export derives for entity definition
pub use entity_derive::{Entity, FromRow};

// Common external dependencies
pub use rusqlite;
