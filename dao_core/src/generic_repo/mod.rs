//! Generic repository
//!
//! One repository per entity type: metadata is derived once at construction
//! and every operation is a single connection-scoped request/response cycle.

pub mod adhoc;
mod core;
mod crud;

pub use self::adhoc::query;
pub use self::core::Repository;
