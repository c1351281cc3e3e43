//! Trait definitions
//!
//! This module defines the core contracts entity types implement, normally
//! through the derives in `entity-derive`.

pub mod entity;

pub use entity::{Entity, FromRow};
