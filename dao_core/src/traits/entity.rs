//! Entity and row-mapping contracts
//!
//! These traits replace runtime reflection with a per-type description the
//! entity carries itself. They are meant to be derived:
//!
//! ```rust,ignore
//! use daolite::prelude::*;
//!
//! #[derive(Debug, Clone, Default, PartialEq, Entity)]
//! #[table(prefix = "tb_")]
//! pub struct Student {
//!     #[primary_key]
//!     pub id: i64,
//!     pub name: String,
//!     pub age: i64,
//! }
//! ```

use rusqlite::types::{FromSql, ToSql, Value};
use rusqlite::Row;
use std::fmt::Debug;

/// Materializes a value from a result row by column-name matching.
///
/// Fields whose name matches no result column are left at their `Default`
/// value; result columns matching no field are ignored. A matching column
/// whose stored type cannot convert to the field type is an error.
pub trait FromRow: Sized {
    fn from_row(row: &Row<'_>) -> Result<Self, rusqlite::Error>;
}

/// Metadata about the table an entity type maps to, plus positional access
/// to its field values.
///
/// Invariants the derive upholds:
/// - `columns()` order equals field declaration order and never changes.
/// - Exactly one field carries `#[primary_key]`; its column name is
///   `primary_key_column()` and its type is `Id`.
/// - The table name is the optional `#[table(prefix = "...")]` followed by
///   the lowercased type name. CamelCase type names are lowercased as-is,
///   never snake_cased.
pub trait Entity: FromRow + Clone + Debug + Send {
    /// The type of the primary-key field
    type Id: ToSql + FromSql + Clone + Debug + Send;

    /// The table name in the database
    fn table_name() -> &'static str;

    /// Column names, in field declaration order
    fn columns() -> &'static [&'static str];

    /// The primary-key column name
    fn primary_key_column() -> &'static str;

    /// The primary-key value of this instance
    fn primary_key(&self) -> &Self::Id;

    /// Field values as owned SQL values, in column order
    fn to_params(&self) -> Result<Vec<Value>, rusqlite::Error>;
}
