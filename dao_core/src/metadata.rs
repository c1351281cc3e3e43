//! Runtime table metadata
//!
//! `EntityMetadata` is derived once, when a repository is constructed, and is
//! immutable afterwards. Construction validates every structural invariant up
//! front so a misconfigured entity fails at wiring time, not at first query.

use crate::errors::DaoError;
use crate::traits::Entity;
use config::LogicalDeleteConfig;

/// Column list, primary-key designation and logical-delete policy for one
/// entity type.
#[derive(Debug, Clone)]
pub struct EntityMetadata {
    table_name: String,
    columns: Vec<String>,
    primary_key: String,
    logical_delete_column: Option<String>,
}

impl EntityMetadata {
    /// Build metadata from explicit parts.
    ///
    /// Fails when the column list is empty, the primary key is not one of the
    /// columns, or the logical-delete policy is enabled without a column.
    pub fn new(
        table_name: impl Into<String>,
        columns: Vec<String>,
        primary_key: impl Into<String>,
        logical_delete: &LogicalDeleteConfig,
    ) -> Result<Self, DaoError> {
        let table_name = table_name.into();
        let primary_key = primary_key.into();

        if columns.is_empty() {
            return Err(DaoError::invalid_metadata(
                &table_name,
                "entity declares no columns",
            ));
        }
        if !columns.iter().any(|c| c == &primary_key) {
            return Err(DaoError::invalid_metadata(
                &table_name,
                format!("primary key column `{primary_key}` is not a declared column"),
            ));
        }

        let logical_delete_column = if logical_delete.enabled {
            match &logical_delete.column {
                Some(column) if !column.is_empty() => Some(column.clone()),
                _ => {
                    return Err(DaoError::invalid_metadata(
                        &table_name,
                        "logical delete is enabled but no flag column is configured",
                    ))
                }
            }
        } else {
            None
        };

        Ok(Self {
            table_name,
            columns,
            primary_key,
            logical_delete_column,
        })
    }

    /// Build metadata for a derived entity type.
    pub fn for_entity<T: Entity>(logical_delete: &LogicalDeleteConfig) -> Result<Self, DaoError> {
        Self::new(
            T::table_name(),
            T::columns().iter().map(|c| c.to_string()).collect(),
            T::primary_key_column(),
            logical_delete,
        )
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    /// Column names in declaration order
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn primary_key_column(&self) -> &str {
        &self.primary_key
    }

    pub fn logical_delete_enabled(&self) -> bool {
        self.logical_delete_column.is_some()
    }

    /// The flag column, present exactly when logical delete is enabled
    pub fn logical_delete_column(&self) -> Option<&str> {
        self.logical_delete_column.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns(names: &[&str]) -> Vec<String> {
        names.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn builds_physical_delete_metadata() {
        let meta = EntityMetadata::new(
            "student",
            columns(&["id", "name", "age"]),
            "id",
            &LogicalDeleteConfig::default(),
        )
        .unwrap();

        assert_eq!(meta.table_name(), "student");
        assert_eq!(meta.columns(), &["id", "name", "age"]);
        assert_eq!(meta.primary_key_column(), "id");
        assert!(!meta.logical_delete_enabled());
        assert_eq!(meta.logical_delete_column(), None);
    }

    #[test]
    fn logical_delete_column_present_iff_enabled() {
        let enabled = LogicalDeleteConfig::new(true, Some("is_deleted".to_string()));
        let meta =
            EntityMetadata::new("student", columns(&["id", "name"]), "id", &enabled).unwrap();
        assert!(meta.logical_delete_enabled());
        assert_eq!(meta.logical_delete_column(), Some("is_deleted"));

        // a configured column is ignored while the policy is off
        let disabled = LogicalDeleteConfig::new(false, Some("is_deleted".to_string()));
        let meta =
            EntityMetadata::new("student", columns(&["id", "name"]), "id", &disabled).unwrap();
        assert!(!meta.logical_delete_enabled());
        assert_eq!(meta.logical_delete_column(), None);
    }

    #[test]
    fn rejects_enabled_logical_delete_without_column() {
        let bad = LogicalDeleteConfig::new(true, None);
        let err = EntityMetadata::new("student", columns(&["id"]), "id", &bad).unwrap_err();
        assert!(matches!(err, DaoError::InvalidMetadata { .. }));
    }

    #[test]
    fn rejects_unknown_primary_key() {
        let err = EntityMetadata::new(
            "student",
            columns(&["id", "name"]),
            "uuid",
            &LogicalDeleteConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(err, DaoError::InvalidMetadata { .. }));
    }

    #[test]
    fn rejects_empty_column_list() {
        let err =
            EntityMetadata::new("student", vec![], "id", &LogicalDeleteConfig::default())
                .unwrap_err();
        assert!(matches!(err, DaoError::InvalidMetadata { .. }));
    }
}
