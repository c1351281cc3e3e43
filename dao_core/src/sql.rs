//! SQL generation for repository operations
//!
//! Pure functions from metadata to parameterized SQL text. The generated
//! statements are the wire contract of this layer: column order follows field
//! declaration order and every parameter is a positional `?` placeholder, so
//! bind order is always declaration order (with the id last where present).

use crate::metadata::EntityMetadata;

/// A generated statement together with the number of positional parameters
/// it expects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqlStatement {
    pub sql: String,
    pub param_count: usize,
}

/// `INSERT INTO <table> (<all columns>) VALUES (?, ..., ?)` with one
/// placeholder per declared column.
pub fn insert(meta: &EntityMetadata) -> SqlStatement {
    let columns = meta.columns().join(", ");
    let placeholders = vec!["?"; meta.columns().len()].join(", ");
    SqlStatement {
        sql: format!(
            "INSERT INTO {} ({}) VALUES ({})",
            meta.table_name(),
            columns,
            placeholders
        ),
        param_count: meta.columns().len(),
    }
}

/// `SELECT <all columns> FROM <table>`
pub fn select_all(meta: &EntityMetadata) -> SqlStatement {
    SqlStatement {
        sql: format!(
            "SELECT {} FROM {}",
            meta.columns().join(", "),
            meta.table_name()
        ),
        param_count: 0,
    }
}

/// `SELECT <all columns> FROM <table> WHERE <pk> = ?`
///
/// The statement carries no logical-delete predicate: flagged rows are
/// returned like any other row.
pub fn select_by_id(meta: &EntityMetadata) -> SqlStatement {
    SqlStatement {
        sql: format!(
            "SELECT {} FROM {} WHERE {} = ?",
            meta.columns().join(", "),
            meta.table_name(),
            meta.primary_key_column()
        ),
        param_count: 1,
    }
}

/// Physical `DELETE FROM <table> WHERE <pk> = ?`, or, when logical delete is
/// enabled, `UPDATE <table> SET <flag column> = 1 WHERE <pk> = ?`.
pub fn delete_by_id(meta: &EntityMetadata) -> SqlStatement {
    let sql = match meta.logical_delete_column() {
        Some(flag_column) => format!(
            "UPDATE {} SET {} = 1 WHERE {} = ?",
            meta.table_name(),
            flag_column,
            meta.primary_key_column()
        ),
        None => format!(
            "DELETE FROM {} WHERE {} = ?",
            meta.table_name(),
            meta.primary_key_column()
        ),
    };
    SqlStatement { sql, param_count: 1 }
}

/// `UPDATE <table> SET <c2> = ?, ..., <cn> = ? WHERE <pk> = ?`
///
/// The SET clause covers every column except the first declared one, in
/// declaration order; the id is the final bound parameter. Entity types are
/// expected to declare the key column first — a differing value for the first
/// declared field in the incoming entity is never written.
pub fn update_by_id(meta: &EntityMetadata) -> SqlStatement {
    let assignments = meta
        .columns()
        .iter()
        .skip(1)
        .map(|column| format!("{column} = ?"))
        .collect::<Vec<_>>()
        .join(", ");
    SqlStatement {
        sql: format!(
            "UPDATE {} SET {} WHERE {} = ?",
            meta.table_name(),
            assignments,
            meta.primary_key_column()
        ),
        param_count: meta.columns().len(),
    }
}

/// `SELECT COUNT(*) AS total FROM <table>`
pub fn count_all(meta: &EntityMetadata) -> SqlStatement {
    SqlStatement {
        sql: format!("SELECT COUNT(*) AS total FROM {}", meta.table_name()),
        param_count: 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::LogicalDeleteConfig;

    fn student_meta(logical_delete: &LogicalDeleteConfig) -> EntityMetadata {
        EntityMetadata::new(
            "student",
            vec!["id".to_string(), "name".to_string(), "age".to_string()],
            "id",
            logical_delete,
        )
        .unwrap()
    }

    fn placeholder_count(sql: &str) -> usize {
        sql.matches('?').count()
    }

    #[test]
    fn insert_has_one_placeholder_per_column() {
        let stmt = insert(&student_meta(&LogicalDeleteConfig::default()));
        assert_eq!(stmt.sql, "INSERT INTO student (id, name, age) VALUES (?, ?, ?)");
        assert_eq!(stmt.param_count, 3);
        assert_eq!(placeholder_count(&stmt.sql), stmt.param_count);
    }

    #[test]
    fn select_all_lists_columns_in_declaration_order() {
        let stmt = select_all(&student_meta(&LogicalDeleteConfig::default()));
        assert_eq!(stmt.sql, "SELECT id, name, age FROM student");
        assert_eq!(stmt.param_count, 0);
    }

    #[test]
    fn select_by_id_filters_on_primary_key() {
        let stmt = select_by_id(&student_meta(&LogicalDeleteConfig::default()));
        assert_eq!(stmt.sql, "SELECT id, name, age FROM student WHERE id = ?");
        assert_eq!(stmt.param_count, 1);
    }

    #[test]
    fn delete_by_id_is_physical_by_default() {
        let stmt = delete_by_id(&student_meta(&LogicalDeleteConfig::default()));
        assert_eq!(stmt.sql, "DELETE FROM student WHERE id = ?");
        assert_eq!(stmt.param_count, 1);
    }

    #[test]
    fn delete_by_id_flags_rows_when_logical_delete_enabled() {
        let logical = LogicalDeleteConfig::new(true, Some("is_deleted".to_string()));
        let stmt = delete_by_id(&student_meta(&logical));
        assert_eq!(stmt.sql, "UPDATE student SET is_deleted = 1 WHERE id = ?");
        assert_eq!(stmt.param_count, 1);
    }

    #[test]
    fn update_by_id_skips_the_first_declared_column() {
        let stmt = update_by_id(&student_meta(&LogicalDeleteConfig::default()));
        assert_eq!(stmt.sql, "UPDATE student SET name = ?, age = ? WHERE id = ?");
        assert_eq!(stmt.param_count, 3);
        assert!(!stmt.sql.contains("id = ?,"));
    }

    #[test]
    fn update_by_id_skip_is_positional_not_key_aware() {
        // key declared last: the first declared column (name) is still the
        // one skipped, and the key itself lands in the SET clause
        let meta = EntityMetadata::new(
            "course",
            vec!["name".to_string(), "credits".to_string(), "code".to_string()],
            "code",
            &LogicalDeleteConfig::default(),
        )
        .unwrap();
        let stmt = update_by_id(&meta);
        assert_eq!(
            stmt.sql,
            "UPDATE course SET credits = ?, code = ? WHERE code = ?"
        );
        assert_eq!(stmt.param_count, 3);
    }

    #[test]
    fn count_all_aliases_total() {
        let stmt = count_all(&student_meta(&LogicalDeleteConfig::default()));
        assert_eq!(stmt.sql, "SELECT COUNT(*) AS total FROM student");
        assert_eq!(stmt.param_count, 0);
    }
}
