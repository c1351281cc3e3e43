//! CRUD operations
//!
//! Each operation builds its statement from the repository's metadata,
//! acquires a connection for the duration of the call, binds parameters in
//! declaration order and maps failures into contextual `DaoError`s. Failures
//! are logged at the operation boundary before being returned.

use super::core::Repository;
use crate::errors::DaoError;
use crate::row;
use crate::sql;
use crate::traits::{Entity, FromRow};
use rusqlite::{params_from_iter, ToSql};
use tracing::{debug, error};

impl<T: Entity> Repository<T> {
    /// Insert one entity; every declared field is bound positionally in
    /// declaration order. Returns the affected-row count.
    pub fn insert(&self, entity: &T) -> Result<usize, DaoError> {
        let table = self.metadata.table_name();
        let stmt = sql::insert(&self.metadata);
        let params = entity.to_params().map_err(|e| {
            error!(table, error = %e, "insert parameter binding failed");
            DaoError::parameter(table, e)
        })?;

        let conn = self.provider.acquire()?;
        debug!(table, sql = %stmt.sql, "insert");
        conn.execute(&stmt.sql, params_from_iter(params)).map_err(|e| {
            error!(table, error = %e, "insert failed");
            DaoError::execution(table, "insert", e)
        })
    }

    /// Fetch every row of the table, in store order, as fresh instances.
    pub fn find_all(&self) -> Result<Vec<T>, DaoError> {
        let table = self.metadata.table_name();
        let stmt = sql::select_all(&self.metadata);

        let conn = self.provider.acquire()?;
        debug!(table, sql = %stmt.sql, "find_all");
        let mut prepared = conn
            .prepare(&stmt.sql)
            .map_err(|e| DaoError::execution(table, "find_all", e))?;
        let mut rows = prepared
            .query([])
            .map_err(|e| DaoError::execution(table, "find_all", e))?;

        let mut entities = Vec::new();
        while let Some(row) = rows
            .next()
            .map_err(|e| DaoError::execution(table, "find_all", e))?
        {
            entities.push(T::from_row(row).map_err(|e| {
                error!(table, error = %e, "row mapping failed");
                DaoError::row_mapping(table, e)
            })?);
        }
        Ok(entities)
    }

    /// Fetch at most one row by primary key.
    ///
    /// `Ok(None)` means no matching row; failures are `Err`. Logically
    /// deleted rows are returned like any other row — the select carries no
    /// flag predicate.
    pub fn find_by_id(&self, id: &T::Id) -> Result<Option<T>, DaoError> {
        let table = self.metadata.table_name();
        let stmt = sql::select_by_id(&self.metadata);

        let conn = self.provider.acquire()?;
        debug!(table, sql = %stmt.sql, "find_by_id");
        let mut prepared = conn
            .prepare(&stmt.sql)
            .map_err(|e| DaoError::execution(table, "find_by_id", e))?;
        let mut rows = prepared
            .query([id])
            .map_err(|e| DaoError::execution(table, "find_by_id", e))?;

        match rows
            .next()
            .map_err(|e| DaoError::execution(table, "find_by_id", e))?
        {
            Some(row) => {
                let entity = T::from_row(row).map_err(|e| {
                    error!(table, error = %e, "row mapping failed");
                    DaoError::row_mapping(table, e)
                })?;
                Ok(Some(entity))
            }
            None => Ok(None),
        }
    }

    /// Update the row matching `id` from `entity`'s field values.
    ///
    /// The SET clause spans every column except the first declared one, so
    /// the stored value of the first declared field is left untouched even
    /// when `entity` differs there. Declare the key column first. Returns the
    /// affected-row count.
    pub fn update_by_id(&self, entity: &T, id: &T::Id) -> Result<usize, DaoError> {
        let table = self.metadata.table_name();
        let stmt = sql::update_by_id(&self.metadata);

        let mut params = entity.to_params().map_err(|e| {
            error!(table, error = %e, "update parameter binding failed");
            DaoError::parameter(table, e)
        })?;
        // first declared column is never written; id binds last
        params.remove(0);
        params.push(row::owned_value(id).map_err(|e| DaoError::parameter(table, e))?);

        let conn = self.provider.acquire()?;
        debug!(table, sql = %stmt.sql, "update_by_id");
        conn.execute(&stmt.sql, params_from_iter(params)).map_err(|e| {
            error!(table, error = %e, "update failed");
            DaoError::execution(table, "update_by_id", e)
        })
    }

    /// Delete the row matching `id`: physically, or by setting the
    /// logical-delete flag column to 1 when the policy is enabled. Returns
    /// the affected-row count.
    pub fn delete_by_id(&self, id: &T::Id) -> Result<usize, DaoError> {
        let table = self.metadata.table_name();
        let stmt = sql::delete_by_id(&self.metadata);

        let conn = self.provider.acquire()?;
        debug!(table, sql = %stmt.sql, "delete_by_id");
        conn.execute(&stmt.sql, [id]).map_err(|e| {
            error!(table, error = %e, "delete failed");
            DaoError::execution(table, "delete_by_id", e)
        })
    }

    /// Count all rows of the table, flagged rows included.
    pub fn count(&self) -> Result<i64, DaoError> {
        let table = self.metadata.table_name();
        let stmt = sql::count_all(&self.metadata);

        let conn = self.provider.acquire()?;
        conn.query_row(&stmt.sql, [], |row| row.get("total"))
            .map_err(|e| DaoError::execution(table, "count", e))
    }

    /// Escape hatch: run arbitrary SQL with positional parameters and map
    /// each result row into `R` by column name. Independent of this
    /// repository's metadata.
    pub fn query_as<R: FromRow>(
        &self,
        sql: &str,
        params: &[&dyn ToSql],
    ) -> Result<Vec<R>, DaoError> {
        super::adhoc::query(self.provider.as_ref(), sql, params)
    }
}
