//! Ad-hoc queries
//!
//! Executes arbitrary SQL against a provider and materializes every result
//! row into the target type by column-name matching, without consulting any
//! registered metadata. Target fields with no matching column keep their
//! default value; result columns with no matching field are ignored.

use crate::errors::DaoError;
use crate::provider::ConnectionProvider;
use crate::traits::FromRow;
use rusqlite::ToSql;
use tracing::{debug, error};

pub fn query<R: FromRow>(
    provider: &dyn ConnectionProvider,
    sql: &str,
    params: &[&dyn ToSql],
) -> Result<Vec<R>, DaoError> {
    let conn = provider.acquire()?;
    debug!(sql, "ad-hoc query");

    let mut prepared = conn
        .prepare(sql)
        .map_err(|e| DaoError::execution("ad-hoc", "query", e))?;
    let mut rows = prepared
        .query(params)
        .map_err(|e| DaoError::execution("ad-hoc", "query", e))?;

    let mut results = Vec::new();
    while let Some(row) = rows
        .next()
        .map_err(|e| DaoError::execution("ad-hoc", "query", e))?
    {
        results.push(R::from_row(row).map_err(|e| {
            error!(sql, error = %e, "ad-hoc row mapping failed");
            DaoError::row_mapping("ad-hoc", e)
        })?);
    }
    Ok(results)
}
