//! Row access and parameter conversion helpers used by generated code

use rusqlite::types::{FromSql, ToSql, ToSqlOutput, Value};
use rusqlite::Row;

/// Read a column by name, falling back to the field's default value when the
/// result set carries no such column. Type mismatches are still errors.
pub fn column_or_default<T: FromSql + Default>(
    row: &Row<'_>,
    column: &str,
) -> Result<T, rusqlite::Error> {
    match row.get::<_, T>(column) {
        Ok(value) => Ok(value),
        Err(rusqlite::Error::InvalidColumnName(_)) => Ok(T::default()),
        Err(e) => Err(e),
    }
}

/// Convert any bindable value into an owned SQL value so parameter lists can
/// be assembled independently of the statement they bind to.
pub fn owned_value<V: ToSql + ?Sized>(value: &V) -> Result<Value, rusqlite::Error> {
    match value.to_sql()? {
        ToSqlOutput::Borrowed(value_ref) => Ok(value_ref.into()),
        ToSqlOutput::Owned(value) => Ok(value),
        _ => Err(rusqlite::Error::ToSqlConversionFailure(
            "unsupported parameter value".into(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    #[test]
    fn owned_value_covers_common_types() {
        assert_eq!(owned_value(&42i64).unwrap(), Value::Integer(42));
        assert_eq!(
            owned_value(&"ann".to_string()).unwrap(),
            Value::Text("ann".to_string())
        );
        assert_eq!(owned_value(&Option::<i64>::None).unwrap(), Value::Null);
    }

    #[test]
    fn missing_column_yields_default() {
        let conn = Connection::open_in_memory().unwrap();
        let (present, absent): (i64, i64) = conn
            .query_row("SELECT 7 AS a", [], |row| {
                Ok((
                    column_or_default(row, "a")?,
                    column_or_default(row, "missing")?,
                ))
            })
            .unwrap();
        assert_eq!(present, 7);
        assert_eq!(absent, 0);
    }
}
