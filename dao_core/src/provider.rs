//! Connection acquisition
//!
//! Repositories never hold a connection: every operation asks the provider
//! for one at entry and the guard returns it on every exit path. Providers
//! signal unavailability through `DaoError::ConnectionUnavailable`.

use crate::errors::DaoError;
use config::DatabaseConfig;
use rusqlite::Connection;
use std::ops::Deref;
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;
use tracing::{debug, error};

/// A scoped connection handle. Dropping it releases the connection,
/// whichever way it was acquired.
#[derive(Debug)]
pub enum ProviderConn<'a> {
    Owned(Connection),
    Shared(MutexGuard<'a, Connection>),
}

impl Deref for ProviderConn<'_> {
    type Target = Connection;

    fn deref(&self) -> &Connection {
        match self {
            ProviderConn::Owned(conn) => conn,
            ProviderConn::Shared(guard) => guard,
        }
    }
}

/// Supplies a usable connection or signals unavailability.
pub trait ConnectionProvider: Send + Sync {
    fn acquire(&self) -> Result<ProviderConn<'_>, DaoError>;
}

/// Opens the configured database file anew for every call.
pub struct FileProvider {
    path: PathBuf,
    busy_timeout: Duration,
}

impl FileProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            busy_timeout: Duration::from_secs(5),
        }
    }

    pub fn with_busy_timeout(mut self, busy_timeout: Duration) -> Self {
        self.busy_timeout = busy_timeout;
        self
    }

    pub fn from_config(config: &DatabaseConfig) -> Self {
        Self::new(config.path.clone())
            .with_busy_timeout(Duration::from_secs(config.busy_timeout_seconds))
    }
}

impl ConnectionProvider for FileProvider {
    fn acquire(&self) -> Result<ProviderConn<'_>, DaoError> {
        debug!(path = %self.path.display(), "opening sqlite connection");
        let conn = Connection::open(&self.path).map_err(|e| {
            error!(path = %self.path.display(), error = %e, "failed to open sqlite connection");
            DaoError::connection_unavailable(e.to_string())
        })?;
        conn.busy_timeout(self.busy_timeout)
            .map_err(|e| DaoError::connection_unavailable(e.to_string()))?;
        Ok(ProviderConn::Owned(conn))
    }
}

/// Hands out exclusive access to a single long-lived connection. This is the
/// provider to use with in-memory databases, whose contents exist only for
/// the lifetime of one connection.
pub struct SharedProvider {
    conn: Mutex<Connection>,
}

impl SharedProvider {
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }

    pub fn open_in_memory() -> Result<Self, DaoError> {
        let conn = Connection::open_in_memory()
            .map_err(|e| DaoError::connection_unavailable(e.to_string()))?;
        Ok(Self::new(conn))
    }
}

impl ConnectionProvider for SharedProvider {
    fn acquire(&self) -> Result<ProviderConn<'_>, DaoError> {
        let guard = self
            .conn
            .lock()
            .map_err(|_| DaoError::connection_unavailable("shared connection poisoned"))?;
        Ok(ProviderConn::Shared(guard))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shared_provider_reuses_one_database() {
        let provider = SharedProvider::open_in_memory().unwrap();
        provider
            .acquire()
            .unwrap()
            .execute_batch("CREATE TABLE t (x INTEGER)")
            .unwrap();
        provider
            .acquire()
            .unwrap()
            .execute("INSERT INTO t (x) VALUES (?)", [1i64])
            .unwrap();

        let count: i64 = provider
            .acquire()
            .unwrap()
            .query_row("SELECT COUNT(*) FROM t", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn file_provider_reports_unavailability() {
        let provider = FileProvider::new("/nonexistent-dir/daolite/test.db");
        let err = provider.acquire().unwrap_err();
        assert!(matches!(err, DaoError::ConnectionUnavailable { .. }));
    }
}
