use super::error::{SqliteRepositoryError, SqliteResult};
use super::migration::ensure_schema;
use crate::domain::error::{DomainError, DomainResult};
use diesel::connection::{AnsiTransactionManager, SimpleConnection, TransactionManager};
use diesel::sqlite::SqliteConnection;
use diesel::Connection;
use std::fs;
use std::path::Path;
use tracing::{debug, error, info, instrument};

pub const IN_MEMORY: &str = ":memory:";

/// Open the single connection used for the process lifetime and bring the
/// schema up to date.
#[instrument(level = "debug")]
pub fn establish(database_url: &str) -> SqliteResult<SqliteConnection> {
    debug!("Opening database: {}", database_url);

    // Create parent directory if it doesn't exist
    if database_url != IN_MEMORY {
        if let Some(parent) = Path::new(database_url).parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(SqliteRepositoryError::IoError)?;
            }
        }
    }

    let mut conn = SqliteConnection::establish(database_url)?;

    // SQLite only honours ON DELETE CASCADE with this set per connection
    conn.batch_execute("PRAGMA foreign_keys = ON;")
        .map_err(SqliteRepositoryError::DatabaseError)?;

    ensure_schema(&mut conn)?;

    info!("Database ready: {}", database_url);
    Ok(conn)
}

/// Run `work` inside one transaction.
///
/// Commits on `Ok`. On `Err` the transaction is rolled back before the error
/// is returned; a failing rollback is reported together with the original
/// error as `DomainError::RollbackFailed`.
pub fn in_transaction<T, F>(conn: &mut SqliteConnection, work: F) -> DomainResult<T>
where
    F: FnOnce(&mut SqliteConnection) -> DomainResult<T>,
{
    <AnsiTransactionManager as TransactionManager<SqliteConnection>>::begin_transaction(conn)?;

    match work(conn) {
        Ok(value) => {
            <AnsiTransactionManager as TransactionManager<SqliteConnection>>::commit_transaction(
                conn,
            )?;
            Ok(value)
        }
        Err(err) => {
            match <AnsiTransactionManager as TransactionManager<SqliteConnection>>::rollback_transaction(conn) {
                Ok(()) => {
                    debug!("Rolled back: {}", err);
                    Err(err)
                }
                Err(rollback_err) => {
                    error!("Rollback failed after '{}': {}", err, rollback_err);
                    Err(DomainError::RollbackFailed {
                        source: Box::new(err),
                        rollback: SqliteRepositoryError::DatabaseError(rollback_err),
                    })
                }
            }
        }
    }
}
