// src/infrastructure/repositories/sqlite/migration.rs
use diesel::connection::SimpleConnection;
use diesel::{sql_query, RunQueryDsl, SqliteConnection};
use tracing::{debug, info, instrument};

use super::error::{SqliteRepositoryError, SqliteResult};
use super::model::ColumnName;

const CREATE_TABLES: &str = "
    CREATE TABLE IF NOT EXISTS bookmarks (
        name TEXT PRIMARY KEY,
        url TEXT,
        archived INTEGER DEFAULT 0
    );
    CREATE TABLE IF NOT EXISTS tags (
        name TEXT,
        tag TEXT,
        FOREIGN KEY(name) REFERENCES bookmarks(name) ON DELETE CASCADE,
        PRIMARY KEY(name, tag)
    );
";

const ADD_ARCHIVED_COLUMN: &str = "ALTER TABLE bookmarks ADD COLUMN archived INTEGER DEFAULT 0";

/// Creates missing tables and adds the `archived` column to databases that
/// predate it. Safe to run on every start.
#[instrument(skip(conn), level = "debug")]
pub fn ensure_schema(conn: &mut SqliteConnection) -> SqliteResult<()> {
    conn.batch_execute(CREATE_TABLES).map_err(|e| {
        SqliteRepositoryError::MigrationError(format!("Failed to create tables: {}", e))
    })?;

    if has_column(conn, "bookmarks", "archived")? {
        debug!("Column bookmarks.archived already exists");
        return Ok(());
    }

    sql_query(ADD_ARCHIVED_COLUMN).execute(conn).map_err(|e| {
        SqliteRepositoryError::MigrationError(format!("Failed to add archived column: {}", e))
    })?;

    info!("Migrated bookmarks table: added archived column");
    Ok(())
}

/// Checks the live table definition instead of relying on the error text of
/// a failing `ALTER TABLE`.
#[instrument(skip(conn), level = "debug")]
pub fn has_column(conn: &mut SqliteConnection, table: &str, column: &str) -> SqliteResult<bool> {
    let columns: Vec<ColumnName> = sql_query("SELECT name FROM pragma_table_info(?)")
        .bind::<diesel::sql_types::Text, _>(table)
        .load(conn)
        .map_err(SqliteRepositoryError::DatabaseError)?;

    Ok(columns.iter().any(|c| c.name == column))
}
