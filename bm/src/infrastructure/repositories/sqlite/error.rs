// src/infrastructure/repositories/sqlite/error.rs

use diesel::result::Error as DieselError;
use thiserror::Error;

use crate::domain::error::DomainError;

#[derive(Error, Debug)]
pub enum SqliteRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] DieselError),

    #[error("Diesel connection error: {0}")]
    ConnectionError(#[from] diesel::ConnectionError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Migration error: {0}")]
    MigrationError(String),
}

pub type SqliteResult<T> = Result<T, SqliteRepositoryError>;

impl From<DieselError> for DomainError {
    fn from(err: DieselError) -> Self {
        DomainError::Storage(SqliteRepositoryError::DatabaseError(err))
    }
}

impl From<diesel::ConnectionError> for DomainError {
    fn from(err: diesel::ConnectionError) -> Self {
        DomainError::Storage(SqliteRepositoryError::ConnectionError(err))
    }
}
