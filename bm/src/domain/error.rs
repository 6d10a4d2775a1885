// bm/src/domain/error.rs
use crate::domain::bookmark::BookmarkBuilderError;
use crate::infrastructure::repositories::sqlite::error::SqliteRepositoryError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Bookmark name already exists: {0}")]
    DuplicateName(String),

    #[error("Bookmark not found: {0}")]
    BookmarkNotFound(String),

    #[error("No fields to update for bookmark: {0}")]
    NoFieldsToUpdate(String),

    #[error("Invalid bookmark: {0}")]
    InvalidBookmark(String),

    #[error("Invalid tag: {0}")]
    InvalidTag(String),

    #[error("Storage error: {0}")]
    Storage(#[from] SqliteRepositoryError),

    #[error("{source}; rollback failed: {rollback}")]
    RollbackFailed {
        #[source]
        source: Box<DomainError>,
        rollback: SqliteRepositoryError,
    },
}

pub type DomainResult<T> = Result<T, DomainError>;

impl From<BookmarkBuilderError> for DomainError {
    fn from(e: BookmarkBuilderError) -> Self {
        DomainError::InvalidBookmark(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use diesel::result::Error as DieselError;

    #[test]
    fn given_rollback_failure_when_display_then_reports_both_errors() {
        let err = DomainError::RollbackFailed {
            source: Box::new(DomainError::BookmarkNotFound("G".to_string())),
            rollback: SqliteRepositoryError::DatabaseError(DieselError::NotFound),
        };

        let message = err.to_string();
        assert!(message.contains("Bookmark not found: G"));
        assert!(message.contains("rollback failed"));
        assert!(message.contains("Record not found"));
    }

    #[test]
    fn given_rollback_failure_when_source_then_returns_original_error() {
        use std::error::Error;

        let err = DomainError::RollbackFailed {
            source: Box::new(DomainError::DuplicateName("G".to_string())),
            rollback: SqliteRepositoryError::DatabaseError(DieselError::RollbackTransaction),
        };

        let source = err.source().map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("Bookmark name already exists: G"));
    }
}
