// src/cli/error.rs
use crate::config::ConfigError;
use crate::domain::error::DomainError;
use crate::exitcode;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Output error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl CliError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Domain(err) => domain_exit_code(err),
            CliError::Io(_) => exitcode::STORAGE,
            _ => exitcode::USAGE,
        }
    }
}

fn domain_exit_code(err: &DomainError) -> i32 {
    match err {
        DomainError::DuplicateName(_) => exitcode::DUP,
        DomainError::BookmarkNotFound(_) => exitcode::NOT_FOUND,
        DomainError::NoFieldsToUpdate(_) => exitcode::NOTHING_TO_UPDATE,
        DomainError::InvalidBookmark(_) | DomainError::InvalidTag(_) => exitcode::USAGE,
        DomainError::Storage(_) => exitcode::STORAGE,
        DomainError::RollbackFailed { source, .. } => domain_exit_code(source),
    }
}

pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::repositories::sqlite::error::SqliteRepositoryError;
    use diesel::result::Error as DieselError;

    #[test]
    fn given_domain_errors_when_exit_code_then_maps_each_kind() {
        let cases = [
            (DomainError::DuplicateName("G".into()), exitcode::DUP),
            (DomainError::BookmarkNotFound("G".into()), exitcode::NOT_FOUND),
            (
                DomainError::NoFieldsToUpdate("G".into()),
                exitcode::NOTHING_TO_UPDATE,
            ),
            (DomainError::InvalidTag("".into()), exitcode::USAGE),
            (
                DomainError::Storage(SqliteRepositoryError::DatabaseError(DieselError::NotFound)),
                exitcode::STORAGE,
            ),
        ];

        for (err, code) in cases {
            assert_eq!(CliError::from(err).exit_code(), code);
        }
    }

    #[test]
    fn given_rollback_failure_when_exit_code_then_uses_original_error() {
        let err = CliError::from(DomainError::RollbackFailed {
            source: Box::new(DomainError::BookmarkNotFound("G".into())),
            rollback: SqliteRepositoryError::DatabaseError(DieselError::RollbackTransaction),
        });
        assert_eq!(err.exit_code(), exitcode::NOT_FOUND);
    }

    #[test]
    fn given_invalid_input_when_exit_code_then_returns_usage() {
        let err = CliError::InvalidInput("separator".into());
        assert_eq!(err.exit_code(), exitcode::USAGE);
    }
}
