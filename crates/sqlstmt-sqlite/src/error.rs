//! Error types for the SQLite executor.

use sqlstmt_core::BuildError;
use thiserror::Error;

/// Errors raised while executing a statement against SQLite.
#[derive(Debug, Error)]
pub enum ExecError {
    /// The statement could not be rendered.
    #[error("invalid statement: {0}")]
    Build(#[from] BuildError),

    /// Database error from sqlx, passed through as reported.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl ExecError {
    /// Returns the driver error, if this is one.
    #[must_use]
    pub const fn as_database(&self) -> Option<&sqlx::Error> {
        match self {
            Self::Database(err) => Some(err),
            Self::Build(_) => None,
        }
    }

    /// Returns true if the database rejected the row for a UNIQUE constraint.
    #[must_use]
    pub fn is_unique_violation(&self) -> bool {
        matches!(
            self.as_database(),
            Some(sqlx::Error::Database(db_err)) if db_err.is_unique_violation()
        )
    }
}

/// Result type alias for executor operations.
pub type Result<T> = std::result::Result<T, ExecError>;
