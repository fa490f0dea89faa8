//! Repository error type.
//!
//! Validation failures are raised by `qazyna-core` before any write;
//! database errors come from sqlx. PostgreSQL unique-constraint
//! violations (SQLSTATE 23505) are surfaced as conflicts so callers can
//! distinguish a duplicate slug or tag name from an infrastructure
//! failure. There is no retry or automatic slug suffixing.

use qazyna_core::error::CoreError;

#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// A domain-level error from `qazyna-core` (validation, not-found).
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A duplicate value rejected by a unique constraint.
    #[error("Conflict: duplicate value violates unique constraint {constraint}")]
    Conflict { constraint: String },

    /// Any other database error.
    #[error("Database error: {0}")]
    Database(sqlx::Error),

    /// Missing or invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Convenience type alias for repository return values.
pub type DbResult<T> = Result<T, DbError>;

impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            // PostgreSQL unique constraint violation: error code 23505.
            if db_err.code().as_deref() == Some("23505") {
                let constraint = db_err.constraint().unwrap_or("unknown").to_string();
                return DbError::Conflict { constraint };
            }
        }
        DbError::Database(err)
    }
}

impl DbError {
    /// True if this error is a unique-constraint conflict.
    pub fn is_conflict(&self) -> bool {
        matches!(self, DbError::Conflict { .. })
    }
}
