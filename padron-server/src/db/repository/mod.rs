//! Repository Module
//!
//! SQL access for the affiliate registry. Every function takes a
//! `&mut SqliteConnection` so the same code serves plain reads (on a
//! pooled connection) and transactional mutations (on `&mut *tx`).

pub mod affiliate;
pub mod audit;

use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database unavailable: {0}")]
    Unavailable(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        // Pool exhaustion and SQLITE_BUSY are transient: the caller may retry
        // the whole request. Anything else is a hard database fault.
        if matches!(err, sqlx::Error::PoolTimedOut) {
            return RepoError::Unavailable(err.to_string());
        }
        if let Some(db_err) = err.as_database_error() {
            if db_err.is_unique_violation() {
                return RepoError::Duplicate(db_err.message().to_string());
            }
            if db_err.message().contains("database is locked") {
                return RepoError::Unavailable(db_err.message().to_string());
            }
        }
        RepoError::Database(err.to_string())
    }
}

/// Fallback conversion for handlers without conflict context.
///
/// The mutation service maps `Duplicate` itself so the response can name
/// the violated field; everything else goes through here.
impl From<RepoError> for shared::AppError {
    fn from(err: RepoError) -> Self {
        use shared::{AppError, ErrorCode};
        match err {
            RepoError::NotFound(msg) => AppError::with_message(ErrorCode::NotFound, msg),
            RepoError::Duplicate(msg) => AppError::with_message(ErrorCode::AlreadyExists, msg),
            RepoError::Validation(msg) => AppError::validation(msg),
            RepoError::Unavailable(msg) => AppError::store_unavailable(msg),
            RepoError::Database(msg) => AppError::database(msg),
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;
