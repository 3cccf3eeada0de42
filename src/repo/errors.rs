//! Repository error taxonomy
//!
//! Three distinguished conditions, dispatched by variant tag (never by
//! message text):
//! - `Validation`: caller-supplied data violates entity invariants,
//!   detected before any store interaction
//! - `NotFound`: the store answered, no matching row
//! - `Storage`: the store access itself failed; wraps the driver error
//!   opaquely

use thiserror::Error;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Repository errors
#[derive(Debug, Error)]
pub enum RepoError {
    /// No row matched the requested id
    #[error("book not found")]
    NotFound,

    /// Caller-supplied data violates the entity invariants
    #[error("{0}")]
    Validation(String),

    /// The store access failed
    #[error("{0}")]
    Storage(#[from] sqlx::Error),
}
