//! Error types for the capsule engine and its store boundary.

use thiserror::Error;

/// Errors surfaced by [`crate::inspiration::Capsule`] operations.
#[derive(Debug, Error)]
pub enum CapsuleError {
    /// Caller input violates a precondition. Never retried.
    #[error("validation failed: {0}")]
    Validation(String),

    /// Failure from the persistence boundary, propagated unchanged.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

/// Errors raised by an [`crate::store::InspirationStore`] implementation.
#[derive(Debug, Error)]
pub enum StoreError {
    /// SQLite query or constraint failure.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// The blocking task running the query panicked or was cancelled.
    #[error("store task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    /// A previous holder of the connection lock panicked.
    #[error("store lock poisoned")]
    Poisoned,

    /// Anything else (used by custom store implementations).
    #[error("{0}")]
    Other(String),
}

pub type Result<T, E = CapsuleError> = std::result::Result<T, E>;
