//! Error types for the storage layer.

use thiserror::Error;

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Errors that can occur in storage operations.
///
/// The facade treats every variant the same way: the store is unreachable
/// and the call falls through to the mirror. The distinctions exist for
/// diagnostics only.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Database error from SQLite.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A stored row could not be read back into an entity.
    #[error("invalid data: {0}")]
    InvalidData(String),

    /// The blocking task running the statement was lost.
    #[error("storage task failed: {0}")]
    Task(String),

    /// The store cannot be reached at all. Raised by test doubles and
    /// hosts simulating an outage; SQLite itself reports `Database`.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}
