//! Dispatcher error types.

use thiserror::Error;

/// Result type for dispatched calls.
pub type InvokeResult<T> = Result<T, InvokeError>;

/// Caller mistakes at the named-call boundary.
///
/// These are the only errors a caller ever sees. Storage trouble is
/// absorbed by the persistence layer, and absent records come back as
/// `null`/`false` results, not errors.
#[derive(Debug, Error)]
pub enum InvokeError {
    /// No handler is registered under this name.
    #[error("unknown method: {0}")]
    UnknownMethod(String),

    /// The call carries fewer arguments than the method needs.
    #[error("{method}: missing argument {index}")]
    MissingArgument { method: String, index: usize },

    /// An argument is present but has the wrong shape.
    #[error("{method}: argument {index} must be {expected}")]
    InvalidArgument {
        method: String,
        index: usize,
        expected: &'static str,
    },

    /// A result failed to serialize.
    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}
