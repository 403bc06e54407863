//! Error types for the persistence layer.

use examdesk_model::{EntityKind, ModelError};
use thiserror::Error;

/// Result type for persistence operations.
pub type PersistResult<T> = Result<T, PersistError>;

/// Errors raised while bootstrapping a facade.
///
/// Live operations never return these. Once a facade is constructed, every
/// call completes from the durable store or from the mirror; durable
/// failures degrade the service instead of propagating.
#[derive(Debug, Error)]
pub enum PersistError {
    /// A canonical seed row does not match its kind's schema. This is a
    /// programming defect, not an environment issue, so it is fatal.
    #[error("invalid seed row for {kind}: {source}")]
    InvalidSeed {
        kind: EntityKind,
        #[source]
        source: ModelError,
    },
}
