//! Entity model for ExamDesk.
//!
//! Defines the shapes every other subsystem works in terms of:
//! - [`Entity`]: one persisted record (id, kind, JSON payload, timestamps)
//! - [`EntityKind`]: the closed set of domain tables
//! - [`EntitySchema`]: a kind's field list, used to validate seed rows
//!
//! Domain fields live inside the entity's JSON payload; the schema carries
//! no behavior beyond documenting a kind's shape and rejecting malformed
//! seed data at construction time.

mod entity;
mod kind;
mod schema;

pub use entity::Entity;
pub use kind::EntityKind;
pub use schema::{EntitySchema, FieldSpec, FieldType};

/// Result type alias using the crate's error type.
pub type ModelResult<T> = std::result::Result<T, ModelError>;

/// Errors that can occur in model operations.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("unknown entity kind: {0}")]
    UnknownKind(String),

    #[error("seed row must be a JSON object, got {0}")]
    RowNotAnObject(String),

    #[error("missing required field `{0}`")]
    MissingField(String),

    #[error("field `{name}` must be {expected}")]
    FieldType {
        name: String,
        expected: &'static str,
    },
}
