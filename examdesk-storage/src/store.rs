use crate::StorageResult;
use async_trait::async_trait;
use examdesk_model::{Entity, EntityKind};
use examdesk_types::EntityId;
use serde_json::Value;

/// The durable side of the persistence facade.
///
/// One logical table per [`EntityKind`]; rows come back in insertion
/// order. Every method may fail, and callers are expected to treat any
/// failure as "store unreachable" rather than retrying.
#[async_trait]
pub trait EntityStore: Send + Sync {
    /// Number of rows of the given kind.
    async fn count(&self, kind: EntityKind) -> StorageResult<u64>;

    /// All rows of the given kind, in insertion order.
    async fn find_all(&self, kind: EntityKind) -> StorageResult<Vec<Entity>>;

    /// One row by id, or `None` if absent.
    async fn find_by_id(&self, kind: EntityKind, id: &EntityId) -> StorageResult<Option<Entity>>;

    /// Inserts a new row, minting its id and timestamps.
    async fn create(&self, kind: EntityKind, fields: Value) -> StorageResult<Entity>;

    /// Applies a shallow field patch to a row. Returns the updated row, or
    /// `None` if no row with the id exists.
    async fn update(
        &self,
        kind: EntityKind,
        id: &EntityId,
        fields: Value,
    ) -> StorageResult<Option<Entity>>;

    /// Deletes a row. Returns whether a row existed and was removed.
    async fn remove(&self, kind: EntityKind, id: &EntityId) -> StorageResult<bool>;
}
