//! Shared fixtures for service tests.

#![allow(dead_code)]

use async_trait::async_trait;
use examdesk_model::{Entity, EntityKind};
use examdesk_services::ReplyPicker;
use examdesk_storage::{EntityStore, SqliteStore, StorageError, StorageResult};
use examdesk_types::EntityId;
use serde_json::Value;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Fresh in-memory SQLite store, the healthy-path backend.
pub fn sqlite_store() -> Arc<dyn EntityStore> {
    Arc::new(SqliteStore::open_in_memory().unwrap())
}

/// Store that fails every call and counts how many reach it.
pub struct FailingStore {
    calls: AtomicUsize,
}

impl FailingStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn refuse<T>(&self) -> StorageResult<T> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(StorageError::Unavailable("offline in test".into()))
    }
}

#[async_trait]
impl EntityStore for FailingStore {
    async fn count(&self, _kind: EntityKind) -> StorageResult<u64> {
        self.refuse()
    }

    async fn find_all(&self, _kind: EntityKind) -> StorageResult<Vec<Entity>> {
        self.refuse()
    }

    async fn find_by_id(
        &self,
        _kind: EntityKind,
        _id: &EntityId,
    ) -> StorageResult<Option<Entity>> {
        self.refuse()
    }

    async fn create(&self, _kind: EntityKind, _fields: Value) -> StorageResult<Entity> {
        self.refuse()
    }

    async fn update(
        &self,
        _kind: EntityKind,
        _id: &EntityId,
        _fields: Value,
    ) -> StorageResult<Option<Entity>> {
        self.refuse()
    }

    async fn remove(&self, _kind: EntityKind, _id: &EntityId) -> StorageResult<bool> {
        self.refuse()
    }
}

/// Picker that walks the reply set in order: first call picks 0, next 1,
/// and so on, wrapping at the end.
pub struct SequencePicker {
    next: AtomicUsize,
}

impl SequencePicker {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            next: AtomicUsize::new(0),
        })
    }
}

impl ReplyPicker for SequencePicker {
    fn pick(&self, len: usize) -> usize {
        self.next.fetch_add(1, Ordering::SeqCst) % len
    }
}
