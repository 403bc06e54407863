//! Shared test doubles for persistence tests.

#![allow(dead_code)]

use async_trait::async_trait;
use examdesk_model::{Entity, EntityKind, EntitySchema, FieldSpec};
use examdesk_persist::SeedDescriptor;
use examdesk_storage::{EntityStore, StorageError, StorageResult};
use examdesk_types::{now_millis, EntityId};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// In-memory store double that counts how often it is polled and can be
/// tripped into failing every call from some point on.
pub struct RecordingStore {
    rows: Mutex<Vec<Entity>>,
    failing: AtomicBool,
    refusing_creates: AtomicBool,
    calls: AtomicUsize,
}

impl RecordingStore {
    /// A healthy store that answers every call.
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            rows: Mutex::new(Vec::new()),
            failing: AtomicBool::new(false),
            refusing_creates: AtomicBool::new(false),
            calls: AtomicUsize::new(0),
        })
    }

    /// A store that fails from the very first call.
    pub fn tripped() -> Arc<Self> {
        let store = Self::new();
        store.trip();
        store
    }

    /// From now on, every call fails.
    pub fn trip(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    /// From now on, only `create` fails; reads keep answering.
    pub fn refuse_creates(&self) {
        self.refusing_creates.store(true, Ordering::SeqCst);
    }

    /// Number of calls that reached this store.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Direct snapshot of the stored rows, bypassing the trait.
    pub fn rows(&self) -> Vec<Entity> {
        self.rows.lock().unwrap().clone()
    }

    fn check(&self) -> StorageResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            Err(StorageError::Unavailable("tripped by test".into()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl EntityStore for RecordingStore {
    async fn count(&self, kind: EntityKind) -> StorageResult<u64> {
        self.check()?;
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().filter(|e| e.kind == kind).count() as u64)
    }

    async fn find_all(&self, kind: EntityKind) -> StorageResult<Vec<Entity>> {
        self.check()?;
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().filter(|e| e.kind == kind).cloned().collect())
    }

    async fn find_by_id(&self, kind: EntityKind, id: &EntityId) -> StorageResult<Option<Entity>> {
        self.check()?;
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|e| e.kind == kind && e.id == *id).cloned())
    }

    async fn create(&self, kind: EntityKind, fields: Value) -> StorageResult<Entity> {
        self.check()?;
        if self.refusing_creates.load(Ordering::SeqCst) {
            return Err(StorageError::Unavailable("creates refused by test".into()));
        }
        let entity = Entity::new(EntityId::new(), kind, fields, now_millis());
        self.rows.lock().unwrap().push(entity.clone());
        Ok(entity)
    }

    async fn update(
        &self,
        kind: EntityKind,
        id: &EntityId,
        fields: Value,
    ) -> StorageResult<Option<Entity>> {
        self.check()?;
        let mut rows = self.rows.lock().unwrap();
        let Some(entity) = rows.iter_mut().find(|e| e.kind == kind && e.id == *id) else {
            return Ok(None);
        };
        entity.apply_patch(&fields, now_millis());
        Ok(Some(entity.clone()))
    }

    async fn remove(&self, kind: EntityKind, id: &EntityId) -> StorageResult<bool> {
        self.check()?;
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|e| !(e.kind == kind && e.id == *id));
        Ok(rows.len() != before)
    }
}

/// Three-row todo descriptor used across the facade tests.
pub fn todo_seeds() -> SeedDescriptor {
    SeedDescriptor::new(vec![
        json!({"title": "Pack the lab kit", "completed": false, "priority": "high"}),
        json!({"title": "Book the study room", "completed": true, "priority": "medium"}),
        json!({"title": "Print the handout", "completed": false, "priority": "low"}),
    ])
}

/// Schema matching [`todo_seeds`].
pub fn todo_schema() -> EntitySchema {
    EntitySchema::new(
        EntityKind::Todo,
        vec![
            FieldSpec::text("title", true),
            FieldSpec::bool("completed", true),
            FieldSpec::text("priority", false),
        ],
    )
}
