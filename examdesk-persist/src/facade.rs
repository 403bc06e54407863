//! Generic CRUD facade with durable-to-mirror fallback.
//!
//! Every operation goes through one combinator: try the durable store
//! while the health latch reports AVAILABLE, and on any storage error trip
//! the latch and answer from the mirror. Once DEGRADED, the store is never
//! attempted again; the mirror serves everything for the rest of the
//! process. Callers only ever see plain data.

use crate::health::HealthState;
use crate::mirror::MirrorTable;
use crate::seed::{SeedDescriptor, SeedManager};
use crate::PersistResult;
use examdesk_model::{Entity, EntityKind, EntitySchema};
use examdesk_storage::{EntityStore, StorageError, StorageResult};
use examdesk_types::{EntityId, MonotonicClock};
use serde_json::Value;
use std::future::Future;
use std::sync::{Arc, Mutex};
use tracing::warn;

/// CRUD surface for one entity kind, arbitrating between the durable
/// store and the in-memory mirror.
pub struct EntityFacade {
    /// The kind every operation is scoped to.
    kind: EntityKind,
    /// Durable store delegate. Shared so several facades can sit on one
    /// database.
    store: Arc<dyn EntityStore>,
    /// Fallback table, pre-populated with the seed rows at bootstrap.
    /// Locked only for synchronous access, never across an await.
    mirror: Mutex<MirrorTable<Entity>>,
    /// Timestamp source for rows minted by the mirror side.
    clock: Mutex<MonotonicClock>,
    /// One-way availability latch shared with the seeder.
    health: HealthState,
}

impl EntityFacade {
    /// Builds a facade: validates the seed rows, pre-populates the mirror,
    /// and seeds the durable store if it is empty.
    ///
    /// The only error is a seed row that fails schema validation. A store
    /// that cannot be reached is not an error; the facade comes up
    /// degraded and serves the seed data from memory.
    pub async fn bootstrap(
        kind: EntityKind,
        store: Arc<dyn EntityStore>,
        schema: &EntitySchema,
        descriptor: SeedDescriptor,
    ) -> PersistResult<Self> {
        Self::bootstrap_with_health(kind, store, schema, descriptor, HealthState::new()).await
    }

    /// Like [`bootstrap`](Self::bootstrap), but observing an
    /// externally-owned health latch.
    pub async fn bootstrap_with_health(
        kind: EntityKind,
        store: Arc<dyn EntityStore>,
        schema: &EntitySchema,
        descriptor: SeedDescriptor,
        health: HealthState,
    ) -> PersistResult<Self> {
        let seeder = SeedManager::new(descriptor);
        seeder.validate(schema)?;

        let mut clock = MonotonicClock::new();
        let mirror = seeder.build_mirror(kind, &mut clock);
        seeder.apply_to_store(kind, store.as_ref(), &health).await;

        Ok(Self {
            kind,
            store,
            mirror: Mutex::new(mirror),
            clock: Mutex::new(clock),
            health,
        })
    }

    /// The entity kind this facade serves.
    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    /// A handle onto the facade's health latch.
    pub fn health(&self) -> HealthState {
        self.health.clone()
    }

    // ── Operations ───────────────────────────────────────────────

    /// Number of records.
    pub async fn count(&self) -> u64 {
        self.with_fallback(self.store.count(self.kind), |mirror, _| {
            mirror.len() as u64
        })
        .await
    }

    /// All records in insertion order.
    pub async fn find_all(&self) -> Vec<Entity> {
        self.with_fallback(self.store.find_all(self.kind), |mirror, _| mirror.all())
            .await
    }

    /// The record with the given id, if any.
    pub async fn find_by_id(&self, id: &EntityId) -> Option<Entity> {
        self.with_fallback(self.store.find_by_id(self.kind, id), |mirror, _| {
            mirror.get(id)
        })
        .await
    }

    /// The records matching a predicate, in insertion order.
    pub async fn find_by_filter<P>(&self, predicate: P) -> Vec<Entity>
    where
        P: Fn(&Entity) -> bool,
    {
        let predicate = &predicate;
        let durable = async move {
            let rows = self.store.find_all(self.kind).await?;
            Ok::<_, StorageError>(rows.into_iter().filter(|entity| predicate(entity)).collect())
        };
        self.with_fallback(durable, |mirror, _| mirror.filter(predicate))
            .await
    }

    /// Persists a new record and returns it with id and timestamps set.
    /// Never fails: a store rejection lands the record in the mirror.
    pub async fn create(&self, fields: Value) -> Entity {
        let kind = self.kind;
        let durable = self.store.create(kind, fields.clone());
        self.with_fallback(durable, move |mirror, clock| {
            let entity = Entity::new(EntityId::new(), kind, fields, clock.next_millis());
            mirror.insert(entity.clone());
            entity
        })
        .await
    }

    /// Shallow-merges the given fields into the record and returns the
    /// result, or `None` if the id is absent. `id`, `created_at` and
    /// `updated_at` keys in the patch are ignored.
    pub async fn update(&self, id: &EntityId, fields: Value) -> Option<Entity> {
        let durable = self.store.update(self.kind, id, fields.clone());
        self.with_fallback(durable, move |mirror, clock| {
            let stamp = clock.next_millis();
            mirror.update_with(id, |entity| entity.apply_patch(&fields, stamp))
        })
        .await
    }

    /// Removes the record with the given id. Returns whether one existed.
    pub async fn remove(&self, id: &EntityId) -> bool {
        self.with_fallback(self.store.remove(self.kind, id), |mirror, _| {
            mirror.remove(id)
        })
        .await
    }

    // ── Fallback arbitration ─────────────────────────────────────

    /// Runs one operation against the durable store or the mirror.
    ///
    /// While AVAILABLE, awaits the durable future; its success is the
    /// result. Any `StorageError` trips the latch (logging the transition
    /// exactly once) and the mirror closure answers instead. Once
    /// DEGRADED, the durable future is dropped without being polled, so
    /// the store delegate does no work at all.
    async fn with_fallback<T, F>(
        &self,
        durable: impl Future<Output = StorageResult<T>>,
        mirror_op: F,
    ) -> T
    where
        F: FnOnce(&mut MirrorTable<Entity>, &mut MonotonicClock) -> T,
    {
        if self.health.is_available() {
            match durable.await {
                Ok(value) => return value,
                Err(err) => {
                    if self.health.mark_degraded() {
                        warn!(
                            "Durable store failed for {}; switching to in-memory mirror: {}",
                            self.kind, err
                        );
                    }
                }
            }
        }

        let mut mirror = self.mirror.lock().unwrap();
        let mut clock = self.clock.lock().unwrap();
        mirror_op(&mut mirror, &mut clock)
    }
}
