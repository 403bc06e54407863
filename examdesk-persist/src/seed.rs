//! Default-content seeding.
//!
//! Every service starts from the same canonical dataset: the mirror is
//! always pre-populated with it, and an empty durable store receives it
//! exactly once. A store that already holds rows is left untouched, so
//! repeated startups never duplicate the defaults.

use crate::error::{PersistError, PersistResult};
use crate::health::HealthState;
use crate::mirror::MirrorTable;
use examdesk_model::{Entity, EntityKind, EntitySchema};
use examdesk_storage::EntityStore;
use examdesk_types::{EntityId, MonotonicClock};
use serde_json::Value;
use tracing::{debug, info, warn};

/// Canonical default rows for one entity kind.
///
/// Rows are plain JSON objects carrying domain fields only; ids and
/// timestamps are minted at insertion time by whichever side stores them.
#[derive(Debug, Clone)]
pub struct SeedDescriptor {
    rows: Vec<Value>,
}

impl SeedDescriptor {
    /// Wraps a list of default rows.
    #[must_use]
    pub fn new(rows: Vec<Value>) -> Self {
        Self { rows }
    }

    /// The default rows, in canonical order.
    pub fn rows(&self) -> &[Value] {
        &self.rows
    }

    /// Number of default rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the descriptor carries no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Applies a [`SeedDescriptor`] to the mirror (always) and to the durable
/// store (only when the store is empty).
pub struct SeedManager {
    descriptor: SeedDescriptor,
}

impl SeedManager {
    /// Creates a manager for the given descriptor.
    #[must_use]
    pub fn new(descriptor: SeedDescriptor) -> Self {
        Self { descriptor }
    }

    /// Checks every row against the kind's schema. A malformed row is a
    /// programming defect and fails construction of the owning service.
    pub fn validate(&self, schema: &EntitySchema) -> PersistResult<()> {
        for row in self.descriptor.rows() {
            schema.validate_row(row).map_err(|source| PersistError::InvalidSeed {
                kind: schema.kind(),
                source,
            })?;
        }
        Ok(())
    }

    /// Builds a mirror pre-populated with the default rows. Ids are
    /// synthesized here and timestamps come from the facade's clock, so the
    /// mirror is ordered and non-empty even if the store never answers.
    pub fn build_mirror(&self, kind: EntityKind, clock: &mut MonotonicClock) -> MirrorTable<Entity> {
        let mut table = MirrorTable::new();
        for row in self.descriptor.rows() {
            let entity = Entity::new(EntityId::new(), kind, row.clone(), clock.next_millis());
            table.insert(entity);
        }
        table
    }

    /// Inserts the default rows into an empty durable store. Any failure
    /// trips the health latch and is reported as a diagnostic only; the
    /// service then runs degraded for its entire lifetime.
    pub async fn apply_to_store(
        &self,
        kind: EntityKind,
        store: &dyn EntityStore,
        health: &HealthState,
    ) {
        if !health.is_available() {
            debug!("Skipping durable seed for {}: store already degraded", kind);
            return;
        }

        let existing = match store.count(kind).await {
            Ok(n) => n,
            Err(err) => {
                health.mark_degraded();
                warn!("Seeding {} failed; continuing with in-memory data: {}", kind, err);
                return;
            }
        };

        if existing > 0 {
            debug!("Store already holds {} {} rows, skipping seed", existing, kind);
            return;
        }

        for row in self.descriptor.rows() {
            if let Err(err) = store.create(kind, row.clone()).await {
                health.mark_degraded();
                warn!("Seeding {} failed; continuing with in-memory data: {}", kind, err);
                return;
            }
        }
        info!("Seeded {} default {} rows", self.descriptor.len(), kind);
    }
}
