//! Schedule service.

use crate::seeds;
use examdesk_model::{Entity, EntityKind, EntitySchema, FieldSpec};
use examdesk_persist::{EntityFacade, HealthState, PersistResult};
use examdesk_storage::EntityStore;
use examdesk_types::EntityId;
use serde_json::Value;
use std::sync::Arc;

/// CRUD plus date views for the study schedule.
pub struct ScheduleService {
    facade: EntityFacade,
}

impl ScheduleService {
    /// Bootstraps the service against a shared store.
    pub async fn new(store: Arc<dyn EntityStore>) -> PersistResult<Self> {
        let facade = EntityFacade::bootstrap(
            EntityKind::Schedule,
            store,
            &schema(),
            seeds::schedule_rows(),
        )
        .await?;
        Ok(Self { facade })
    }

    /// Health of the backing store, as seen by this service.
    pub fn health(&self) -> HealthState {
        self.facade.health()
    }

    /// Every entry in insertion order.
    pub async fn all(&self) -> Vec<Entity> {
        self.facade.find_all().await
    }

    /// Entries whose `date` equals the given `YYYY-MM-DD` day.
    pub async fn by_date(&self, date: &str) -> Vec<Entity> {
        self.facade
            .find_by_filter(|entity| entity.get_str("/date") == Some(date))
            .await
    }

    /// Entries falling in the given month.
    pub async fn by_month(&self, year: i32, month: u32) -> Vec<Entity> {
        let prefix = format!("{year:04}-{month:02}-");
        self.facade
            .find_by_filter(|entity| {
                entity
                    .get_str("/date")
                    .is_some_and(|date| date.starts_with(&prefix))
            })
            .await
    }

    /// Creates an entry.
    pub async fn create(&self, fields: Value) -> Entity {
        self.facade.create(fields).await
    }

    /// Merges fields into an entry.
    pub async fn update(&self, id: &EntityId, fields: Value) -> Option<Entity> {
        self.facade.update(id, fields).await
    }

    /// Deletes an entry. Returns whether one existed.
    pub async fn delete(&self, id: &EntityId) -> bool {
        self.facade.remove(id).await
    }
}

fn schema() -> EntitySchema {
    EntitySchema::new(
        EntityKind::Schedule,
        vec![
            FieldSpec::text("title", true),
            FieldSpec::text("date", true),
            FieldSpec::text("time", true),
            FieldSpec::text("type", false),
            FieldSpec::text("location", false),
        ],
    )
}
