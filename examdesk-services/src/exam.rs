//! Exam catalog service.

use crate::seeds;
use examdesk_model::{Entity, EntityKind, EntitySchema, FieldSpec};
use examdesk_persist::{EntityFacade, HealthState, PersistResult};
use examdesk_storage::EntityStore;
use examdesk_types::EntityId;
use serde_json::Value;
use std::sync::Arc;

/// CRUD plus status views for the exam catalog.
pub struct ExamService {
    facade: EntityFacade,
}

impl ExamService {
    /// Bootstraps the service against a shared store.
    pub async fn new(store: Arc<dyn EntityStore>) -> PersistResult<Self> {
        let facade =
            EntityFacade::bootstrap(EntityKind::Exam, store, &schema(), seeds::exam_rows()).await?;
        Ok(Self { facade })
    }

    /// Health of the backing store, as seen by this service.
    pub fn health(&self) -> HealthState {
        self.facade.health()
    }

    /// Every exam in insertion order.
    pub async fn all(&self) -> Vec<Entity> {
        self.facade.find_all().await
    }

    /// One exam by id.
    pub async fn by_id(&self, id: &EntityId) -> Option<Entity> {
        self.facade.find_by_id(id).await
    }

    /// Exams in a lifecycle status (`draft`, `published` or `ended`).
    pub async fn by_status(&self, status: &str) -> Vec<Entity> {
        self.facade
            .find_by_filter(|entity| entity.get_str("/status") == Some(status))
            .await
    }

    /// Creates an exam. A missing `created_by` defaults to the admin user.
    pub async fn create(&self, mut fields: Value) -> Entity {
        if let Some(map) = fields.as_object_mut() {
            map.entry("created_by")
                .or_insert(Value::String("admin".to_owned()));
        }
        self.facade.create(fields).await
    }

    /// Merges fields into an exam.
    pub async fn update(&self, id: &EntityId, fields: Value) -> Option<Entity> {
        self.facade.update(id, fields).await
    }

    /// Deletes an exam. Returns whether one existed.
    pub async fn delete(&self, id: &EntityId) -> bool {
        self.facade.remove(id).await
    }
}

fn schema() -> EntitySchema {
    EntitySchema::new(
        EntityKind::Exam,
        vec![
            FieldSpec::text("title", true),
            FieldSpec::text("subject", false),
            FieldSpec::text("description", false),
            FieldSpec::text("status", true),
            FieldSpec::number("duration", true),
            FieldSpec::number("total_score", false),
            FieldSpec::number("pass_score", false),
            FieldSpec::text("start_time", false),
            FieldSpec::text("end_time", false),
            FieldSpec::text("created_by", false),
        ],
    )
}
