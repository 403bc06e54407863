//! Todo list service.

use crate::seeds;
use examdesk_model::{Entity, EntityKind, EntitySchema, FieldSpec};
use examdesk_persist::{EntityFacade, HealthState, PersistResult};
use examdesk_storage::EntityStore;
use examdesk_types::EntityId;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;

/// Completion filter for todo queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TodoFilter {
    All,
    Active,
    Completed,
}

impl TodoFilter {
    /// Parses the filter names the UI sends.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "all" => Some(Self::All),
            "active" => Some(Self::Active),
            "completed" => Some(Self::Completed),
            _ => None,
        }
    }

    fn matches(self, entity: &Entity) -> bool {
        let done = entity.get_bool("/completed").unwrap_or(false);
        match self {
            Self::All => true,
            Self::Active => !done,
            Self::Completed => done,
        }
    }
}

/// Counts derived from a full scan, identical in both health states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoStatistics {
    pub total: usize,
    pub completed: usize,
    pub active: usize,
}

/// CRUD plus completion tracking for the todo list.
pub struct TodoService {
    facade: EntityFacade,
}

impl TodoService {
    /// Bootstraps the service against a shared store.
    pub async fn new(store: Arc<dyn EntityStore>) -> PersistResult<Self> {
        let facade =
            EntityFacade::bootstrap(EntityKind::Todo, store, &schema(), seeds::todo_rows()).await?;
        Ok(Self { facade })
    }

    /// Health of the backing store, as seen by this service.
    pub fn health(&self) -> HealthState {
        self.facade.health()
    }

    /// Every todo in insertion order.
    pub async fn all(&self) -> Vec<Entity> {
        self.facade.find_all().await
    }

    /// One todo by id.
    pub async fn by_id(&self, id: &EntityId) -> Option<Entity> {
        self.facade.find_by_id(id).await
    }

    /// Todos matching a completion filter.
    pub async fn by_filter(&self, filter: TodoFilter) -> Vec<Entity> {
        self.facade
            .find_by_filter(|entity| filter.matches(entity))
            .await
    }

    /// Creates a todo. A missing `completed` flag defaults to open.
    pub async fn create(&self, mut fields: Value) -> Entity {
        if let Some(map) = fields.as_object_mut() {
            map.entry("completed").or_insert(Value::Bool(false));
        }
        self.facade.create(fields).await
    }

    /// Merges fields into a todo.
    pub async fn update(&self, id: &EntityId, fields: Value) -> Option<Entity> {
        self.facade.update(id, fields).await
    }

    /// Flips a todo's completion flag. Unknown ids change nothing.
    pub async fn toggle(&self, id: &EntityId) -> Option<Entity> {
        let current = self.facade.find_by_id(id).await?;
        let done = current.get_bool("/completed").unwrap_or(false);
        self.facade.update(id, json!({ "completed": !done })).await
    }

    /// Deletes a todo. Returns whether one existed.
    pub async fn delete(&self, id: &EntityId) -> bool {
        self.facade.remove(id).await
    }

    /// Completion counts over the whole list.
    pub async fn statistics(&self) -> TodoStatistics {
        let rows = self.facade.find_all().await;
        let completed = rows
            .iter()
            .filter(|e| e.get_bool("/completed").unwrap_or(false))
            .count();
        TodoStatistics {
            total: rows.len(),
            completed,
            active: rows.len() - completed,
        }
    }
}

fn schema() -> EntitySchema {
    EntitySchema::new(
        EntityKind::Todo,
        vec![
            FieldSpec::text("title", true),
            FieldSpec::bool("completed", true),
            FieldSpec::text("priority", false),
            FieldSpec::text("due_date", false),
            FieldSpec::text("category", false),
        ],
    )
}
