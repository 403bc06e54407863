//! Knowledge-base service.

use crate::seeds;
use examdesk_model::{Entity, EntityKind, EntitySchema, FieldSpec};
use examdesk_persist::{EntityFacade, HealthState, PersistResult};
use examdesk_storage::EntityStore;
use examdesk_types::EntityId;
use std::sync::Arc;

/// Read-mostly access to the bundled study articles.
pub struct KnowledgeService {
    facade: EntityFacade,
}

impl KnowledgeService {
    /// Bootstraps the service against a shared store.
    pub async fn new(store: Arc<dyn EntityStore>) -> PersistResult<Self> {
        let facade = EntityFacade::bootstrap(
            EntityKind::Knowledge,
            store,
            &schema(),
            seeds::knowledge_rows(),
        )
        .await?;
        Ok(Self { facade })
    }

    /// Health of the backing store, as seen by this service.
    pub fn health(&self) -> HealthState {
        self.facade.health()
    }

    /// Every article in insertion order.
    pub async fn all(&self) -> Vec<Entity> {
        self.facade.find_all().await
    }

    /// One article by id.
    pub async fn by_id(&self, id: &EntityId) -> Option<Entity> {
        self.facade.find_by_id(id).await
    }

    /// Articles in a category. `"all"` returns everything.
    pub async fn by_category(&self, category: &str) -> Vec<Entity> {
        if category == "all" {
            return self.facade.find_all().await;
        }
        self.facade
            .find_by_filter(|entity| entity.get_str("/category") == Some(category))
            .await
    }

    /// Case-insensitive substring search over title and summary.
    pub async fn search(&self, query: &str) -> Vec<Entity> {
        let needle = query.to_lowercase();
        self.facade
            .find_by_filter(|entity| {
                let title_hit = entity
                    .get_str("/title")
                    .is_some_and(|title| title.to_lowercase().contains(&needle));
                let summary_hit = entity
                    .get_str("/summary")
                    .is_some_and(|summary| summary.to_lowercase().contains(&needle));
                title_hit || summary_hit
            })
            .await
    }
}

fn schema() -> EntitySchema {
    EntitySchema::new(
        EntityKind::Knowledge,
        vec![
            FieldSpec::text("title", true),
            FieldSpec::text("category", true),
            FieldSpec::text("summary", true),
            FieldSpec::text("content", true),
            FieldSpec::string_list("tags", false),
            FieldSpec::number("views", false),
            FieldSpec::number("rating", false),
        ],
    )
}
