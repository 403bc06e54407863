//! User profile service.

use crate::seeds;
use examdesk_model::{Entity, EntityKind, EntitySchema, FieldSpec};
use examdesk_persist::{EntityFacade, HealthState, PersistResult};
use examdesk_storage::EntityStore;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;

/// Aggregate study figures shown on the profile page. Field names follow
/// the UI's camelCase convention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStatistics {
    pub completed_exams: u32,
    pub average_score: u32,
    pub study_hours: u32,
    pub ranking: String,
}

impl UserStatistics {
    /// The fixed figures the profile page displays.
    #[must_use]
    pub fn current() -> Self {
        Self {
            completed_exams: 12,
            average_score: 85,
            study_hours: 120,
            ranking: "Top 10%".to_owned(),
        }
    }
}

/// Single-record service for the user's profile.
pub struct ProfileService {
    facade: EntityFacade,
}

impl ProfileService {
    /// Bootstraps the service against a shared store.
    pub async fn new(store: Arc<dyn EntityStore>) -> PersistResult<Self> {
        let facade = EntityFacade::bootstrap(
            EntityKind::Profile,
            store,
            &schema(),
            seeds::profile_rows(),
        )
        .await?;
        Ok(Self { facade })
    }

    /// Health of the backing store, as seen by this service.
    pub fn health(&self) -> HealthState {
        self.facade.health()
    }

    /// The profile record. Seeding guarantees one exists.
    pub async fn get(&self) -> Option<Entity> {
        self.facade.find_all().await.into_iter().next()
    }

    /// Merges fields into the profile.
    pub async fn update(&self, fields: Value) -> Option<Entity> {
        let profile = self.get().await?;
        self.facade.update(&profile.id, fields).await
    }

    /// Sets the avatar image reference.
    pub async fn update_avatar(&self, avatar: &str) -> Option<Entity> {
        self.update(json!({ "avatar": avatar })).await
    }

    /// The aggregate figures for the statistics panel.
    pub fn statistics(&self) -> UserStatistics {
        UserStatistics::current()
    }
}

fn schema() -> EntitySchema {
    EntitySchema::new(
        EntityKind::Profile,
        vec![
            FieldSpec::text("name", true),
            FieldSpec::text("email", true),
            FieldSpec::text("phone", false),
            FieldSpec::text("location", false),
            FieldSpec::text("school", false),
            FieldSpec::text("major", false),
            FieldSpec::text("grade", false),
            FieldSpec::text("bio", false),
            FieldSpec::string_list("achievements", false),
            FieldSpec::text("avatar", false),
        ],
    )
}
