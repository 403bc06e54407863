//! Study-assistant chat service.
//!
//! The assistant is a canned-reply bot: every user message is persisted,
//! answered from a fixed reply set, and the whole exchange lives in the
//! same entity table as any other record. Which reply is chosen goes
//! through the [`ReplyPicker`] seam.

use crate::reply::{ReplyPicker, ThreadRngPicker};
use crate::seeds;
use examdesk_model::{Entity, EntityKind, EntitySchema, FieldSpec};
use examdesk_persist::{EntityFacade, HealthState, PersistResult};
use examdesk_storage::EntityStore;
use serde_json::json;
use std::sync::Arc;
use tracing::debug;

/// Greeting persisted as the first message of a fresh install.
pub const WELCOME_MESSAGE: &str = "Hello! I'm your study assistant. Ask me about exam \
     preparation, study planning, or any subject you're working on.";

/// Message inserted after the history is cleared.
pub const RESET_MESSAGE: &str =
    "Chat history cleared. What would you like to work on next?";

/// Prompts the UI offers as one-tap questions. Never persisted.
const QUICK_QUESTIONS: [&str; 4] = [
    "How should I plan my study week?",
    "What is a good way to memorize formulas?",
    "How do I prepare for a listening exam?",
    "Can you explain spaced repetition?",
];

const CANNED_REPLIES: [&str; 5] = [
    "Good question. Break the topic into small pieces and tackle one per session; \
     momentum matters more than marathon sessions.",
    "A solid approach is to test yourself before re-reading. Retrieval practice \
     beats passive review for long-term recall.",
    "Try scheduling your hardest subject first, while your focus is fresh, and \
     save lighter review for the evening.",
    "Summarize what you just studied in your own words. If you can't explain it \
     simply, mark it for another pass tomorrow.",
    "Past papers are the best predictor of what an exam rewards. Work through one \
     under time pressure, then review every mistake.",
];

/// Chat history plus the canned-reply assistant.
pub struct ChatService {
    facade: EntityFacade,
    picker: Arc<dyn ReplyPicker>,
}

impl ChatService {
    /// Bootstraps the service with the production random picker.
    pub async fn new(store: Arc<dyn EntityStore>) -> PersistResult<Self> {
        Self::with_picker(store, Arc::new(ThreadRngPicker)).await
    }

    /// Bootstraps the service with a caller-supplied picker.
    pub async fn with_picker(
        store: Arc<dyn EntityStore>,
        picker: Arc<dyn ReplyPicker>,
    ) -> PersistResult<Self> {
        let facade = EntityFacade::bootstrap(
            EntityKind::ChatMessage,
            store,
            &schema(),
            seeds::chat_rows(),
        )
        .await?;
        Ok(Self { facade, picker })
    }

    /// Health of the backing store, as seen by this service.
    pub fn health(&self) -> HealthState {
        self.facade.health()
    }

    /// Full conversation in chronological order.
    pub async fn history(&self) -> Vec<Entity> {
        self.facade.find_all().await
    }

    /// The fixed one-tap prompts.
    pub fn quick_questions(&self) -> Vec<String> {
        QUICK_QUESTIONS.iter().map(|q| (*q).to_owned()).collect()
    }

    /// Persists the user's message, answers it, and returns the persisted
    /// assistant message.
    pub async fn send_message(&self, content: &str) -> Entity {
        self.facade
            .create(json!({ "role": "user", "content": content }))
            .await;

        let choice = self.picker.pick(CANNED_REPLIES.len());
        debug!("Answering chat message with canned reply {}", choice);
        let reply = format!(
            "{}\n\nOn your question \"{}\": start small today and check back in \
             tomorrow with what you found hardest.",
            CANNED_REPLIES[choice], content
        );
        self.facade
            .create(json!({ "role": "assistant", "content": reply }))
            .await
    }

    /// Removes every message, then starts the history over with the reset
    /// notice. Returns the persisted reset message.
    pub async fn clear(&self) -> Entity {
        for message in self.facade.find_all().await {
            self.facade.remove(&message.id).await;
        }
        self.facade
            .create(json!({ "role": "assistant", "content": RESET_MESSAGE }))
            .await
    }
}

fn schema() -> EntitySchema {
    EntitySchema::new(
        EntityKind::ChatMessage,
        vec![
            FieldSpec::text("role", true),
            FieldSpec::text("content", true),
        ],
    )
}
