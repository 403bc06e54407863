//! Application context: the six services over one shared store.

use examdesk_persist::PersistResult;
use examdesk_services::{
    ChatService, ExamService, KnowledgeService, ProfileService, ReplyPicker, ScheduleService,
    ThreadRngPicker, TodoService,
};
use examdesk_storage::EntityStore;
use std::sync::Arc;

/// Everything the dispatcher needs to answer a call.
///
/// All six services bootstrap against the same durable store; each keeps
/// its own health latch and mirror. Construction seeds every kind, so the
/// context is fully usable the moment it exists, store or no store.
pub struct AppContext {
    exams: ExamService,
    todos: TodoService,
    schedules: ScheduleService,
    knowledge: KnowledgeService,
    chat: ChatService,
    profile: ProfileService,
}

impl AppContext {
    /// Bootstraps every service with the production reply picker.
    pub async fn new(store: Arc<dyn EntityStore>) -> PersistResult<Self> {
        Self::with_reply_picker(store, Arc::new(ThreadRngPicker)).await
    }

    /// Bootstraps every service, using a caller-supplied reply picker for
    /// the chat assistant.
    pub async fn with_reply_picker(
        store: Arc<dyn EntityStore>,
        picker: Arc<dyn ReplyPicker>,
    ) -> PersistResult<Self> {
        Ok(Self {
            exams: ExamService::new(store.clone()).await?,
            todos: TodoService::new(store.clone()).await?,
            schedules: ScheduleService::new(store.clone()).await?,
            knowledge: KnowledgeService::new(store.clone()).await?,
            chat: ChatService::with_picker(store.clone(), picker).await?,
            profile: ProfileService::new(store).await?,
        })
    }

    pub fn exams(&self) -> &ExamService {
        &self.exams
    }

    pub fn todos(&self) -> &TodoService {
        &self.todos
    }

    pub fn schedules(&self) -> &ScheduleService {
        &self.schedules
    }

    pub fn knowledge(&self) -> &KnowledgeService {
        &self.knowledge
    }

    pub fn chat(&self) -> &ChatService {
        &self.chat
    }

    pub fn profile(&self) -> &ProfileService {
        &self.profile
    }
}
