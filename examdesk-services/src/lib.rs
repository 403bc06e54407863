//! Feature services for ExamDesk.
//!
//! One service per entity kind, each owning a persistence facade
//! bootstrapped with that kind's schema and canonical seed rows. All six
//! share one durable store; each keeps its own health latch and mirror,
//! so one failing feature does not degrade the others unless the store
//! itself is down.

mod chat;
mod exam;
mod knowledge;
mod profile;
mod reply;
mod schedule;
pub mod seeds;
mod todo;

pub use chat::{ChatService, RESET_MESSAGE, WELCOME_MESSAGE};
pub use exam::ExamService;
pub use knowledge::KnowledgeService;
pub use profile::{ProfileService, UserStatistics};
pub use reply::{ReplyPicker, ThreadRngPicker};
pub use schedule::ScheduleService;
pub use todo::{TodoFilter, TodoService, TodoStatistics};
