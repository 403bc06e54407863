//! Named-call surface for the ExamDesk UI process.
//!
//! [`AppContext`] bundles the six feature services over one shared store
//! and exposes them through a single `invoke(method, args)` entry point
//! whose method names match the UI's channel names. The `wire` module and
//! the `examdesk-service` binary wrap that entry point in a minimal
//! line-delimited JSON host.

mod context;
mod dispatch;
mod error;
mod wire;

pub use context::AppContext;
pub use error::{InvokeError, InvokeResult};
pub use wire::{handle_line, Request, Response};
