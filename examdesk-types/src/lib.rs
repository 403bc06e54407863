//! Core type definitions for ExamDesk.
//!
//! This crate defines the fundamental, domain-agnostic types used throughout
//! the service core:
//! - Entity identifiers (UUID v7)
//! - Wall-clock helpers and a monotonic millisecond clock
//!
//! Domain-specific shapes (todos, exams, schedules, etc.) belong to the
//! model and service crates, not here.

mod clock;
mod ids;

pub use clock::{now_millis, MonotonicClock};
pub use ids::EntityId;
