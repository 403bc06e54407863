//! Resilient persistence for ExamDesk.
//!
//! The pattern every feature service shares: route CRUD through the
//! durable store while it answers, and the moment it fails, latch to
//! degraded and serve from an in-memory mirror that was seeded with
//! canonical default content at startup. The UI never sees a storage
//! error, only data.
//!
//! Pieces, leaves first:
//!
//! - [`HealthState`]: the one-way AVAILABLE to DEGRADED latch.
//! - [`MirrorTable`]: ordered, id-indexed in-memory table.
//! - [`SeedDescriptor`] / [`SeedManager`]: canonical default content,
//!   applied to the mirror always and to an empty store once.
//! - [`EntityFacade`]: the CRUD surface tying the above together.

mod error;
mod facade;
mod health;
mod mirror;
mod seed;

pub use error::{PersistError, PersistResult};
pub use facade::EntityFacade;
pub use health::HealthState;
pub use mirror::{Keyed, MirrorTable};
pub use seed::{SeedDescriptor, SeedManager};
