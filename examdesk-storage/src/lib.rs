//! SQLite storage layer for ExamDesk.
//!
//! Provides the durable side of the persistence facade: a single
//! `entities` table keyed by `(kind, id)` holding each record's domain
//! fields as a JSON blob.
//!
//! # Architecture
//!
//! - [`EntityStore`] is the async contract the facade programs against;
//!   the facade never assumes a call will succeed and falls back to its
//!   in-memory mirror when one does not.
//! - [`SqliteStore`] implements it over rusqlite, running every statement
//!   on the blocking thread pool.

mod error;
mod sqlite;
mod store;

pub use error::{StorageError, StorageResult};
pub use sqlite::SqliteStore;
pub use store::EntityStore;
