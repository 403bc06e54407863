//! SQLite-backed entity store.
//!
//! One `entities` table holds every kind, keyed by `(kind, id)`. Domain
//! fields are stored as a JSON blob in the `data` column; insertion order
//! is recovered through `created_at` with `rowid` as the tiebreaker.

use crate::store::EntityStore;
use crate::{StorageError, StorageResult};
use async_trait::async_trait;
use examdesk_model::{Entity, EntityKind};
use examdesk_types::{now_millis, EntityId};
use rusqlite::{params, Connection, OptionalExtension};
use serde_json::Value;
use std::path::Path;
use std::sync::{Arc, Mutex};

/// Durable entity store backed by a single SQLite database.
///
/// The connection is shared behind a mutex and every statement runs on
/// tokio's blocking pool, so facade tasks never hold the lock across an
/// await point.
pub struct SqliteStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteStore {
    /// Opens (or creates) a store at the given path.
    pub fn open(path: &Path) -> StorageResult<Self> {
        let conn = Connection::open(path)?;
        let store = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        store.init_schema()?;
        Ok(store)
    }

    /// Opens an in-memory store (ephemeral mode and tests).
    pub fn open_in_memory() -> StorageResult<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        store.init_schema()?;
        Ok(store)
    }

    fn init_schema(&self) -> StorageResult<()> {
        let conn = self.conn.lock().unwrap();
        conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS entities (
                kind TEXT NOT NULL,
                id TEXT NOT NULL,
                data TEXT NOT NULL,
                created_at INTEGER NOT NULL,
                updated_at INTEGER NOT NULL,
                PRIMARY KEY (kind, id)
            );

            CREATE INDEX IF NOT EXISTS idx_entities_kind_created
                ON entities (kind, created_at);
            ",
        )?;
        Ok(())
    }
}

#[async_trait]
impl EntityStore for SqliteStore {
    async fn count(&self, kind: EntityKind) -> StorageResult<u64> {
        let conn = self.conn.clone();
        tokio::task::spawn_blocking(move || -> StorageResult<u64> {
            let conn = conn.lock().unwrap();
            let n: i64 = conn.query_row(
                "SELECT COUNT(*) FROM entities WHERE kind = ?1",
                params![kind.as_str()],
                |row| row.get(0),
            )?;
            Ok(n as u64)
        })
        .await
        .map_err(|e| StorageError::Task(e.to_string()))?
    }

    async fn find_all(&self, kind: EntityKind) -> StorageResult<Vec<Entity>> {
        let conn = self.conn.clone();
        tokio::task::spawn_blocking(move || -> StorageResult<Vec<Entity>> {
            let conn = conn.lock().unwrap();
            let mut stmt = conn.prepare(
                "SELECT id, data, created_at, updated_at FROM entities
                 WHERE kind = ?1 ORDER BY created_at, rowid",
            )?;
            let rows = stmt.query_map(params![kind.as_str()], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, i64>(2)?,
                    row.get::<_, i64>(3)?,
                ))
            })?;

            let mut entities = Vec::new();
            for row in rows {
                let (id, data, created_at, updated_at) = row?;
                entities.push(row_to_entity(kind, &id, &data, created_at, updated_at)?);
            }
            Ok(entities)
        })
        .await
        .map_err(|e| StorageError::Task(e.to_string()))?
    }

    async fn find_by_id(&self, kind: EntityKind, id: &EntityId) -> StorageResult<Option<Entity>> {
        let conn = self.conn.clone();
        let id = *id;
        tokio::task::spawn_blocking(move || -> StorageResult<Option<Entity>> {
            let conn = conn.lock().unwrap();
            fetch_row(&conn, kind, &id)
        })
        .await
        .map_err(|e| StorageError::Task(e.to_string()))?
    }

    async fn create(&self, kind: EntityKind, fields: Value) -> StorageResult<Entity> {
        let conn = self.conn.clone();
        tokio::task::spawn_blocking(move || -> StorageResult<Entity> {
            let entity = Entity::new(EntityId::new(), kind, fields, now_millis());
            let data = serde_json::to_string(&entity.data)?;
            let conn = conn.lock().unwrap();
            conn.execute(
                "INSERT INTO entities (kind, id, data, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![
                    kind.as_str(),
                    entity.id.to_string(),
                    data,
                    entity.created_at,
                    entity.updated_at,
                ],
            )?;
            Ok(entity)
        })
        .await
        .map_err(|e| StorageError::Task(e.to_string()))?
    }

    async fn update(
        &self,
        kind: EntityKind,
        id: &EntityId,
        fields: Value,
    ) -> StorageResult<Option<Entity>> {
        let conn = self.conn.clone();
        let id = *id;
        tokio::task::spawn_blocking(move || -> StorageResult<Option<Entity>> {
            let conn = conn.lock().unwrap();
            let Some(mut entity) = fetch_row(&conn, kind, &id)? else {
                return Ok(None);
            };

            entity.apply_patch(&fields, now_millis());
            let data = serde_json::to_string(&entity.data)?;
            conn.execute(
                "UPDATE entities SET data = ?1, updated_at = ?2 WHERE kind = ?3 AND id = ?4",
                params![data, entity.updated_at, kind.as_str(), id.to_string()],
            )?;
            Ok(Some(entity))
        })
        .await
        .map_err(|e| StorageError::Task(e.to_string()))?
    }

    async fn remove(&self, kind: EntityKind, id: &EntityId) -> StorageResult<bool> {
        let conn = self.conn.clone();
        let id = *id;
        tokio::task::spawn_blocking(move || -> StorageResult<bool> {
            let conn = conn.lock().unwrap();
            let affected = conn.execute(
                "DELETE FROM entities WHERE kind = ?1 AND id = ?2",
                params![kind.as_str(), id.to_string()],
            )?;
            Ok(affected > 0)
        })
        .await
        .map_err(|e| StorageError::Task(e.to_string()))?
    }
}

fn fetch_row(conn: &Connection, kind: EntityKind, id: &EntityId) -> StorageResult<Option<Entity>> {
    let row = conn
        .query_row(
            "SELECT id, data, created_at, updated_at FROM entities
             WHERE kind = ?1 AND id = ?2",
            params![kind.as_str(), id.to_string()],
            |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, i64>(2)?,
                    row.get::<_, i64>(3)?,
                ))
            },
        )
        .optional()?;

    match row {
        Some((id, data, created_at, updated_at)) => {
            Ok(Some(row_to_entity(kind, &id, &data, created_at, updated_at)?))
        }
        None => Ok(None),
    }
}

fn row_to_entity(
    kind: EntityKind,
    id: &str,
    data: &str,
    created_at: i64,
    updated_at: i64,
) -> StorageResult<Entity> {
    let id = EntityId::parse(id)
        .map_err(|e| StorageError::InvalidData(format!("bad id in {kind} row: {e}")))?;
    let data: Value = serde_json::from_str(data)?;
    Ok(Entity {
        id,
        kind,
        data,
        created_at,
        updated_at,
    })
}
