//! In-memory fallback table.
//!
//! A `MirrorTable` holds the rows a facade serves while its durable store
//! is unreachable. Rows live in an arena that preserves insertion order;
//! an id index gives O(1) point lookups. Removal tombstones the arena slot
//! so the positions of surviving rows never shift.

use examdesk_model::Entity;
use examdesk_types::EntityId;
use std::collections::HashMap;

/// A record addressable by id.
///
/// The key must stay stable for the life of the row; mutators passed to
/// [`MirrorTable::update_with`] must not change it.
pub trait Keyed {
    /// Returns the row's identifier.
    fn key(&self) -> EntityId;
}

impl Keyed for Entity {
    fn key(&self) -> EntityId {
        self.id
    }
}

/// Ordered, id-indexed table of records for one entity kind.
///
/// Every operation is infallible. Absent ids are ordinary outcomes
/// (`None`/`false`), mirroring what the durable store reports for them.
#[derive(Debug, Clone)]
pub struct MirrorTable<R> {
    /// Arena in insertion order; `None` marks a removed row.
    slots: Vec<Option<R>>,
    /// Id to arena position.
    index: HashMap<EntityId, usize>,
}

impl<R: Keyed + Clone> MirrorTable<R> {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Creates a table holding the given rows in order.
    #[must_use]
    pub fn with_rows(rows: impl IntoIterator<Item = R>) -> Self {
        let mut table = Self::new();
        for row in rows {
            table.insert(row);
        }
        table
    }

    /// Number of live rows.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Whether the table holds no live rows.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Returns all live rows in insertion order.
    pub fn all(&self) -> Vec<R> {
        self.slots.iter().flatten().cloned().collect()
    }

    /// Returns the row with the given id, if present.
    pub fn get(&self, id: &EntityId) -> Option<R> {
        self.index
            .get(id)
            .and_then(|&slot| self.slots.get(slot))
            .and_then(|row| row.clone())
    }

    /// Returns the rows matching a predicate, in insertion order.
    pub fn filter<P>(&self, predicate: P) -> Vec<R>
    where
        P: Fn(&R) -> bool,
    {
        self.slots
            .iter()
            .flatten()
            .filter(|&row| predicate(row))
            .cloned()
            .collect()
    }

    /// Inserts a row. A row with the same id is replaced in place, keeping
    /// its original position; a fresh id appends at the end.
    pub fn insert(&mut self, row: R) {
        let id = row.key();
        match self.index.get(&id) {
            Some(&slot) => self.slots[slot] = Some(row),
            None => {
                self.index.insert(id, self.slots.len());
                self.slots.push(Some(row));
            }
        }
    }

    /// Mutates the row with the given id in place and returns a copy of the
    /// result, or `None` if the id is absent.
    pub fn update_with<F>(&mut self, id: &EntityId, mutate: F) -> Option<R>
    where
        F: FnOnce(&mut R),
    {
        let slot = self.index.get(id).copied()?;
        let row = self.slots.get_mut(slot)?.as_mut()?;
        mutate(row);
        Some(row.clone())
    }

    /// Removes the row with the given id. Returns whether a row existed.
    /// A later insert under the same id appends as a new row.
    pub fn remove(&mut self, id: &EntityId) -> bool {
        match self.index.remove(id) {
            Some(slot) => {
                self.slots[slot] = None;
                true
            }
            None => false,
        }
    }
}

impl<R: Keyed + Clone> Default for MirrorTable<R> {
    fn default() -> Self {
        Self::new()
    }
}
