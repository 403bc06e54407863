//! Property-based tests for the mirror table.
//!
//! The table is checked against a naive reference model (a vector of
//! id/value pairs in insertion order) under arbitrary insert, update and
//! remove sequences drawn from a small id pool, so collisions and
//! reinsertions happen often.

use examdesk_persist::{Keyed, MirrorTable};
use examdesk_types::EntityId;
use proptest::prelude::*;

const POOL: usize = 8;

#[derive(Debug, Clone, PartialEq)]
struct Row {
    id: EntityId,
    value: u32,
}

impl Keyed for Row {
    fn key(&self) -> EntityId {
        self.id
    }
}

#[derive(Debug, Clone)]
enum Op {
    Insert(usize, u32),
    Update(usize, u32),
    Remove(usize),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..POOL, any::<u32>()).prop_map(|(slot, value)| Op::Insert(slot, value)),
        (0..POOL, any::<u32>()).prop_map(|(slot, value)| Op::Update(slot, value)),
        (0..POOL).prop_map(Op::Remove),
    ]
}

/// Reference model: insertion-ordered unique-id rows.
#[derive(Debug, Default)]
struct Model {
    rows: Vec<(EntityId, u32)>,
}

impl Model {
    fn insert(&mut self, id: EntityId, value: u32) {
        match self.rows.iter_mut().find(|(key, _)| *key == id) {
            Some(entry) => entry.1 = value,
            None => self.rows.push((id, value)),
        }
    }

    fn update(&mut self, id: EntityId, value: u32) -> Option<u32> {
        let entry = self.rows.iter_mut().find(|(key, _)| *key == id)?;
        entry.1 = value;
        Some(value)
    }

    fn remove(&mut self, id: EntityId) -> bool {
        let before = self.rows.len();
        self.rows.retain(|(key, _)| *key != id);
        self.rows.len() != before
    }

    fn get(&self, id: EntityId) -> Option<u32> {
        self.rows
            .iter()
            .find(|(key, _)| *key == id)
            .map(|(_, value)| *value)
    }
}

proptest! {
    /// After any operation sequence, the table agrees with the reference
    /// model on ordering, length and point lookups.
    #[test]
    fn behaves_like_reference_model(ops in prop::collection::vec(op_strategy(), 0..64)) {
        let pool: Vec<EntityId> = (0..POOL).map(|_| EntityId::new()).collect();
        let mut table: MirrorTable<Row> = MirrorTable::new();
        let mut model = Model::default();

        for op in ops {
            match op {
                Op::Insert(slot, value) => {
                    let id = pool[slot];
                    table.insert(Row { id, value });
                    model.insert(id, value);
                }
                Op::Update(slot, value) => {
                    let id = pool[slot];
                    let table_result = table.update_with(&id, |row| row.value = value);
                    let model_result = model.update(id, value);
                    prop_assert_eq!(table_result.map(|row| row.value), model_result);
                }
                Op::Remove(slot) => {
                    let id = pool[slot];
                    prop_assert_eq!(table.remove(&id), model.remove(id));
                }
            }
        }

        prop_assert_eq!(table.len(), model.rows.len());
        prop_assert_eq!(table.is_empty(), model.rows.is_empty());

        let sequence: Vec<(EntityId, u32)> =
            table.all().into_iter().map(|row| (row.id, row.value)).collect();
        prop_assert_eq!(&sequence, &model.rows);

        for id in pool {
            prop_assert_eq!(table.get(&id).map(|row| row.value), model.get(id));
        }
    }
}
