use crate::EntityKind;
use examdesk_types::EntityId;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Keys managed by the persistence layer. A field patch can never
/// overwrite them.
const RESERVED_KEYS: [&str; 3] = ["id", "created_at", "updated_at"];

/// A generic persisted record.
///
/// All domain data flows through this type. The `data` field holds a JSON
/// object whose structure is described by the kind's [`crate::EntitySchema`];
/// values are strings, numbers, booleans, or arrays thereof.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    pub id: EntityId,
    pub kind: EntityKind,
    pub data: Value,
    /// Epoch milliseconds at creation.
    pub created_at: i64,
    /// Epoch milliseconds of the last write.
    pub updated_at: i64,
}

impl Entity {
    /// Creates a record with both timestamps set to `timestamp`.
    pub fn new(id: EntityId, kind: EntityKind, data: Value, timestamp: i64) -> Self {
        Self {
            id,
            kind,
            data,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Extract a string value from `data` using a JSON pointer (e.g., "/title").
    pub fn get_str(&self, pointer: &str) -> Option<&str> {
        self.data.pointer(pointer).and_then(|v| v.as_str())
    }

    /// Extract a boolean value from `data` using a JSON pointer.
    pub fn get_bool(&self, pointer: &str) -> Option<bool> {
        self.data.pointer(pointer).and_then(|v| v.as_bool())
    }

    /// Extract a numeric value from `data` using a JSON pointer.
    pub fn get_number(&self, pointer: &str) -> Option<f64> {
        self.data.pointer(pointer).and_then(|v| v.as_f64())
    }

    /// Applies a shallow field patch.
    ///
    /// Top-level keys of `patch` replace (or add to) the corresponding keys
    /// of `data`; reserved keys in the patch are ignored. Non-object patches
    /// change nothing. `updated_at` is always refreshed.
    pub fn apply_patch(&mut self, patch: &Value, updated_at: i64) {
        if let Some(fields) = patch.as_object() {
            if !self.data.is_object() {
                self.data = Value::Object(Map::new());
            }
            if let Some(data) = self.data.as_object_mut() {
                for (key, value) in fields {
                    if RESERVED_KEYS.contains(&key.as_str()) {
                        continue;
                    }
                    data.insert(key.clone(), value.clone());
                }
            }
        }
        self.updated_at = updated_at;
    }

    /// Returns the flat row shape the UI consumes: the domain fields at the
    /// top level alongside `id`, `created_at`, and `updated_at`.
    pub fn to_row(&self) -> Value {
        let mut row = match self.data.as_object() {
            Some(fields) => fields.clone(),
            None => Map::new(),
        };
        row.insert("id".to_string(), Value::String(self.id.to_string()));
        row.insert("created_at".to_string(), Value::from(self.created_at));
        row.insert("updated_at".to_string(), Value::from(self.updated_at));
        Value::Object(row)
    }
}
