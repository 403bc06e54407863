use crate::{EntityKind, ModelError, ModelResult};
use serde_json::Value;

/// Describes one entity kind's field list.
///
/// The schema exists to document a kind's shape and to validate its seed
/// rows at construction time; live writes are not checked against it, the
/// store accepts whatever fields the UI sends.
#[derive(Debug, Clone)]
pub struct EntitySchema {
    kind: EntityKind,
    fields: Vec<FieldSpec>,
}

impl EntitySchema {
    pub fn new(kind: EntityKind, fields: Vec<FieldSpec>) -> Self {
        Self { kind, fields }
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Checks one seed row against the field list.
    ///
    /// The row must be a JSON object; required fields must be present with
    /// the declared type; optional fields, when present, must match their
    /// declared type. Fields the schema does not mention are allowed.
    pub fn validate_row(&self, row: &Value) -> ModelResult<()> {
        let Some(fields) = row.as_object() else {
            return Err(ModelError::RowNotAnObject(row.to_string()));
        };

        for spec in &self.fields {
            match fields.get(&spec.name) {
                Some(value) => {
                    if !spec.field_type.matches(value) {
                        return Err(ModelError::FieldType {
                            name: spec.name.clone(),
                            expected: spec.field_type.describe(),
                        });
                    }
                }
                None if spec.required => {
                    return Err(ModelError::MissingField(spec.name.clone()));
                }
                None => {}
            }
        }
        Ok(())
    }
}

/// One field of an entity kind.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub name: String,
    pub field_type: FieldType,
    pub required: bool,
}

impl FieldSpec {
    fn new(name: &str, field_type: FieldType, required: bool) -> Self {
        Self {
            name: name.into(),
            field_type,
            required,
        }
    }

    /// Shorthand for a text field.
    pub fn text(name: &str, required: bool) -> Self {
        Self::new(name, FieldType::Text, required)
    }

    /// Shorthand for a boolean field.
    pub fn bool(name: &str, required: bool) -> Self {
        Self::new(name, FieldType::Bool, required)
    }

    /// Shorthand for a numeric field.
    pub fn number(name: &str, required: bool) -> Self {
        Self::new(name, FieldType::Number, required)
    }

    /// Shorthand for an array-of-strings field.
    pub fn string_list(name: &str, required: bool) -> Self {
        Self::new(name, FieldType::StringList, required)
    }
}

/// The data type of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Text,
    Bool,
    Number,
    StringList,
}

impl FieldType {
    /// Whether a JSON value inhabits this type.
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            FieldType::Text => value.is_string(),
            FieldType::Bool => value.is_boolean(),
            FieldType::Number => value.is_number(),
            FieldType::StringList => value
                .as_array()
                .is_some_and(|items| items.iter().all(Value::is_string)),
        }
    }

    /// Human-readable name for error messages.
    pub const fn describe(&self) -> &'static str {
        match self {
            FieldType::Text => "a string",
            FieldType::Bool => "a boolean",
            FieldType::Number => "a number",
            FieldType::StringList => "an array of strings",
        }
    }
}
