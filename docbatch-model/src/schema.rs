use crate::{EntityKind, ValidationHook, Violation};
use chrono::DateTime;
use docbatch_types::{Document, DocumentPath};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Describes the fields an entity type's documents must carry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntitySchema {
    pub entity_type: String,
    pub fields: Vec<FieldRule>,
}

impl EntitySchema {
    pub fn new(kind: EntityKind, fields: Vec<FieldRule>) -> Self {
        Self {
            entity_type: kind.as_str().to_string(),
            fields,
        }
    }

    /// Checks a document body against every field rule, returning one
    /// violation per failing field.
    pub fn check(&self, record: &Document) -> Vec<Violation> {
        let root = Value::Object(record.clone());
        self.fields
            .iter()
            .filter_map(|rule| rule.check(&root))
            .collect()
    }
}

/// A single field constraint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldRule {
    /// JSON pointer path (e.g., "/name", "/address/city").
    pub field_path: String,
    pub field_type: FieldType,
    #[serde(default)]
    pub required: bool,
}

impl FieldRule {
    fn simple(path: &str, field_type: FieldType, required: bool) -> Self {
        Self {
            field_path: path.into(),
            field_type,
            required,
        }
    }

    /// Shorthand for a string field.
    pub fn text(path: &str, required: bool) -> Self {
        Self::simple(path, FieldType::Text, required)
    }

    /// Shorthand for a numeric field.
    pub fn number(path: &str, required: bool) -> Self {
        Self::simple(path, FieldType::Number, required)
    }

    /// Shorthand for a boolean field.
    pub fn bool(path: &str, required: bool) -> Self {
        Self::simple(path, FieldType::Bool, required)
    }

    /// Shorthand for a timestamp field.
    pub fn timestamp(path: &str, required: bool) -> Self {
        Self::simple(path, FieldType::Timestamp, required)
    }

    /// Shorthand for an array field.
    pub fn array(path: &str, required: bool) -> Self {
        Self::simple(path, FieldType::Array, required)
    }

    /// Shorthand for a nested map field.
    pub fn map(path: &str, required: bool) -> Self {
        Self::simple(path, FieldType::Map, required)
    }

    /// Shorthand for a document reference field.
    pub fn reference(path: &str, required: bool) -> Self {
        Self::simple(path, FieldType::Reference, required)
    }

    fn check(&self, root: &Value) -> Option<Violation> {
        match root.pointer(&self.field_path) {
            None | Some(Value::Null) if self.required => {
                Some(Violation::new(&self.field_path, "is required"))
            }
            None | Some(Value::Null) => None,
            Some(value) if self.field_type.accepts(value) => None,
            Some(_) => Some(Violation::new(
                &self.field_path,
                format!("expected {}", self.field_type.describe()),
            )),
        }
    }
}

/// The expected JSON shape of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    Text,
    Number,
    Bool,
    /// Epoch milliseconds or an RFC 3339 string.
    Timestamp,
    Array,
    Map,
    /// A document path such as "users/u1".
    Reference,
}

impl FieldType {
    fn accepts(self, value: &Value) -> bool {
        match self {
            FieldType::Text => value.is_string(),
            FieldType::Number => value.is_number(),
            FieldType::Bool => value.is_boolean(),
            FieldType::Timestamp => {
                value.is_i64()
                    || value.is_u64()
                    || value
                        .as_str()
                        .is_some_and(|s| DateTime::parse_from_rfc3339(s).is_ok())
            }
            FieldType::Array => value.is_array(),
            FieldType::Map => value.is_object(),
            FieldType::Reference => value
                .as_str()
                .is_some_and(|s| DocumentPath::parse(s).is_ok()),
        }
    }

    fn describe(self) -> &'static str {
        match self {
            FieldType::Text => "a string",
            FieldType::Number => "a number",
            FieldType::Bool => "a boolean",
            FieldType::Timestamp => "a timestamp",
            FieldType::Array => "an array",
            FieldType::Map => "a map",
            FieldType::Reference => "a document path",
        }
    }
}

/// Validation hook backed by one [`EntitySchema`] per entity type.
///
/// Entity types without a schema are accepted unchecked.
#[derive(Debug, Clone, Default)]
pub struct SchemaValidator {
    schemas: HashMap<String, EntitySchema>,
}

impl SchemaValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a schema, replacing any earlier schema for the same type.
    #[must_use]
    pub fn with_schema(mut self, schema: EntitySchema) -> Self {
        self.schemas.insert(schema.entity_type.clone(), schema);
        self
    }

    pub fn schema(&self, kind: EntityKind) -> Option<&EntitySchema> {
        self.schemas.get(kind.as_str())
    }
}

impl ValidationHook for SchemaValidator {
    fn validate(&self, kind: EntityKind, record: &Document) -> Vec<Violation> {
        self.schema(kind)
            .map(|schema| schema.check(record))
            .unwrap_or_default()
    }
}
