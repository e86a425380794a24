use crate::EntityKind;
use docbatch_types::Document;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single rule violation reported by a [`ValidationHook`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// JSON pointer of the offending field (e.g. "/email"), or "" for the
    /// record as a whole.
    pub field: String,
    pub message: String,
}

impl Violation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.field.is_empty() {
            f.write_str(&self.message)
        } else {
            write!(f, "{}: {}", self.field, self.message)
        }
    }
}

/// Validates a record before it is staged into a batch.
///
/// Runs synchronously, only when model validation is enabled in the
/// registry configuration. An empty result accepts the record; any
/// violation rejects the whole staging call.
///
/// Closures of the shape `Fn(EntityKind, &Document) -> Vec<Violation>`
/// implement this trait, which is enough for most ad-hoc rules. For
/// field-level type checks see [`crate::SchemaValidator`].
pub trait ValidationHook: Send + Sync {
    fn validate(&self, kind: EntityKind, record: &Document) -> Vec<Violation>;
}

impl<F> ValidationHook for F
where
    F: Fn(EntityKind, &Document) -> Vec<Violation> + Send + Sync,
{
    fn validate(&self, kind: EntityKind, record: &Document) -> Vec<Violation> {
        self(kind, record)
    }
}
