use crate::DocumentRef;
use docbatch_types::Document;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of a batched write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WriteKind {
    /// Write the whole document, replacing any existing one.
    Create,
    /// Merge top-level fields into an existing document.
    Update,
    /// Remove the document. Deleting a missing document is not an error.
    Delete,
}

impl fmt::Display for WriteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            WriteKind::Create => "create",
            WriteKind::Update => "update",
            WriteKind::Delete => "delete",
        })
    }
}

/// One entry of a write batch.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchWrite {
    pub kind: WriteKind,
    pub document: DocumentRef,
    /// Document body; `None` for deletes.
    pub data: Option<Document>,
}

impl BatchWrite {
    pub fn create(document: DocumentRef, data: Document) -> Self {
        Self {
            kind: WriteKind::Create,
            document,
            data: Some(data),
        }
    }

    pub fn update(document: DocumentRef, data: Document) -> Self {
        Self {
            kind: WriteKind::Update,
            document,
            data: Some(data),
        }
    }

    pub fn delete(document: DocumentRef) -> Self {
        Self {
            kind: WriteKind::Delete,
            document,
            data: None,
        }
    }
}
