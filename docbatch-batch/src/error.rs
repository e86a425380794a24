//! Error types for the batch layer.

use docbatch_model::{EntityKind, Violation};
use docbatch_store::{StoreError, WriteKind};
use thiserror::Error;

/// Result type for batch operations.
pub type BatchResult<T> = Result<T, BatchError>;

/// Errors raised while staging or committing a batch.
#[derive(Debug, Error)]
pub enum BatchError {
    /// The entity type was never registered.
    #[error("entity type not registered: {0}")]
    UnregisteredEntity(EntityKind),

    /// An update or delete was staged for a record without an id.
    #[error("cannot {operation} {entity} without an id")]
    MissingIdentifier {
        entity: EntityKind,
        operation: WriteKind,
    },

    /// The record failed validation.
    #[error("{entity} failed validation: {}", join(.violations))]
    Validation {
        entity: EntityKind,
        violations: Vec<Violation>,
    },

    /// The store rejected or failed the batch. Nothing was applied.
    #[error("commit failed: {0}")]
    Commit(#[from] StoreError),

    /// A record without an id was used as the parent of a sub-collection.
    #[error("{0} has no id and cannot scope a sub-collection")]
    UnsavedParent(EntityKind),

    /// The batch was already submitted.
    #[error("batch already committed")]
    AlreadyCommitted,

    /// A sub-collection was addressed without its parent document.
    #[error("{entity} is a sub-collection of {parent} and needs a parent document")]
    MissingParentScope {
        entity: EntityKind,
        parent: EntityKind,
    },

    /// The parent document in scope is not of the registered parent type.
    #[error("{entity} is not a sub-collection of {parent}")]
    ParentMismatch {
        entity: EntityKind,
        parent: EntityKind,
    },

    /// An explicit or derived path is malformed.
    #[error("invalid path: {0}")]
    InvalidPath(#[from] docbatch_types::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The record did not serialize to a JSON object.
    #[error("{0} does not serialize to a document object")]
    NotADocument(EntityKind),
}

impl BatchError {
    /// Whether rebuilding and resubmitting the same batch may succeed.
    ///
    /// Only store failures qualify; every staging error needs the caller to
    /// change the input first.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            BatchError::Commit(StoreError::Network(_) | StoreError::Timeout)
        )
    }
}

fn join(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
