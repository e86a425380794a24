//! Error types for registry construction.

use docbatch_model::EntityKind;
use thiserror::Error;

/// Result type for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Errors that can occur while building the registry.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The collection name is not a single valid path segment.
    #[error("invalid collection name for {entity}: {source}")]
    InvalidName {
        entity: EntityKind,
        #[source]
        source: docbatch_types::Error,
    },

    /// The same entity type was registered twice in the same role.
    #[error("{entity} is already registered as a {role}")]
    Duplicate {
        entity: EntityKind,
        role: &'static str,
    },

    /// A sub-collection names a parent type that has no registration.
    #[error("{entity} is nested under unregistered parent {parent}")]
    UnknownParent {
        entity: EntityKind,
        parent: EntityKind,
    },
}
