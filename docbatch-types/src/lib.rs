//! Core type definitions for docbatch.
//!
//! This crate defines the store-agnostic types shared by every layer:
//! - Document identifiers (client-generated or caller-supplied)
//! - Collection and document paths, including nested sub-collections
//!
//! Nothing here touches the network or the metadata registry.

mod ids;
mod path;

pub use ids::DocumentId;
pub use path::{CollectionPath, DocumentPath, PATH_SEPARATOR};

/// A document body as written to the store: a JSON object.
pub type Document = serde_json::Map<String, serde_json::Value>;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building identifiers or paths.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("path is empty")]
    EmptyPath,

    #[error("path contains an empty segment: {0:?}")]
    EmptySegment(String),

    #[error("not a collection path (odd segment count expected): {0}")]
    NotACollection(String),

    #[error("not a document path (even segment count expected): {0}")]
    NotADocument(String),

    #[error("invalid document id: {0:?}")]
    InvalidId(String),
}
