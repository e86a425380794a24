//! Entity model for docbatch.
//!
//! Defines the types every layer above the store agrees on:
//! - [`Entity`] — a record type that maps onto a collection, with an optional id
//! - [`EntityKind`] — the registration key of an entity type
//! - [`CollectionMetadata`] — where an entity type lives (top-level or nested)
//! - [`ValidationHook`] — pluggable record validation run before staging
//! - [`EntitySchema`] — a schema-driven [`ValidationHook`] implementation

mod entity;
mod handler;
mod metadata;
mod schema;

pub use entity::{Entity, EntityKind};
pub use handler::{ValidationHook, Violation};
pub use metadata::CollectionMetadata;
pub use schema::{EntitySchema, FieldRule, FieldType, SchemaValidator};
