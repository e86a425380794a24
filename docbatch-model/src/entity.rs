use docbatch_types::DocumentId;
use serde::Serialize;
use std::fmt;

/// Registration key of an entity type.
///
/// Entity types are registered explicitly under a kind; nothing is derived
/// from the Rust type name at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityKind(&'static str);

impl EntityKind {
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// A record type stored as documents in a collection.
///
/// The record serializes to a JSON object which becomes the document body.
/// The id is optional until the record is staged for a create, at which
/// point a generated id is written back through [`Entity::set_id`].
pub trait Entity: Serialize + Send + 'static {
    /// Key this type is registered under in the metadata registry.
    const KIND: EntityKind;

    /// The record's document id, if it has one.
    fn id(&self) -> Option<&DocumentId>;

    /// Assigns the document id.
    fn set_id(&mut self, id: DocumentId);
}
