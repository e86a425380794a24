use crate::EntityKind;

/// Describes where documents of one entity type are stored.
///
/// A top-level registration has no parent. A sub-collection registration
/// names the parent entity type whose documents hold the nested collection,
/// and optionally the parent record field that exposes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionMetadata {
    pub entity: EntityKind,
    pub name: String,
    pub parent: Option<EntityKind>,
    /// Field on the parent record that holds this sub-collection. It is
    /// stripped from the parent's document body when staged.
    pub field: Option<String>,
}

impl CollectionMetadata {
    /// A top-level collection.
    pub fn collection(entity: EntityKind, name: impl Into<String>) -> Self {
        Self {
            entity,
            name: name.into(),
            parent: None,
            field: None,
        }
    }

    /// A collection nested under documents of `parent`.
    pub fn sub_collection(entity: EntityKind, name: impl Into<String>, parent: EntityKind) -> Self {
        Self {
            entity,
            name: name.into(),
            parent: Some(parent),
            field: None,
        }
    }

    /// Names the parent record field that holds this sub-collection.
    #[must_use]
    pub fn held_in(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    pub fn is_sub_collection(&self) -> bool {
        self.parent.is_some()
    }
}
