//! Path resolution — entity type to collection location.
//!
//! Resolution prefers an entity's sub-collection registration over a
//! top-level registration of the same type, unconditionally. Only an
//! explicit collection path bypasses the registered naming.

use crate::{BatchError, BatchResult};
use docbatch_metadata::MetadataRegistry;
use docbatch_model::{CollectionMetadata, Entity, EntityKind};
use docbatch_store::{CollectionRef, DocumentRef, DocumentStore};
use docbatch_types::CollectionPath;

/// A parent document under which a sub-collection is resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentScope {
    pub entity: EntityKind,
    pub document: DocumentRef,
}

impl ParentScope {
    pub fn new(entity: EntityKind, document: DocumentRef) -> Self {
        Self { entity, document }
    }

    /// Scope for a document of entity type `P`.
    pub fn of<P: Entity>(document: DocumentRef) -> Self {
        Self::new(P::KIND, document)
    }
}

/// Where to place an entity's collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Location {
    /// Use the registered collection name. Sub-collections need a parent
    /// and fail with [`BatchError::MissingParentScope`] here.
    #[default]
    Registered,
    /// Nest the registered sub-collection under a parent document.
    Under(ParentScope),
    /// Use this path verbatim.
    Explicit(CollectionPath),
}

/// The outcome of resolving an entity type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCollection {
    /// Metadata the resolution was based on.
    pub metadata: CollectionMetadata,
    pub collection: CollectionRef,
    /// Sub-collections nested under documents of this entity type.
    pub sub_collections: Vec<CollectionMetadata>,
}

/// Resolves entity types against a metadata registry. Pure lookup, no I/O:
/// the store is only asked for a collection handle.
#[derive(Clone, Copy)]
pub struct PathResolver<'r> {
    registry: &'r MetadataRegistry,
    store: &'r dyn DocumentStore,
}

impl<'r> PathResolver<'r> {
    pub fn new(registry: &'r MetadataRegistry, store: &'r dyn DocumentStore) -> Self {
        Self { registry, store }
    }

    /// Looks up the metadata governing `entity`: its sub-collection
    /// registration if it has one, otherwise its top-level registration.
    pub fn metadata(&self, entity: EntityKind) -> BatchResult<&'r CollectionMetadata> {
        self.registry
            .sub_collection_metadata(entity)
            .or_else(|| self.registry.collection_metadata(entity))
            .ok_or(BatchError::UnregisteredEntity(entity))
    }

    pub fn resolve(
        &self,
        entity: EntityKind,
        location: &Location,
    ) -> BatchResult<ResolvedCollection> {
        let metadata = self.metadata(entity)?;
        let sub_collections = self.registry.sub_collections_of(metadata.entity);

        let path = match (location, metadata.parent) {
            (Location::Explicit(path), _) => path.clone(),
            (Location::Registered, None) => CollectionPath::root(metadata.name.as_str())?,
            (Location::Registered, Some(parent)) => {
                return Err(BatchError::MissingParentScope { entity, parent });
            }
            (Location::Under(scope), Some(parent)) if scope.entity == parent => {
                CollectionPath::nested(scope.document.path(), metadata.name.as_str())?
            }
            (Location::Under(scope), _) => {
                return Err(BatchError::ParentMismatch {
                    entity,
                    parent: scope.entity,
                });
            }
        };

        Ok(ResolvedCollection {
            metadata: metadata.clone(),
            collection: self.store.collection(path),
            sub_collections,
        })
    }
}
