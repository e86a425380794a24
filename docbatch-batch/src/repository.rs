use crate::resolver::{ParentScope, ResolvedCollection};
use crate::unit::BatchUnit;
use crate::{BatchError, BatchResult};
use docbatch_model::{CollectionMetadata, Entity};
use docbatch_store::{CollectionRef, DocumentRef, WriteKind};
use docbatch_types::DocumentId;
use std::marker::PhantomData;

/// Stages writes for one entity type at one resolved collection.
///
/// Every repository obtained from a [`BatchUnit`] stages into that unit's
/// shared buffer; the unit's `commit` sends them all together.
pub struct BatchRepository<'b, E: Entity> {
    unit: &'b mut BatchUnit,
    target: ResolvedCollection,
    _entity: PhantomData<fn(E)>,
}

impl<'b, E: Entity> BatchRepository<'b, E> {
    pub(crate) fn new(unit: &'b mut BatchUnit, target: ResolvedCollection) -> Self {
        Self {
            unit,
            target,
            _entity: PhantomData,
        }
    }

    /// The collection this repository writes to.
    pub fn collection(&self) -> &CollectionRef {
        &self.target.collection
    }

    /// Sub-collections nested under documents of `E`.
    pub fn sub_collections(&self) -> &[CollectionMetadata] {
        &self.target.sub_collections
    }

    /// Handle to the document with `id` in this collection.
    pub fn document(&self, id: DocumentId) -> DocumentRef {
        self.target.collection.doc(id)
    }

    /// Parent scope for resolving sub-collections under `record`.
    pub fn scope_for(&self, record: &E) -> BatchResult<ParentScope> {
        let id = record.id().ok_or(BatchError::UnsavedParent(E::KIND))?;
        Ok(ParentScope::of::<E>(self.document(id.clone())))
    }

    /// Stages a create.
    ///
    /// A record without an id gets a generated one, written back through
    /// [`Entity::set_id`] before anything else happens; it stays assigned
    /// even if validation then rejects the record, so a corrected retry
    /// targets the same document. A record with an id overwrites that
    /// document on commit.
    pub fn create(&mut self, record: &mut E) -> BatchResult<DocumentRef> {
        self.unit.stage_create(&self.target, record)
    }

    /// Stages a field update of an existing document. Requires an id.
    pub fn update(&mut self, record: &E) -> BatchResult<DocumentRef> {
        self.unit.stage_existing(WriteKind::Update, &self.target, record)
    }

    /// Stages a delete. Requires an id.
    pub fn delete(&mut self, record: &E) -> BatchResult<DocumentRef> {
        self.unit.stage_existing(WriteKind::Delete, &self.target, record)
    }
}
