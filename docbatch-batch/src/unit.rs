//! The batch unit — staging buffer plus commit.
//!
//! Staging is synchronous and purely in-memory. `commit` is the only call
//! that touches the store, and it sends every staged operation in one
//! atomic request.

use crate::operation::{CommitResult, StagedOperation};
use crate::repository::BatchRepository;
use crate::resolver::{Location, ParentScope, PathResolver, ResolvedCollection};
use crate::{BatchError, BatchResult};
use docbatch_metadata::MetadataRegistry;
use docbatch_model::Entity;
use docbatch_store::{DocumentRef, DocumentStore, WriteKind};
use docbatch_types::CollectionPath;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Lifecycle of a [`BatchUnit`]. Only `Open` accepts staging or commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchState {
    Open,
    /// The request was handed to the store and has not resolved. A unit
    /// left here (commit future dropped) has an unknown outcome.
    Submitted,
    Committed,
    Failed,
}

/// Accumulates writes across entity types and commits them atomically.
///
/// One-shot: after `commit` has been called, whatever the outcome, further
/// staging and commits fail with [`BatchError::AlreadyCommitted`]. Build a
/// new unit to retry.
pub struct BatchUnit {
    store: Arc<dyn DocumentStore>,
    registry: Arc<MetadataRegistry>,
    operations: Vec<StagedOperation>,
    state: BatchState,
}

impl BatchUnit {
    pub fn new(store: Arc<dyn DocumentStore>, registry: Arc<MetadataRegistry>) -> Self {
        Self {
            store,
            registry,
            operations: Vec::new(),
            state: BatchState::Open,
        }
    }

    pub fn registry(&self) -> &Arc<MetadataRegistry> {
        &self.registry
    }

    pub fn state(&self) -> BatchState {
        self.state
    }

    /// Operations staged and not yet committed, in stage order.
    ///
    /// After a failed commit these are the writes that were not applied.
    pub fn pending(&self) -> &[StagedOperation] {
        &self.operations
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Resolves `E` to its collection without staging anything.
    pub fn resolve<E: Entity>(&self, location: &Location) -> BatchResult<ResolvedCollection> {
        PathResolver::new(&self.registry, self.store.as_ref()).resolve(E::KIND, location)
    }

    // ── Repositories ─────────────────────────────────────────────

    /// Repository for `E` at its registered collection.
    pub fn repository<E: Entity>(&mut self) -> BatchResult<BatchRepository<'_, E>> {
        self.repository_with(Location::Registered)
    }

    /// Repository for sub-collection `E` nested under `parent`.
    pub fn repository_in<E: Entity>(
        &mut self,
        parent: ParentScope,
    ) -> BatchResult<BatchRepository<'_, E>> {
        self.repository_with(Location::Under(parent))
    }

    /// Repository for `E` at an explicit collection path.
    pub fn repository_at<E: Entity>(
        &mut self,
        path: CollectionPath,
    ) -> BatchResult<BatchRepository<'_, E>> {
        self.repository_with(Location::Explicit(path))
    }

    fn repository_with<E: Entity>(
        &mut self,
        location: Location,
    ) -> BatchResult<BatchRepository<'_, E>> {
        self.ensure_open()?;
        let target = self.resolve::<E>(&location)?;
        Ok(BatchRepository::new(self, target))
    }

    // ── Staging shortcuts ────────────────────────────────────────

    /// Stages a create at `E`'s registered collection.
    /// See [`BatchRepository::create`].
    pub fn create<E: Entity>(&mut self, record: &mut E) -> BatchResult<DocumentRef> {
        self.repository::<E>()?.create(record)
    }

    /// Stages an update at `E`'s registered collection.
    pub fn update<E: Entity>(&mut self, record: &E) -> BatchResult<DocumentRef> {
        self.repository::<E>()?.update(record)
    }

    /// Stages a delete at `E`'s registered collection.
    pub fn delete<E: Entity>(&mut self, record: &E) -> BatchResult<DocumentRef> {
        self.repository::<E>()?.delete(record)
    }

    // ── Stager ───────────────────────────────────────────────────

    pub(crate) fn stage_create<E: Entity>(
        &mut self,
        target: &ResolvedCollection,
        record: &mut E,
    ) -> BatchResult<DocumentRef> {
        self.ensure_open()?;
        let document = match record.id() {
            Some(id) => target.collection.doc(id.clone()),
            None => {
                let document = target.collection.new_doc();
                record.set_id(document.id().clone());
                document
            }
        };
        self.stage(WriteKind::Create, target, &*record, document.clone())?;
        Ok(document)
    }

    pub(crate) fn stage_existing<E: Entity>(
        &mut self,
        kind: WriteKind,
        target: &ResolvedCollection,
        record: &E,
    ) -> BatchResult<DocumentRef> {
        self.ensure_open()?;
        let id = record.id().ok_or(BatchError::MissingIdentifier {
            entity: target.metadata.entity,
            operation: kind,
        })?;
        let document = target.collection.doc(id.clone());
        self.stage(kind, target, record, document.clone())?;
        Ok(document)
    }

    fn stage<E: Entity>(
        &mut self,
        kind: WriteKind,
        target: &ResolvedCollection,
        record: &E,
        document: DocumentRef,
    ) -> BatchResult<()> {
        let entity = target.metadata.entity;
        let Value::Object(mut payload) = serde_json::to_value(record)? else {
            return Err(BatchError::NotADocument(entity));
        };
        for field in target.sub_collections.iter().filter_map(|m| m.field.as_ref()) {
            payload.remove(field);
        }

        let validated = self.registry.config().validate_models;
        if validated {
            let violations = self.registry.validate(entity, &payload);
            if !violations.is_empty() {
                debug!(
                    "Rejected {} of {} at {}: {} violations",
                    kind,
                    entity,
                    document,
                    violations.len()
                );
                return Err(BatchError::Validation { entity, violations });
            }
        }

        debug!("Staged {} of {} at {}", kind, entity, document);
        self.operations.push(StagedOperation {
            kind,
            document,
            entity,
            record: payload,
            sub_collections: target.sub_collections.clone(),
            validated,
        });
        Ok(())
    }

    // ── Commit ───────────────────────────────────────────────────

    /// Submits every staged operation to the store as one atomic batch.
    ///
    /// An empty batch succeeds without contacting the store. On failure
    /// nothing was applied and [`BatchUnit::pending`] still lists the
    /// operations. The store error is passed through unretried.
    pub async fn commit(&mut self) -> BatchResult<CommitResult> {
        self.ensure_open()?;
        let result = CommitResult::tally(&self.operations);

        if self.operations.is_empty() {
            self.state = BatchState::Committed;
            debug!("Committed empty batch without contacting the store");
            return Ok(result);
        }

        let writes = self.operations.iter().map(StagedOperation::to_write).collect();
        self.state = BatchState::Submitted;

        match self.store.commit_batch(writes).await {
            Ok(()) => {
                self.state = BatchState::Committed;
                self.operations.clear();
                info!(
                    "Committed batch of {} writes ({} creates, {} updates, {} deletes)",
                    result.total(),
                    result.creates,
                    result.updates,
                    result.deletes
                );
                Ok(result)
            }
            Err(e) => {
                self.state = BatchState::Failed;
                warn!("Batch of {} writes failed: {}", result.total(), e);
                Err(BatchError::Commit(e))
            }
        }
    }

    fn ensure_open(&self) -> BatchResult<()> {
        match self.state {
            BatchState::Open => Ok(()),
            _ => Err(BatchError::AlreadyCommitted),
        }
    }
}

impl fmt::Debug for BatchUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BatchUnit")
            .field("operations", &self.operations)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
