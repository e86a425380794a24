use docbatch_model::{CollectionMetadata, EntityKind};
use docbatch_store::{BatchWrite, DocumentRef, WriteKind};
use docbatch_types::Document;
use serde::Serialize;

/// A write prepared in memory, waiting for commit.
#[derive(Debug, Clone, PartialEq)]
pub struct StagedOperation {
    pub kind: WriteKind,
    pub document: DocumentRef,
    pub entity: EntityKind,
    /// Snapshot of the record taken when it was staged.
    pub record: Document,
    /// Sub-collections nested under this entity type.
    pub sub_collections: Vec<CollectionMetadata>,
    /// Whether the validation hooks ran for this record.
    pub validated: bool,
}

impl StagedOperation {
    pub(crate) fn to_write(&self) -> BatchWrite {
        match self.kind {
            WriteKind::Create => BatchWrite::create(self.document.clone(), self.record.clone()),
            WriteKind::Update => BatchWrite::update(self.document.clone(), self.record.clone()),
            WriteKind::Delete => BatchWrite::delete(self.document.clone()),
        }
    }
}

/// Outcome of a successful commit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CommitResult {
    pub creates: usize,
    pub updates: usize,
    pub deletes: usize,
}

impl CommitResult {
    pub(crate) fn tally(operations: &[StagedOperation]) -> Self {
        operations
            .iter()
            .fold(Self::default(), |mut acc, op| {
                match op.kind {
                    WriteKind::Create => acc.creates += 1,
                    WriteKind::Update => acc.updates += 1,
                    WriteKind::Delete => acc.deletes += 1,
                }
                acc
            })
    }

    /// Total writes applied.
    pub fn total(&self) -> usize {
        self.creates + self.updates + self.deletes
    }

    pub fn count(&self, kind: WriteKind) -> usize {
        match kind {
            WriteKind::Create => self.creates,
            WriteKind::Update => self.updates,
            WriteKind::Delete => self.deletes,
        }
    }
}
