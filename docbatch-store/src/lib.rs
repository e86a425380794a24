//! Document store client layer for docbatch.
//!
//! The batch engine talks to a document database through the
//! [`DocumentStore`] trait: collection and document references are built
//! locally, and writes travel to the store as one ordered, atomic batch.
//!
//! # Architecture
//!
//! - [`CollectionRef`] / [`DocumentRef`] are plain location handles; building
//!   one never contacts the store and never checks that a document exists
//! - [`BatchWrite`] is one (kind, document, payload) entry of a batch
//! - [`MemoryStore`] is an in-process store with the same all-or-nothing batch
//!   semantics as a remote one, used by tests and embedded hosts

mod error;
mod memory;
mod reference;
mod write;

pub use error::{StoreError, StoreResult};
pub use memory::{MemoryStore, MemoryStoreConfig, DEFAULT_MAX_BATCH_SIZE};
pub use reference::{CollectionRef, DocumentRef};
pub use write::{BatchWrite, WriteKind};

use async_trait::async_trait;
use docbatch_types::CollectionPath;

/// A document database that accepts atomic write batches.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Returns a handle to the collection at `path`. No I/O.
    fn collection(&self, path: CollectionPath) -> CollectionRef {
        CollectionRef::new(path)
    }

    /// Applies every write in order, all or nothing.
    ///
    /// When several writes target the same document the last one determines
    /// its final state. On error none of the writes are applied.
    async fn commit_batch(&self, writes: Vec<BatchWrite>) -> StoreResult<()>;
}
