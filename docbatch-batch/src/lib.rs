//! Atomic batch writes for docbatch entities.
//!
//! A [`BatchUnit`] collects create/update/delete operations across any
//! number of registered entity types and commits them to a
//! [`DocumentStore`](docbatch_store::DocumentStore) as a single atomic batch.
//!
//! # Components
//!
//! - **Resolver**: maps an entity type (plus an optional parent document or
//!   explicit path) to its collection, preferring sub-collection registrations
//! - **Stager**: assigns or checks ids, snapshots and validates the record,
//!   and appends a [`StagedOperation`] — no I/O
//! - **Commit**: sends the buffer in stage order, reports one outcome
//!
//! # Example
//!
//! ```
//! use docbatch_batch::BatchUnit;
//! use docbatch_metadata::MetadataRegistry;
//! use docbatch_model::{Entity, EntityKind};
//! use docbatch_store::MemoryStore;
//! use docbatch_types::DocumentId;
//! use serde::Serialize;
//! use std::sync::Arc;
//!
//! #[derive(Serialize)]
//! struct User {
//!     id: Option<DocumentId>,
//!     name: String,
//! }
//!
//! impl Entity for User {
//!     const KIND: EntityKind = EntityKind::new("user");
//!     fn id(&self) -> Option<&DocumentId> { self.id.as_ref() }
//!     fn set_id(&mut self, id: DocumentId) { self.id = Some(id); }
//! }
//!
//! let registry = MetadataRegistry::builder()
//!     .collection(User::KIND, "users")
//!     .build()
//!     .unwrap();
//! let mut batch = BatchUnit::new(Arc::new(MemoryStore::new()), Arc::new(registry));
//!
//! let mut ada = User { id: None, name: "Ada".into() };
//! let doc = batch.create(&mut ada).unwrap();
//! assert_eq!(ada.id.as_ref(), Some(doc.id()));
//! assert_eq!(batch.len(), 1);
//! ```

mod error;
mod operation;
mod repository;
mod resolver;
mod unit;

pub use error::{BatchError, BatchResult};
pub use operation::{CommitResult, StagedOperation};
pub use repository::BatchRepository;
pub use resolver::{Location, ParentScope, PathResolver, ResolvedCollection};
pub use unit::{BatchState, BatchUnit};
