//! Entity metadata registry for docbatch.
//!
//! Maps each registered entity type to its collection metadata and each
//! parent type to the sub-collections nested under its documents. The
//! registry is populated once through [`RegistryBuilder`] during startup and
//! is read-only afterwards; share it behind an `Arc`.
//!
//! # Example
//!
//! ```
//! use docbatch_metadata::MetadataRegistry;
//! use docbatch_model::EntityKind;
//!
//! const POST: EntityKind = EntityKind::new("post");
//! const COMMENT: EntityKind = EntityKind::new("comment");
//!
//! let registry = MetadataRegistry::builder()
//!     .collection(POST, "posts")
//!     .sub_collection(COMMENT, "comments", POST)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(registry.sub_collections_of(POST).len(), 1);
//! ```

mod config;
mod error;
mod registry;

pub use config::RegistryConfig;
pub use error::{RegistryError, RegistryResult};
pub use registry::{MetadataRegistry, RegistryBuilder};
