//! Location handles.

use docbatch_types::{CollectionPath, DocumentId, DocumentPath};
use std::fmt;

/// Handle to a collection.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CollectionRef {
    path: CollectionPath,
}

impl CollectionRef {
    pub fn new(path: CollectionPath) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &CollectionPath {
        &self.path
    }

    /// Handle to the document with `id` in this collection.
    pub fn doc(&self, id: DocumentId) -> DocumentRef {
        DocumentRef::new(self.path.doc(id))
    }

    /// Handle to a new document with a freshly generated id.
    pub fn new_doc(&self) -> DocumentRef {
        self.doc(DocumentId::generate())
    }
}

/// Handle to a single document, whether or not it currently exists.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DocumentRef {
    path: DocumentPath,
}

impl DocumentRef {
    pub fn new(path: DocumentPath) -> Self {
        Self { path }
    }

    pub fn id(&self) -> &DocumentId {
        self.path.id()
    }

    pub fn path(&self) -> &DocumentPath {
        &self.path
    }

    /// Handle to the collection containing this document.
    pub fn parent(&self) -> CollectionRef {
        CollectionRef::new(self.path.collection().clone())
    }
}

impl fmt::Display for DocumentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.path, f)
    }
}
