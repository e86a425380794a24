//! Collection and document paths.
//!
//! Paths alternate collection and document segments:
//! `users` is a collection, `users/u1` a document, `users/u1/posts` a
//! sub-collection nested under that document, and so on.

use crate::{DocumentId, Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Separator between path segments.
pub const PATH_SEPARATOR: char = '/';

fn split(path: &str) -> Result<Vec<String>> {
    if path.is_empty() {
        return Err(Error::EmptyPath);
    }
    path.split(PATH_SEPARATOR)
        .map(|segment| {
            if segment.is_empty() {
                Err(Error::EmptySegment(path.to_string()))
            } else {
                Ok(segment.to_string())
            }
        })
        .collect()
}

/// Path to a collection, either top-level or nested under a document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CollectionPath {
    segments: Vec<String>,
}

impl CollectionPath {
    /// A top-level collection.
    pub fn root(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let path = Self::parse(&name)?;
        if path.segments.len() != 1 {
            return Err(Error::NotACollection(name));
        }
        Ok(path)
    }

    /// A sub-collection named `name` under the document at `parent`.
    pub fn nested(parent: &DocumentPath, name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let leaf = Self::root(name)?;
        let mut segments = parent.segments();
        segments.extend(leaf.segments);
        Ok(Self { segments })
    }

    /// Parses a slash-separated path with an odd number of segments.
    pub fn parse(path: &str) -> Result<Self> {
        let segments = split(path)?;
        if segments.len() % 2 == 0 {
            return Err(Error::NotACollection(path.to_string()));
        }
        Ok(Self { segments })
    }

    /// The collection's own name (last segment).
    #[must_use]
    pub fn name(&self) -> &str {
        // Parsing guarantees at least one segment.
        self.segments.last().map(String::as_str).unwrap_or_default()
    }

    /// The document this collection is nested under, if any.
    #[must_use]
    pub fn parent(&self) -> Option<DocumentPath> {
        if self.segments.len() < 3 {
            return None;
        }
        let cut = self.segments.len() - 1;
        let collection = Self {
            segments: self.segments[..cut - 1].to_vec(),
        };
        let id = DocumentId::new(self.segments[cut - 1].clone()).ok()?;
        Some(DocumentPath::new(collection, id))
    }

    /// Nesting depth: 0 for a top-level collection.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.segments.len() / 2
    }

    /// A document in this collection with the given id.
    #[must_use]
    pub fn doc(&self, id: DocumentId) -> DocumentPath {
        DocumentPath::new(self.clone(), id)
    }

    /// The path segments in order.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl fmt::Display for CollectionPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("/"))
    }
}

impl FromStr for CollectionPath {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for CollectionPath {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<CollectionPath> for String {
    fn from(path: CollectionPath) -> Self {
        path.to_string()
    }
}

/// Path to a single document: its collection plus its id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocumentPath {
    collection: CollectionPath,
    id: DocumentId,
}

impl DocumentPath {
    #[must_use]
    pub fn new(collection: CollectionPath, id: DocumentId) -> Self {
        Self { collection, id }
    }

    /// Parses a slash-separated path with an even number of segments.
    pub fn parse(path: &str) -> Result<Self> {
        let mut segments = split(path)?;
        if segments.len() % 2 != 0 {
            return Err(Error::NotADocument(path.to_string()));
        }
        let id = segments
            .pop()
            .ok_or(Error::EmptyPath)
            .and_then(|id| DocumentId::new(id))?;
        Ok(Self {
            collection: CollectionPath { segments },
            id,
        })
    }

    #[must_use]
    pub fn collection(&self) -> &CollectionPath {
        &self.collection
    }

    #[must_use]
    pub fn id(&self) -> &DocumentId {
        &self.id
    }

    fn segments(&self) -> Vec<String> {
        let mut segments = self.collection.segments.clone();
        segments.push(self.id.to_string());
        segments
    }
}

impl fmt::Display for DocumentPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.collection, self.id)
    }
}

impl FromStr for DocumentPath {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
