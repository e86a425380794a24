#![allow(dead_code)]

use docbatch_batch::BatchUnit;
use docbatch_metadata::{MetadataRegistry, RegistryBuilder};
use docbatch_model::{CollectionMetadata, Entity, EntityKind};
use docbatch_store::MemoryStore;
use docbatch_types::DocumentId;
use serde::{Serialize, Serializer};
use std::sync::Arc;

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn id(s: &str) -> DocumentId {
    DocumentId::new(s).unwrap()
}

macro_rules! entity {
    ($ty:ident, $kind:literal) => {
        impl Entity for $ty {
            const KIND: EntityKind = EntityKind::new($kind);

            fn id(&self) -> Option<&DocumentId> {
                self.id.as_ref()
            }

            fn set_id(&mut self, id: DocumentId) {
                self.id = Some(id);
            }
        }
    };
}

#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: Option<DocumentId>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}
entity!(User, "user");

impl User {
    pub fn new(name: &str) -> Self {
        Self {
            id: None,
            name: name.into(),
            email: None,
        }
    }

    pub fn with_id(id_str: &str, name: &str) -> Self {
        Self {
            id: Some(id(id_str)),
            ..Self::new(name)
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Post {
    pub id: Option<DocumentId>,
    pub title: String,
    /// Holds the nested comments collection; never written to the post body.
    pub comments: Vec<String>,
}
entity!(Post, "post");

impl Post {
    pub fn new(title: &str) -> Self {
        Self {
            id: None,
            title: title.into(),
            comments: vec!["placeholder".into()],
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Comment {
    pub id: Option<DocumentId>,
    pub body: String,
}
entity!(Comment, "comment");

impl Comment {
    pub fn new(body: &str) -> Self {
        Self {
            id: None,
            body: body.into(),
        }
    }
}

/// Registered both top-level and nested under `Post`.
#[derive(Debug, Clone, Serialize)]
pub struct Tag {
    pub id: Option<DocumentId>,
    pub label: String,
}
entity!(Tag, "tag");

/// Never registered.
#[derive(Debug, Clone, Serialize)]
pub struct Ghost {
    pub id: Option<DocumentId>,
}
entity!(Ghost, "ghost");

/// Serializes to a bare string rather than an object.
#[derive(Debug, Clone)]
pub struct Scalar {
    pub id: Option<DocumentId>,
}
entity!(Scalar, "scalar");

impl Serialize for Scalar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str("scalar")
    }
}

pub fn registry_builder() -> RegistryBuilder {
    MetadataRegistry::builder()
        .collection(User::KIND, "users")
        .collection(Post::KIND, "posts")
        .register(
            CollectionMetadata::sub_collection(Comment::KIND, "comments", Post::KIND)
                .held_in("comments"),
        )
        .collection(Tag::KIND, "tags")
        .sub_collection(Tag::KIND, "post-tags", Post::KIND)
        .collection(Scalar::KIND, "scalars")
}

pub fn registry() -> Arc<MetadataRegistry> {
    Arc::new(registry_builder().build().unwrap())
}

pub fn setup() -> (Arc<MemoryStore>, BatchUnit) {
    init_tracing();
    let store = Arc::new(MemoryStore::new());
    let unit = BatchUnit::new(store.clone(), registry());
    (store, unit)
}
