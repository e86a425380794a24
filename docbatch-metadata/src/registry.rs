use crate::{RegistryConfig, RegistryError, RegistryResult};
use docbatch_model::{CollectionMetadata, EntityKind, ValidationHook, Violation};
use docbatch_types::{CollectionPath, Document};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Read-only lookup of entity collection metadata.
pub struct MetadataRegistry {
    collections: HashMap<EntityKind, CollectionMetadata>,
    /// Sub-collection registrations in registration order.
    sub_collections: Vec<CollectionMetadata>,
    config: RegistryConfig,
    hooks: Vec<Arc<dyn ValidationHook>>,
}

impl MetadataRegistry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Top-level registration for `entity`.
    pub fn collection_metadata(&self, entity: EntityKind) -> Option<&CollectionMetadata> {
        self.collections.get(&entity)
    }

    /// Sub-collection registration for `entity`.
    pub fn sub_collection_metadata(&self, entity: EntityKind) -> Option<&CollectionMetadata> {
        self.sub_collections.iter().find(|meta| meta.entity == entity)
    }

    /// Every sub-collection nested under documents of `parent`, in
    /// registration order.
    pub fn sub_collections_of(&self, parent: EntityKind) -> Vec<CollectionMetadata> {
        self.sub_collections
            .iter()
            .filter(|meta| meta.parent == Some(parent))
            .cloned()
            .collect()
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Runs every validation hook and concatenates their violations.
    ///
    /// Does not consult `validate_models`; callers decide whether to call.
    pub fn validate(&self, entity: EntityKind, record: &Document) -> Vec<Violation> {
        self.hooks
            .iter()
            .flat_map(|hook| hook.validate(entity, record))
            .collect()
    }

    /// Number of validation hooks installed.
    pub fn hook_count(&self) -> usize {
        self.hooks.len()
    }
}

impl fmt::Debug for MetadataRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MetadataRegistry")
            .field("collections", &self.collections)
            .field("sub_collections", &self.sub_collections)
            .field("config", &self.config)
            .field("hooks", &self.hooks.len())
            .finish()
    }
}

/// Collects registrations, then checks them all in [`RegistryBuilder::build`].
#[derive(Default)]
pub struct RegistryBuilder {
    registrations: Vec<CollectionMetadata>,
    config: RegistryConfig,
    hooks: Vec<Arc<dyn ValidationHook>>,
}

impl RegistryBuilder {
    /// Registers `entity` as a top-level collection.
    #[must_use]
    pub fn collection(self, entity: EntityKind, name: impl Into<String>) -> Self {
        self.register(CollectionMetadata::collection(entity, name))
    }

    /// Registers `entity` as a sub-collection under documents of `parent`.
    #[must_use]
    pub fn sub_collection(
        self,
        entity: EntityKind,
        name: impl Into<String>,
        parent: EntityKind,
    ) -> Self {
        self.register(CollectionMetadata::sub_collection(entity, name, parent))
    }

    /// Registers a prepared metadata entry.
    #[must_use]
    pub fn register(mut self, metadata: CollectionMetadata) -> Self {
        self.registrations.push(metadata);
        self
    }

    #[must_use]
    pub fn config(mut self, config: RegistryConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn validate_models(mut self, enabled: bool) -> Self {
        self.config.validate_models = enabled;
        self
    }

    /// Adds a validation hook. Hooks run in the order they were added.
    #[must_use]
    pub fn validation_hook(mut self, hook: impl ValidationHook + 'static) -> Self {
        self.hooks.push(Arc::new(hook));
        self
    }

    pub fn build(self) -> RegistryResult<MetadataRegistry> {
        let mut collections = HashMap::new();
        let mut sub_collections: Vec<CollectionMetadata> = Vec::new();

        for metadata in self.registrations {
            CollectionPath::root(metadata.name.as_str()).map_err(|source| {
                RegistryError::InvalidName {
                    entity: metadata.entity,
                    source,
                }
            })?;

            if metadata.is_sub_collection() {
                if sub_collections.iter().any(|m| m.entity == metadata.entity) {
                    return Err(RegistryError::Duplicate {
                        entity: metadata.entity,
                        role: "sub-collection",
                    });
                }
                sub_collections.push(metadata);
            } else {
                if collections.contains_key(&metadata.entity) {
                    return Err(RegistryError::Duplicate {
                        entity: metadata.entity,
                        role: "collection",
                    });
                }
                collections.insert(metadata.entity, metadata);
            }
        }

        for metadata in &sub_collections {
            let Some(parent) = metadata.parent else {
                continue;
            };
            let known = collections.contains_key(&parent)
                || sub_collections.iter().any(|m| m.entity == parent);
            if !known {
                return Err(RegistryError::UnknownParent {
                    entity: metadata.entity,
                    parent,
                });
            }
        }

        debug!(
            "Metadata registry built: {} collections, {} sub-collections, {} validation hooks",
            collections.len(),
            sub_collections.len(),
            self.hooks.len()
        );

        Ok(MetadataRegistry {
            collections,
            sub_collections,
            config: self.config,
            hooks: self.hooks,
        })
    }
}
