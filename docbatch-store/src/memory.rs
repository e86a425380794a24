//! In-process document store.

use crate::{BatchWrite, DocumentStore, StoreError, StoreResult, WriteKind};
use async_trait::async_trait;
use docbatch_types::{Document, DocumentPath};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::{Mutex, RwLock};
use tracing::debug;

/// Per-request write limit of common hosted document stores.
pub const DEFAULT_MAX_BATCH_SIZE: usize = 500;

/// Configuration for [`MemoryStore`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MemoryStoreConfig {
    /// Maximum writes accepted in one batch.
    pub max_batch_size: usize,
}

impl Default for MemoryStoreConfig {
    fn default() -> Self {
        Self {
            max_batch_size: DEFAULT_MAX_BATCH_SIZE,
        }
    }
}

/// A store holding documents in memory, keyed by document path.
///
/// Batches are applied to a working copy and published only when every
/// write succeeds, so a failing batch leaves no trace.
#[derive(Debug, Default)]
pub struct MemoryStore {
    config: MemoryStoreConfig,
    documents: RwLock<BTreeMap<String, Document>>,
    /// Successfully applied batches, oldest first.
    history: RwLock<Vec<Vec<BatchWrite>>>,
    injected_failure: Mutex<Option<StoreError>>,
    requests: AtomicUsize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: MemoryStoreConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &MemoryStoreConfig {
        &self.config
    }

    /// Reads a document.
    pub async fn get(&self, path: &DocumentPath) -> Option<Document> {
        self.documents.read().await.get(&path.to_string()).cloned()
    }

    /// Writes a document directly, bypassing batching. For seeding.
    pub async fn insert(&self, path: &DocumentPath, document: Document) {
        self.documents
            .write()
            .await
            .insert(path.to_string(), document);
    }

    /// Number of stored documents.
    pub async fn len(&self) -> usize {
        self.documents.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.documents.read().await.is_empty()
    }

    /// Makes the next `commit_batch` call fail with `error` without
    /// applying anything.
    pub async fn fail_next(&self, error: StoreError) {
        *self.injected_failure.lock().await = Some(error);
    }

    /// Number of `commit_batch` calls received, successful or not.
    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }

    /// Batches applied so far, oldest first.
    pub async fn committed_batches(&self) -> Vec<Vec<BatchWrite>> {
        self.history.read().await.clone()
    }

    fn apply(working: &mut BTreeMap<String, Document>, write: &BatchWrite) -> StoreResult<()> {
        let key = write.document.path().to_string();
        match write.kind {
            WriteKind::Create => {
                working.insert(key, write.data.clone().unwrap_or_default());
            }
            WriteKind::Update => {
                let existing = working.get_mut(&key).ok_or(StoreError::NotFound(key))?;
                if let Some(fields) = &write.data {
                    for (field, value) in fields {
                        existing.insert(field.clone(), value.clone());
                    }
                }
            }
            WriteKind::Delete => {
                working.remove(&key);
            }
        }
        Ok(())
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn commit_batch(&self, writes: Vec<BatchWrite>) -> StoreResult<()> {
        self.requests.fetch_add(1, Ordering::SeqCst);

        if let Some(error) = self.injected_failure.lock().await.take() {
            return Err(error);
        }

        if writes.len() > self.config.max_batch_size {
            return Err(StoreError::BatchTooLarge {
                size: writes.len(),
                limit: self.config.max_batch_size,
            });
        }

        let mut documents = self.documents.write().await;
        let mut working = documents.clone();
        for write in &writes {
            Self::apply(&mut working, write)?;
        }
        *documents = working;
        drop(documents);

        debug!("Applied batch of {} writes", writes.len());
        self.history.write().await.push(writes);
        Ok(())
    }
}
