//! Error types for the store layer.

use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors a store can report for a batch. Each applies to the whole batch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Transport-level failure; the outcome is known to be "not applied".
    #[error("network error: {0}")]
    Network(String),

    /// An update targeted a document that does not exist.
    #[error("document not found: {0}")]
    NotFound(String),

    /// The batch exceeds the store's per-request write limit.
    #[error("batch of {size} writes exceeds the limit of {limit}")]
    BatchTooLarge { size: usize, limit: usize },

    /// The store rejected the batch (permissions, constraints, payload).
    #[error("batch rejected: {0}")]
    Rejected(String),

    /// The request timed out.
    #[error("operation timed out")]
    Timeout,
}
