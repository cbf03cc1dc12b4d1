//! Blob Store Port - Flat key-value storage for serialized documents.
//!
//! Values are opaque strings. The store knows nothing about matrices; the
//! envelope format lives in `adapters::storage::MatrixRepository`.

use async_trait::async_trait;

/// Errors that can occur during blob store operations
#[derive(Debug, thiserror::Error)]
pub enum BlobStoreError {
    #[error("Storage quota exceeded: {needed} bytes needed, {limit} bytes allowed")]
    QuotaExceeded { needed: usize, limit: usize },

    #[error("IO error: {0}")]
    Io(String),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

impl From<std::io::Error> for BlobStoreError {
    fn from(err: std::io::Error) -> Self {
        BlobStoreError::Io(err.to_string())
    }
}

/// Port for reading and writing string blobs by key
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Load the value stored under `key`
    ///
    /// # Returns
    /// `None` if nothing is stored under the key
    async fn get(&self, key: &str) -> Result<Option<String>, BlobStoreError>;

    /// Store `value` under `key`, replacing any previous value
    ///
    /// # Errors
    /// Returns `BlobStoreError::QuotaExceeded` if the store is full
    async fn set(&self, key: &str, value: &str) -> Result<(), BlobStoreError>;

    /// Remove the value stored under `key`. Removing a missing key succeeds.
    async fn remove(&self, key: &str) -> Result<(), BlobStoreError>;
}
