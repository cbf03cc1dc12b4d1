//! Matrix Repository - Versioned persistence of the matrix library.
//!
//! The whole library is stored as one JSON envelope under a single key:
//!
//! ```json
//! { "version": 1, "matrices": [ ... ], "timestamp": "2024-01-25T10:00:00Z" }
//! ```
//!
//! Reads never fail: a missing, unparsable or version-mismatched envelope is
//! treated as "nothing stored". Write failures are logged and swallowed.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Timestamp;
use crate::domain::library::MatrixLibrary;
use crate::domain::matrix::DecisionMatrix;
use crate::ports::BlobStore;

/// Key the library is stored under unless configured otherwise.
pub const DEFAULT_STORAGE_KEY: &str = "decision-matrices";

/// Envelope format version written by this build.
pub const STORAGE_VERSION: u32 = 1;

const PROBE_KEY: &str = "__storage_test__";

#[derive(Serialize)]
struct EnvelopeRef<'a> {
    version: u32,
    matrices: &'a [DecisionMatrix],
    timestamp: Timestamp,
}

#[derive(Deserialize)]
struct Envelope {
    matrices: Vec<DecisionMatrix>,
}

#[derive(Deserialize)]
struct VersionProbe {
    version: u32,
}

/// Storage usage snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageInfo {
    /// Size of the stored envelope in bytes, 0 when nothing is stored
    pub used_bytes: usize,
    /// Whether the store accepted a probe write
    pub available: bool,
}

/// Loads and saves the matrix list through a `BlobStore`
#[derive(Debug, Clone)]
pub struct MatrixRepository<S> {
    store: S,
    key: String,
}

impl<S: BlobStore> MatrixRepository<S> {
    /// Repository using the default storage key
    pub fn new(store: S) -> Self {
        Self::with_key(store, DEFAULT_STORAGE_KEY)
    }

    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Loads the stored matrices.
    ///
    /// Returns `None` when nothing usable is stored.
    pub async fn load(&self) -> Option<Vec<DecisionMatrix>> {
        let raw = match self.store.get(&self.key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "Failed to read stored matrices");
                return None;
            }
        };

        let version = match serde_json::from_str::<VersionProbe>(&raw) {
            Ok(probe) => probe.version,
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "Stored matrices are not a valid envelope");
                return None;
            }
        };
        if version != STORAGE_VERSION {
            tracing::warn!(
                key = %self.key,
                found = version,
                expected = STORAGE_VERSION,
                "Storage version mismatch, ignoring stored data"
            );
            return None;
        }

        match serde_json::from_str::<Envelope>(&raw) {
            Ok(envelope) => {
                tracing::debug!(key = %self.key, count = envelope.matrices.len(), "Loaded matrices");
                Some(envelope.matrices)
            }
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "Failed to parse stored matrices");
                None
            }
        }
    }

    /// Saves the matrices, replacing whatever was stored.
    pub async fn save(&self, matrices: &[DecisionMatrix]) {
        let envelope = EnvelopeRef {
            version: STORAGE_VERSION,
            matrices,
            timestamp: Timestamp::now(),
        };

        let serialized = match serde_json::to_string(&envelope) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "Failed to serialize matrices");
                return;
            }
        };

        match self.store.set(&self.key, &serialized).await {
            Ok(()) => {
                tracing::debug!(
                    key = %self.key,
                    count = matrices.len(),
                    bytes = serialized.len(),
                    "Saved matrices"
                );
            }
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "Failed to save matrices");
            }
        }
    }

    /// Removes the stored matrices.
    pub async fn clear(&self) {
        if let Err(e) = self.store.remove(&self.key).await {
            tracing::warn!(key = %self.key, error = %e, "Failed to clear stored matrices");
        }
    }

    /// Probes the store with a throwaway write.
    pub async fn is_available(&self) -> bool {
        if self.store.set(PROBE_KEY, PROBE_KEY).await.is_err() {
            return false;
        }
        self.store.remove(PROBE_KEY).await.is_ok()
    }

    pub async fn storage_info(&self) -> StorageInfo {
        let used_bytes = match self.store.get(&self.key).await {
            Ok(stored) => stored.map_or(0, |s| s.len()),
            Err(_) => {
                return StorageInfo {
                    used_bytes: 0,
                    available: false,
                }
            }
        };

        StorageInfo {
            used_bytes,
            available: self.is_available().await,
        }
    }

    /// Stored library, or the starter library when nothing usable is stored.
    pub async fn load_library(&self) -> MatrixLibrary {
        match self.load().await {
            Some(matrices) => MatrixLibrary::new(matrices),
            None => {
                tracing::debug!(key = %self.key, "No stored library, using starter matrices");
                MatrixLibrary::starter()
            }
        }
    }

    pub async fn save_library(&self, library: &MatrixLibrary) {
        self.save(library.matrices()).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryBlobStore;
    use crate::domain::matrix::{starter_matrices, NewMatrix};
    use crate::ports::BlobStoreError;
    use async_trait::async_trait;

    fn repository() -> MatrixRepository<InMemoryBlobStore> {
        MatrixRepository::new(InMemoryBlobStore::new())
    }

    /// Store whose every call fails.
    struct BrokenStore;

    #[async_trait]
    impl BlobStore for BrokenStore {
        async fn get(&self, _key: &str) -> Result<Option<String>, BlobStoreError> {
            Err(BlobStoreError::Unavailable("disabled".to_string()))
        }

        async fn set(&self, _key: &str, _value: &str) -> Result<(), BlobStoreError> {
            Err(BlobStoreError::Unavailable("disabled".to_string()))
        }

        async fn remove(&self, _key: &str) -> Result<(), BlobStoreError> {
            Err(BlobStoreError::Unavailable("disabled".to_string()))
        }
    }

    #[tokio::test]
    async fn load_empty_store_is_none() {
        assert!(repository().load().await.is_none());
    }

    #[tokio::test]
    async fn save_then_load_round_trips() {
        let repo = repository();
        let matrices = starter_matrices();

        repo.save(&matrices).await;

        assert_eq!(repo.load().await, Some(matrices));
    }

    #[tokio::test]
    async fn envelope_has_version_and_timestamp() {
        let repo = repository();
        repo.save(&starter_matrices()).await;

        let raw = repo.store().get(DEFAULT_STORAGE_KEY).await.unwrap().unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();

        assert_eq!(json["version"], 1);
        assert!(json["timestamp"].is_string());
        assert_eq!(json["matrices"].as_array().unwrap().len(), 4);
        assert!(json["matrices"][0]["isTemplate"].is_boolean());
    }

    #[tokio::test]
    async fn version_mismatch_is_treated_as_absent() {
        let repo = repository();
        repo.store()
            .set(DEFAULT_STORAGE_KEY, r#"{"version":2,"matrices":[],"timestamp":"x"}"#)
            .await
            .unwrap();

        assert!(repo.load().await.is_none());
    }

    #[tokio::test]
    async fn garbage_is_treated_as_absent() {
        let repo = repository();
        repo.store().set(DEFAULT_STORAGE_KEY, "not json").await.unwrap();
        assert!(repo.load().await.is_none());
    }

    #[tokio::test]
    async fn broken_store_degrades_gracefully() {
        let repo = MatrixRepository::new(BrokenStore);

        repo.save(&starter_matrices()).await;
        repo.clear().await;

        assert!(repo.load().await.is_none());
        assert!(!repo.is_available().await);
        assert_eq!(
            repo.storage_info().await,
            StorageInfo {
                used_bytes: 0,
                available: false
            }
        );
    }

    #[tokio::test]
    async fn quota_exceeded_keeps_previous_save() {
        let repo = MatrixRepository::new(InMemoryBlobStore::with_quota(4_096));
        let small = vec![NewMatrix::titled("Small").criterion("Cost", 2, true).build()];
        repo.save(&small).await;

        let mut large = small.clone();
        for i in 0..50 {
            large.push(
                NewMatrix::titled(format!("Filler {}", i))
                    .criterion("Cost", 2, true)
                    .option("A")
                    .build(),
            );
        }
        repo.save(&large).await;

        assert_eq!(repo.load().await, Some(small));
    }

    #[tokio::test]
    async fn clear_removes_stored_data() {
        let repo = repository();
        repo.save(&starter_matrices()).await;

        repo.clear().await;

        assert!(repo.load().await.is_none());
    }

    #[tokio::test]
    async fn storage_info_reports_size() {
        let repo = repository();
        assert_eq!(repo.storage_info().await.used_bytes, 0);

        repo.save(&starter_matrices()).await;
        let info = repo.storage_info().await;

        assert!(info.available);
        assert_eq!(info.used_bytes, repo.store().used_bytes().await);
    }

    #[tokio::test]
    async fn probe_key_is_cleaned_up() {
        let repo = repository();
        assert!(repo.is_available().await);
        assert!(repo.store().is_empty().await);
    }

    #[tokio::test]
    async fn load_library_falls_back_to_starter() {
        let library = repository().load_library().await;
        assert_eq!(library, MatrixLibrary::starter());
    }

    #[tokio::test]
    async fn save_library_then_load_library() {
        let repo = MatrixRepository::with_key(InMemoryBlobStore::new(), "custom");
        let library = MatrixLibrary::empty().with_added(NewMatrix::titled("Mine").build());

        repo.save_library(&library).await;

        assert_eq!(repo.key(), "custom");
        assert_eq!(repo.load_library().await, library);
    }
}
