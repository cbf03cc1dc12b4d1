//! Storage configuration

use serde::Deserialize;
use std::path::PathBuf;

use crate::adapters::storage::{
    FileBlobStore, InMemoryBlobStore, MatrixRepository, DEFAULT_STORAGE_KEY,
};
use crate::domain::foundation::ValidationError;

/// Where and under which key the matrix library is persisted
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Directory holding the file store
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Key the library envelope is stored under
    #[serde(default = "default_key")]
    pub key: String,

    /// Byte limit for the in-memory store
    pub quota_bytes: Option<usize>,
}

impl StorageConfig {
    /// Validate storage configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.data_dir.as_os_str().is_empty() {
            return Err(ValidationError::empty_field("storage.data_dir"));
        }
        if self.key.trim().is_empty() {
            return Err(ValidationError::empty_field("storage.key"));
        }
        let key_ok = !self.key.starts_with('.')
            && self
                .key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
        if !key_ok {
            return Err(ValidationError::invalid_format(
                "storage.key",
                "only letters, digits, '-', '_' and '.' are allowed",
            ));
        }
        if self.quota_bytes == Some(0) {
            return Err(ValidationError::out_of_range(
                "storage.quota_bytes",
                1,
                i64::MAX,
                0,
            ));
        }
        Ok(())
    }

    /// Repository backed by files under `data_dir`
    pub fn file_repository(&self) -> MatrixRepository<FileBlobStore> {
        MatrixRepository::with_key(FileBlobStore::new(&self.data_dir), self.key.clone())
    }

    /// Repository backed by memory, honouring `quota_bytes`
    pub fn in_memory_repository(&self) -> MatrixRepository<InMemoryBlobStore> {
        let store = match self.quota_bytes {
            Some(limit) => InMemoryBlobStore::with_quota(limit),
            None => InMemoryBlobStore::new(),
        };
        MatrixRepository::with_key(store, self.key.clone())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            key: default_key(),
            quota_bytes: None,
        }
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./data")
}

fn default_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}
