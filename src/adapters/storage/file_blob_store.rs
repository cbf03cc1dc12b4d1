//! File-based Blob Store Adapter
//!
//! One file per key under a base directory. Writes go to a temporary file
//! that is then renamed over the target, so readers never see a partial blob.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::ports::{BlobStore, BlobStoreError};

/// File-based key-value storage
#[derive(Debug, Clone)]
pub struct FileBlobStore {
    base_path: PathBuf,
}

impl FileBlobStore {
    /// Create a store rooted at `base_path`. The directory is created on first write.
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Path of the file holding `key`
    fn blob_path(&self, key: &str) -> Result<PathBuf, BlobStoreError> {
        let valid = !key.is_empty()
            && !key.starts_with('.')
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
        if !valid {
            return Err(BlobStoreError::Io(format!("Invalid storage key: {:?}", key)));
        }

        Ok(self.base_path.join(format!("{}.json", key)))
    }
}

#[async_trait]
impl BlobStore for FileBlobStore {
    async fn get(&self, key: &str) -> Result<Option<String>, BlobStoreError> {
        let path = self.blob_path(key)?;

        match fs::read_to_string(&path).await {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), BlobStoreError> {
        let path = self.blob_path(key)?;

        fs::create_dir_all(&self.base_path).await.map_err(|e| {
            BlobStoreError::Unavailable(format!(
                "Cannot create {}: {}",
                self.base_path.display(),
                e
            ))
        })?;

        let temp_path = path.with_extension("json.tmp");
        if let Err(e) = fs::write(&temp_path, value).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(e.into());
        }
        if let Err(e) = fs::rename(&temp_path, &path).await {
            let _ = fs::remove_file(&temp_path).await;
            tracing::warn!(key, error = %e, "Blob write failed, temp file removed");
            return Err(BlobStoreError::Io(format!("Failed to rename file: {}", e)));
        }

        tracing::debug!(key, bytes = value.len(), path = %path.display(), "Blob written");
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), BlobStoreError> {
        let path = self.blob_path(key)?;

        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
