//! Storage Adapters
//!
//! Implementations of the BlobStore port, plus the repository that keeps the
//! matrix library in a versioned envelope on top of any store.
//!
//! ## Available Adapters
//!
//! - **FileBlobStore** - One JSON file per key on disk
//! - **InMemoryBlobStore** - Map in memory, optional quota (testing/development)
//! - **MatrixRepository** - Versioned load/save of the matrix list
//!
//! ## Usage
//!
//! ```ignore
//! use decision_matrix::adapters::storage::{FileBlobStore, MatrixRepository};
//!
//! let repository = MatrixRepository::new(FileBlobStore::new("./data"));
//! let library = repository.load_library().await;
//! ```

mod file_blob_store;
mod in_memory_blob_store;
mod matrix_repository;

pub use file_blob_store::FileBlobStore;
pub use in_memory_blob_store::InMemoryBlobStore;
pub use matrix_repository::{
    MatrixRepository, StorageInfo, DEFAULT_STORAGE_KEY, STORAGE_VERSION,
};
