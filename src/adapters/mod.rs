//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `storage` - Blob stores (file, in-memory) and the matrix repository
//! - `import` - YAML document importer

pub mod import;
pub mod storage;

pub use import::{example_document, ExampleKind, YamlMatrixImporter};
pub use storage::{FileBlobStore, InMemoryBlobStore, MatrixRepository, StorageInfo};
