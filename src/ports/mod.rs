//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `BlobStore` - Flat key-value storage of serialized documents
//! - `MatrixImporter` - Parses an external document into a matrix

mod blob_store;
mod matrix_importer;

pub use blob_store::{BlobStore, BlobStoreError};
pub use matrix_importer::{ImportError, MatrixImporter};
