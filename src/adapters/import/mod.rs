//! Import Adapters
//!
//! Implementations of the MatrixImporter port.
//!
//! - **YamlMatrixImporter** - Hand-written YAML documents

mod yaml_importer;

pub use yaml_importer::{example_document, ExampleKind, YamlMatrixImporter};
