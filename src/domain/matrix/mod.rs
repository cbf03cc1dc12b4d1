//! Matrix Module - The decision matrix aggregate and its edits.
//!
//! # Components
//!
//! - `DecisionMatrix` - Criteria (rows), options (columns) and name-keyed cells
//! - `NewMatrix` - Builder input for creating a matrix with generated ids
//! - Mutators - `set_value`, `add_criterion`, `rename_option`, ... (each returns a new matrix)
//! - `MatrixEdit` - Typed edit commands applied with [`DecisionMatrix::apply`]
//! - `starter_matrices` - Built-in templates and examples

mod aggregate;
mod edit;
mod mutations;
mod starter;

pub use aggregate::{
    CellGrid, Criterion, DecisionMatrix, MatrixOption, NewCriterion, NewMatrix, NewOption,
};
pub use edit::MatrixEdit;
pub use starter::starter_matrices;
