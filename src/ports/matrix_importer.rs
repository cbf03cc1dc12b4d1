//! Matrix Importer Port - Builds a matrix from a text document.

use crate::domain::foundation::ValidationError;
use crate::domain::matrix::DecisionMatrix;

/// Errors reported when a document cannot be turned into a matrix.
///
/// Each message names the offending field. List indexes are 0-based.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ImportError {
    #[error("YAML parsing error: {0}")]
    Syntax(String),

    #[error("Invalid YAML: Expected an object")]
    NotAnObject,

    #[error("Invalid YAML: \"title\" field is required and must be a string")]
    MissingTitle,

    #[error("Invalid YAML: \"criteria\" field is required and must be a non-empty array")]
    MissingCriteria,

    #[error("Invalid criteria[{index}]: \"name\" is required and must be a string")]
    InvalidCriterionName { index: usize },

    #[error("Invalid criteria[{index}]: \"weight\" must be a number between 1 and 5")]
    InvalidCriterionWeight { index: usize },

    #[error("Invalid YAML: Non-template matrices require \"options\" field with at least one option")]
    MissingOptions,

    #[error("Invalid options[{index}]: option name must be a non-empty string")]
    InvalidOptionName { index: usize },

    #[error("Duplicate criterion name: {name}")]
    DuplicateCriterion { name: String },

    #[error("Duplicate option name: {name}")]
    DuplicateOption { name: String },

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl ImportError {
    /// Field path the error refers to, e.g. `criteria[2].weight`.
    pub fn field(&self) -> String {
        match self {
            ImportError::Syntax(_) | ImportError::NotAnObject => "document".to_string(),
            ImportError::MissingTitle => "title".to_string(),
            ImportError::MissingCriteria => "criteria".to_string(),
            ImportError::InvalidCriterionName { index } => format!("criteria[{}].name", index),
            ImportError::InvalidCriterionWeight { index } => format!("criteria[{}].weight", index),
            ImportError::MissingOptions => "options".to_string(),
            ImportError::InvalidOptionName { index } => format!("options[{}]", index),
            ImportError::DuplicateCriterion { .. } => "criteria".to_string(),
            ImportError::DuplicateOption { .. } => "options".to_string(),
            ImportError::Validation(err) => err.field().to_string(),
        }
    }
}

/// Port for turning an external document into a `DecisionMatrix`.
///
/// Implementations are pure parsers: no I/O, no storage side effects.
pub trait MatrixImporter: Send + Sync {
    /// Parses and validates `text`, producing a matrix with fresh ids.
    ///
    /// # Errors
    ///
    /// Returns the first `ImportError` found.
    fn import(&self, text: &str) -> Result<DecisionMatrix, ImportError>;

    /// Checks `text` without building a matrix.
    fn validate(&self, text: &str) -> Result<(), ImportError> {
        self.import(text).map(|_| ())
    }
}
