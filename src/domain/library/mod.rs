//! Library Module - The user's ordered collection of decision matrices.
//!
//! `MatrixLibrary` is an explicit, immutable state container: every change
//! returns a new library and leaves the original untouched. Persisting it is
//! the caller's job (see `adapters::storage::MatrixRepository`).

use serde::{Deserialize, Serialize};

use crate::domain::foundation::MatrixId;
use crate::domain::matrix::{starter_matrices, DecisionMatrix, MatrixEdit};

/// Number of entries the recent list usually shows.
pub const DEFAULT_RECENT_LIMIT: usize = 10;

/// Ordered collection of matrices, templates and filled matrices alike.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatrixLibrary {
    matrices: Vec<DecisionMatrix>,
}

impl MatrixLibrary {
    pub fn new(matrices: Vec<DecisionMatrix>) -> Self {
        Self { matrices }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Library seeded with the built-in templates and examples.
    pub fn starter() -> Self {
        Self::new(starter_matrices())
    }

    // ───────────────────────────────────────────────────────────────
    // Queries
    // ───────────────────────────────────────────────────────────────

    pub fn matrices(&self) -> &[DecisionMatrix] {
        &self.matrices
    }

    pub fn len(&self) -> usize {
        self.matrices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matrices.is_empty()
    }

    pub fn get(&self, id: &MatrixId) -> Option<&DecisionMatrix> {
        self.matrices.iter().find(|m| m.id() == *id)
    }

    pub fn contains(&self, id: &MatrixId) -> bool {
        self.get(id).is_some()
    }

    /// Matrices flagged as templates, in library order.
    pub fn templates(&self) -> Vec<&DecisionMatrix> {
        self.matrices.iter().filter(|m| m.is_template()).collect()
    }

    /// Matrices that are not templates, in library order.
    pub fn filled(&self) -> Vec<&DecisionMatrix> {
        self.matrices.iter().filter(|m| !m.is_template()).collect()
    }

    /// Filled matrices, most recently accessed first, at most `limit`.
    pub fn recent(&self, limit: usize) -> Vec<&DecisionMatrix> {
        let mut filled = self.filled();
        filled.sort_by(|a, b| b.last_accessed().cmp(&a.last_accessed()));
        filled.truncate(limit);
        filled
    }

    // ───────────────────────────────────────────────────────────────
    // Updates
    // ───────────────────────────────────────────────────────────────

    /// Appends a matrix.
    pub fn with_added(&self, matrix: DecisionMatrix) -> Self {
        tracing::debug!(matrix_id = %matrix.id(), title = matrix.title(), "Adding matrix");
        let mut matrices = self.matrices.clone();
        matrices.push(matrix);
        Self { matrices }
    }

    /// Replaces the matrix with the same id. Unknown ids leave the library unchanged.
    pub fn with_updated(&self, matrix: DecisionMatrix) -> Self {
        let Some(index) = self.position(&matrix.id()) else {
            tracing::debug!(matrix_id = %matrix.id(), "Update ignored, matrix not in library");
            return self.clone();
        };

        let mut matrices = self.matrices.clone();
        matrices[index] = matrix;
        Self { matrices }
    }

    /// Removes a matrix. Unknown ids leave the library unchanged.
    pub fn without(&self, id: &MatrixId) -> Self {
        if !self.contains(id) {
            tracing::debug!(matrix_id = %id, "Delete ignored, matrix not in library");
            return self.clone();
        }

        tracing::debug!(matrix_id = %id, "Removing matrix");
        Self {
            matrices: self
                .matrices
                .iter()
                .filter(|m| m.id() != *id)
                .cloned()
                .collect(),
        }
    }

    /// Applies an edit to one matrix. Unknown ids leave the library unchanged.
    pub fn with_edit(&self, id: &MatrixId, edit: &MatrixEdit) -> Self {
        match self.get(id) {
            Some(matrix) => {
                tracing::debug!(matrix_id = %id, edit = edit.kind(), "Applying edit");
                self.with_updated(matrix.apply(edit))
            }
            None => {
                tracing::debug!(matrix_id = %id, edit = edit.kind(), "Edit ignored, matrix not in library");
                self.clone()
            }
        }
    }

    /// Clones a template into a new filled matrix and appends it.
    ///
    /// Returns the new matrix id, or `None` (with the library unchanged) when
    /// `template_id` is unknown or does not name a template.
    pub fn instantiate_template(
        &self,
        template_id: &MatrixId,
        title: impl Into<String>,
    ) -> (Self, Option<MatrixId>) {
        match self.get(template_id) {
            Some(template) if template.is_template() => {
                let instance = template.clone_as_instance(title);
                let id = instance.id();
                (self.with_added(instance), Some(id))
            }
            _ => {
                tracing::debug!(template_id = %template_id, "No template with this id");
                (self.clone(), None)
            }
        }
    }

    fn position(&self, id: &MatrixId) -> Option<usize> {
        self.matrices.iter().position(|m| m.id() == *id)
    }
}

impl From<Vec<DecisionMatrix>> for MatrixLibrary {
    fn from(matrices: Vec<DecisionMatrix>) -> Self {
        Self::new(matrices)
    }
}
