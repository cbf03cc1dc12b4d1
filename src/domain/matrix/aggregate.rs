//! DecisionMatrix aggregate - options scored against weighted criteria.
//!
//! Cells are keyed by display name (`data[option][criterion]`), so renames and
//! deletes rewrite the cell map alongside the row/column lists.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::foundation::{CriterionId, Icon, MatrixId, OptionId, Timestamp};

/// Sparse cell storage: option name -> criterion name -> raw value.
pub type CellGrid = BTreeMap<String, BTreeMap<String, i32>>;

/// A weighted evaluation factor (matrix row).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Criterion {
    pub id: CriterionId,
    pub name: String,
    /// Importance on a 1-5 scale.
    pub weight: i32,
    /// When true, lower raw values are better (e.g. price).
    pub inverted: bool,
}

/// A choice being compared (matrix column).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatrixOption {
    pub id: OptionId,
    pub name: String,
}

/// Input for a new criterion; the id is generated on insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCriterion {
    pub name: String,
    pub weight: i32,
    pub inverted: bool,
}

impl NewCriterion {
    pub fn new(name: impl Into<String>, weight: i32, inverted: bool) -> Self {
        Self {
            name: name.into(),
            weight,
            inverted,
        }
    }
}

/// Input for a new option; the id is generated on insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOption {
    pub name: String,
}

impl NewOption {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Everything needed to create a matrix from scratch.
///
/// Consuming setters allow fluent construction:
///
/// ```
/// use decision_matrix::domain::matrix::NewMatrix;
///
/// let matrix = NewMatrix::titled("Laptop")
///     .criterion("Price", 5, true)
///     .criterion("Battery", 3, false)
///     .option("Model A")
///     .option("Model B")
///     .build();
/// assert_eq!(matrix.options().len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewMatrix {
    pub title: String,
    pub description: Option<String>,
    pub icon: Icon,
    pub criteria: Vec<NewCriterion>,
    pub options: Vec<NewOption>,
    pub is_template: bool,
}

impl NewMatrix {
    /// Starts a new matrix with the given title.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn icon(mut self, icon: Icon) -> Self {
        self.icon = icon;
        self
    }

    pub fn criterion(mut self, name: impl Into<String>, weight: i32, inverted: bool) -> Self {
        self.criteria.push(NewCriterion::new(name, weight, inverted));
        self
    }

    pub fn option(mut self, name: impl Into<String>) -> Self {
        self.options.push(NewOption::new(name));
        self
    }

    /// Marks the matrix as a reusable template.
    pub fn template(mut self) -> Self {
        self.is_template = true;
        self
    }

    /// Creates the matrix. See [`DecisionMatrix::create`].
    pub fn build(self) -> DecisionMatrix {
        DecisionMatrix::create(self)
    }
}

/// The decision matrix aggregate.
///
/// Immutable from the caller's point of view: every edit returns a new value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionMatrix {
    pub(super) id: MatrixId,
    pub(super) title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(super) description: Option<String>,
    #[serde(default)]
    pub(super) icon: Icon,
    pub(super) criteria: Vec<Criterion>,
    pub(super) options: Vec<MatrixOption>,
    #[serde(default)]
    pub(super) data: CellGrid,
    #[serde(default)]
    pub(super) is_template: bool,
    pub(super) created_at: Timestamp,
    pub(super) last_accessed: Timestamp,
}

impl DecisionMatrix {
    /// Creates a matrix with fresh ids and a dense grid of zero cells.
    pub fn create(input: NewMatrix) -> Self {
        let now = Timestamp::now();

        let criteria: Vec<Criterion> = input
            .criteria
            .into_iter()
            .map(|c| Criterion {
                id: CriterionId::new(),
                name: c.name,
                weight: c.weight,
                inverted: c.inverted,
            })
            .collect();

        let options: Vec<MatrixOption> = input
            .options
            .into_iter()
            .map(|o| MatrixOption {
                id: OptionId::new(),
                name: o.name,
            })
            .collect();

        let data = zero_grid(&options, &criteria);

        Self {
            id: MatrixId::new(),
            title: input.title,
            description: input.description,
            icon: input.icon,
            criteria,
            options,
            data,
            is_template: input.is_template,
            created_at: now,
            last_accessed: now,
        }
    }

    /// Reconstitutes a matrix from stored parts without generating anything.
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: MatrixId,
        title: impl Into<String>,
        description: Option<String>,
        icon: Icon,
        criteria: Vec<Criterion>,
        options: Vec<MatrixOption>,
        data: CellGrid,
        is_template: bool,
        created_at: Timestamp,
        last_accessed: Timestamp,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description,
            icon,
            criteria,
            options,
            data,
            is_template,
            created_at,
            last_accessed,
        }
    }

    // ───────────────────────────────────────────────────────────────
    // Accessors
    // ───────────────────────────────────────────────────────────────

    pub fn id(&self) -> MatrixId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn icon(&self) -> Icon {
        self.icon
    }

    /// Criteria in display order.
    pub fn criteria(&self) -> &[Criterion] {
        &self.criteria
    }

    /// Options in display order.
    pub fn options(&self) -> &[MatrixOption] {
        &self.options
    }

    /// Raw cell storage.
    pub fn data(&self) -> &CellGrid {
        &self.data
    }

    pub fn is_template(&self) -> bool {
        self.is_template
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    pub fn last_accessed(&self) -> Timestamp {
        self.last_accessed
    }

    /// Returns the stored value for a cell, if one was ever written.
    pub fn value(&self, option_name: &str, criterion_name: &str) -> Option<i32> {
        self.data
            .get(option_name)
            .and_then(|row| row.get(criterion_name))
            .copied()
    }

    /// Returns the cell value, treating absent cells as unset (0).
    pub fn value_or_unset(&self, option_name: &str, criterion_name: &str) -> i32 {
        self.value(option_name, criterion_name).unwrap_or(0)
    }

    pub fn criterion(&self, id: CriterionId) -> Option<&Criterion> {
        self.criteria.iter().find(|c| c.id == id)
    }

    pub fn option(&self, id: OptionId) -> Option<&MatrixOption> {
        self.options.iter().find(|o| o.id == id)
    }

    pub fn criterion_by_name(&self, name: &str) -> Option<&Criterion> {
        self.criteria.iter().find(|c| c.name == name)
    }

    pub fn option_by_name(&self, name: &str) -> Option<&MatrixOption> {
        self.options.iter().find(|o| o.name == name)
    }
}

/// Builds a grid with a zero cell for every option/criterion pair.
pub(super) fn zero_grid(options: &[MatrixOption], criteria: &[Criterion]) -> CellGrid {
    options
        .iter()
        .map(|option| {
            let row = criteria.iter().map(|c| (c.name.clone(), 0)).collect();
            (option.name.clone(), row)
        })
        .collect()
}
