//! YAML Matrix Importer
//!
//! Reads a hand-written YAML document into a `DecisionMatrix`:
//!
//! ```yaml
//! title: Car Purchase Decision
//! description: Comparing different car options
//! icon: Car
//! isTemplate: false
//! criteria:
//!   - name: Price
//!     weight: 5
//!     inverted: true
//!   - name: Comfort
//!     weight: 3
//! options:
//!   - Honda Civic
//!   - Toyota Camry
//! ```
//!
//! Templates (`isTemplate: true`) ignore `options`.

use serde::Serialize;
use serde_yaml::{Mapping, Value};
use std::collections::HashSet;

use crate::domain::foundation::{Icon, ValidationError};
use crate::domain::matrix::{DecisionMatrix, NewMatrix};
use crate::ports::{ImportError, MatrixImporter};

const MIN_WEIGHT: i64 = 1;
const MAX_WEIGHT: i64 = 5;

/// YAML implementation of the `MatrixImporter` port.
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlMatrixImporter;

impl YamlMatrixImporter {
    pub fn new() -> Self {
        Self
    }
}

impl MatrixImporter for YamlMatrixImporter {
    fn import(&self, text: &str) -> Result<DecisionMatrix, ImportError> {
        let document: Value =
            serde_yaml::from_str(text).map_err(|e| ImportError::Syntax(e.to_string()))?;
        let root = document.as_mapping().ok_or(ImportError::NotAnObject)?;

        let title = match root.get("title") {
            Some(Value::String(title)) if !title.trim().is_empty() => title.clone(),
            _ => return Err(ImportError::MissingTitle),
        };

        let is_template = optional_bool(root, "isTemplate")?;
        let mut input = NewMatrix::titled(title);

        match root.get("description") {
            None | Some(Value::Null) => {}
            Some(Value::String(description)) => input = input.description(description.clone()),
            Some(_) => {
                return Err(ValidationError::invalid_format("description", "must be a string").into())
            }
        }

        if let Some(name) = root.get("icon").and_then(Value::as_str) {
            input = input.icon(Icon::resolve(name));
        }

        let criteria = match root.get("criteria") {
            Some(Value::Sequence(items)) if !items.is_empty() => items,
            _ => return Err(ImportError::MissingCriteria),
        };
        let mut seen = HashSet::new();
        for (index, item) in criteria.iter().enumerate() {
            let entry = item
                .as_mapping()
                .ok_or(ImportError::InvalidCriterionName { index })?;

            let name = match entry.get("name") {
                Some(Value::String(name)) if !name.trim().is_empty() => name.clone(),
                _ => return Err(ImportError::InvalidCriterionName { index }),
            };
            let weight = entry
                .get("weight")
                .and_then(whole_number)
                .filter(|w| (MIN_WEIGHT..=MAX_WEIGHT).contains(w))
                .ok_or(ImportError::InvalidCriterionWeight { index })?;
            let inverted = optional_bool(entry, "inverted")
                .map_err(|_| ValidationError::invalid_format(
                    format!("criteria[{}].inverted", index),
                    "must be a boolean",
                ))?;

            if !seen.insert(name.clone()) {
                return Err(ImportError::DuplicateCriterion { name });
            }
            // Range checked above, the cast cannot truncate.
            input = input.criterion(name, weight as i32, inverted);
        }

        if is_template {
            input = input.template();
        } else {
            let options = match root.get("options") {
                Some(Value::Sequence(items)) if !items.is_empty() => items,
                _ => return Err(ImportError::MissingOptions),
            };
            let mut seen = HashSet::new();
            for (index, item) in options.iter().enumerate() {
                let name = option_name(item).ok_or(ImportError::InvalidOptionName { index })?;
                if !seen.insert(name.clone()) {
                    return Err(ImportError::DuplicateOption { name });
                }
                input = input.option(name);
            }
        }

        let matrix = input.build();
        tracing::debug!(
            matrix_id = %matrix.id(),
            criteria = matrix.criteria().len(),
            options = matrix.options().len(),
            is_template,
            "Imported matrix from YAML"
        );
        Ok(matrix)
    }
}

fn optional_bool(map: &Mapping, key: &str) -> Result<bool, ImportError> {
    match map.get(key) {
        None | Some(Value::Null) => Ok(false),
        Some(Value::Bool(flag)) => Ok(*flag),
        Some(_) => Err(ValidationError::invalid_format(key, "must be a boolean").into()),
    }
}

/// Integer value of a YAML number; fractional numbers are rejected.
fn whole_number(value: &Value) -> Option<i64> {
    if let Some(n) = value.as_i64() {
        return Some(n);
    }
    value
        .as_f64()
        .filter(|f| f.fract() == 0.0 && f.abs() <= i64::MAX as f64)
        .map(|f| f as i64)
}

/// Option names may be written as plain strings or bare numbers (`- 2024`).
fn option_name(value: &Value) -> Option<String> {
    let name = match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        _ => return None,
    };
    (!name.trim().is_empty()).then_some(name)
}

// ───────────────────────────────────────────────────────────────
// Example documents
// ───────────────────────────────────────────────────────────────

/// Sample documents offered on the import screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExampleKind {
    /// Filled car purchase comparison.
    #[default]
    Car,
    /// Job offer template without options.
    Job,
}

impl ExampleKind {
    /// Looks up an example by name. Unknown names give the car example.
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "job" => ExampleKind::Job,
            _ => ExampleKind::Car,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ExampleDocument {
    title: &'static str,
    description: &'static str,
    icon: Icon,
    is_template: bool,
    criteria: Vec<ExampleCriterion>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    options: Vec<&'static str>,
}

#[derive(Serialize)]
struct ExampleCriterion {
    name: &'static str,
    weight: i32,
    inverted: bool,
}

fn example_criterion(name: &'static str, weight: i32, inverted: bool) -> ExampleCriterion {
    ExampleCriterion {
        name,
        weight,
        inverted,
    }
}

/// Renders a sample YAML document that imports cleanly.
pub fn example_document(kind: ExampleKind) -> String {
    let document = match kind {
        ExampleKind::Car => ExampleDocument {
            title: "Car Purchase Decision",
            description: "Comparing different car options",
            icon: Icon::Car,
            is_template: false,
            criteria: vec![
                example_criterion("Price", 5, true),
                example_criterion("Reliability", 5, false),
                example_criterion("Fuel Efficiency", 4, false),
                example_criterion("Comfort", 3, false),
            ],
            options: vec!["Honda Civic", "Toyota Camry", "BMW 3 Series"],
        },
        ExampleKind::Job => ExampleDocument {
            title: "Job Opportunities Template",
            description: "Template for evaluating job offers",
            icon: Icon::Briefcase,
            is_template: true,
            criteria: vec![
                example_criterion("Salary", 4, false),
                example_criterion("Work-Life Balance", 5, false),
                example_criterion("Growth Potential", 4, false),
                example_criterion("Commute Time", 3, true),
                example_criterion("Stress Level", 5, true),
            ],
            options: Vec::new(),
        },
    };

    // Plain strings, numbers and unit enum variants always serialize.
    serde_yaml::to_string(&document).unwrap_or_default()
}
