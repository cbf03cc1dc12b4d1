//! Score Calculator - Weighted scores and ranking for matrix options.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::matrix::{Criterion, DecisionMatrix};

/// Raw values run 1..=5; inversion maps v to `INVERSION_PIVOT - v`.
///
/// Values and weights are not range-checked, so all arithmetic saturates.
const INVERSION_PIVOT: i32 = 6;

/// An option paired with its weighted score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedOption {
    pub name: String,
    pub score: i32,
}

/// Weighted scoring functions.
pub struct ScoreCalculator;

impl ScoreCalculator {
    /// Computes the weighted score of every option.
    ///
    /// # Algorithm
    /// For each option: score = Σ(effective(value) × weight) over criteria
    /// whose cell is non-zero. Unset cells (0 or absent) are skipped rather
    /// than penalized.
    ///
    /// Scores are not normalized by total weight, so they only compare
    /// options within the same matrix.
    ///
    /// # Edge Cases
    /// - No options: Returns empty HashMap
    /// - No criteria: Returns 0 for every option
    pub fn compute_scores(matrix: &DecisionMatrix) -> HashMap<String, i32> {
        matrix
            .options()
            .iter()
            .map(|option| (option.name.clone(), Self::score_of(matrix, &option.name)))
            .collect()
    }

    /// Computes the weighted score of a single option.
    pub fn score_of(matrix: &DecisionMatrix, option_name: &str) -> i32 {
        matrix
            .criteria()
            .iter()
            .map(|criterion| {
                let value = matrix.value_or_unset(option_name, &criterion.name);
                Self::criterion_contribution(criterion, value)
            })
            .fold(0, i32::saturating_add)
    }

    /// Maps a raw value to its "higher is better" equivalent.
    ///
    /// Unset (0) stays 0 regardless of inversion.
    pub fn effective_value(value: i32, inverted: bool) -> i32 {
        match (value, inverted) {
            (0, _) => 0,
            (v, true) => INVERSION_PIVOT.saturating_sub(v),
            (v, false) => v,
        }
    }

    /// Weighted contribution of one raw value.
    pub fn contribution(value: i32, weight: i32, inverted: bool) -> i32 {
        Self::effective_value(value, inverted).saturating_mul(weight)
    }

    /// Weighted contribution of a raw value under a given criterion.
    pub fn criterion_contribution(criterion: &Criterion, value: i32) -> i32 {
        Self::contribution(value, criterion.weight, criterion.inverted)
    }

    /// Options sorted by score, highest first.
    ///
    /// Ties keep the matrix's column order.
    pub fn ranking(matrix: &DecisionMatrix) -> Vec<RankedOption> {
        let mut ranked: Vec<RankedOption> = matrix
            .options()
            .iter()
            .map(|option| RankedOption {
                name: option.name.clone(),
                score: Self::score_of(matrix, &option.name),
            })
            .collect();

        ranked.sort_by(|a, b| b.score.cmp(&a.score));
        ranked
    }

    /// All options sharing the top score, in column order.
    ///
    /// Ties are not broken: every tied option is a winner.
    pub fn winners(matrix: &DecisionMatrix) -> Vec<String> {
        let ranked = Self::ranking(matrix);
        let Some(best) = ranked.first().map(|r| r.score) else {
            return Vec::new();
        };

        ranked
            .into_iter()
            .take_while(|r| r.score == best)
            .map(|r| r.name)
            .collect()
    }

    /// Returns true if the named option holds the top score.
    pub fn is_winner(matrix: &DecisionMatrix, option_name: &str) -> bool {
        Self::winners(matrix).iter().any(|name| name == option_name)
    }
}
