//! Winner Analyzer - Explains why the top-scoring option beat the runner-up.
//!
//! The analyzer compares the top two options criterion by criterion, splits
//! the criteria into strengths and weaknesses of the winner, classifies the
//! contest into a [`WinType`] and renders a short narrative for it.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::matrix::DecisionMatrix;

use super::narrative;
use super::ScoreCalculator;

/// Margin percentage below which a non-dominant win counts as close.
pub const CLOSE_MARGIN_PERCENT: f64 = 10.0;

/// Criteria at or above this weight count as high priority.
pub const HIGH_WEIGHT_THRESHOLD: i32 = 4;

/// How a contest between winner and runner-up played out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WinType {
    /// Winner is ahead or level on every criterion.
    Dominant,
    /// Winner leads on more high-weight criteria than the runner-up.
    Strategic,
    /// Margin under the close threshold.
    Close,
    /// Runner-up leads on more high-weight criteria, yet loses.
    Upset,
    /// No clear pattern in high-weight criteria.
    Balanced,
}

impl WinType {
    pub fn label(&self) -> &'static str {
        match self {
            WinType::Dominant => "dominant",
            WinType::Strategic => "strategic",
            WinType::Close => "close",
            WinType::Upset => "upset",
            WinType::Balanced => "balanced",
        }
    }
}

impl fmt::Display for WinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Tunable thresholds for classification and narrative length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSettings {
    pub close_margin_percent: f64,
    pub high_weight_threshold: i32,
    /// Maximum strengths cited in the narrative.
    pub max_strengths: usize,
    /// Maximum weaknesses cited in the narrative.
    pub max_weaknesses: usize,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            close_margin_percent: CLOSE_MARGIN_PERCENT,
            high_weight_threshold: HIGH_WEIGHT_THRESHOLD,
            max_strengths: 3,
            max_weaknesses: 2,
        }
    }
}

/// Head-to-head comparison of winner and runner-up on one criterion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriterionBreakdown {
    pub name: String,
    pub weight: i32,
    pub is_inverted: bool,
    pub winner_value: i32,
    pub runner_up_value: i32,
    pub winner_contribution: i32,
    pub runner_up_contribution: i32,
    /// `winner_contribution - runner_up_contribution`.
    pub advantage: i32,
    /// Winner holds the best raw value for this criterion across all options.
    pub is_winner_best: bool,
}

/// Result of analyzing why the winner won.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WinnerAnalysis {
    pub winner: String,
    pub runner_up: String,
    pub winner_score: i32,
    pub runner_up_score: i32,
    pub margin: i32,
    /// Margin relative to the runner-up score, in percent.
    pub margin_percentage: f64,
    pub criteria: Vec<CriterionBreakdown>,
    /// Criteria where the winner is ahead.
    pub strong: Vec<CriterionBreakdown>,
    /// Criteria where the runner-up is ahead.
    pub weak: Vec<CriterionBreakdown>,
    pub win_type: WinType,
    pub explanation: String,
}

/// Winner analysis functions.
pub struct WinnerAnalyzer;

impl WinnerAnalyzer {
    /// Analyzes the matrix with default settings.
    pub fn analyze(matrix: &DecisionMatrix) -> Option<WinnerAnalysis> {
        Self::analyze_with(matrix, &AnalysisSettings::default())
    }

    /// Analyzes the matrix.
    ///
    /// # Edge Cases
    /// - Fewer than two options: Returns None
    /// - Fewer than two options with a positive score (including all zero): Returns None
    /// - Tied top scores: the first option in column order is the winner
    pub fn analyze_with(
        matrix: &DecisionMatrix,
        settings: &AnalysisSettings,
    ) -> Option<WinnerAnalysis> {
        if matrix.options().len() < 2 {
            return None;
        }

        let ranking = ScoreCalculator::ranking(matrix);
        if ranking.iter().filter(|r| r.score > 0).count() < 2 {
            return None;
        }

        let winner = &ranking[0];
        let runner_up = &ranking[1];
        let margin = winner.score.saturating_sub(runner_up.score);
        let margin_percentage = if runner_up.score > 0 {
            f64::from(margin) / f64::from(runner_up.score) * 100.0
        } else {
            0.0
        };

        let criteria = Self::breakdown(matrix, &winner.name, &runner_up.name);
        let strong: Vec<_> = criteria.iter().filter(|c| c.advantage > 0).cloned().collect();
        let weak: Vec<_> = criteria.iter().filter(|c| c.advantage < 0).cloned().collect();
        let win_type = Self::classify(&strong, &weak, margin_percentage, settings);

        let mut analysis = WinnerAnalysis {
            winner: winner.name.clone(),
            runner_up: runner_up.name.clone(),
            winner_score: winner.score,
            runner_up_score: runner_up.score,
            margin,
            margin_percentage,
            criteria,
            strong,
            weak,
            win_type,
            explanation: String::new(),
        };
        analysis.explanation = narrative::explain(&analysis, settings);

        Some(analysis)
    }

    /// Compares winner and runner-up on every criterion, in row order.
    fn breakdown(matrix: &DecisionMatrix, winner: &str, runner_up: &str) -> Vec<CriterionBreakdown> {
        matrix
            .criteria()
            .iter()
            .map(|criterion| {
                let winner_value = matrix.value_or_unset(winner, &criterion.name);
                let runner_up_value = matrix.value_or_unset(runner_up, &criterion.name);
                let winner_contribution =
                    ScoreCalculator::criterion_contribution(criterion, winner_value);
                let runner_up_contribution =
                    ScoreCalculator::criterion_contribution(criterion, runner_up_value);

                let best = Self::best_raw_value(matrix, &criterion.name, criterion.inverted);

                CriterionBreakdown {
                    name: criterion.name.clone(),
                    weight: criterion.weight,
                    is_inverted: criterion.inverted,
                    winner_value,
                    runner_up_value,
                    winner_contribution,
                    runner_up_contribution,
                    advantage: winner_contribution.saturating_sub(runner_up_contribution),
                    is_winner_best: best > 0 && winner_value == best,
                }
            })
            .collect()
    }

    /// Best raw value for a criterion across all options.
    ///
    /// Inverted criteria take the smallest positive value; others the largest.
    /// Returns 0 when nothing was scored.
    fn best_raw_value(matrix: &DecisionMatrix, criterion_name: &str, inverted: bool) -> i32 {
        let values = matrix
            .options()
            .iter()
            .map(|option| matrix.value_or_unset(&option.name, criterion_name));

        if inverted {
            values.filter(|&v| v > 0).min().unwrap_or(0)
        } else {
            values.max().unwrap_or(0)
        }
    }

    /// Picks the win type, first match wins:
    /// dominant, close, then high-weight strengths vs weaknesses.
    fn classify(
        strong: &[CriterionBreakdown],
        weak: &[CriterionBreakdown],
        margin_percentage: f64,
        settings: &AnalysisSettings,
    ) -> WinType {
        if weak.is_empty() && !strong.is_empty() {
            return WinType::Dominant;
        }
        if margin_percentage < settings.close_margin_percent {
            return WinType::Close;
        }

        let high = |c: &&CriterionBreakdown| c.weight >= settings.high_weight_threshold;
        let high_strong = strong.iter().filter(high).count();
        let high_weak = weak.iter().filter(high).count();

        match high_strong.cmp(&high_weak) {
            std::cmp::Ordering::Greater => WinType::Strategic,
            std::cmp::Ordering::Less => WinType::Upset,
            std::cmp::Ordering::Equal => WinType::Balanced,
        }
    }
}
