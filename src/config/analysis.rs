//! Analysis configuration

use serde::Deserialize;

use crate::domain::analysis::{AnalysisSettings, CLOSE_MARGIN_PERCENT, HIGH_WEIGHT_THRESHOLD};
use crate::domain::foundation::ValidationError;

/// Thresholds for winner classification and narrative length
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisConfig {
    /// Margin percentage below which a win is close
    #[serde(default = "default_close_margin_percent")]
    pub close_margin_percent: f64,

    /// Weight at or above which a criterion is high priority
    #[serde(default = "default_high_weight_threshold")]
    pub high_weight_threshold: i32,

    #[serde(default = "default_max_strengths")]
    pub max_strengths: usize,

    #[serde(default = "default_max_weaknesses")]
    pub max_weaknesses: usize,
}

impl AnalysisConfig {
    /// Validate analysis configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.close_margin_percent.is_finite() || self.close_margin_percent < 0.0 {
            return Err(ValidationError::out_of_range(
                "analysis.close_margin_percent",
                0,
                i64::MAX,
                self.close_margin_percent,
            ));
        }
        if !(1..=5).contains(&self.high_weight_threshold) {
            return Err(ValidationError::out_of_range(
                "analysis.high_weight_threshold",
                1,
                5,
                self.high_weight_threshold,
            ));
        }
        if self.max_strengths == 0 {
            return Err(ValidationError::out_of_range("analysis.max_strengths", 1, i64::MAX, 0));
        }
        if self.max_weaknesses == 0 {
            return Err(ValidationError::out_of_range("analysis.max_weaknesses", 1, i64::MAX, 0));
        }
        Ok(())
    }

    pub fn settings(&self) -> AnalysisSettings {
        AnalysisSettings {
            close_margin_percent: self.close_margin_percent,
            high_weight_threshold: self.high_weight_threshold,
            max_strengths: self.max_strengths,
            max_weaknesses: self.max_weaknesses,
        }
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            close_margin_percent: default_close_margin_percent(),
            high_weight_threshold: default_high_weight_threshold(),
            max_strengths: default_max_strengths(),
            max_weaknesses: default_max_weaknesses(),
        }
    }
}

impl From<&AnalysisConfig> for AnalysisSettings {
    fn from(config: &AnalysisConfig) -> Self {
        config.settings()
    }
}

fn default_close_margin_percent() -> f64 {
    CLOSE_MARGIN_PERCENT
}

fn default_high_weight_threshold() -> i32 {
    HIGH_WEIGHT_THRESHOLD
}

fn default_max_strengths() -> usize {
    3
}

fn default_max_weaknesses() -> usize {
    2
}
