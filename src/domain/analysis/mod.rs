//! Analysis Module - Pure domain services for scoring and explaining matrices.
//!
//! # Components
//!
//! - `ScoreCalculator` - Weighted scores, ranking and winners
//! - `WinnerAnalyzer` - Winner vs runner-up breakdown, win type and narrative
//!
//! # Design Philosophy
//!
//! All functions are pure and stateless. They take a `DecisionMatrix` and
//! return computed results; no ports or adapters are involved.

mod narrative;
mod score_calculator;
mod winner_analyzer;

pub use score_calculator::{RankedOption, ScoreCalculator};
pub use winner_analyzer::{
    AnalysisSettings, CriterionBreakdown, WinType, WinnerAnalysis, WinnerAnalyzer,
    CLOSE_MARGIN_PERCENT, HIGH_WEIGHT_THRESHOLD,
};
