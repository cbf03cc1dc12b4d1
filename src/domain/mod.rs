//! Domain layer containing the decision matrix model and its analysis.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (ids, timestamps, icons, validation errors)
//! - `matrix` - The `DecisionMatrix` aggregate, edits and starter content
//! - `analysis` - Pure scoring and winner explanation
//! - `library` - The user's collection of matrices

pub mod analysis;
pub mod foundation;
pub mod library;
pub mod matrix;
