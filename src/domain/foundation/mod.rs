//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers and error types that form the
//! vocabulary of the decision matrix domain.

mod errors;
mod icon;
mod ids;
mod timestamp;

pub use errors::ValidationError;
pub use icon::Icon;
pub use ids::{CriterionId, MatrixId, OptionId};
pub use timestamp::Timestamp;
