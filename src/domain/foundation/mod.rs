//! Foundation module - Shared domain primitives.
//!
//! Contains the fuzzy value object, the linguistic vocabularies with their
//! fixed scale tables, and the error types that form the vocabulary of the
//! pf-mcdm domain.

mod errors;
mod fuzzy_value;
mod linguistic;

pub use errors::{AnalysisError, ShapeMismatchError, UnknownLabelError, ValidationError};
pub use fuzzy_value::{PythagoreanFuzzyValue, CONSTRAINT_EPSILON};
pub use linguistic::{ImportanceLabel, SuitabilityLabel, Vocabulary};
