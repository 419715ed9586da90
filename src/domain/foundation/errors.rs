//! Error types for the domain layer.

use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Component '{component}' must be within [0, 1], got {value}")]
    ComponentOutOfRange { component: &'static str, value: f64 },

    #[error("Pythagorean condition violated: {mu}^2 + {nu}^2 > 1")]
    ConstraintViolated { mu: f64, nu: f64 },

    #[error("Weight at index {index} is negative: {value}")]
    NegativeWeight { index: usize, value: f64 },

    #[error("Weights must sum to 1, got {sum}")]
    WeightSumNotUnit { sum: f64 },
}

impl ValidationError {
    /// Creates an out-of-range component error.
    pub fn component_out_of_range(component: &'static str, value: f64) -> Self {
        ValidationError::ComponentOutOfRange { component, value }
    }

    /// Creates a Pythagorean constraint violation error.
    pub fn constraint_violated(mu: f64, nu: f64) -> Self {
        ValidationError::ConstraintViolated { mu, nu }
    }
}

/// A linguistic label that is not a member of the active vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown label '{label}' in the {vocabulary} vocabulary")]
pub struct UnknownLabelError {
    pub label: String,
    pub vocabulary: &'static str,
}

impl UnknownLabelError {
    /// Creates an unknown label error for the given vocabulary.
    pub fn new(label: impl Into<String>, vocabulary: &'static str) -> Self {
        Self {
            label: label.into(),
            vocabulary,
        }
    }
}

/// Inconsistent or unexpected matrix, vector, or label dimensions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeMismatchError {
    #[error("Expected at least one expert matrix")]
    NoExperts,

    #[error("Matrix must have at least one row and one column")]
    EmptyMatrix,

    #[error("Row {row} has {actual} columns, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Expert {expert} matrix is {actual_rows}x{actual_cols}, expected {expected_rows}x{expected_cols}")]
    ExpertShape {
        expert: usize,
        expected_rows: usize,
        expected_cols: usize,
        actual_rows: usize,
        actual_cols: usize,
    },

    #[error("Pairwise comparison matrix must be square, got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    #[error("Weight vector has {actual} entries, expected {expected}")]
    WeightLength { expected: usize, actual: usize },

    #[error("Got {actual} alternative labels, expected {expected}")]
    LabelCount { expected: usize, actual: usize },

    #[error("Grid for expert {expert} is {actual_rows}x{actual_cols}, expected {expected_rows}x{expected_cols}")]
    GridDimensions {
        expert: usize,
        expected_rows: usize,
        expected_cols: usize,
        actual_rows: usize,
        actual_cols: usize,
    },
}

impl ShapeMismatchError {
    /// Creates a ragged row error.
    pub fn ragged_row(row: usize, expected: usize, actual: usize) -> Self {
        ShapeMismatchError::RaggedRow {
            row,
            expected,
            actual,
        }
    }

    /// Creates an expert shape disagreement error.
    pub fn expert_shape(expert: usize, expected: (usize, usize), actual: (usize, usize)) -> Self {
        ShapeMismatchError::ExpertShape {
            expert,
            expected_rows: expected.0,
            expected_cols: expected.1,
            actual_rows: actual.0,
            actual_cols: actual.1,
        }
    }

    /// Creates a scenario grid dimension error.
    pub fn grid_dimensions(expert: usize, expected: (usize, usize), actual: (usize, usize)) -> Self {
        ShapeMismatchError::GridDimensions {
            expert,
            expected_rows: expected.0,
            expected_cols: expected.1,
            actual_rows: actual.0,
            actual_cols: actual.1,
        }
    }
}

/// Umbrella error for the analysis entry points.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    UnknownLabel(#[from] UnknownLabelError),

    #[error(transparent)]
    ShapeMismatch(#[from] ShapeMismatchError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_out_of_range_displays_correctly() {
        let err = ValidationError::component_out_of_range("mu", 1.2);
        assert_eq!(
            format!("{}", err),
            "Component 'mu' must be within [0, 1], got 1.2"
        );
    }

    #[test]
    fn validation_error_constraint_displays_components() {
        let err = ValidationError::constraint_violated(0.9, 0.9);
        assert_eq!(
            format!("{}", err),
            "Pythagorean condition violated: 0.9^2 + 0.9^2 > 1"
        );
    }

    #[test]
    fn unknown_label_error_displays_vocabulary() {
        let err = UnknownLabelError::new("XX", "importance");
        assert_eq!(
            format!("{}", err),
            "Unknown label 'XX' in the importance vocabulary"
        );
    }

    #[test]
    fn shape_mismatch_ragged_row_displays_correctly() {
        let err = ShapeMismatchError::ragged_row(2, 5, 3);
        assert_eq!(format!("{}", err), "Row 2 has 3 columns, expected 5");
    }

    #[test]
    fn shape_mismatch_expert_shape_displays_both_shapes() {
        let err = ShapeMismatchError::expert_shape(1, (5, 5), (4, 5));
        assert_eq!(format!("{}", err), "Expert 1 matrix is 4x5, expected 5x5");
    }

    #[test]
    fn analysis_error_wraps_all_variants() {
        let v: AnalysisError = ValidationError::constraint_violated(1.0, 1.0).into();
        let u: AnalysisError = UnknownLabelError::new("ZZ", "suitability").into();
        let s: AnalysisError = ShapeMismatchError::NoExperts.into();

        assert!(matches!(v, AnalysisError::Validation(_)));
        assert!(matches!(u, AnalysisError::UnknownLabel(_)));
        assert!(matches!(s, AnalysisError::ShapeMismatch(_)));
    }
}
