//! Expert aggregation - one consensus matrix from per-expert judgments.

use crate::domain::foundation::{AnalysisError, PythagoreanFuzzyValue, ShapeMismatchError};

use super::JudgmentMatrix;

/// Combines multiple experts' fuzzy judgment matrices into one consensus
/// matrix. All experts carry equal weight.
pub struct ExpertAggregator;

impl ExpertAggregator {
    /// Aggregates same-shape expert matrices by taking, per cell, the
    /// arithmetic mean of `mu` and the arithmetic mean of `nu`.
    ///
    /// The averaged pair must itself satisfy the Pythagorean condition, so
    /// every output cell is re-validated rather than constructed blindly.
    ///
    /// # Errors
    ///
    /// - `ShapeMismatchError::NoExperts` for an empty input sequence.
    /// - `ShapeMismatchError::ExpertShape` when matrices disagree in shape.
    /// - `ValidationError` if an averaged cell violates the constraint.
    pub fn aggregate(experts: &[JudgmentMatrix]) -> Result<JudgmentMatrix, AnalysisError> {
        let first = experts.first().ok_or(ShapeMismatchError::NoExperts)?;
        let rows = first.row_count();
        let cols = first.column_count();

        for (e, matrix) in experts.iter().enumerate().skip(1) {
            if matrix.row_count() != rows || matrix.column_count() != cols {
                return Err(ShapeMismatchError::expert_shape(
                    e,
                    (rows, cols),
                    (matrix.row_count(), matrix.column_count()),
                )
                .into());
            }
        }

        let count = experts.len() as f64;
        let mut consensus = Vec::with_capacity(rows);
        for i in 0..rows {
            let mut row = Vec::with_capacity(cols);
            for j in 0..cols {
                let mu = experts.iter().map(|m| m.rows()[i][j].mu()).sum::<f64>() / count;
                let nu = experts.iter().map(|m| m.rows()[i][j].nu()).sum::<f64>() / count;
                row.push(PythagoreanFuzzyValue::new(mu, nu)?);
            }
            consensus.push(row);
        }

        Ok(JudgmentMatrix::from_rows(consensus)?)
    }
}
