//! Judgment matrix - rectangular grid of Pythagorean fuzzy values.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{PythagoreanFuzzyValue, ShapeMismatchError};

/// A rectangular grid of fuzzy judgments, indexed by zero-based row and
/// column. Square matrices compare criteria pairwise; rectangular matrices
/// rate alternatives (rows) against criteria (columns).
///
/// Construction enforces at least one row, at least one column, and
/// consistent row lengths, so downstream services can index freely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawMatrix")]
pub struct JudgmentMatrix {
    rows: Vec<Vec<PythagoreanFuzzyValue>>,
}

#[derive(Deserialize)]
struct RawMatrix {
    rows: Vec<Vec<PythagoreanFuzzyValue>>,
}

impl TryFrom<RawMatrix> for JudgmentMatrix {
    type Error = ShapeMismatchError;

    fn try_from(raw: RawMatrix) -> Result<Self, Self::Error> {
        JudgmentMatrix::from_rows(raw.rows)
    }
}

impl JudgmentMatrix {
    /// Creates a matrix from rows, validating the shape.
    pub fn from_rows(rows: Vec<Vec<PythagoreanFuzzyValue>>) -> Result<Self, ShapeMismatchError> {
        let width = match rows.first() {
            Some(first) if !first.is_empty() => first.len(),
            _ => return Err(ShapeMismatchError::EmptyMatrix),
        };
        for (i, row) in rows.iter().enumerate().skip(1) {
            if row.len() != width {
                return Err(ShapeMismatchError::ragged_row(i, width, row.len()));
            }
        }
        Ok(Self { rows })
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.rows[0].len()
    }

    /// True if the matrix has as many rows as columns.
    pub fn is_square(&self) -> bool {
        self.row_count() == self.column_count()
    }

    /// Returns the value at `(row, col)`, or `None` if out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<PythagoreanFuzzyValue> {
        self.rows.get(row).and_then(|r| r.get(col)).copied()
    }

    /// The validated rows.
    pub fn rows(&self) -> &[Vec<PythagoreanFuzzyValue>] {
        &self.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pfs(mu: f64, nu: f64) -> PythagoreanFuzzyValue {
        PythagoreanFuzzyValue::new(mu, nu).unwrap()
    }

    #[test]
    fn from_rows_accepts_rectangular_input() {
        let matrix = JudgmentMatrix::from_rows(vec![
            vec![pfs(0.7, 0.7), pfs(0.3, 0.8), pfs(0.5, 0.7)],
            vec![pfs(0.9, 0.3), pfs(0.7, 0.5), pfs(0.1, 0.9)],
        ])
        .unwrap();

        assert_eq!(matrix.row_count(), 2);
        assert_eq!(matrix.column_count(), 3);
        assert!(!matrix.is_square());
    }

    #[test]
    fn from_rows_rejects_empty_input() {
        assert_eq!(
            JudgmentMatrix::from_rows(vec![]),
            Err(ShapeMismatchError::EmptyMatrix)
        );
        assert_eq!(
            JudgmentMatrix::from_rows(vec![vec![]]),
            Err(ShapeMismatchError::EmptyMatrix)
        );
    }

    #[test]
    fn from_rows_rejects_ragged_rows() {
        let result = JudgmentMatrix::from_rows(vec![
            vec![pfs(0.7, 0.7), pfs(0.3, 0.8)],
            vec![pfs(0.9, 0.3)],
        ]);
        assert_eq!(result, Err(ShapeMismatchError::ragged_row(1, 2, 1)));
    }

    #[test]
    fn get_returns_cell_or_none() {
        let matrix =
            JudgmentMatrix::from_rows(vec![vec![pfs(0.7, 0.7)], vec![pfs(0.9, 0.3)]]).unwrap();

        assert_eq!(matrix.get(1, 0).unwrap().mu(), 0.9);
        assert!(matrix.get(2, 0).is_none());
        assert!(matrix.get(0, 1).is_none());
    }

    #[test]
    fn square_matrix_is_detected() {
        let matrix = JudgmentMatrix::from_rows(vec![
            vec![pfs(0.7, 0.7), pfs(0.3, 0.8)],
            vec![pfs(0.9, 0.3), pfs(0.7, 0.7)],
        ])
        .unwrap();
        assert!(matrix.is_square());
    }

    #[test]
    fn deserialization_revalidates_shape() {
        let json = r#"{"rows":[[{"mu":0.7,"nu":0.7}],[{"mu":0.9,"nu":0.3},{"mu":0.5,"nu":0.7}]]}"#;
        let result: Result<JudgmentMatrix, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn serde_round_trips() {
        let matrix = JudgmentMatrix::from_rows(vec![vec![pfs(0.5, 0.7), pfs(0.9, 0.3)]]).unwrap();
        let json = serde_json::to_string(&matrix).unwrap();
        let back: JudgmentMatrix = serde_json::from_str(&json).unwrap();
        assert_eq!(back, matrix);
    }
}
