//! FTOPSIS ranking - closeness coefficients against ideal solutions.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ShapeMismatchError;

use super::{JudgmentMatrix, WeightVector};

/// One alternative's ranking result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingRow {
    /// Alternative identity label.
    pub alternative: String,
    /// Euclidean distance to the positive ideal.
    pub d_plus: f64,
    /// Euclidean distance to the negative ideal.
    pub d_minus: f64,
    /// Closeness coefficient `d_minus / (d_plus + d_minus)`; higher is better.
    pub closeness: f64,
}

/// Ranks alternatives against weighted criteria by similarity to the ideal
/// solution. All criteria are treated as benefit-type: a higher score is
/// always better, with no cost-criteria inversion.
pub struct FtopsisRanker;

impl FtopsisRanker {
    /// Computes the ranked closeness-coefficient table.
    ///
    /// # Algorithm
    ///
    /// 1. Scalar scores `S[i][j] = matrix[i][j].score()`.
    /// 2. Vector-normalize each column; a zero column norm is replaced by 1
    ///    so the column becomes all zeros instead of dividing by zero.
    /// 3. Weight each column.
    /// 4. Positive/negative ideals are the per-column max/min.
    /// 5. Euclidean distances to both ideals, then
    ///    `CC = D- / (D+ + D-)`, or 0 when both distances are 0.
    ///
    /// The output is sorted by closeness descending; ties keep the original
    /// alternative order.
    ///
    /// # Errors
    ///
    /// `ShapeMismatchError` when the weight count does not match the column
    /// count or the label count does not match the row count.
    pub fn rank(
        consensus: &JudgmentMatrix,
        weights: &WeightVector,
        alternatives: &[String],
    ) -> Result<Vec<RankingRow>, ShapeMismatchError> {
        let m = consensus.row_count();
        let n = consensus.column_count();

        if weights.len() != n {
            return Err(ShapeMismatchError::WeightLength {
                expected: n,
                actual: weights.len(),
            });
        }
        if alternatives.len() != m {
            return Err(ShapeMismatchError::LabelCount {
                expected: m,
                actual: alternatives.len(),
            });
        }

        let scores: Vec<Vec<f64>> = consensus
            .rows()
            .iter()
            .map(|row| row.iter().map(|value| value.score()).collect())
            .collect();

        let w = weights.as_slice();
        let mut weighted = vec![vec![0.0; n]; m];
        for j in 0..n {
            let mut denom = (0..m).map(|i| scores[i][j] * scores[i][j]).sum::<f64>().sqrt();
            if denom == 0.0 {
                denom = 1.0;
            }
            for i in 0..m {
                weighted[i][j] = scores[i][j] / denom * w[j];
            }
        }

        let mut positive_ideal = vec![f64::NEG_INFINITY; n];
        let mut negative_ideal = vec![f64::INFINITY; n];
        for j in 0..n {
            for row in &weighted {
                positive_ideal[j] = positive_ideal[j].max(row[j]);
                negative_ideal[j] = negative_ideal[j].min(row[j]);
            }
        }

        let mut table: Vec<RankingRow> = weighted
            .iter()
            .zip(alternatives)
            .map(|(row, label)| {
                let d_plus = row
                    .iter()
                    .zip(&positive_ideal)
                    .map(|(v, ideal)| (v - ideal) * (v - ideal))
                    .sum::<f64>()
                    .sqrt();
                let d_minus = row
                    .iter()
                    .zip(&negative_ideal)
                    .map(|(v, ideal)| (v - ideal) * (v - ideal))
                    .sum::<f64>()
                    .sqrt();
                let denom = d_plus + d_minus;
                let closeness = if denom == 0.0 { 0.0 } else { d_minus / denom };
                RankingRow {
                    alternative: label.clone(),
                    d_plus,
                    d_minus,
                    closeness,
                }
            })
            .collect();

        // Stable sort: equal coefficients keep their input order.
        table.sort_by(|a, b| b.closeness.total_cmp(&a.closeness));
        Ok(table)
    }
}
