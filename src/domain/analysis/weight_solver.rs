//! FAHP weight derivation from a consensus pairwise-comparison matrix.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ShapeMismatchError, ValidationError};

use super::JudgmentMatrix;

/// Tolerance for the sum-to-one check on restored weight vectors.
const SUM_EPSILON: f64 = 1e-9;

/// Normalized criterion weights: non-negative, ordered, summing to 1.
///
/// Produced once per FAHP run and never mutated afterward. Deserialization
/// revalidates, so a corrupted persisted scenario cannot restore an
/// unnormalized vector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>")]
pub struct WeightVector(Vec<f64>);

impl TryFrom<Vec<f64>> for WeightVector {
    type Error = ValidationError;

    fn try_from(values: Vec<f64>) -> Result<Self, Self::Error> {
        WeightVector::try_new(values)
    }
}

impl WeightVector {
    /// Creates a weight vector, validating non-negativity and unit sum.
    pub fn try_new(values: Vec<f64>) -> Result<Self, ValidationError> {
        for (index, &value) in values.iter().enumerate() {
            if value < 0.0 {
                return Err(ValidationError::NegativeWeight { index, value });
            }
        }
        let sum: f64 = values.iter().sum();
        if (sum - 1.0).abs() > SUM_EPSILON {
            return Err(ValidationError::WeightSumNotUnit { sum });
        }
        Ok(Self(values))
    }

    /// The uniform vector `1/len` for every entry. `len` must be at least 1.
    pub fn uniform(len: usize) -> Self {
        Self(vec![1.0 / len as f64; len])
    }

    /// Number of criteria.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if the vector holds no weights.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The weights as a slice.
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Iterates over the weights.
    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.0.iter()
    }
}

/// Derives criterion weights from a consensus pairwise-comparison matrix
/// using the geometric-mean (row product) method.
pub struct FahpWeightSolver;

impl FahpWeightSolver {
    /// Computes the normalized weight vector for a square consensus matrix.
    ///
    /// # Algorithm
    ///
    /// 1. For each row, the geometric mean of the `mu` components:
    ///    `g_i = (prod_j mu[i][j])^(1/n)`. The non-membership component does
    ///    not enter the derivation.
    /// 2. Normalize: `w_i = g_i / sum(g)`.
    ///
    /// # Edge Cases
    ///
    /// - All row products zero: returns the uniform vector `1/n` instead of
    ///   dividing by zero.
    ///
    /// # Errors
    ///
    /// `ShapeMismatchError::NotSquare` if the matrix is not square.
    pub fn derive_weights(consensus: &JudgmentMatrix) -> Result<WeightVector, ShapeMismatchError> {
        if !consensus.is_square() {
            return Err(ShapeMismatchError::NotSquare {
                rows: consensus.row_count(),
                cols: consensus.column_count(),
            });
        }

        let n = consensus.row_count();
        let exponent = 1.0 / n as f64;
        let geometric_means: Vec<f64> = consensus
            .rows()
            .iter()
            .map(|row| {
                let product: f64 = row.iter().map(|value| value.mu()).product();
                product.powf(exponent)
            })
            .collect();

        let total: f64 = geometric_means.iter().sum();
        if total == 0.0 {
            return Ok(WeightVector::uniform(n));
        }

        Ok(WeightVector(
            geometric_means.into_iter().map(|g| g / total).collect(),
        ))
    }
}
