//! Expert agreement analysis over raw, pre-aggregation judgments.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ShapeMismatchError;

use super::JudgmentMatrix;

/// Qualitative agreement bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgreementLevel {
    High,
    Medium,
    Low,
}

impl AgreementLevel {
    /// Buckets an average variance: `< 0.1` High, `< 0.2` Medium, else Low.
    pub fn from_variance(avg_variance: f64) -> Self {
        if avg_variance < 0.1 {
            AgreementLevel::High
        } else if avg_variance < 0.2 {
            AgreementLevel::Medium
        } else {
            AgreementLevel::Low
        }
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            AgreementLevel::High => "High",
            AgreementLevel::Medium => "Medium",
            AgreementLevel::Low => "Low",
        }
    }
}

impl fmt::Display for AgreementLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Dispersion summary across experts' raw judgments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgreementReport {
    /// Per-cell component variance, averaged over all cells.
    pub avg_variance: f64,
    /// `1 - min(avg_variance, 1)`, clamped to [0, 1].
    pub agreement_score: f64,
    pub level: AgreementLevel,
}

impl AgreementReport {
    /// The maximal-agreement default used for empty input.
    fn maximal() -> Self {
        Self {
            avg_variance: 0.0,
            agreement_score: 1.0,
            level: AgreementLevel::High,
        }
    }
}

/// Measures dispersion across experts' raw judgment matrices, before any
/// aggregation. Reporting only; the result never feeds back into ranking.
pub struct AgreementAnalyzer;

impl AgreementAnalyzer {
    /// Computes the agreement report for same-shape expert matrices.
    ///
    /// For each cell position the population variance of `mu` and of `nu`
    /// across experts are summed, then averaged over all cells.
    ///
    /// # Edge Cases
    ///
    /// - Empty expert list: returns the maximal-agreement default rather
    ///   than failing.
    /// - A single expert always reports zero variance.
    ///
    /// # Errors
    ///
    /// `ShapeMismatchError::ExpertShape` when matrices disagree in shape.
    pub fn analyze(experts: &[JudgmentMatrix]) -> Result<AgreementReport, ShapeMismatchError> {
        let Some(first) = experts.first() else {
            return Ok(AgreementReport::maximal());
        };
        let rows = first.row_count();
        let cols = first.column_count();

        for (e, matrix) in experts.iter().enumerate().skip(1) {
            if matrix.row_count() != rows || matrix.column_count() != cols {
                return Err(ShapeMismatchError::expert_shape(
                    e,
                    (rows, cols),
                    (matrix.row_count(), matrix.column_count()),
                ));
            }
        }

        let count = experts.len() as f64;
        let mut total_variance = 0.0;
        for i in 0..rows {
            for j in 0..cols {
                let mean_mu =
                    experts.iter().map(|m| m.rows()[i][j].mu()).sum::<f64>() / count;
                let mean_nu =
                    experts.iter().map(|m| m.rows()[i][j].nu()).sum::<f64>() / count;
                let var_mu = experts
                    .iter()
                    .map(|m| {
                        let d = m.rows()[i][j].mu() - mean_mu;
                        d * d
                    })
                    .sum::<f64>()
                    / count;
                let var_nu = experts
                    .iter()
                    .map(|m| {
                        let d = m.rows()[i][j].nu() - mean_nu;
                        d * d
                    })
                    .sum::<f64>()
                    / count;
                total_variance += var_mu + var_nu;
            }
        }

        let avg_variance = total_variance / (rows * cols) as f64;
        Ok(AgreementReport {
            avg_variance,
            agreement_score: 1.0 - avg_variance.min(1.0),
            level: AgreementLevel::from_variance(avg_variance),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::PythagoreanFuzzyValue;

    fn pfs(mu: f64, nu: f64) -> PythagoreanFuzzyValue {
        PythagoreanFuzzyValue::new(mu, nu).unwrap()
    }

    #[test]
    fn empty_input_reports_maximal_agreement() {
        let report = AgreementAnalyzer::analyze(&[]).unwrap();
        assert_eq!(report.avg_variance, 0.0);
        assert_eq!(report.agreement_score, 1.0);
        assert_eq!(report.level, AgreementLevel::High);
    }

    #[test]
    fn single_expert_has_zero_variance() {
        let expert = JudgmentMatrix::from_rows(vec![
            vec![pfs(0.7, 0.7), pfs(0.9, 0.3)],
            vec![pfs(0.3, 0.8), pfs(0.5, 0.7)],
        ])
        .unwrap();

        let report = AgreementAnalyzer::analyze(std::slice::from_ref(&expert)).unwrap();
        assert_eq!(report.avg_variance, 0.0);
        assert_eq!(report.level, AgreementLevel::High);
    }

    #[test]
    fn unanimous_experts_agree_perfectly() {
        let expert = JudgmentMatrix::from_rows(vec![vec![pfs(0.7, 0.5)]]).unwrap();
        let report =
            AgreementAnalyzer::analyze(&[expert.clone(), expert.clone(), expert]).unwrap();

        assert_eq!(report.avg_variance, 0.0);
        assert_eq!(report.agreement_score, 1.0);
    }

    #[test]
    fn polarized_experts_land_in_the_low_bucket() {
        // VH vs VL on the only cell: variances (0.4^2 + 0.3^2) = 0.25.
        let optimist = JudgmentMatrix::from_rows(vec![vec![pfs(0.9, 0.3)]]).unwrap();
        let pessimist = JudgmentMatrix::from_rows(vec![vec![pfs(0.1, 0.9)]]).unwrap();

        let report = AgreementAnalyzer::analyze(&[optimist, pessimist]).unwrap();
        assert!((report.avg_variance - 0.25).abs() < 1e-12);
        assert!((report.agreement_score - 0.75).abs() < 1e-12);
        assert_eq!(report.level, AgreementLevel::Low);
    }

    #[test]
    fn mild_disagreement_lands_in_the_medium_bucket() {
        // mu variance 0.01 per expert pair on each of two cells, nu spread
        // pushes the average into [0.1, 0.2).
        let a = JudgmentMatrix::from_rows(vec![vec![pfs(0.9, 0.3), pfs(0.1, 0.9)]]).unwrap();
        let b = JudgmentMatrix::from_rows(vec![vec![pfs(0.3, 0.8), pfs(0.5, 0.7)]]).unwrap();

        let report = AgreementAnalyzer::analyze(&[a, b]).unwrap();
        assert!((report.avg_variance - 0.10125).abs() < 1e-12);
        assert_eq!(report.level, AgreementLevel::Medium);
    }

    #[test]
    fn shape_disagreement_is_rejected() {
        let a = JudgmentMatrix::from_rows(vec![vec![pfs(0.7, 0.7)]]).unwrap();
        let b = JudgmentMatrix::from_rows(vec![vec![pfs(0.7, 0.7), pfs(0.3, 0.8)]]).unwrap();

        let result = AgreementAnalyzer::analyze(&[a, b]);
        assert!(matches!(
            result,
            Err(ShapeMismatchError::ExpertShape { expert: 1, .. })
        ));
    }

    #[test]
    fn level_buckets_follow_the_thresholds() {
        assert_eq!(AgreementLevel::from_variance(0.0), AgreementLevel::High);
        assert_eq!(AgreementLevel::from_variance(0.09), AgreementLevel::High);
        assert_eq!(AgreementLevel::from_variance(0.1), AgreementLevel::Medium);
        assert_eq!(AgreementLevel::from_variance(0.19), AgreementLevel::Medium);
        assert_eq!(AgreementLevel::from_variance(0.2), AgreementLevel::Low);
        assert_eq!(AgreementLevel::from_variance(5.0), AgreementLevel::Low);
    }

    #[test]
    fn score_is_clamped_for_extreme_variance() {
        // Variance can exceed 1 only in theory; the clamp keeps the score at 0.
        let report = AgreementReport {
            avg_variance: 1.4,
            agreement_score: 1.0 - 1.4f64.min(1.0),
            level: AgreementLevel::from_variance(1.4),
        };
        assert_eq!(report.agreement_score, 0.0);
        assert_eq!(report.level, AgreementLevel::Low);
    }

    #[test]
    fn agreement_level_displays_its_label() {
        assert_eq!(format!("{}", AgreementLevel::High), "High");
        assert_eq!(format!("{}", AgreementLevel::Medium), "Medium");
        assert_eq!(format!("{}", AgreementLevel::Low), "Low");
    }
}
