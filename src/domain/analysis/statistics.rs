//! Descriptive statistics over derived weights and closeness coefficients.

use serde::{Deserialize, Serialize};

use super::{RankingRow, WeightVector};

/// Descriptive summary of one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatisticsReport {
    pub closeness_mean: f64,
    /// Population standard deviation, not the sample estimator.
    pub closeness_std_dev: f64,
    pub closeness_min: f64,
    pub closeness_max: f64,
    pub closeness_range: f64,
    pub weight_mean: f64,
    pub weight_max: f64,
    pub weight_min: f64,
}

/// Pure descriptive aggregation over the weight vector and ranking table.
pub struct SummaryStatistics;

impl SummaryStatistics {
    /// Summarizes the closeness column and the weights.
    ///
    /// Empty inputs produce zeroed fields; this is reporting-only output
    /// and has no failure mode.
    pub fn summarize(weights: &WeightVector, ranking: &[RankingRow]) -> StatisticsReport {
        let closeness: Vec<f64> = ranking.iter().map(|row| row.closeness).collect();
        let closeness_mean = mean(&closeness);
        let closeness_min = min(&closeness);
        let closeness_max = max(&closeness);

        StatisticsReport {
            closeness_mean,
            closeness_std_dev: population_std_dev(&closeness, closeness_mean),
            closeness_min,
            closeness_max,
            closeness_range: closeness_max - closeness_min,
            weight_mean: mean(weights.as_slice()),
            weight_max: max(weights.as_slice()),
            weight_min: min(weights.as_slice()),
        }
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

fn population_std_dev(values: &[f64], mean: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let variance = values.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

fn min(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().copied().fold(f64::INFINITY, f64::min)
    }
}

fn max(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranking(cc: &[f64]) -> Vec<RankingRow> {
        cc.iter()
            .enumerate()
            .map(|(i, &closeness)| RankingRow {
                alternative: format!("B{}", i + 1),
                d_plus: 0.0,
                d_minus: 0.0,
                closeness,
            })
            .collect()
    }

    #[test]
    fn std_dev_uses_the_population_formula() {
        let weights = WeightVector::try_new(vec![0.5, 0.5]).unwrap();
        let report = SummaryStatistics::summarize(&weights, &ranking(&[0.2, 0.4, 0.6, 0.8]));

        assert!((report.closeness_mean - 0.5).abs() < 1e-12);
        // Population std dev is sqrt(0.05) ~ 0.2236; the sample estimator
        // would give ~0.2582.
        assert!((report.closeness_std_dev - 0.05f64.sqrt()).abs() < 1e-12);
        assert!(report.closeness_std_dev < 0.25);
    }

    #[test]
    fn range_spans_min_to_max() {
        let weights = WeightVector::try_new(vec![1.0]).unwrap();
        let report = SummaryStatistics::summarize(&weights, &ranking(&[0.1, 0.9, 0.4]));

        assert_eq!(report.closeness_min, 0.1);
        assert_eq!(report.closeness_max, 0.9);
        assert!((report.closeness_range - 0.8).abs() < 1e-12);
    }

    #[test]
    fn weight_statistics_cover_mean_min_max() {
        let weights = WeightVector::try_new(vec![0.1, 0.2, 0.3, 0.4]).unwrap();
        let report = SummaryStatistics::summarize(&weights, &ranking(&[0.5]));

        assert!((report.weight_mean - 0.25).abs() < 1e-12);
        assert_eq!(report.weight_min, 0.1);
        assert_eq!(report.weight_max, 0.4);
    }

    #[test]
    fn empty_ranking_yields_zeroed_fields() {
        let weights = WeightVector::try_new(vec![1.0]).unwrap();
        let report = SummaryStatistics::summarize(&weights, &[]);

        assert_eq!(report.closeness_mean, 0.0);
        assert_eq!(report.closeness_std_dev, 0.0);
        assert_eq!(report.closeness_min, 0.0);
        assert_eq!(report.closeness_max, 0.0);
        assert_eq!(report.closeness_range, 0.0);
    }

    #[test]
    fn identical_coefficients_have_zero_spread() {
        let weights = WeightVector::try_new(vec![0.5, 0.5]).unwrap();
        let report = SummaryStatistics::summarize(&weights, &ranking(&[0.3, 0.3, 0.3]));

        assert_eq!(report.closeness_std_dev, 0.0);
        assert_eq!(report.closeness_range, 0.0);
    }

    #[test]
    fn report_serializes() {
        let weights = WeightVector::try_new(vec![1.0]).unwrap();
        let report = SummaryStatistics::summarize(&weights, &ranking(&[0.5]));
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("closeness_std_dev"));
    }
}
