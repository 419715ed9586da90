//! Persisted-scenario interchange record.
//!
//! The persistence collaborator stores and retrieves these records; the core
//! only agrees on their shape and rebuilds its matrices from the linguistic
//! label grids. No file or network handling lives here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::analysis::{JudgmentMatrix, RankingRow, WeightVector};
use crate::domain::foundation::{AnalysisError, PythagoreanFuzzyValue, ShapeMismatchError, Vocabulary};

/// A named, timestamped snapshot of one full analysis: the raw linguistic
/// judgments plus the derived results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    pub saved_at: DateTime<Utc>,
    /// Per-expert pairwise importance labels: expert -> row -> column.
    pub fahp_judgments: Vec<Vec<Vec<String>>>,
    /// Per-expert suitability labels: expert -> alternative -> criterion.
    pub ftopsis_judgments: Vec<Vec<Vec<String>>>,
    pub weights: WeightVector,
    pub ranking: Vec<RankingRow>,
}

impl Scenario {
    /// Creates a scenario stamped with the current time.
    pub fn new(
        name: impl Into<String>,
        fahp_judgments: Vec<Vec<Vec<String>>>,
        ftopsis_judgments: Vec<Vec<Vec<String>>>,
        weights: WeightVector,
        ranking: Vec<RankingRow>,
    ) -> Self {
        Self {
            name: name.into(),
            saved_at: Utc::now(),
            fahp_judgments,
            ftopsis_judgments,
            weights,
            ranking,
        }
    }

    /// Rebuilds the per-expert pairwise matrices from the importance label
    /// grids. Every grid must be `criteria x criteria`.
    pub fn fahp_matrices(&self, criteria: usize) -> Result<Vec<JudgmentMatrix>, AnalysisError> {
        Self::matrices(
            &self.fahp_judgments,
            Vocabulary::Importance,
            criteria,
            criteria,
        )
    }

    /// Rebuilds the per-expert rating matrices from the suitability label
    /// grids. Every grid must be `alternatives x criteria`.
    pub fn ftopsis_matrices(
        &self,
        alternatives: usize,
        criteria: usize,
    ) -> Result<Vec<JudgmentMatrix>, AnalysisError> {
        Self::matrices(
            &self.ftopsis_judgments,
            Vocabulary::Suitability,
            alternatives,
            criteria,
        )
    }

    fn matrices(
        grids: &[Vec<Vec<String>>],
        vocabulary: Vocabulary,
        rows: usize,
        cols: usize,
    ) -> Result<Vec<JudgmentMatrix>, AnalysisError> {
        let mut matrices = Vec::with_capacity(grids.len());
        for (expert, grid) in grids.iter().enumerate() {
            if grid.len() != rows {
                return Err(ShapeMismatchError::grid_dimensions(
                    expert,
                    (rows, cols),
                    (grid.len(), grid.first().map_or(0, Vec::len)),
                )
                .into());
            }
            let mut resolved: Vec<Vec<PythagoreanFuzzyValue>> = Vec::with_capacity(rows);
            for row in grid {
                if row.len() != cols {
                    return Err(ShapeMismatchError::grid_dimensions(
                        expert,
                        (rows, cols),
                        (grid.len(), row.len()),
                    )
                    .into());
                }
                let mut cells = Vec::with_capacity(cols);
                for label in row {
                    cells.push(vocabulary.lookup(label)?);
                }
                resolved.push(cells);
            }
            matrices.push(JudgmentMatrix::from_rows(resolved)?);
        }
        Ok(matrices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(labels: &[&[&str]]) -> Vec<Vec<String>> {
        labels
            .iter()
            .map(|row| row.iter().map(|s| s.to_string()).collect())
            .collect()
    }

    fn sample_scenario() -> Scenario {
        Scenario::new(
            "site selection",
            vec![grid(&[&["EQ", "HI"], &["LI", "EQ"]])],
            vec![grid(&[&["VH", "M"], &["L", "H"]])],
            WeightVector::try_new(vec![0.6, 0.4]).unwrap(),
            vec![
                RankingRow {
                    alternative: "B1".to_string(),
                    d_plus: 0.0,
                    d_minus: 0.3,
                    closeness: 1.0,
                },
                RankingRow {
                    alternative: "B2".to_string(),
                    d_plus: 0.3,
                    d_minus: 0.0,
                    closeness: 0.0,
                },
            ],
        )
    }

    #[test]
    fn fahp_matrices_rebuild_from_labels() {
        let scenario = sample_scenario();
        let matrices = scenario.fahp_matrices(2).unwrap();

        assert_eq!(matrices.len(), 1);
        let cell = matrices[0].get(0, 1).unwrap();
        assert_eq!(cell.mu(), 0.70);
        assert_eq!(cell.nu(), 0.50);
    }

    #[test]
    fn ftopsis_matrices_rebuild_from_labels() {
        let scenario = sample_scenario();
        let matrices = scenario.ftopsis_matrices(2, 2).unwrap();

        assert_eq!(matrices[0].get(0, 0).unwrap().mu(), 0.90);
        assert_eq!(matrices[0].get(1, 0).unwrap().mu(), 0.30);
    }

    #[test]
    fn wrong_row_count_is_rejected() {
        let scenario = sample_scenario();
        let result = scenario.fahp_matrices(3);
        assert!(matches!(
            result,
            Err(AnalysisError::ShapeMismatch(
                ShapeMismatchError::GridDimensions { expert: 0, .. }
            ))
        ));
    }

    #[test]
    fn wrong_column_count_is_rejected() {
        let mut scenario = sample_scenario();
        scenario.ftopsis_judgments[0][1].pop();

        let result = scenario.ftopsis_matrices(2, 2);
        assert!(matches!(
            result,
            Err(AnalysisError::ShapeMismatch(
                ShapeMismatchError::GridDimensions { .. }
            ))
        ));
    }

    #[test]
    fn corrupted_labels_are_rejected() {
        let mut scenario = sample_scenario();
        scenario.fahp_judgments[0][0][1] = "VH".to_string();

        let result = scenario.fahp_matrices(2);
        assert!(matches!(result, Err(AnalysisError::UnknownLabel(_))));
    }

    #[test]
    fn scenario_serde_round_trips() {
        let scenario = sample_scenario();
        let json = serde_json::to_string(&scenario).unwrap();
        let back: Scenario = serde_json::from_str(&json).unwrap();
        assert_eq!(back, scenario);
    }

    #[test]
    fn saved_at_serializes_as_iso_8601() {
        let scenario = sample_scenario();
        let json = serde_json::to_value(&scenario).unwrap();
        let saved_at = json["saved_at"].as_str().unwrap();
        assert!(saved_at.contains('T'));
        assert!(saved_at.parse::<DateTime<Utc>>().is_ok());
    }
}
