//! Judgment elicitation grids - per-expert linguistic input, decoupled from
//! any input-widget representation.
//!
//! Each cell is a tagged entry: `Fixed` cells are set by convention (the
//! pairwise diagonal) and never prompted from the expert; `Editable` cells
//! hold the expert's current label.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::foundation::{AnalysisError, UnknownLabelError, Vocabulary};

use super::JudgmentMatrix;

/// One cell of an elicitation grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum JudgmentEntry {
    /// Convention-fixed cell; never edited.
    Fixed(String),
    /// Expert-editable cell holding its current label.
    Editable(String),
}

impl JudgmentEntry {
    /// The current label, regardless of variant.
    pub fn label(&self) -> &str {
        match self {
            JudgmentEntry::Fixed(label) | JudgmentEntry::Editable(label) => label,
        }
    }

    /// True for convention-fixed cells.
    pub fn is_fixed(&self) -> bool {
        matches!(self, JudgmentEntry::Fixed(_))
    }
}

/// Errors raised while editing a grid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    #[error("Cell ({row}, {col}) is outside the {rows}x{cols} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("Cell ({row}, {col}) is fixed by convention and cannot be edited")]
    FixedCell { row: usize, col: usize },

    #[error(transparent)]
    UnknownLabel(#[from] UnknownLabelError),
}

/// One expert's grid of linguistic judgments for a single phase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElicitationGrid {
    vocabulary: Vocabulary,
    entries: Vec<Vec<JudgmentEntry>>,
}

impl ElicitationGrid {
    /// An `n x n` pairwise-importance grid: the diagonal is fixed to `EQ`
    /// (self-comparison) and every other cell starts editable at `EQ`.
    pub fn pairwise(n: usize) -> Self {
        let entries = (0..n)
            .map(|i| {
                (0..n)
                    .map(|j| {
                        if i == j {
                            JudgmentEntry::Fixed("EQ".to_string())
                        } else {
                            JudgmentEntry::Editable("EQ".to_string())
                        }
                    })
                    .collect()
            })
            .collect();
        Self {
            vocabulary: Vocabulary::Importance,
            entries,
        }
    }

    /// An `m x n` suitability-rating grid, every cell editable starting at
    /// the medium label `M`.
    pub fn rating(m: usize, n: usize) -> Self {
        let entries = (0..m)
            .map(|_| {
                (0..n)
                    .map(|_| JudgmentEntry::Editable("M".to_string()))
                    .collect()
            })
            .collect();
        Self {
            vocabulary: Vocabulary::Suitability,
            entries,
        }
    }

    /// The vocabulary this grid's labels are drawn from.
    pub fn vocabulary(&self) -> Vocabulary {
        self.vocabulary
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.entries.len()
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.entries.first().map_or(0, Vec::len)
    }

    /// Returns the entry at `(row, col)`, if in bounds.
    pub fn entry(&self, row: usize, col: usize) -> Option<&JudgmentEntry> {
        self.entries.get(row).and_then(|r| r.get(col))
    }

    /// Writes a label into an editable cell.
    ///
    /// Fixed cells reject the write; labels must belong to the grid's
    /// vocabulary.
    pub fn set(&mut self, row: usize, col: usize, label: &str) -> Result<(), EditError> {
        let (rows, cols) = (self.row_count(), self.column_count());
        let entry = self
            .entries
            .get_mut(row)
            .and_then(|r| r.get_mut(col))
            .ok_or(EditError::OutOfBounds {
                row,
                col,
                rows,
                cols,
            })?;

        if entry.is_fixed() {
            return Err(EditError::FixedCell { row, col });
        }
        self.vocabulary.lookup(label)?;
        *entry = JudgmentEntry::Editable(label.to_string());
        Ok(())
    }

    /// The current labels, row by row (used for scenario export).
    pub fn labels(&self) -> Vec<Vec<String>> {
        self.entries
            .iter()
            .map(|row| row.iter().map(|e| e.label().to_string()).collect())
            .collect()
    }

    /// Resolves every current label through the vocabulary into a judgment
    /// matrix.
    pub fn resolve(&self) -> Result<JudgmentMatrix, AnalysisError> {
        let mut rows = Vec::with_capacity(self.entries.len());
        for row in &self.entries {
            let mut resolved = Vec::with_capacity(row.len());
            for entry in row {
                resolved.push(self.vocabulary.lookup(entry.label())?);
            }
            rows.push(resolved);
        }
        Ok(JudgmentMatrix::from_rows(rows)?)
    }
}
