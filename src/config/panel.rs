//! Decision panel configuration (criteria, alternatives, expert count).

use serde::Deserialize;
use std::collections::HashSet;

use super::error::ValidationError;

/// Panel configuration: what is being compared, and by how many experts.
#[derive(Debug, Clone, Deserialize)]
pub struct PanelConfig {
    /// Ordered criterion labels.
    #[serde(default = "default_criteria")]
    pub criteria: Vec<String>,

    /// Ordered alternative labels.
    #[serde(default = "default_alternatives")]
    pub alternatives: Vec<String>,

    /// Number of experts per judgment phase.
    #[serde(default = "default_experts")]
    pub experts: usize,
}

impl PanelConfig {
    /// Number of criteria.
    pub fn criterion_count(&self) -> usize {
        self.criteria.len()
    }

    /// Number of alternatives.
    pub fn alternative_count(&self) -> usize {
        self.alternatives.len()
    }

    /// Validate panel configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.criteria.is_empty() {
            return Err(ValidationError::NoCriteria);
        }
        if self.alternatives.is_empty() {
            return Err(ValidationError::NoAlternatives);
        }
        if self.experts == 0 {
            return Err(ValidationError::NoExperts);
        }

        let mut seen = HashSet::new();
        for label in &self.criteria {
            if !seen.insert(label) {
                return Err(ValidationError::DuplicateCriterion(label.clone()));
            }
        }
        let mut seen = HashSet::new();
        for label in &self.alternatives {
            if !seen.insert(label) {
                return Err(ValidationError::DuplicateAlternative(label.clone()));
            }
        }
        Ok(())
    }
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            criteria: default_criteria(),
            alternatives: default_alternatives(),
            experts: default_experts(),
        }
    }
}

fn default_criteria() -> Vec<String> {
    (1..=5).map(|i| format!("A{}", i)).collect()
}

fn default_alternatives() -> Vec<String> {
    (1..=5).map(|i| format!("B{}", i)).collect()
}

fn default_experts() -> usize {
    4
}
