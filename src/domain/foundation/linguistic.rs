//! Linguistic vocabularies and their fixed fuzzy-value scale tables.
//!
//! Two closed vocabularies exist: pairwise-importance labels used during
//! weight elicitation, and suitability labels used when rating alternatives.
//! They are disjoint in spelling and no cross-vocabulary substitution is
//! permitted. The label-to-value tables are built once and never written to
//! again.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use super::{PythagoreanFuzzyValue, UnknownLabelError};

/// Pairwise-importance label used in weight elicitation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ImportanceLabel {
    /// Equally important (self-comparisons are fixed to this).
    EQ,
    /// Less important.
    LI,
    /// Moderately important.
    MI,
    /// Highly important.
    HI,
    /// Very highly important.
    VHI,
}

/// Suitability label used when rating alternatives against criteria.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SuitabilityLabel {
    /// Very low suitability.
    VL,
    /// Low suitability.
    L,
    /// Medium suitability.
    M,
    /// High suitability.
    H,
    /// Very high suitability.
    VH,
}

static IMPORTANCE_SCALE: Lazy<HashMap<ImportanceLabel, PythagoreanFuzzyValue>> = Lazy::new(|| {
    [
        (ImportanceLabel::EQ, (0.70, 0.70)),
        (ImportanceLabel::LI, (0.30, 0.80)),
        (ImportanceLabel::MI, (0.50, 0.70)),
        (ImportanceLabel::HI, (0.70, 0.50)),
        (ImportanceLabel::VHI, (0.90, 0.30)),
    ]
    .into_iter()
    .map(|(label, (mu, nu))| {
        let value = PythagoreanFuzzyValue::new(mu, nu)
            .expect("scale constants satisfy the Pythagorean condition");
        (label, value)
    })
    .collect()
});

static SUITABILITY_SCALE: Lazy<HashMap<SuitabilityLabel, PythagoreanFuzzyValue>> =
    Lazy::new(|| {
        [
            (SuitabilityLabel::VL, (0.10, 0.90)),
            (SuitabilityLabel::L, (0.30, 0.80)),
            (SuitabilityLabel::M, (0.50, 0.70)),
            (SuitabilityLabel::H, (0.70, 0.50)),
            (SuitabilityLabel::VH, (0.90, 0.30)),
        ]
        .into_iter()
        .map(|(label, (mu, nu))| {
            let value = PythagoreanFuzzyValue::new(mu, nu)
                .expect("scale constants satisfy the Pythagorean condition");
            (label, value)
        })
        .collect()
    });

impl ImportanceLabel {
    /// All labels, in scale order.
    pub const ALL: [ImportanceLabel; 5] = [
        ImportanceLabel::EQ,
        ImportanceLabel::LI,
        ImportanceLabel::MI,
        ImportanceLabel::HI,
        ImportanceLabel::VHI,
    ];

    /// Returns the label string.
    pub fn as_str(&self) -> &'static str {
        match self {
            ImportanceLabel::EQ => "EQ",
            ImportanceLabel::LI => "LI",
            ImportanceLabel::MI => "MI",
            ImportanceLabel::HI => "HI",
            ImportanceLabel::VHI => "VHI",
        }
    }

    /// Returns the fuzzy value this label maps to.
    pub fn fuzzy_value(&self) -> PythagoreanFuzzyValue {
        IMPORTANCE_SCALE[self]
    }
}

impl SuitabilityLabel {
    /// All labels, in scale order.
    pub const ALL: [SuitabilityLabel; 5] = [
        SuitabilityLabel::VL,
        SuitabilityLabel::L,
        SuitabilityLabel::M,
        SuitabilityLabel::H,
        SuitabilityLabel::VH,
    ];

    /// Returns the label string.
    pub fn as_str(&self) -> &'static str {
        match self {
            SuitabilityLabel::VL => "VL",
            SuitabilityLabel::L => "L",
            SuitabilityLabel::M => "M",
            SuitabilityLabel::H => "H",
            SuitabilityLabel::VH => "VH",
        }
    }

    /// Returns the fuzzy value this label maps to.
    pub fn fuzzy_value(&self) -> PythagoreanFuzzyValue {
        SUITABILITY_SCALE[self]
    }
}

impl FromStr for ImportanceLabel {
    type Err = UnknownLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "EQ" => Ok(ImportanceLabel::EQ),
            "LI" => Ok(ImportanceLabel::LI),
            "MI" => Ok(ImportanceLabel::MI),
            "HI" => Ok(ImportanceLabel::HI),
            "VHI" => Ok(ImportanceLabel::VHI),
            other => Err(UnknownLabelError::new(other, Vocabulary::Importance.name())),
        }
    }
}

impl FromStr for SuitabilityLabel {
    type Err = UnknownLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "VL" => Ok(SuitabilityLabel::VL),
            "L" => Ok(SuitabilityLabel::L),
            "M" => Ok(SuitabilityLabel::M),
            "H" => Ok(SuitabilityLabel::H),
            "VH" => Ok(SuitabilityLabel::VH),
            other => Err(UnknownLabelError::new(other, Vocabulary::Suitability.name())),
        }
    }
}

impl fmt::Display for ImportanceLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for SuitabilityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifies which vocabulary a raw label string is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Vocabulary {
    Importance,
    Suitability,
}

impl Vocabulary {
    /// Vocabulary name used in error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Vocabulary::Importance => "importance",
            Vocabulary::Suitability => "suitability",
        }
    }

    /// Resolves a raw label string to its fuzzy value.
    pub fn lookup(&self, label: &str) -> Result<PythagoreanFuzzyValue, UnknownLabelError> {
        match self {
            Vocabulary::Importance => label.parse::<ImportanceLabel>().map(|l| l.fuzzy_value()),
            Vocabulary::Suitability => label.parse::<SuitabilityLabel>().map(|l| l.fuzzy_value()),
        }
    }

    /// The label strings of this vocabulary, in scale order.
    pub fn labels(&self) -> &'static [&'static str] {
        match self {
            Vocabulary::Importance => &["EQ", "LI", "MI", "HI", "VHI"],
            Vocabulary::Suitability => &["VL", "L", "M", "H", "VH"],
        }
    }
}
