//! Pythagorean fuzzy value object (membership / non-membership pair).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Tolerance absorbing floating-point rounding in the constraint check.
pub const CONSTRAINT_EPSILON: f64 = 1e-9;

/// A Pythagorean fuzzy value: membership `mu` and non-membership `nu`,
/// each in [0, 1], with `mu^2 + nu^2 <= 1`.
///
/// Immutable once constructed. Deserialization goes through the same
/// validation as [`PythagoreanFuzzyValue::new`], so a corrupted persisted
/// scenario cannot smuggle in an invalid pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Components")]
pub struct PythagoreanFuzzyValue {
    mu: f64,
    nu: f64,
}

#[derive(Deserialize)]
struct Components {
    mu: f64,
    nu: f64,
}

impl TryFrom<Components> for PythagoreanFuzzyValue {
    type Error = ValidationError;

    fn try_from(raw: Components) -> Result<Self, Self::Error> {
        PythagoreanFuzzyValue::new(raw.mu, raw.nu)
    }
}

impl PythagoreanFuzzyValue {
    /// Creates a fuzzy value, validating component bounds and the
    /// Pythagorean condition.
    pub fn new(mu: f64, nu: f64) -> Result<Self, ValidationError> {
        if !(0.0..=1.0).contains(&mu) {
            return Err(ValidationError::component_out_of_range("mu", mu));
        }
        if !(0.0..=1.0).contains(&nu) {
            return Err(ValidationError::component_out_of_range("nu", nu));
        }
        if mu * mu + nu * nu > 1.0 + CONSTRAINT_EPSILON {
            return Err(ValidationError::constraint_violated(mu, nu));
        }
        Ok(Self { mu, nu })
    }

    /// Membership degree.
    pub fn mu(&self) -> f64 {
        self.mu
    }

    /// Non-membership degree.
    pub fn nu(&self) -> f64 {
        self.nu
    }

    /// Score function `mu^2 - nu^2`, in [-1, 1].
    ///
    /// Used wherever a single comparable number is needed.
    pub fn score(&self) -> f64 {
        self.mu * self.mu - self.nu * self.nu
    }
}

impl fmt::Display for PythagoreanFuzzyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(mu={:.3}, nu={:.3})", self.mu, self.nu)
    }
}
