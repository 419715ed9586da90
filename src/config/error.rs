//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("At least one criterion label is required")]
    NoCriteria,

    #[error("At least one alternative label is required")]
    NoAlternatives,

    #[error("Expert count must be at least 1")]
    NoExperts,

    #[error("Duplicate criterion label: {0}")]
    DuplicateCriterion(String),

    #[error("Duplicate alternative label: {0}")]
    DuplicateAlternative(String),
}
