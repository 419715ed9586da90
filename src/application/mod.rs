//! Application layer - orchestration over the pure domain services.

mod evaluate;

pub use evaluate::{evaluate, evaluate_matrices, EvaluationOutcome};
