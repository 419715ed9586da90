//! Analysis module - Pure domain services for fuzzy decision analysis.
//!
//! # Components
//!
//! - `JudgmentMatrix` - Shape-validated grid of fuzzy judgments
//! - `ElicitationGrid` - Per-expert linguistic input with fixed/editable cells
//! - `ExpertAggregator` - Per-cell mean aggregation into a consensus matrix
//! - `FahpWeightSolver` - Geometric-mean criterion weight derivation
//! - `FtopsisRanker` - Closeness-coefficient ranking against ideal solutions
//! - `AgreementAnalyzer` - Dispersion across experts' raw judgments
//! - `SummaryStatistics` - Descriptive statistics over weights and rankings
//!
//! All services are stateless and free of side effects: they take domain
//! objects as input and return computed results, never mutating their
//! arguments.

mod aggregator;
mod agreement;
mod elicitation;
mod judgment_matrix;
mod ranker;
mod statistics;
mod weight_solver;

pub use aggregator::ExpertAggregator;
pub use agreement::{AgreementAnalyzer, AgreementLevel, AgreementReport};
pub use elicitation::{EditError, ElicitationGrid, JudgmentEntry};
pub use judgment_matrix::JudgmentMatrix;
pub use ranker::{FtopsisRanker, RankingRow};
pub use statistics::{StatisticsReport, SummaryStatistics};
pub use weight_solver::{FahpWeightSolver, WeightVector};
