//! End-to-end evaluation: linguistic judgments in, weighted ranking out.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::domain::analysis::{
    AgreementAnalyzer, AgreementReport, ElicitationGrid, ExpertAggregator, FahpWeightSolver,
    FtopsisRanker, JudgmentMatrix, RankingRow, StatisticsReport, SummaryStatistics, WeightVector,
};
use crate::domain::foundation::AnalysisError;

/// The complete result of one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationOutcome {
    /// Consensus pairwise-importance matrix (criteria x criteria).
    pub consensus_importance: JudgmentMatrix,
    /// Consensus suitability matrix (alternatives x criteria).
    pub consensus_suitability: JudgmentMatrix,
    pub weights: WeightVector,
    /// Ranking table, best alternative first.
    pub ranking: Vec<RankingRow>,
    /// Agreement across the raw importance judgments, before aggregation.
    pub agreement: AgreementReport,
    pub statistics: StatisticsReport,
}

impl EvaluationOutcome {
    /// The top-ranked alternative.
    pub fn best(&self) -> Option<&RankingRow> {
        self.ranking.first()
    }
}

/// Runs the full pipeline over per-expert elicitation grids.
///
/// Grids are resolved through their vocabularies, then delegated to
/// [`evaluate_matrices`].
pub fn evaluate(
    importance_grids: &[ElicitationGrid],
    suitability_grids: &[ElicitationGrid],
    alternatives: &[String],
) -> Result<EvaluationOutcome, AnalysisError> {
    let importance: Vec<JudgmentMatrix> = importance_grids
        .iter()
        .map(ElicitationGrid::resolve)
        .collect::<Result<_, _>>()?;
    let suitability: Vec<JudgmentMatrix> = suitability_grids
        .iter()
        .map(ElicitationGrid::resolve)
        .collect::<Result<_, _>>()?;
    evaluate_matrices(&importance, &suitability, alternatives)
}

/// Runs the full pipeline over already-resolved per-expert matrices.
///
/// Aggregates both phases, derives criterion weights from the importance
/// consensus, ranks the alternatives, and attaches the agreement and
/// statistics reports. Agreement is measured on the raw importance matrices.
pub fn evaluate_matrices(
    importance: &[JudgmentMatrix],
    suitability: &[JudgmentMatrix],
    alternatives: &[String],
) -> Result<EvaluationOutcome, AnalysisError> {
    info!(
        experts = importance.len(),
        alternatives = alternatives.len(),
        "running evaluation"
    );

    let agreement = AgreementAnalyzer::analyze(importance)?;
    debug!(
        avg_variance = agreement.avg_variance,
        level = %agreement.level,
        "expert agreement analyzed"
    );

    let consensus_importance = ExpertAggregator::aggregate(importance)?;
    let weights = FahpWeightSolver::derive_weights(&consensus_importance)?;
    debug!(criteria = weights.len(), "criterion weights derived");

    let consensus_suitability = ExpertAggregator::aggregate(suitability)?;
    let ranking = FtopsisRanker::rank(&consensus_suitability, &weights, alternatives)?;
    let statistics = SummaryStatistics::summarize(&weights, &ranking);

    if let Some(best) = ranking.first() {
        info!(
            alternative = %best.alternative,
            closeness = best.closeness,
            "evaluation complete"
        );
    }

    Ok(EvaluationOutcome {
        consensus_importance,
        consensus_suitability,
        weights,
        ranking,
        agreement,
        statistics,
    })
}
