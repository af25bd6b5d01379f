//! Per-model run results and the cross-model comparison report.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{CitationRecord, EvaluationMetrics, RetrievedChunk, RougeScores};

/// Everything produced by one model for one submitted question.
///
/// Created once per model per request and discarded after the comparison
/// report is rendered; nothing is persisted across requests.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RunResult {
    /// Model identifier (as reported by the generator).
    pub model: String,

    /// The generated answer.
    pub answer: String,

    /// The context string the answer was generated from.
    pub context: String,

    /// Raw generation latency in seconds (unrounded).
    pub latency_sec: f64,

    /// The retrieved chunks used for this run, in retrieval order.
    pub chunks: Vec<RetrievedChunk>,

    /// Per-sentence attribution, in sentence order.
    pub citations: Vec<CitationRecord>,

    /// Percentage of answer sentences with no supporting chunk, in
    /// `[0, 100]`, rounded to 2 decimals.
    pub hallucination_pct: f32,

    /// Faithfulness, latency, and compression metrics.
    pub metrics: EvaluationMetrics,

    /// When the run completed.
    pub timestamp: DateTime<Utc>,
}

/// Outcome of one model's run: either a full result or a terminal error.
///
/// Failure isolation is per model, not per request: a failed run surfaces a
/// single error for that model's row while other models' results remain
/// usable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum ModelRun {
    /// The run completed and was scored.
    Completed(RunResult),

    /// The run failed before a result could be produced.
    Failed {
        /// Model identifier.
        model: String,

        /// Terminal error message for this model's row.
        error: String,
    },
}

impl ModelRun {
    /// The model this run belongs to.
    #[must_use]
    pub fn model(&self) -> &str {
        match self {
            Self::Completed(result) => &result.model,
            Self::Failed { model, .. } => model,
        }
    }

    /// The run result, if the run completed.
    #[must_use]
    pub fn as_completed(&self) -> Option<&RunResult> {
        match self {
            Self::Completed(result) => Some(result),
            Self::Failed { .. } => None,
        }
    }
}

/// Lexical and latency comparison of one model against the reference model.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PairwiseComparison {
    /// The reference model (first in the configured list).
    pub reference_model: String,

    /// The challenger model.
    pub model: String,

    /// ROUGE scores of the challenger's answer against the reference's.
    pub rouge: RougeScores,

    /// Challenger latency minus reference latency, in seconds, rounded to
    /// 2 decimals.
    pub latency_delta_sec: f64,
}

/// The cross-model comparison produced by one request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ComparisonReport {
    /// All model runs, in configured model order.
    pub runs: Vec<ModelRun>,

    /// Model with the lowest latency among completed runs (first
    /// encountered on ties). `None` when no run completed.
    pub fastest_model: Option<String>,

    /// Model with the highest faithfulness among completed runs (first
    /// encountered on ties). `None` when no run completed.
    pub most_faithful_model: Option<String>,

    /// Pairwise comparisons against the reference model. Empty when fewer
    /// than two models are configured or the reference run failed.
    pub pairwise: Vec<PairwiseComparison>,
}

impl ComparisonReport {
    /// Runs that completed, in configured model order.
    #[must_use]
    pub fn completed(&self) -> Vec<&RunResult> {
        self.runs.iter().filter_map(ModelRun::as_completed).collect()
    }
}
