//! Aggregate metric types for one model run.

use serde::{Deserialize, Serialize};

/// Per-run metrics computed by the evaluator.
///
/// The hallucination percentage is not part of this record: it is derived
/// from the citation records by the run orchestrator and stored on
/// [`RunResult`](crate::types::RunResult).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct EvaluationMetrics {
    /// Whole-answer to whole-context semantic groundedness in `[0, 1]`,
    /// rounded to 3 decimals.
    pub faithfulness: f32,

    /// Generation latency in seconds, rounded to 2 decimals.
    pub latency_sec: f64,

    /// Answer word count divided by context word count, rounded to 3
    /// decimals. `0.0` when the context is empty.
    pub compression: f32,
}

/// Lexical overlap scores between a reference answer and a hypothesis.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct RougeScores {
    /// Unigram F-measure, rounded to 3 decimals.
    pub rouge1: f32,

    /// Longest-common-subsequence F-measure, rounded to 3 decimals.
    pub rouge_l: f32,
}
