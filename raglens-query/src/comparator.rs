//! Cross-model comparison: run every configured model against the same
//! retrieved context and score each run.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tracing::{info, instrument, warn};

use raglens_core::config::GroundingConfig;
use raglens_core::traits::{Embedder, ResponseGenerator, Retriever};
use raglens_core::types::{ComparisonReport, ModelRun, PairwiseComparison, RunResult};
use raglens_core::{RaglensError, Result};
use raglens_eval::{
    compute_rouge, hallucination_rate, round_f64, CitationAttributor, Evaluator,
    FaithfulnessScorer,
};

use crate::pipeline::{QueryPipeline, QueryPipelineConfig};

/// Runs the full evaluation for a set of models and builds the comparison
/// report.
///
/// Every model sees the same retriever output for the question, so the
/// comparison is controlled: only the generator varies. Failure isolation
/// is per model; one model's provider failure becomes a terminal error on
/// its row while the other rows keep their results.
#[derive(Debug)]
pub struct ModelComparator {
    retriever: Arc<dyn Retriever>,
    attributor: CitationAttributor,
    evaluator: Evaluator,
    pipeline_config: QueryPipelineConfig,
}

impl ModelComparator {
    /// Create a comparator with default thresholds.
    pub fn new(retriever: Arc<dyn Retriever>, embedder: Arc<dyn Embedder>) -> Self {
        Self::with_grounding_config(retriever, embedder, GroundingConfig::default())
    }

    /// Create a comparator with explicit grounding thresholds.
    pub fn with_grounding_config(
        retriever: Arc<dyn Retriever>,
        embedder: Arc<dyn Embedder>,
        grounding: GroundingConfig,
    ) -> Self {
        Self {
            retriever,
            attributor: CitationAttributor::with_threshold(
                embedder.clone(),
                grounding.citation_threshold,
            ),
            evaluator: Evaluator::with_scorer(FaithfulnessScorer::with_threshold(
                embedder,
                grounding.faithfulness_threshold,
            )),
            pipeline_config: QueryPipelineConfig::default(),
        }
    }

    /// Set the number of chunks retrieved per question.
    #[must_use]
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.pipeline_config.top_k = top_k;
        self
    }

    /// Run and score every generator for one question.
    ///
    /// Generators run in configured order; the first one is the pairwise
    /// comparison reference. Pairwise comparison is skipped entirely when
    /// only one model is configured, and when the reference run failed.
    ///
    /// # Errors
    ///
    /// Rejects an empty question or an empty generator list with a
    /// validation error before any provider call. Per-model provider
    /// failures do not fail the comparison; they surface as
    /// [`ModelRun::Failed`] rows.
    #[instrument(skip(self, generators), fields(models = generators.len()))]
    pub async fn compare(
        &self,
        question: &str,
        generators: &[Arc<dyn ResponseGenerator>],
    ) -> Result<ComparisonReport> {
        if question.trim().is_empty() {
            return Err(RaglensError::validation("question must not be empty"));
        }
        if generators.is_empty() {
            return Err(RaglensError::validation(
                "at least one generator must be configured",
            ));
        }

        let mut runs = Vec::with_capacity(generators.len());
        for generator in generators {
            let model = generator.model_name().to_string();
            match self.run_model(question, generator.clone()).await {
                Ok(result) => {
                    info!(
                        model = %result.model,
                        faithfulness = result.metrics.faithfulness,
                        hallucination_pct = result.hallucination_pct,
                        "model run scored"
                    );
                    runs.push(ModelRun::Completed(result));
                }
                Err(err) => {
                    warn!(model = %model, error = %err, "model run failed");
                    runs.push(ModelRun::Failed {
                        model,
                        error: err.to_string(),
                    });
                }
            }
        }

        Ok(build_report(runs))
    }

    async fn run_model(
        &self,
        question: &str,
        generator: Arc<dyn ResponseGenerator>,
    ) -> Result<RunResult> {
        let model = generator.model_name().to_string();
        let pipeline =
            QueryPipeline::with_config(self.retriever.clone(), generator, self.pipeline_config);
        let run = pipeline.run(question).await?;

        let citations = self.attributor.attribute(&run.answer, &run.chunks).await?;
        let hallucination_pct = hallucination_rate(&citations);
        let metrics = self
            .evaluator
            .evaluate(
                &run.answer,
                &run.context,
                Duration::from_secs_f64(run.latency_sec),
            )
            .await?;

        Ok(RunResult {
            model,
            answer: run.answer,
            context: run.context,
            latency_sec: run.latency_sec,
            chunks: run.chunks,
            citations,
            hallucination_pct,
            metrics,
            timestamp: Utc::now(),
        })
    }
}

/// Assemble the comparison report from the per-model runs.
fn build_report(runs: Vec<ModelRun>) -> ComparisonReport {
    let fastest_model = fastest(&runs).map(|r| r.model.clone());
    let most_faithful_model = most_faithful(&runs).map(|r| r.model.clone());
    let pairwise = pairwise_against_reference(&runs);

    ComparisonReport {
        runs,
        fastest_model,
        most_faithful_model,
        pairwise,
    }
}

/// Stable argmin of latency over completed runs: ties keep the
/// first-encountered model.
fn fastest(runs: &[ModelRun]) -> Option<&RunResult> {
    let mut best: Option<&RunResult> = None;
    for run in runs.iter().filter_map(ModelRun::as_completed) {
        match best {
            Some(current) if run.latency_sec >= current.latency_sec => {}
            _ => best = Some(run),
        }
    }
    best
}

/// Stable argmax of faithfulness over completed runs.
fn most_faithful(runs: &[ModelRun]) -> Option<&RunResult> {
    let mut best: Option<&RunResult> = None;
    for run in runs.iter().filter_map(ModelRun::as_completed) {
        match best {
            Some(current) if run.metrics.faithfulness <= current.metrics.faithfulness => {}
            _ => best = Some(run),
        }
    }
    best
}

/// Pairwise comparison of every later completed run against the first
/// configured model. Skipped when fewer than two models are configured or
/// the reference run failed; never a degenerate self-comparison.
fn pairwise_against_reference(runs: &[ModelRun]) -> Vec<PairwiseComparison> {
    if runs.len() < 2 {
        return Vec::new();
    }

    let Some(reference) = runs[0].as_completed() else {
        return Vec::new();
    };

    runs[1..]
        .iter()
        .filter_map(ModelRun::as_completed)
        .map(|challenger| PairwiseComparison {
            reference_model: reference.model.clone(),
            model: challenger.model.clone(),
            rouge: compute_rouge(&reference.answer, &challenger.answer),
            latency_delta_sec: round_f64(challenger.latency_sec - reference.latency_sec, 2),
        })
        .collect()
}
