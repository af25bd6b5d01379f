//! Per-run metric composition.

use std::sync::Arc;
use std::time::Duration;

use tracing::instrument;

use raglens_core::traits::Embedder;
use raglens_core::types::EvaluationMetrics;
use raglens_core::Result;

use crate::faithfulness::FaithfulnessScorer;
use crate::rounding::{round_f32, round_f64};

/// Answer word count divided by context word count, rounded to 3 decimals.
///
/// Returns `0.0` when the context is empty or whitespace-only.
#[must_use]
pub fn compression_ratio(answer: &str, context: &str) -> f32 {
    if context.trim().is_empty() {
        return 0.0;
    }

    let answer_words = answer.split_whitespace().count();
    let context_words = context.split_whitespace().count();

    #[allow(clippy::cast_precision_loss)]
    round_f32(answer_words as f32 / context_words as f32, 3)
}

/// Combines faithfulness, latency, and compression into one metrics record
/// per model run.
#[derive(Debug)]
pub struct Evaluator {
    scorer: FaithfulnessScorer,
}

impl Evaluator {
    /// Create an evaluator with a default-threshold faithfulness scorer.
    pub fn new(embedder: Arc<dyn Embedder>) -> Self {
        Self {
            scorer: FaithfulnessScorer::new(embedder),
        }
    }

    /// Create an evaluator around an existing scorer.
    pub fn with_scorer(scorer: FaithfulnessScorer) -> Self {
        Self { scorer }
    }

    /// Compute the metrics for one model run.
    ///
    /// Latency is passed through, rounded to 2 decimals. The only failure
    /// mode is the faithfulness scorer's provider error.
    ///
    /// # Errors
    ///
    /// Propagates the embedding provider's error unchanged.
    #[instrument(skip(self, answer, context))]
    pub async fn evaluate(
        &self,
        answer: &str,
        context: &str,
        latency: Duration,
    ) -> Result<EvaluationMetrics> {
        Ok(EvaluationMetrics {
            faithfulness: self.scorer.score(answer, context).await?,
            latency_sec: round_f64(latency.as_secs_f64(), 2),
            compression: compression_ratio(answer, context),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use raglens_core::Result;

    #[derive(Debug)]
    struct UnitEmbedder;

    #[async_trait]
    impl Embedder for UnitEmbedder {
        async fn embed(&self, _text: &str) -> Result<Vec<f32>> {
            Ok(vec![0.6, 0.8])
        }

        async fn embed_batch(&self, texts: Vec<&str>) -> Result<Vec<Vec<f32>>> {
            Ok(texts.iter().map(|_| vec![0.6, 0.8]).collect())
        }

        fn dimension(&self) -> usize {
            2
        }

        fn model_name(&self) -> &str {
            "unit-embedder"
        }
    }

    #[test]
    fn test_compression_ratio() {
        assert!((compression_ratio("three words here", "one two three four five six") - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_compression_ratio_empty_context() {
        assert!((compression_ratio("any answer", "") - 0.0).abs() < f32::EPSILON);
        assert!((compression_ratio("any answer", "  \t") - 0.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_compression_ratio_rounding() {
        // 1 word over 3 words = 0.333...
        assert!((compression_ratio("one", "a b c") - 0.333).abs() < 1e-6);
    }

    #[tokio::test]
    async fn test_evaluate_composes_metrics() {
        let evaluator = Evaluator::new(Arc::new(UnitEmbedder));
        let metrics = evaluator
            .evaluate("short answer", "a somewhat longer context string", Duration::from_millis(1234))
            .await
            .unwrap();

        // Identical embeddings, so faithfulness is exactly 1.0.
        assert!((metrics.faithfulness - 1.0).abs() < 1e-6);
        assert!((metrics.latency_sec - 1.23).abs() < 1e-9);
        assert!((metrics.compression - 0.4).abs() < 1e-6);
    }

    #[tokio::test]
    async fn test_evaluate_empty_context_zeroes() {
        let evaluator = Evaluator::new(Arc::new(UnitEmbedder));
        let metrics = evaluator
            .evaluate("any answer", "", Duration::ZERO)
            .await
            .unwrap();

        assert!((metrics.faithfulness - 0.0).abs() < f32::EPSILON);
        assert!((metrics.compression - 0.0).abs() < f32::EPSILON);
        assert!((metrics.latency_sec - 0.0).abs() < f64::EPSILON);
    }
}
