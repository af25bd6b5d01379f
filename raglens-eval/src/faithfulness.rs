//! Whole-answer faithfulness scoring.

use std::sync::Arc;

use tracing::instrument;

use raglens_core::config::DEFAULT_FAITHFULNESS_THRESHOLD;
use raglens_core::traits::Embedder;
use raglens_core::Result;

use crate::rounding::round_f32;
use crate::similarity::cosine_similarity;

/// Scores how grounded a whole answer is in its whole context.
///
/// The answer and the context are each embedded as one vector and compared
/// with cosine similarity. The carried threshold exists for interface
/// symmetry with [`CitationAttributor`](crate::CitationAttributor) but
/// does not gate the returned value: the raw similarity is always
/// returned, never a boolean.
#[derive(Debug)]
pub struct FaithfulnessScorer {
    embedder: Arc<dyn Embedder>,
    threshold: f32,
}

impl FaithfulnessScorer {
    /// Create a scorer with the default threshold.
    pub fn new(embedder: Arc<dyn Embedder>) -> Self {
        Self::with_threshold(embedder, DEFAULT_FAITHFULNESS_THRESHOLD)
    }

    /// Create a scorer with a custom (non-gating) threshold.
    pub fn with_threshold(embedder: Arc<dyn Embedder>, threshold: f32) -> Self {
        Self {
            embedder,
            threshold,
        }
    }

    /// The carried threshold. Not applied to the returned score.
    #[must_use]
    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Compute the faithfulness score in `[0, 1]`, rounded to 3 decimals.
    ///
    /// Returns `0.0` without any provider call when the context or the
    /// answer is empty or whitespace-only; both would otherwise produce a
    /// degenerate embedding with undefined similarity.
    ///
    /// # Errors
    ///
    /// Propagates the embedding provider's error unchanged.
    #[instrument(skip_all)]
    pub async fn score(&self, answer: &str, context: &str) -> Result<f32> {
        if context.trim().is_empty() || answer.trim().is_empty() {
            return Ok(0.0);
        }

        let answer_embedding = self.embedder.embed(answer).await?;
        let context_embedding = self.embedder.embed(context).await?;

        let score = cosine_similarity(&answer_embedding, &context_embedding)?;
        Ok(round_f32(score, 3))
    }
}
