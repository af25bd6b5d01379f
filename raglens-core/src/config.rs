//! Configuration for evaluation runs.
//!
//! All thresholds and knobs live here rather than as module-level globals,
//! so a deterministic configuration can be injected in tests and the same
//! components can run with different settings per request.

use serde::{Deserialize, Serialize};

use crate::error::{RaglensError, Result};

/// Default similarity threshold for per-sentence citation attribution.
pub const DEFAULT_CITATION_THRESHOLD: f32 = 0.78;

/// Default similarity threshold carried by the faithfulness scorer.
pub const DEFAULT_FAITHFULNESS_THRESHOLD: f32 = 0.75;

/// Thresholds for the grounding subsystem.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GroundingConfig {
    /// A chunk supports a sentence iff their similarity reaches this value.
    pub citation_threshold: f32,

    /// Threshold carried by the faithfulness scorer. Accepted for
    /// interface symmetry with citation attribution; the raw similarity is
    /// returned either way.
    pub faithfulness_threshold: f32,
}

impl Default for GroundingConfig {
    fn default() -> Self {
        Self {
            citation_threshold: DEFAULT_CITATION_THRESHOLD,
            faithfulness_threshold: DEFAULT_FAITHFULNESS_THRESHOLD,
        }
    }
}

/// Retrieval settings for evaluation runs.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RetrievalConfig {
    /// Number of chunks to retrieve per question.
    pub top_k: usize,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            top_k: crate::types::DEFAULT_TOP_K,
        }
    }
}

/// Top-level configuration for a comparison run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct RaglensConfig {
    /// Grounding thresholds.
    pub grounding: GroundingConfig,

    /// Retrieval settings.
    pub retrieval: RetrievalConfig,

    /// Models to compare, in order. The first model is the pairwise
    /// comparison reference.
    pub models: Vec<String>,
}

impl RaglensConfig {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when a threshold is outside `(0, 1]`
    /// or `top_k` is zero. An empty model list is allowed here; the
    /// comparator rejects it at run time.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("citation_threshold", self.grounding.citation_threshold),
            ("faithfulness_threshold", self.grounding.faithfulness_threshold),
        ] {
            if !(value > 0.0 && value <= 1.0) {
                return Err(RaglensError::configuration(format!(
                    "{name} must be in (0, 1], got {value}"
                )));
            }
        }

        if self.retrieval.top_k == 0 {
            return Err(RaglensError::configuration("top_k must be at least 1"));
        }

        Ok(())
    }
}
