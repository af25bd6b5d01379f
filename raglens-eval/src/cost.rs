//! Rough token and cost estimation per model run.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::rounding::round_f64;

/// Very rough token estimation: ~4 characters per token, minimum 1.
#[must_use]
pub fn estimate_tokens(text: &str) -> usize {
    (text.len() / 4).max(1)
}

/// Token counts and blended USD cost for one generation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CostEstimate {
    /// Estimated tokens in the context sent to the model.
    pub input_tokens: usize,

    /// Estimated tokens in the generated answer.
    pub output_tokens: usize,

    /// Sum of input and output tokens.
    pub total_tokens: usize,

    /// Blended cost in USD, rounded to 6 decimals.
    pub cost_usd: f64,
}

/// Per-1K-token blended costs (input + output) in USD, by model.
///
/// Unknown models cost `0.0` rather than erroring, so cost display
/// degrades gracefully for models without a table entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CostTable {
    per_1k_usd: HashMap<String, f64>,
}

impl Default for CostTable {
    fn default() -> Self {
        let mut per_1k_usd = HashMap::new();
        per_1k_usd.insert("gpt-4o".to_string(), 0.005);
        per_1k_usd.insert("gpt-3.5-turbo".to_string(), 0.0015);
        Self { per_1k_usd }
    }
}

impl CostTable {
    /// An empty cost table.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            per_1k_usd: HashMap::new(),
        }
    }

    /// Add or replace a model's per-1K-token cost.
    #[must_use]
    pub fn with_model<S: Into<String>>(mut self, model: S, per_1k_usd: f64) -> Self {
        self.per_1k_usd.insert(model.into(), per_1k_usd);
        self
    }

    /// Per-1K-token cost for a model, `0.0` when unknown.
    #[must_use]
    pub fn per_1k(&self, model: &str) -> f64 {
        self.per_1k_usd.get(model).copied().unwrap_or(0.0)
    }
}

/// Estimate the blended cost of one generation.
#[must_use]
pub fn estimate_cost(context: &str, answer: &str, model: &str, table: &CostTable) -> CostEstimate {
    let input_tokens = estimate_tokens(context);
    let output_tokens = estimate_tokens(answer);
    let total_tokens = input_tokens + output_tokens;

    #[allow(clippy::cast_precision_loss)]
    let cost_usd = round_f64(total_tokens as f64 / 1000.0 * table.per_1k(model), 6);

    CostEstimate {
        input_tokens,
        output_tokens,
        total_tokens,
        cost_usd,
    }
}
