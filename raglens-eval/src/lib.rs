//! # Raglens Eval
//!
//! The grounding and citation-scoring core of raglens.
//!
//! Given a generated answer and the retrieved chunks it was produced from,
//! this crate computes:
//!
//! - a per-sentence attribution of which chunks semantically support each
//!   sentence ([`CitationAttributor`])
//! - an aggregate hallucination rate ([`hallucination_rate`])
//! - a whole-answer faithfulness score ([`FaithfulnessScorer`])
//! - combined per-run metrics ([`Evaluator`])
//! - lexical overlap ([`compute_rouge`]) and cost estimates
//!   ([`cost::estimate_cost`]) for cross-model comparison
//!
//! All semantic scores come from cosine similarity between embeddings, not
//! from string matching, so attribution survives paraphrase. Every
//! component takes its [`Embedder`](raglens_core::traits::Embedder) by
//! constructor injection; there is no shared module-level provider state.

#![deny(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod citation;
pub mod cost;
pub mod evaluator;
pub mod faithfulness;
pub mod hallucination;
pub mod rouge;
pub mod rounding;
pub mod segmenter;
pub mod similarity;

pub use citation::CitationAttributor;
pub use cost::{estimate_cost, estimate_tokens, CostEstimate, CostTable};
pub use evaluator::{compression_ratio, Evaluator};
pub use faithfulness::FaithfulnessScorer;
pub use hallucination::hallucination_rate;
pub use rouge::compute_rouge;
pub use rounding::{round_f32, round_f64};
pub use segmenter::{number_sentences, split_sentences};
pub use similarity::cosine_similarity;
