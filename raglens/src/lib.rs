//! # Raglens - RAG Evaluation Toolkit
//!
//! Raglens measures how well retrieval-augmented answers are grounded in
//! their retrieved context: per-sentence citation attribution,
//! hallucination rate, faithfulness scoring, and side-by-side comparison
//! of multiple models over the same question.
//!
//! ## Quick Start
//!
//! ```rust
//! use raglens::prelude::*;
//!
//! // A retrieved chunk and a query over it
//! let chunk = RetrievedChunk::new("Paris is the capital of France.", 0);
//! let query = Query::new("What is the capital of France?");
//!
//! println!("Chunk: {}", chunk.content);
//! println!("Query: {}", query.text);
//! ```
//!
//! ## Architecture
//!
//! The toolkit is organized into several modules:
//!
//! - **raglens-core**: Core traits, types, configuration, and errors
//! - **raglens-eval**: Grounding algorithms (citations, hallucination,
//!   faithfulness, ROUGE, cost estimation)
//! - **raglens-query**: Query pipeline and cross-model comparison

#![deny(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

// Re-export all public APIs from sub-crates
pub use raglens_core as core;
pub use raglens_eval as eval;
pub use raglens_query as query;

/// Prelude module for convenient imports.
///
/// This module re-exports the most commonly used types and traits
/// from all raglens modules.
pub mod prelude {
    // Re-export core prelude
    pub use raglens_core::prelude::*;

    // Evaluation entry points
    pub use raglens_eval::{
        compute_rouge, cosine_similarity, estimate_cost, hallucination_rate, split_sentences,
        CitationAttributor, Evaluator, FaithfulnessScorer,
    };

    // Pipeline and comparison
    pub use raglens_query::{
        FusionRetriever, ModelComparator, QueryPipeline, SiumaiGenerator, NO_CONTEXT_ANSWER,
    };
}

/// Version information for the raglens toolkit.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
