//! Prelude module for convenient imports.
//!
//! ```rust
//! use raglens_core::prelude::*;
//! ```

pub use crate::config::{
    GroundingConfig, RaglensConfig, RetrievalConfig, DEFAULT_CITATION_THRESHOLD,
    DEFAULT_FAITHFULNESS_THRESHOLD,
};
pub use crate::error::{RaglensError, Result};
pub use crate::traits::{
    AnswerStream, Embedder, FallbackLoader, Loader, ResponseGenerator, Retriever,
};
pub use crate::types::{
    AnswerSentence, CitationRecord, ComparisonReport, EvaluationMetrics, ModelRun,
    PairwiseComparison, Query, RetrievedChunk, RougeScores, RunResult, SourceDocument,
    DEFAULT_TOP_K,
};
