//! # Raglens Core
//!
//! Core traits, types, and interfaces for the raglens RAG evaluation toolkit.
//!
//! This crate provides the foundational building blocks shared by the
//! evaluation and query crates:
//!
//! - **Data structures**: `RetrievedChunk`, `Query`, `CitationRecord`,
//!   `EvaluationMetrics`, `RunResult` and comparison report types
//! - **Core traits**: `Embedder`, `Retriever`, `ResponseGenerator`, `Loader`
//! - **Configuration**: serde-deserializable configuration with validation
//! - **Error handling**: a single error enum covering provider, input, and
//!   pipeline failures
//!
//! ## Quick Start
//!
//! ```rust
//! use raglens_core::prelude::*;
//!
//! let chunk = RetrievedChunk::new("Paris is the capital of France.", 0)
//!     .with_source("https://example.com/paris");
//!
//! let query = Query::new("What is the capital of France?").with_top_k(5);
//!
//! assert_eq!(chunk.position, 0);
//! assert_eq!(query.top_k, 5);
//! ```
//!
//! ## Architecture
//!
//! Every external service the evaluation core touches sits behind a trait:
//!
//! - **Embedders** turn text into dense vectors for similarity scoring
//! - **Retrievers** return ranked chunks for a question
//! - **Response generators** produce answers from a context string
//! - **Loaders** acquire source documents from URLs, with an explicit
//!   primary-then-fallback composition

#![deny(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod prelude;

pub mod config;
pub mod error;
pub mod traits;
pub mod types;

pub use error::{RaglensError, Result};
pub use types::{
    AnswerSentence, CitationRecord, ComparisonReport, EvaluationMetrics, ModelRun,
    PairwiseComparison, Query, RetrievedChunk, RougeScores, RunResult, SourceDocument,
};

pub use traits::*;

/// Version information for the raglens core library.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Name of the raglens core library.
pub const NAME: &str = env!("CARGO_PKG_NAME");
