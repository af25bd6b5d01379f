//! # Raglens Query
//!
//! Pipeline composition and cross-model comparison for raglens.
//!
//! This crate wires the external collaborators (retriever, generators)
//! together with the grounding core from `raglens-eval`:
//!
//! - [`QueryPipeline`] runs retrieve → context assembly → timed generation
//!   for one model, with a streaming variant
//! - [`ModelComparator`] runs every configured model against the same
//!   retrieved context, scores each run, and builds the comparison report
//! - [`SiumaiGenerator`] is a concrete generator over the `siumai` unified
//!   LLM client
//! - [`FusionRetriever`] fuses two retrievers and de-duplicates by content

#![deny(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod comparator;
pub mod generator;
pub mod pipeline;
pub mod retriever;

pub use comparator::ModelComparator;
pub use generator::{SiumaiGenerator, SiumaiGeneratorConfig};
pub use pipeline::{build_context, PipelineRun, QueryPipeline, QueryPipelineConfig, NO_CONTEXT_ANSWER};
pub use retriever::FusionRetriever;
