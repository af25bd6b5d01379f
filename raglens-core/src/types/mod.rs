//! Core data types for the raglens toolkit.
//!
//! This module contains the data structures that flow through an evaluation
//! run: source documents and retrieved chunks, queries, per-sentence
//! citation records, aggregate metrics, and the per-model run results that
//! feed the comparison report.

pub mod chunk;
pub mod citation;
pub mod metrics;
pub mod query;
pub mod run;

// Re-export all types for convenience
pub use chunk::*;
pub use citation::*;
pub use metrics::*;
pub use query::*;
pub use run::*;
