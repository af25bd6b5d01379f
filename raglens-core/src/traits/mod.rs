//! Core traits for external collaborators.
//!
//! The evaluation core never talks to a provider directly: embedding,
//! retrieval, generation, and document loading all sit behind the traits in
//! this module so deterministic implementations can be substituted in
//! tests.

pub mod embedder;
pub mod generator;
pub mod loader;
pub mod retriever;

pub use embedder::Embedder;
pub use generator::{AnswerStream, ResponseGenerator};
pub use loader::{FallbackLoader, Loader};
pub use retriever::Retriever;
