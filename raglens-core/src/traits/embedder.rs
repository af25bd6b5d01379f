//! Embedding generation trait.
//!
//! The grounding subsystem compares texts by cosine similarity between
//! their dense embeddings. This trait is the only path to those vectors;
//! the attributor and scorer take an `Arc<dyn Embedder>` at construction
//! rather than reaching for shared module-level state.

use async_trait::async_trait;

use crate::Result;

/// Generates dense embeddings for text content.
///
/// Implementations are expected to be stateless request/response clients:
/// a single handle may be shared across concurrent requests without
/// locking. Each call is a suspension point and may fail with an embedding
/// error when the provider is unreachable.
///
/// # Examples
///
/// ```rust,no_run
/// use raglens_core::traits::Embedder;
/// use raglens_core::Result;
/// use async_trait::async_trait;
///
/// #[derive(Debug)]
/// struct FixedEmbedder {
///     dimension: usize,
/// }
///
/// #[async_trait]
/// impl Embedder for FixedEmbedder {
///     async fn embed(&self, _text: &str) -> Result<Vec<f32>> {
///         Ok(vec![0.1; self.dimension])
///     }
///
///     async fn embed_batch(&self, texts: Vec<&str>) -> Result<Vec<Vec<f32>>> {
///         Ok(texts.iter().map(|_| vec![0.1; self.dimension]).collect())
///     }
///
///     fn dimension(&self) -> usize {
///         self.dimension
///     }
///
///     fn model_name(&self) -> &str {
///         "fixed-embedder"
///     }
/// }
/// ```
#[async_trait]
pub trait Embedder: Send + Sync + std::fmt::Debug {
    /// Generate an embedding for a single text.
    ///
    /// # Errors
    ///
    /// Returns an error if embedding generation fails due to model issues,
    /// network problems, or invalid input.
    async fn embed(&self, text: &str) -> Result<Vec<f32>>;

    /// Generate embeddings for multiple texts in one call.
    ///
    /// Batch embedding must be all-or-nothing: a partial batch failure is
    /// an error, never a shorter result. Each embedding corresponds to the
    /// text at the same index in the input.
    async fn embed_batch(&self, texts: Vec<&str>) -> Result<Vec<Vec<f32>>>;

    /// Dimension of the embeddings produced by this embedder.
    fn dimension(&self) -> usize;

    /// Name/identifier of the embedding model.
    fn model_name(&self) -> &str;

    /// Human-readable name for this embedder.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Check if the embedder is healthy and ready to generate embeddings.
    async fn health_check(&self) -> Result<()> {
        Ok(())
    }
}
