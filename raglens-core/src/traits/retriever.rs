//! Retrieval trait.

use async_trait::async_trait;

use crate::types::{Query, RetrievedChunk};
use crate::Result;

/// Retrieves relevant chunks for a query.
///
/// Implementations can use vector search, keyword search, or a fusion of
/// both; the evaluation core only depends on receiving an ordered,
/// de-duplicated chunk list. Citation indices reference positions in that
/// list, so the order returned here is externally observable.
#[async_trait]
pub trait Retriever: Send + Sync + std::fmt::Debug {
    /// Retrieve chunks for a query, most relevant first, respecting the
    /// query's `top_k`.
    ///
    /// # Errors
    ///
    /// Returns a retrieval error when the underlying store is unreachable.
    /// An empty result is not an error.
    async fn retrieve(&self, query: &Query) -> Result<Vec<RetrievedChunk>>;

    /// Human-readable name for this retriever.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
