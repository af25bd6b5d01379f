//! Retriever fusion with content de-duplication.

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, instrument};

use raglens_core::traits::Retriever;
use raglens_core::types::{Query, RetrievedChunk};
use raglens_core::Result;

/// Fuses two retrievers (typically keyword and semantic) into one ranked,
/// de-duplicated list.
///
/// Both inner retrievers are queried with the same query; their results
/// are concatenated first-retriever-first, de-duplicated by trimmed
/// content, re-numbered to the fused order, and truncated to the query's
/// `top_k`.
#[derive(Debug)]
pub struct FusionRetriever {
    first: Arc<dyn Retriever>,
    second: Arc<dyn Retriever>,
}

impl FusionRetriever {
    /// Create a fusion retriever. `first` takes precedence on duplicates.
    pub fn new(first: Arc<dyn Retriever>, second: Arc<dyn Retriever>) -> Self {
        Self { first, second }
    }
}

#[async_trait]
impl Retriever for FusionRetriever {
    #[instrument(skip(self, query), fields(top_k = query.top_k))]
    async fn retrieve(&self, query: &Query) -> Result<Vec<RetrievedChunk>> {
        let first = self.first.retrieve(query).await?;
        let second = self.second.retrieve(query).await?;
        debug!(
            first = first.len(),
            second = second.len(),
            "fusing retriever results"
        );

        let mut seen: HashSet<String> = HashSet::new();
        let mut fused = Vec::new();

        for mut chunk in first.into_iter().chain(second) {
            if fused.len() >= query.top_k {
                break;
            }
            let content = chunk.content.trim().to_string();
            if seen.insert(content) {
                chunk.position = fused.len();
                fused.push(chunk);
            }
        }

        Ok(fused)
    }

    fn name(&self) -> &'static str {
        "FusionRetriever"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct StaticRetriever(Vec<&'static str>);

    #[async_trait]
    impl Retriever for StaticRetriever {
        async fn retrieve(&self, _query: &Query) -> Result<Vec<RetrievedChunk>> {
            Ok(self
                .0
                .iter()
                .enumerate()
                .map(|(i, text)| RetrievedChunk::new(*text, i))
                .collect())
        }
    }

    #[tokio::test]
    async fn test_fusion_dedup_and_order() {
        let fusion = FusionRetriever::new(
            Arc::new(StaticRetriever(vec!["alpha", "beta"])),
            Arc::new(StaticRetriever(vec!["beta", "gamma"])),
        );

        let chunks = fusion.retrieve(&Query::new("q").with_top_k(5)).await.unwrap();
        let contents: Vec<&str> = chunks.iter().map(|c| c.content.as_str()).collect();
        assert_eq!(contents, vec!["alpha", "beta", "gamma"]);

        // Positions are reassigned to the fused order.
        for (i, chunk) in chunks.iter().enumerate() {
            assert_eq!(chunk.position, i);
        }
    }

    #[tokio::test]
    async fn test_fusion_respects_top_k() {
        let fusion = FusionRetriever::new(
            Arc::new(StaticRetriever(vec!["a", "b", "c"])),
            Arc::new(StaticRetriever(vec!["d", "e"])),
        );

        let chunks = fusion.retrieve(&Query::new("q").with_top_k(2)).await.unwrap();
        assert_eq!(chunks.len(), 2);
    }

    #[tokio::test]
    async fn test_fusion_top_k_zero_returns_nothing() {
        let fusion = FusionRetriever::new(
            Arc::new(StaticRetriever(vec!["a", "b"])),
            Arc::new(StaticRetriever(vec!["c"])),
        );

        let chunks = fusion.retrieve(&Query::new("q").with_top_k(0)).await.unwrap();
        assert!(chunks.is_empty());
    }

    #[tokio::test]
    async fn test_fusion_dedup_ignores_surrounding_whitespace() {
        let fusion = FusionRetriever::new(
            Arc::new(StaticRetriever(vec!["alpha"])),
            Arc::new(StaticRetriever(vec!["  alpha  "])),
        );

        let chunks = fusion.retrieve(&Query::new("q").with_top_k(5)).await.unwrap();
        assert_eq!(chunks.len(), 1);
    }
}
