//! Per-sentence citation attribution.

use std::sync::Arc;

use futures::future::try_join_all;
use tracing::{debug, instrument};

use raglens_core::config::DEFAULT_CITATION_THRESHOLD;
use raglens_core::traits::Embedder;
use raglens_core::types::{CitationRecord, RetrievedChunk};
use raglens_core::Result;

use crate::rounding::round_f32;
use crate::segmenter::split_sentences;
use crate::similarity::cosine_similarity;

/// Attributes each answer sentence to the retrieved chunks that
/// semantically support it.
///
/// The attributor embeds all chunk texts in one batch call and each
/// sentence individually, so the embedding cost is O(sentences + chunks)
/// calls rather than O(sentences × chunks). Query and document texts may
/// take different encoding paths in the provider, which is why sentences
/// are not folded into the batch.
///
/// Thresholding on raw semantic similarity rather than lexical overlap is
/// what lets attribution survive paraphrase: a sentence restating a chunk
/// in different words still clears the threshold.
///
/// Attribution is all-or-nothing: if any embedding call fails, the whole
/// attribution fails and the provider error propagates. No partial or
/// degraded result is fabricated.
#[derive(Debug)]
pub struct CitationAttributor {
    embedder: Arc<dyn Embedder>,
    threshold: f32,
}

impl CitationAttributor {
    /// Create an attributor with the default threshold.
    pub fn new(embedder: Arc<dyn Embedder>) -> Self {
        Self::with_threshold(embedder, DEFAULT_CITATION_THRESHOLD)
    }

    /// Create an attributor with a custom support threshold.
    pub fn with_threshold(embedder: Arc<dyn Embedder>, threshold: f32) -> Self {
        Self {
            embedder,
            threshold,
        }
    }

    /// The similarity threshold a chunk must reach to count as support.
    #[must_use]
    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Attribute each sentence of `answer` to its supporting chunks.
    ///
    /// Returns one [`CitationRecord`] per sentence, in sentence order. A
    /// chunk index appears in a record's citation set iff its similarity
    /// to the sentence reaches the threshold; `max_score` records the
    /// highest similarity observed either way, rounded to 3 decimals.
    ///
    /// An answer with no sentences yields an empty vector. An empty chunk
    /// list yields one unsupported record per sentence without any
    /// provider call.
    ///
    /// # Errors
    ///
    /// Propagates the embedding provider's error unchanged when any call
    /// fails.
    #[instrument(skip(self, answer, chunks), fields(chunks = chunks.len()))]
    pub async fn attribute(
        &self,
        answer: &str,
        chunks: &[RetrievedChunk],
    ) -> Result<Vec<CitationRecord>> {
        let sentences = split_sentences(answer);
        if sentences.is_empty() {
            return Ok(Vec::new());
        }

        if chunks.is_empty() {
            return Ok(sentences
                .into_iter()
                .map(|sentence| CitationRecord::new(sentence, Vec::new(), 0.0))
                .collect());
        }

        let chunk_texts: Vec<&str> = chunks.iter().map(|c| c.content.as_str()).collect();
        let chunk_embeddings = self.embedder.embed_batch(chunk_texts).await?;
        debug!(
            sentences = sentences.len(),
            "embedded chunk batch, embedding sentences"
        );

        // Index-ordered join: completion order cannot reorder the records.
        let sentence_embeddings =
            try_join_all(sentences.iter().map(|s| self.embedder.embed(s))).await?;

        let mut records = Vec::with_capacity(sentences.len());
        for (sentence, sentence_embedding) in sentences.into_iter().zip(sentence_embeddings) {
            let mut citations = Vec::new();
            let mut max_score = f32::NEG_INFINITY;

            for (index, chunk_embedding) in chunk_embeddings.iter().enumerate() {
                let score = cosine_similarity(&sentence_embedding, chunk_embedding)?;
                if score > max_score {
                    max_score = score;
                }
                if score >= self.threshold {
                    citations.push(index);
                }
            }

            records.push(CitationRecord::new(
                sentence,
                citations,
                round_f32(max_score, 3),
            ));
        }

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Maps texts to fixed unit vectors by keyword so tests can dial in
    /// exact similarities.
    #[derive(Debug, Default)]
    struct KeywordEmbedder {
        embed_calls: AtomicUsize,
        batch_calls: AtomicUsize,
    }

    impl KeywordEmbedder {
        fn vector_for(text: &str) -> Vec<f32> {
            if text.contains("capital") {
                vec![1.0, 0.0]
            } else if text.contains("Eiffel") {
                vec![0.0, 1.0]
            } else {
                // Roughly equidistant from both topics, below threshold.
                vec![0.5, 0.5]
            }
        }
    }

    #[async_trait]
    impl Embedder for KeywordEmbedder {
        async fn embed(&self, text: &str) -> Result<Vec<f32>> {
            self.embed_calls.fetch_add(1, Ordering::SeqCst);
            Ok(Self::vector_for(text))
        }

        async fn embed_batch(&self, texts: Vec<&str>) -> Result<Vec<Vec<f32>>> {
            self.batch_calls.fetch_add(1, Ordering::SeqCst);
            Ok(texts.into_iter().map(Self::vector_for).collect())
        }

        fn dimension(&self) -> usize {
            2
        }

        fn model_name(&self) -> &str {
            "keyword-embedder"
        }
    }

    fn chunks(texts: &[&str]) -> Vec<RetrievedChunk> {
        texts
            .iter()
            .enumerate()
            .map(|(i, t)| RetrievedChunk::new(*t, i))
            .collect()
    }

    #[tokio::test]
    async fn test_record_per_sentence_in_order() {
        let embedder = Arc::new(KeywordEmbedder::default());
        let attributor = CitationAttributor::new(embedder);
        let chunks = chunks(&["the capital chunk", "the Eiffel chunk"]);

        let answer = "Paris is the capital of France. It has the Eiffel Tower.";
        let records = attributor.attribute(answer, &chunks).await.unwrap();

        let sentences = split_sentences(answer);
        assert_eq!(records.len(), sentences.len());
        for (record, sentence) in records.iter().zip(&sentences) {
            assert_eq!(&record.sentence, sentence);
        }
    }

    #[tokio::test]
    async fn test_one_batch_call_plus_one_call_per_sentence() {
        // One batch call for chunks, one single call per sentence.
        let embedder = Arc::new(KeywordEmbedder::default());
        let attributor = CitationAttributor::new(embedder.clone());
        let chunks = chunks(&["the capital chunk", "the Eiffel chunk", "filler"]);

        let answer = "The capital is Paris. The Eiffel Tower stands there. Filler!";
        attributor.attribute(answer, &chunks).await.unwrap();

        assert_eq!(embedder.batch_calls.load(Ordering::SeqCst), 1);
        assert_eq!(embedder.embed_calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_empty_answer_no_provider_calls() {
        let embedder = Arc::new(KeywordEmbedder::default());
        let attributor = CitationAttributor::new(embedder.clone());
        let chunks = chunks(&["the capital chunk"]);

        let records = attributor.attribute("   ", &chunks).await.unwrap();
        assert!(records.is_empty());
        assert_eq!(embedder.batch_calls.load(Ordering::SeqCst), 0);
        assert_eq!(embedder.embed_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_empty_chunk_list_no_provider_calls() {
        let embedder = Arc::new(KeywordEmbedder::default());
        let attributor = CitationAttributor::new(embedder.clone());

        let records = attributor.attribute("One sentence.", &[]).await.unwrap();
        assert_eq!(records.len(), 1);
        assert!(records[0].citations.is_empty());
        assert!((records[0].max_score - 0.0).abs() < f32::EPSILON);
        assert_eq!(embedder.batch_calls.load(Ordering::SeqCst), 0);
        assert_eq!(embedder.embed_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_provider_failure_propagates() {
        #[derive(Debug)]
        struct FailingEmbedder;

        #[async_trait]
        impl Embedder for FailingEmbedder {
            async fn embed(&self, _text: &str) -> Result<Vec<f32>> {
                Err(raglens_core::RaglensError::embedding("provider down"))
            }

            async fn embed_batch(&self, _texts: Vec<&str>) -> Result<Vec<Vec<f32>>> {
                Err(raglens_core::RaglensError::embedding("provider down"))
            }

            fn dimension(&self) -> usize {
                2
            }

            fn model_name(&self) -> &str {
                "failing-embedder"
            }
        }

        let attributor = CitationAttributor::new(Arc::new(FailingEmbedder));
        let chunks = chunks(&["a chunk"]);
        let err = attributor.attribute("A sentence.", &chunks).await.unwrap_err();
        assert!(matches!(err, raglens_core::RaglensError::Embedding { .. }));
    }
}
