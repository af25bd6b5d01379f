//! Single-model query pipeline: retrieve, assemble context, generate.

use std::sync::Arc;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use raglens_core::traits::{AnswerStream, ResponseGenerator, Retriever};
use raglens_core::types::{Query, RetrievedChunk, DEFAULT_TOP_K};
use raglens_core::{RaglensError, Result};

/// Canned answer returned when retrieval produces no chunks.
pub const NO_CONTEXT_ANSWER: &str = "No relevant context found. Try refining your question.";

/// Everything one pipeline run produces for scoring.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PipelineRun {
    /// The generated answer.
    pub answer: String,

    /// The context string the answer was generated from.
    pub context: String,

    /// Generation latency in seconds (generation call only, unrounded).
    pub latency_sec: f64,

    /// The retrieved chunks, in retrieval order.
    pub chunks: Vec<RetrievedChunk>,
}

/// Configuration for a query pipeline.
#[derive(Debug, Clone, Copy)]
pub struct QueryPipelineConfig {
    /// Number of chunks to retrieve per question.
    pub top_k: usize,
}

impl Default for QueryPipelineConfig {
    fn default() -> Self {
        Self { top_k: DEFAULT_TOP_K }
    }
}

/// Runs one model's RAG pipeline: retrieve chunks, build the context
/// string, generate the answer, and measure generation latency.
///
/// Latency covers the generation call only, not retrieval, so cross-model
/// comparisons over the same retriever measure the models rather than the
/// store.
#[derive(Debug)]
pub struct QueryPipeline {
    retriever: Arc<dyn Retriever>,
    generator: Arc<dyn ResponseGenerator>,
    config: QueryPipelineConfig,
}

impl QueryPipeline {
    /// Create a pipeline with the default configuration.
    pub fn new(retriever: Arc<dyn Retriever>, generator: Arc<dyn ResponseGenerator>) -> Self {
        Self::with_config(retriever, generator, QueryPipelineConfig::default())
    }

    /// Create a pipeline with a custom configuration.
    pub fn with_config(
        retriever: Arc<dyn Retriever>,
        generator: Arc<dyn ResponseGenerator>,
        config: QueryPipelineConfig,
    ) -> Self {
        Self {
            retriever,
            generator,
            config,
        }
    }

    /// Run the full pipeline for one question.
    ///
    /// When retrieval returns no chunks the pipeline short-circuits with
    /// the canned [`NO_CONTEXT_ANSWER`], an empty context, zero latency,
    /// and no generator call.
    ///
    /// # Errors
    ///
    /// Rejects an empty question with a validation error; otherwise
    /// propagates retrieval and generation errors unchanged.
    #[instrument(skip(self), fields(model = self.generator.model_name()))]
    pub async fn run(&self, question: &str) -> Result<PipelineRun> {
        let chunks = self.retrieve(question).await?;
        if chunks.is_empty() {
            info!("no chunks retrieved, skipping generation");
            return Ok(PipelineRun {
                answer: NO_CONTEXT_ANSWER.to_string(),
                context: String::new(),
                latency_sec: 0.0,
                chunks,
            });
        }

        let context = build_context(&chunks);
        debug!(context_len = context.len(), "assembled context");

        let start = Instant::now();
        let answer = self.generator.generate(&context, question).await?;
        let latency_sec = start.elapsed().as_secs_f64();

        Ok(PipelineRun {
            answer,
            context,
            latency_sec,
            chunks,
        })
    }

    /// Run the pipeline with a streaming answer.
    ///
    /// Returns a lazy, single-pass fragment stream; dropping it abandons
    /// generation. The no-context short-circuit yields the canned answer
    /// as a single fragment.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`run`](Self::run).
    #[instrument(skip(self), fields(model = self.generator.model_name()))]
    pub async fn run_stream(&self, question: &str) -> Result<AnswerStream> {
        let chunks = self.retrieve(question).await?;
        if chunks.is_empty() {
            info!("no chunks retrieved, streaming canned answer");
            return Ok(Box::pin(futures::stream::once(async {
                Ok(NO_CONTEXT_ANSWER.to_string())
            })));
        }

        let context = build_context(&chunks);
        self.generator.generate_stream(&context, question).await
    }

    async fn retrieve(&self, question: &str) -> Result<Vec<RetrievedChunk>> {
        if question.trim().is_empty() {
            return Err(RaglensError::validation("question must not be empty"));
        }

        let query = Query::new(question).with_top_k(self.config.top_k);
        self.retriever.retrieve(&query).await
    }
}

/// Join non-empty chunk contents with blank lines into one context string.
#[must_use]
pub fn build_context(chunks: &[RetrievedChunk]) -> String {
    chunks
        .iter()
        .map(|chunk| chunk.content.as_str())
        .filter(|content| !content.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use futures::StreamExt;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug)]
    struct StaticRetriever {
        chunks: Vec<RetrievedChunk>,
    }

    #[async_trait]
    impl Retriever for StaticRetriever {
        async fn retrieve(&self, query: &Query) -> Result<Vec<RetrievedChunk>> {
            Ok(self.chunks.iter().take(query.top_k).cloned().collect())
        }
    }

    #[derive(Debug, Default)]
    struct RecordingGenerator {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl ResponseGenerator for RecordingGenerator {
        async fn generate(&self, context: &str, question: &str) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(format!("ctx[{}] q[{question}]", context.len()))
        }

        async fn generate_stream(&self, context: &str, question: &str) -> Result<AnswerStream> {
            let answer = self.generate(context, question).await?;
            Ok(Box::pin(futures::stream::iter(
                answer
                    .split_whitespace()
                    .map(|word| Ok(word.to_string()))
                    .collect::<Vec<_>>(),
            )))
        }

        fn model_name(&self) -> &str {
            "recording-model"
        }
    }

    fn chunks() -> Vec<RetrievedChunk> {
        vec![
            RetrievedChunk::new("first chunk", 0),
            RetrievedChunk::new("second chunk", 1),
        ]
    }

    #[tokio::test]
    async fn test_run_assembles_context() {
        let generator = Arc::new(RecordingGenerator::default());
        let pipeline = QueryPipeline::new(
            Arc::new(StaticRetriever { chunks: chunks() }),
            generator.clone(),
        );

        let run = pipeline.run("a question").await.unwrap();
        assert_eq!(run.context, "first chunk\n\nsecond chunk");
        assert_eq!(run.chunks.len(), 2);
        assert!(run.answer.contains("q[a question]"));
        assert_eq!(generator.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_empty_retrieval_short_circuits() {
        let generator = Arc::new(RecordingGenerator::default());
        let pipeline = QueryPipeline::new(
            Arc::new(StaticRetriever { chunks: vec![] }),
            generator.clone(),
        );

        let run = pipeline.run("a question").await.unwrap();
        assert_eq!(run.answer, NO_CONTEXT_ANSWER);
        assert!(run.context.is_empty());
        assert!(run.chunks.is_empty());
        assert!((run.latency_sec - 0.0).abs() < f64::EPSILON);
        // Generator is never invoked without context.
        assert_eq!(generator.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_empty_question_rejected() {
        let pipeline = QueryPipeline::new(
            Arc::new(StaticRetriever { chunks: chunks() }),
            Arc::new(RecordingGenerator::default()),
        );

        let err = pipeline.run("  ").await.unwrap_err();
        assert!(matches!(err, RaglensError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_run_stream_yields_fragments() {
        let pipeline = QueryPipeline::new(
            Arc::new(StaticRetriever { chunks: chunks() }),
            Arc::new(RecordingGenerator::default()),
        );

        let stream = pipeline.run_stream("a question").await.unwrap();
        let fragments: Vec<String> = stream.map(Result::unwrap).collect().await;
        assert!(!fragments.is_empty());
    }

    #[tokio::test]
    async fn test_run_stream_no_context_yields_canned_answer() {
        let pipeline = QueryPipeline::new(
            Arc::new(StaticRetriever { chunks: vec![] }),
            Arc::new(RecordingGenerator::default()),
        );

        let stream = pipeline.run_stream("a question").await.unwrap();
        let fragments: Vec<String> = stream.map(Result::unwrap).collect().await;
        assert_eq!(fragments, vec![NO_CONTEXT_ANSWER.to_string()]);
    }

    #[test]
    fn test_build_context_skips_empty_chunks() {
        let chunks = vec![
            RetrievedChunk::new("first", 0),
            RetrievedChunk::new("", 1),
            RetrievedChunk::new("third", 2),
        ];
        assert_eq!(build_context(&chunks), "first\n\nthird");
    }
}
