//! Response generation trait for LLM integration.

use async_trait::async_trait;
use futures::Stream;
use std::pin::Pin;

use crate::Result;

/// A lazy, single-pass sequence of answer fragments.
///
/// The stream is finite and not restartable. Dropping it cancels fragment
/// production without buffering unread fragments.
pub type AnswerStream = Pin<Box<dyn Stream<Item = Result<String>> + Send>>;

/// Generates an answer from a context string and a question.
///
/// One generator instance corresponds to one model configuration; the run
/// orchestrator invokes each configured generator against the same context
/// and question to produce a controlled comparison.
///
/// # Examples
///
/// ```rust,no_run
/// use raglens_core::traits::{AnswerStream, ResponseGenerator};
/// use raglens_core::Result;
/// use async_trait::async_trait;
///
/// #[derive(Debug)]
/// struct EchoGenerator;
///
/// #[async_trait]
/// impl ResponseGenerator for EchoGenerator {
///     async fn generate(&self, _context: &str, question: &str) -> Result<String> {
///         Ok(format!("You asked: {question}"))
///     }
///
///     async fn generate_stream(&self, context: &str, question: &str) -> Result<AnswerStream> {
///         let answer = self.generate(context, question).await?;
///         Ok(Box::pin(futures::stream::once(async move { Ok(answer) })))
///     }
///
///     fn model_name(&self) -> &str {
///         "echo"
///     }
/// }
/// ```
#[async_trait]
pub trait ResponseGenerator: Send + Sync + std::fmt::Debug {
    /// Generate a complete answer for the question, grounded in `context`.
    ///
    /// # Errors
    ///
    /// Returns an LLM error when the provider is unreachable or rejects
    /// the request.
    async fn generate(&self, context: &str, question: &str) -> Result<String>;

    /// Generate the answer as an incremental fragment stream.
    async fn generate_stream(&self, context: &str, question: &str) -> Result<AnswerStream>;

    /// Identifier of the underlying model (used as the run's model label).
    fn model_name(&self) -> &str;

    /// Human-readable name for this generator.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Check if the generator is healthy and ready to generate answers.
    async fn health_check(&self) -> Result<()> {
        Ok(())
    }
}
