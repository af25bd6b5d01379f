//! Response generation over the `siumai` unified LLM client.

use async_trait::async_trait;
use futures::StreamExt;
use tracing::{debug, info, instrument};

use raglens_core::traits::{AnswerStream, ResponseGenerator};
use raglens_core::{RaglensError, Result};

use siumai::prelude::*;

/// System prompt used for every generation, shared across models so a
/// comparison varies only the model.
const SYSTEM_PROMPT: &str = "You are a senior research analyst. \
Use ONLY the provided context. \
Do NOT hallucinate. \
If information is missing, say so explicitly.";

/// A response generator backed by the `siumai` unified LLM client.
///
/// One instance corresponds to one model configuration; the comparator
/// constructs one per configured model and runs each against the same
/// context and question.
pub struct SiumaiGenerator {
    client: Siumai,
    config: SiumaiGeneratorConfig,
}

impl std::fmt::Debug for SiumaiGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SiumaiGenerator")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Configuration for a [`SiumaiGenerator`].
#[derive(Debug, Clone)]
pub struct SiumaiGeneratorConfig {
    /// Model identifier reported in run results.
    pub model: String,

    /// Sampling temperature. Zero keeps comparisons deterministic-ish.
    pub temperature: f32,

    /// System prompt prepended to every request.
    pub system_prompt: String,
}

impl Default for SiumaiGeneratorConfig {
    fn default() -> Self {
        Self {
            model: "gpt-4o".to_string(),
            temperature: 0.0,
            system_prompt: SYSTEM_PROMPT.to_string(),
        }
    }
}

impl SiumaiGenerator {
    /// Create a generator with the default configuration.
    pub fn new(client: Siumai) -> Self {
        Self {
            client,
            config: SiumaiGeneratorConfig::default(),
        }
    }

    /// Create a generator with a custom configuration.
    pub fn with_config(client: Siumai, config: SiumaiGeneratorConfig) -> Self {
        Self { client, config }
    }

    fn build_messages(&self, context: &str, question: &str) -> Vec<ChatMessage> {
        let prompt = format!(
            "{}\n\nContext:\n{context}\n\nQuestion:\n{question}",
            self.config.system_prompt
        );
        vec![ChatMessage::user(prompt).build()]
    }
}

/// Map a provider stream event to an answer fragment.
///
/// Only content deltas carry answer text. Thinking deltas, usage updates,
/// and the final aggregated response are dropped: the deltas have already
/// been emitted, so collecting the stream yields the answer exactly once.
fn fragment_from_event(
    event: std::result::Result<ChatStreamEvent, siumai::LlmError>,
) -> Option<Result<String>> {
    match event {
        Ok(ChatStreamEvent::ContentDelta { delta, .. }) => Some(Ok(delta)),
        Ok(_) => None,
        Err(e) => Some(Err(RaglensError::llm(format!("stream error: {e}")))),
    }
}

#[async_trait]
impl ResponseGenerator for SiumaiGenerator {
    #[instrument(skip(self, context, question), fields(model = %self.config.model))]
    async fn generate(&self, context: &str, question: &str) -> Result<String> {
        let messages = self.build_messages(context, question);
        debug!(context_len = context.len(), "sending chat request");

        let response = self
            .client
            .chat(messages)
            .await
            .map_err(|e| RaglensError::llm(format!("generation failed: {e}")))?;

        let content = match &response.content {
            siumai::MessageContent::Text(text) => text.clone(),
            _ => {
                return Err(RaglensError::llm(
                    "unsupported content type in LLM response",
                ))
            }
        };

        info!(answer_len = content.len(), "generated answer");
        Ok(content)
    }

    #[instrument(skip(self, context, question), fields(model = %self.config.model))]
    async fn generate_stream(&self, context: &str, question: &str) -> Result<AnswerStream> {
        let messages = self.build_messages(context, question);

        let stream = self
            .client
            .chat_stream(messages, None)
            .await
            .map_err(|e| RaglensError::llm(format!("streaming generation failed: {e}")))?;

        let fragments =
            stream.filter_map(|event| futures::future::ready(fragment_from_event(event)));

        Ok(Box::pin(fragments))
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }

    fn name(&self) -> &'static str {
        "SiumaiGenerator"
    }

    async fn health_check(&self) -> Result<()> {
        let messages = vec![ChatMessage::user("Hello").build()];
        self.client
            .chat(messages)
            .await
            .map_err(|e| RaglensError::llm(format!("health check failed: {e}")))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = SiumaiGeneratorConfig::default();
        assert_eq!(config.model, "gpt-4o");
        assert!((config.temperature - 0.0).abs() < f32::EPSILON);
        assert!(config.system_prompt.contains("research analyst"));
    }

    #[test]
    fn test_content_delta_becomes_a_fragment() {
        let fragment = fragment_from_event(Ok(ChatStreamEvent::ContentDelta {
            delta: "Paris is ".to_string(),
            index: None,
        }));
        assert_eq!(fragment.unwrap().unwrap(), "Paris is ");
    }

    #[test]
    fn test_thinking_delta_is_dropped() {
        let fragment = fragment_from_event(Ok(ChatStreamEvent::ThinkingDelta {
            delta: "weighing the context".to_string(),
        }));
        assert!(fragment.is_none());
    }

    #[test]
    fn test_stream_end_does_not_repeat_the_answer() {
        // The final event aggregates the full response; emitting it would
        // duplicate every delta already streamed.
        let response = ChatResponse {
            id: Some("resp-1".to_string()),
            content: MessageContent::Text("Paris is the capital.".to_string()),
            model: Some("gpt-4o".to_string()),
            usage: None,
            finish_reason: Some(FinishReason::Stop),
            tool_calls: None,
            thinking: None,
            metadata: std::collections::HashMap::new(),
        };
        let fragment = fragment_from_event(Ok(ChatStreamEvent::StreamEnd { response }));
        assert!(fragment.is_none());
    }
}
