//! Groq chat-completions provider (OpenAI-compatible API).

use super::{ChatProvider, ProviderError};
use crate::config::GroqConfig;
use crate::dtos::ChatMessage;
use async_trait::async_trait;
use axum::http::StatusCode;
use reqwest::Client;
use secrecy::ExposeSecret;
use serde::Serialize;
use serde_json::Value;
use service_core::observability::TracedClientExt;

pub const DEFAULT_GROQ_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";

pub const MODEL: &str = "openai/gpt-oss-20b";
const MAX_COMPLETION_TOKENS: u32 = 1024;
const TEMPERATURE: f64 = 0.7;
const TOP_P: f64 = 1.0;
const REASONING_EFFORT: &str = "medium";

pub struct GroqChatProvider {
    config: GroqConfig,
    client: Client,
}

impl GroqChatProvider {
    /// Uses reqwest's default timeouts.
    pub fn new(config: GroqConfig) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }
}

#[async_trait]
impl ChatProvider for GroqChatProvider {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, ProviderError> {
        let request = ChatCompletionRequest {
            model: MODEL,
            messages,
            max_completion_tokens: MAX_COMPLETION_TOKENS,
            temperature: TEMPERATURE,
            top_p: TOP_P,
            stream: false,
            reasoning_effort: REASONING_EFFORT,
        };

        tracing::debug!(
            model = MODEL,
            message_count = messages.len(),
            "Sending request to Groq API"
        );

        let response = self
            .client
            .traced_post(&self.config.api_url)
            .bearer_auth(self.config.api_key.expose_secret())
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ProviderError::Network(format!("Failed to read response body: {}", e)))?;

        if status != StatusCode::OK {
            tracing::warn!(status = %status, "Groq API returned an error");
            return Err(ProviderError::Upstream { status, body });
        }

        extract_content(&body)
    }
}

/// Pull `choices[0].message.content` out of a completion body.
///
/// Any missing, null or wrong-typed field along the path yields an empty
/// string; only a body that is not JSON at all is an error.
pub fn extract_content(body: &str) -> Result<String, ProviderError> {
    let parsed: Value = serde_json::from_str(body)
        .map_err(|e| ProviderError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

    Ok(parsed
        .get("choices")
        .and_then(Value::as_array)
        .and_then(|choices| choices.first())
        .and_then(|choice| choice.get("message"))
        .and_then(|message| message.get("content"))
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string())
}

// ============================================================================
// Groq API Request Types
// ============================================================================

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    max_completion_tokens: u32,
    temperature: f64,
    top_p: f64,
    stream: bool,
    reasoning_effort: &'a str,
}
