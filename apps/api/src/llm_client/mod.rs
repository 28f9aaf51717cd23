/// LLM Client — the single point of entry for all OpenAI API calls in Keepsake.
///
/// ARCHITECTURAL RULE: No other module may call the OpenAI API directly.
/// All LLM interactions MUST go through this module.
///
/// Model: gpt-3.5-turbo (hardcoded — do not make configurable to prevent drift)
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

const OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";
/// The model used for all LLM calls in Keepsake.
/// This is intentionally hardcoded to prevent accidental drift.
pub const MODEL: &str = "gpt-3.5-turbo";
/// Output bound — stories are prose under ~200 words.
const MAX_TOKENS: u32 = 300;
/// Some variability, but not incoherence.
const TEMPERATURE: f32 = 0.7;
/// A hung request must not stall the caller; on timeout the caller falls
/// through to the template story.
const REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(30);

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("LLM returned empty content")]
    EmptyContent,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    pub choices: Vec<Choice>,
    pub usage: Usage,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
pub struct ResponseMessage {
    /// Null for non-text responses, so not guaranteed present.
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
}

impl ChatResponse {
    /// Extracts the generated text from the first choice.
    pub fn text(&self) -> Option<&str> {
        self.choices.first().and_then(|c| c.message.content.as_deref())
    }
}

#[derive(Debug, Deserialize)]
struct OpenAiError {
    error: OpenAiErrorBody,
}

#[derive(Debug, Deserialize)]
struct OpenAiErrorBody {
    message: String,
}

/// The single LLM client used for story generation.
/// Wraps the OpenAI Chat Completions API. One attempt per call — every error
/// already resolves to a template story, so a retry loop would only add
/// latency before the same user-visible outcome.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
    endpoint: String,
}

impl LlmClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
            endpoint: OPENAI_API_URL.to_string(),
        }
    }

    /// Overrides the chat-completions endpoint. For tests and
    /// OpenAI-compatible gateways.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Makes a single call to the chat-completions endpoint with the given
    /// system and user messages.
    pub async fn call(&self, prompt: &str, system: &str) -> Result<ChatResponse, LlmError> {
        let request_body = ChatRequest {
            model: MODEL,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // Try to parse the provider's error message
            let message = serde_json::from_str::<OpenAiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let chat_response: ChatResponse = response.json().await?;

        debug!(
            "LLM call succeeded: prompt_tokens={}, completion_tokens={}",
            chat_response.usage.prompt_tokens, chat_response.usage.completion_tokens
        );

        Ok(chat_response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_response_text_reads_first_choice() {
        let json = r#"{
            "choices": [
                {"message": {"role": "assistant", "content": "A warm story."}},
                {"message": {"role": "assistant", "content": "Ignored."}}
            ],
            "usage": {"prompt_tokens": 42, "completion_tokens": 12}
        }"#;
        let response: ChatResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.text(), Some("A warm story."));
        assert_eq!(response.usage.prompt_tokens, 42);
    }

    #[test]
    fn test_chat_response_text_is_none_without_choices() {
        let json = r#"{"choices": [], "usage": {"prompt_tokens": 1, "completion_tokens": 0}}"#;
        let response: ChatResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.text(), None);
    }

    #[test]
    fn test_chat_response_text_is_none_for_null_content() {
        let json = r#"{
            "choices": [{"message": {"role": "assistant", "content": null}}],
            "usage": {"prompt_tokens": 1, "completion_tokens": 0}
        }"#;
        let response: ChatResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.text(), None);
    }

    #[test]
    fn test_provider_error_body_parses() {
        let json = r#"{"error": {"message": "Incorrect API key provided", "type": "invalid_request_error"}}"#;
        let parsed: OpenAiError = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.error.message, "Incorrect API key provided");
    }

    #[tokio::test]
    async fn test_call_surfaces_transport_errors() {
        // Nothing listens on the discard port; the call must fail with a
        // transport error rather than hang.
        let client =
            LlmClient::new("test-key".to_string()).with_endpoint("http://127.0.0.1:9");
        let result = client.call("prompt", "system").await;
        assert!(matches!(result, Err(LlmError::Http(_))));
    }

    #[test]
    fn test_chat_request_serializes_two_messages() {
        let request = ChatRequest {
            model: MODEL,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: "system text",
                },
                ChatMessage {
                    role: "user",
                    content: "user text",
                },
            ],
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["model"], "gpt-3.5-turbo");
        assert_eq!(value["messages"][0]["role"], "system");
        assert_eq!(value["messages"][1]["role"], "user");
        assert_eq!(value["max_tokens"], 300);
    }
}
