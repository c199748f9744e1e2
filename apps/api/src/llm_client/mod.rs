//! LLM client — the single point of entry for all chat-completion calls.
//!
//! No other module talks to the model API directly: the explain and social
//! dispatchers build (system, user) message pairs and hand them here. The
//! wire shape is the OpenAI-compatible `/chat/completions` contract served
//! by OpenRouter. Exactly one attempt per call — the dispatcher contract
//! forbids retries and backoff.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Construction-time settings for the chat-completion client.
/// Projected from `Config::llm_settings()` at startup.
#[derive(Debug, Clone)]
pub struct LlmSettings {
    pub base_url: String,
    /// Optional so the service can boot unconfigured; every call checks it
    /// before any network traffic.
    pub api_key: Option<String>,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("API credential not configured")]
    MissingCredential,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("completion contained no usable text")]
    EmptyContent,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
    usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Usage {
    prompt_tokens: u32,
    completion_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// The single chat-completion client shared by all handlers via `AppState`.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    settings: LlmSettings,
}

impl LlmClient {
    pub fn new(settings: LlmSettings) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(120))
                .build()
                .unwrap_or_default(),
            settings,
        }
    }

    pub fn credential_configured(&self) -> bool {
        self.settings.api_key.is_some()
    }

    /// Requests one bounded completion for a (system, user) message pair and
    /// returns its text. Single attempt: a failure or an empty completion is
    /// surfaced to the caller, never retried.
    pub async fn chat(&self, system: &str, user: &str) -> Result<String, LlmError> {
        let api_key = self
            .settings
            .api_key
            .as_deref()
            .ok_or(LlmError::MissingCredential)?;

        let request_body = ChatRequest {
            model: &self.settings.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
            max_tokens: self.settings.max_tokens,
            temperature: self.settings.temperature,
        };

        let response = self
            .client
            .post(completions_url(&self.settings.base_url))
            .bearer_auth(api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // Surface the API's own message when the error body parses.
            let message = serde_json::from_str::<ApiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let completion: ChatResponse = response.json().await?;

        if let Some(usage) = &completion.usage {
            debug!(
                "LLM call succeeded: prompt_tokens={}, completion_tokens={}",
                usage.prompt_tokens, usage.completion_tokens
            );
        }

        let text = completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(LlmError::EmptyContent);
        }

        Ok(text)
    }
}

fn completions_url(base_url: &str) -> String {
    format!("{}/chat/completions", base_url.trim_end_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(api_key: Option<String>) -> LlmSettings {
        LlmSettings {
            base_url: "https://openrouter.ai/api/v1".to_string(),
            api_key,
            model: "openai/gpt-4".to_string(),
            max_tokens: 350,
            temperature: 0.8,
        }
    }

    #[test]
    fn test_completions_url_joins_base() {
        assert_eq!(
            completions_url("https://openrouter.ai/api/v1"),
            "https://openrouter.ai/api/v1/chat/completions"
        );
    }

    #[test]
    fn test_completions_url_tolerates_trailing_slash() {
        assert_eq!(
            completions_url("https://openrouter.ai/api/v1/"),
            "https://openrouter.ai/api/v1/chat/completions"
        );
    }

    #[tokio::test]
    async fn test_missing_credential_fails_before_any_network_call() {
        let client = LlmClient::new(settings(None));
        let err = client.chat("system", "user").await.unwrap_err();
        assert!(matches!(err, LlmError::MissingCredential));
    }

    #[test]
    fn test_credential_configured_reflects_settings() {
        assert!(!LlmClient::new(settings(None)).credential_configured());
        assert!(LlmClient::new(settings(Some("sk-test".to_string()))).credential_configured());
    }
}
