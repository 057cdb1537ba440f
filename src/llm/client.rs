//! OpenAI-compatible chat completion client (Groq by default)

use crate::config::GenerationConfig;
use log::{debug, warn};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::time::Duration;
use thiserror::Error;

const MAX_RETRIES: u32 = 3;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("API key not found in environment variable {0}")]
    MissingApiKey(String),

    #[error("No completion client configured")]
    NotConfigured,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Rate limited after {retries} retries")]
    RateLimited { retries: u32 },

    #[error("Completion returned empty content")]
    EmptyContent,

    #[error("Completion timed out after {0}s")]
    Timeout(u64),
}

/// Anything that can turn a system and user prompt into text.
pub trait CompletionClient: Send + Sync {
    fn complete(
        &self,
        system: &str,
        prompt: &str,
    ) -> impl Future<Output = Result<String, LlmError>> + Send;
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
    top_p: f32,
    stream: bool,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

#[derive(Clone)]
pub struct GroqClient {
    client: Client,
    api_key: String,
    settings: GenerationConfig,
}

impl GroqClient {
    pub fn new(api_key: String, settings: GenerationConfig) -> Result<Self, LlmError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            api_key,
            settings,
        })
    }

    /// Reads the key named by `settings.api_key_env`, honoring a `.env` file.
    pub fn from_env(settings: &GenerationConfig) -> Result<Self, LlmError> {
        dotenvy::dotenv().ok();

        let api_key = std::env::var(&settings.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| LlmError::MissingApiKey(settings.api_key_env.clone()))?;

        Self::new(api_key, settings.clone())
    }

    /// Retries on 429 and 5xx with exponential backoff.
    async fn send(&self, request: &ChatRequest<'_>) -> Result<ChatResponse, LlmError> {
        let mut last_error: Option<LlmError> = None;

        for attempt in 0..MAX_RETRIES {
            if attempt > 0 {
                let delay = Duration::from_millis(1000 * (1 << (attempt - 1)));
                warn!(
                    "Completion attempt {} failed, retrying after {}ms",
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let response = match self
                .client
                .post(&self.settings.api_url)
                .bearer_auth(&self.api_key)
                .json(request)
                .send()
                .await
            {
                Ok(r) => r,
                Err(e) => {
                    last_error = Some(LlmError::Http(e));
                    continue;
                }
            };

            let status = response.status();

            if status.as_u16() == 429 || status.is_server_error() {
                let body = response.text().await.unwrap_or_default();
                warn!("Completion API returned {}: {}", status, body);
                last_error = Some(LlmError::Api {
                    status: status.as_u16(),
                    message: body,
                });
                continue;
            }

            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                let message = serde_json::from_str::<ApiErrorResponse>(&body)
                    .map(|e| e.error.message)
                    .unwrap_or(body);
                return Err(LlmError::Api {
                    status: status.as_u16(),
                    message,
                });
            }

            return Ok(response.json().await?);
        }

        Err(last_error.unwrap_or(LlmError::RateLimited {
            retries: MAX_RETRIES,
        }))
    }
}

impl CompletionClient for GroqClient {
    async fn complete(&self, system: &str, prompt: &str) -> Result<String, LlmError> {
        let request = ChatRequest {
            model: &self.settings.model,
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
            temperature: self.settings.temperature,
            max_tokens: self.settings.max_tokens,
            top_p: self.settings.top_p,
            stream: false,
        };

        let response = self.send(&request).await?;
        let content = response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|content| content.trim().to_string())
            .filter(|content| !content.is_empty())
            .ok_or(LlmError::EmptyContent)?;

        debug!("Completion returned {} chars", content.len());
        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn test_missing_api_key() {
        let mut settings = Config::default().generation;
        settings.api_key_env = "RESUME_MATCHER_TEST_UNSET_KEY".to_string();

        match GroqClient::from_env(&settings) {
            Err(LlmError::MissingApiKey(name)) => assert_eq!(name, "RESUME_MATCHER_TEST_UNSET_KEY"),
            _ => panic!("expected missing key error"),
        }
    }

    #[test]
    fn test_request_shape() {
        let request = ChatRequest {
            model: "mixtral-8x7b-32768",
            messages: vec![ChatMessage { role: "user", content: "hi" }],
            temperature: 0.7,
            max_tokens: 2048,
            top_p: 1.0,
            stream: false,
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "mixtral-8x7b-32768");
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["max_tokens"], 2048);
        assert_eq!(json["stream"], false);
    }

    #[test]
    fn test_response_parsing() {
        let body = r#"{"choices":[{"message":{"role":"assistant","content":"  Resume  "}}]}"#;
        let response: ChatResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.choices[0].message.content.as_deref(), Some("  Resume  "));
    }
}
