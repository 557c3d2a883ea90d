use crate::config::AppConfig;
use crate::domain::ports::CompletionClient;
use crate::utils::error::{EtlError, Result};
use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;
use serde::{Deserialize, Serialize};

pub const APP_REFERER: &str = "https://github.com/dawe35/fill-csv-with-ai";
pub const APP_TITLE: &str = "Fill CSV with AI";

#[derive(Debug, Serialize)]
pub struct ChatRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
pub struct ChatMessage<'a> {
    pub role: &'a str,
    pub content: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
pub struct ChatChoice {
    pub message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
pub struct ChatChoiceMessage {
    pub content: Option<String>,
}

impl ChatResponse {
    /// Text of the first choice. Empty or absent content is an error.
    pub fn into_first_content(self) -> Result<String> {
        let content = self
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| EtlError::MalformedResponseError {
                message: "response has no choices".to_string(),
            })?
            .message
            .content
            .unwrap_or_default();

        if content.is_empty() {
            return Err(EtlError::MalformedResponseError {
                message: "first choice has no content".to_string(),
            });
        }
        Ok(content)
    }
}

/// OpenRouter chat-completions client.
///
/// Uses reqwest's default client settings: no request timeout and no retries.
pub struct OpenRouterClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl OpenRouterClient {
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: base_url.into(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.api_key.clone(), config.api_base_url.clone())
    }

    pub fn auth_header(&self) -> String {
        format!("Bearer {}", self.api_key)
    }

    pub fn chat_completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

#[async_trait]
impl CompletionClient for OpenRouterClient {
    async fn complete(&self, model: &str, prompt: &str) -> Result<String> {
        let body = ChatRequest {
            model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
        };

        tracing::debug!("Making API request to: {}", self.chat_completions_url());
        let response = self
            .client
            .post(self.chat_completions_url())
            .header(AUTHORIZATION, self.auth_header())
            .header(CONTENT_TYPE, "application/json")
            .header("HTTP-Referer", APP_REFERER)
            .header("X-Title", APP_TITLE)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            return Err(EtlError::ApiStatusError {
                status: status.as_u16(),
                message: status
                    .canonical_reason()
                    .unwrap_or("unknown status")
                    .to_string(),
            });
        }

        let text = response.text().await?;
        let parsed: ChatResponse = serde_json::from_str(&text)?;
        parsed.into_first_content()
    }
}
