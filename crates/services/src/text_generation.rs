use std::env;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use focus_core::model::{AiSettings, AiSettingsDraft};

use crate::error::TextGenerationError;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextGenerationConfig {
    pub base_url: String,
    pub api_key: String,
    pub model: String,
}

impl TextGenerationConfig {
    /// Build a config from validated settings. `None` when no API key is set.
    #[must_use]
    pub fn from_settings(settings: &AiSettings) -> Option<Self> {
        let api_key = settings.api_key()?.to_string();
        Some(Self {
            base_url: settings.api_base_url().unwrap_or(DEFAULT_BASE_URL).to_string(),
            api_key,
            model: settings.api_model().unwrap_or(DEFAULT_MODEL).to_string(),
        })
    }

    /// Read `FOCUS_AI_API_KEY` (falling back to `OPENAI_API_KEY`),
    /// `FOCUS_AI_BASE_URL` and `FOCUS_AI_MODEL`.
    ///
    /// # Errors
    ///
    /// Returns `TextGenerationError::Settings` if the base URL does not parse.
    pub fn from_env() -> Result<Option<Self>, TextGenerationError> {
        let settings = AiSettingsDraft {
            api_key: env::var("FOCUS_AI_API_KEY")
                .ok()
                .or_else(|| env::var("OPENAI_API_KEY").ok()),
            api_model: env::var("FOCUS_AI_MODEL").ok(),
            api_base_url: env::var("FOCUS_AI_BASE_URL").ok(),
        }
        .validate()?;
        Ok(Self::from_settings(&settings))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
    Assistant,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    #[must_use]
    pub fn new(role: ChatRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}

/// Client for an OpenAI-compatible chat completions endpoint.
///
/// Not part of the scored flow.
#[derive(Clone)]
pub struct TextGenerationService {
    client: Client,
    config: Option<TextGenerationConfig>,
}

impl TextGenerationService {
    #[must_use]
    pub fn new(config: Option<TextGenerationConfig>) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    #[must_use]
    pub fn enabled(&self) -> bool {
        self.config.is_some()
    }

    /// Send the conversation and return the first choice's text.
    ///
    /// # Errors
    ///
    /// Returns `TextGenerationError` when the service is disabled, the request fails,
    /// or the response is empty.
    pub async fn generate(&self, messages: &[ChatMessage]) -> Result<String, TextGenerationError> {
        let result = self.request(messages).await;
        if let Err(err) = &result {
            tracing::error!(error = %err, "text generation failed");
        }
        result
    }

    async fn request(&self, messages: &[ChatMessage]) -> Result<String, TextGenerationError> {
        let config = self
            .config
            .as_ref()
            .ok_or(TextGenerationError::Disabled)?;

        let url = format!(
            "{}/chat/completions",
            config.base_url.trim_end_matches('/')
        );
        let payload = ChatRequest {
            model: &config.model,
            messages,
        };

        let response = self
            .client
            .post(url)
            .bearer_auth(&config.api_key)
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(TextGenerationError::HttpStatus(response.status()));
        }

        let body: ChatResponse = response.json().await?;
        let content = body
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty())
            .ok_or(TextGenerationError::EmptyResponse)?;

        Ok(content)
    }

    /// Like `generate`, but collapses any failure into the generic user message.
    pub async fn generate_or_fallback(&self, messages: &[ChatMessage]) -> String {
        match self.generate(messages).await {
            Ok(text) => text,
            Err(err) => err.user_message().to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessageResponse,
}

#[derive(Debug, Deserialize)]
struct ChatMessageResponse {
    content: Option<String>,
}
