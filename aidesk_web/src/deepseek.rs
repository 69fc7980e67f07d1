use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{config::AppConfig, model::ChatMessage};

pub const DEEPSEEK_API_URL: &str = "https://api.deepseek.com/v1/chat/completions";

const SYSTEM_PROMPT: &str =
    "You are an AI assistant that helps with email management, website development, and deployment.";
const TEMPERATURE: f32 = 0.7;
const MAX_TOKENS: u32 = 2000;

/// Upstream failure taxonomy. Timeouts are split out from other transport
/// errors because the handler reports them with dedicated wording.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request timed out")]
    Timeout,
    #[error("{0}")]
    Transport(reqwest::Error),
    #[error("upstream returned {status}: {message}")]
    Upstream { status: StatusCode, message: String },
    #[error("{0}")]
    Malformed(String),
}

impl ApiError {
    fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout
        } else {
            ApiError::Transport(err)
        }
    }
}

/// Thin client for the DeepSeek chat-completion API. Each call is stateless
/// and context-free: one system turn framing the assistant, one user turn,
/// a single attempt bounded by the configured timeout.
pub struct DeepSeekClient {
    http: Client,
    api_url: String,
    api_key: String,
    model: String,
}

impl DeepSeekClient {
    pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let http = Client::builder().timeout(config.request_timeout).build()?;

        Ok(Self {
            http,
            api_url: config.upstream_url.clone(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
        })
    }

    pub async fn chat_completion(&self, command: &str) -> Result<String, ApiError> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage::system(SYSTEM_PROMPT), ChatMessage::user(command)],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        let response = self
            .http
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(ApiError::from_reqwest)?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ApiError::Upstream { status, message });
        }

        let completion: ChatResponse = response
            .json()
            .await
            .map_err(|e| ApiError::Malformed(format!("invalid completion payload: {e}")))?;

        if let Some(usage) = &completion.usage {
            tracing::debug!(
                "completion consumed {} prompt + {} completion tokens",
                usage.prompt_tokens,
                usage.completion_tokens
            );
        }

        completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| ApiError::Malformed("no completion choices returned".to_string()))
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
    usage: Option<TokenUsage>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatCompletionMessage,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionMessage {
    content: String,
}

#[derive(Debug, Deserialize)]
struct TokenUsage {
    prompt_tokens: u32,
    completion_tokens: u32,
}
