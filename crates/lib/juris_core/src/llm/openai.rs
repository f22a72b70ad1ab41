//! OpenAI-compatible chat completion provider.
//!
//! Calls `POST {base_url}/chat/completions` once per request and reads the
//! first choice's message content.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{CompletionProvider, CompletionRequest, LlmConfig, LlmError};
use crate::models::Message;

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [Message],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatCompletionChoice>,
}

#[derive(Deserialize)]
struct ChatCompletionChoice {
    message: ChatCompletionMessage,
}

#[derive(Deserialize)]
struct ChatCompletionMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Completion provider for the OpenAI `chat/completions` API.
#[derive(Debug, Clone)]
pub struct OpenAiProvider {
    client: Client,
    config: LlmConfig,
}

impl OpenAiProvider {
    pub fn new(config: LlmConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    pub fn with_client(client: Client, config: LlmConfig) -> Self {
        Self { client, config }
    }
}

#[async_trait]
impl CompletionProvider for OpenAiProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<Option<String>, LlmError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or_else(|| LlmError::Config("OPENAI_API_KEY is not set".to_string()))?;
        let url = self.config.completions_url()?;

        debug!(
            model = %request.model,
            messages = request.messages.len(),
            "sending chat completion"
        );

        let resp = self
            .client
            .post(url)
            .bearer_auth(api_key)
            .json(&ChatCompletionRequest {
                model: &request.model,
                messages: &request.messages,
                temperature: request.temperature,
                max_tokens: request.max_tokens,
            })
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp
                .text()
                .await
                .unwrap_or_else(|_| "<no body>".to_string());
            return Err(LlmError::Status { status, body });
        }

        let data: ChatCompletionResponse = resp
            .json()
            .await
            .map_err(|e| LlmError::Decode(e.to_string()))?;

        Ok(data
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .filter(|content| !content.is_empty()))
    }

    fn is_configured(&self) -> bool {
        self.config.api_key.is_some()
    }
}
