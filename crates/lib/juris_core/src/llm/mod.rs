//! LLM module — chat completion against an external provider.
//!
//! The chat endpoint depends on the [`CompletionProvider`] trait; the
//! production implementation is [`openai::OpenAiProvider`], which speaks the
//! OpenAI-compatible `chat/completions` API. There are no retries: a failed
//! call fails the request that made it.

pub mod config;
pub mod openai;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::Message;

pub use config::LlmConfig;
pub use openai::OpenAiProvider;

/// Model used when `OPENAI_MODEL` is not set.
pub const DEFAULT_MODEL: &str = "gpt-4-turbo-preview";
/// Sampling temperature for every chat turn.
pub const DEFAULT_TEMPERATURE: f32 = 0.7;
/// Response length cap for every chat turn.
pub const DEFAULT_MAX_TOKENS: u32 = 1500;

/// Errors from a completion call.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Provider request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Provider returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Provider response parse error: {0}")]
    Decode(String),
}

/// Parameters for one completion call.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<Message>,
    pub temperature: f32,
    pub max_tokens: u32,
}

/// Something that turns a message list into a reply.
///
/// `Ok(None)` means the provider answered without any text.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    async fn complete(&self, request: CompletionRequest) -> Result<Option<String>, LlmError>;

    /// Whether credentials are present. Calls may still fail when this is true.
    fn is_configured(&self) -> bool;
}
