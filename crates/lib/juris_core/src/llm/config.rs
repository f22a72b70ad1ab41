//! Completion provider configuration.

use std::env;

use url::Url;

use super::{DEFAULT_MAX_TOKENS, DEFAULT_MODEL, DEFAULT_TEMPERATURE, LlmError};

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Resolved settings for the completion provider.
#[derive(Clone)]
pub struct LlmConfig {
    /// API base URL, without the trailing `/chat/completions`.
    pub base_url: String,
    /// Bearer token. Missing keys are not rejected here; calls fail instead.
    pub api_key: Option<String>,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl std::fmt::Debug for LlmConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LlmConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .finish()
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }
}

impl LlmConfig {
    /// Reads configuration from environment variables.
    ///
    /// | Variable          | Default                     |
    /// |-------------------|-----------------------------|
    /// | `OPENAI_API_KEY`  | unset                       |
    /// | `OPENAI_BASE_URL` | `https://api.openai.com/v1` |
    /// | `OPENAI_MODEL`    | `gpt-4-turbo-preview`       |
    ///
    /// Temperature and max tokens are fixed.
    pub fn from_env() -> Self {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Same as [`from_env`](Self::from_env), reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            base_url: lookup("OPENAI_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.into()),
            api_key: lookup("OPENAI_API_KEY").filter(|k| !k.is_empty()),
            model: lookup("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.into()),
            ..Self::default()
        }
    }

    /// Full URL of the `chat/completions` endpoint.
    pub fn completions_url(&self) -> Result<Url, LlmError> {
        let base = self.base_url.trim_end_matches('/');
        Url::parse(&format!("{base}/chat/completions"))
            .map_err(|e| LlmError::Config(format!("Invalid OPENAI_BASE_URL '{base}': {e}")))
    }
}
