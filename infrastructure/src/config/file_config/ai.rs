//! AI configuration from TOML (`[ai]` section)

use crate::gemini::{DEFAULT_API_KEY_ENV, DEFAULT_BASE_URL, GeminiConfig};
use serde::{Deserialize, Serialize};
use smartconv_application::config::DEFAULT_TIMEOUT_SECONDS;
use smartconv_domain::ModelId;
use std::time::Duration;

/// Raw AI configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAiConfig {
    /// Model prompts are sent to
    pub model: String,
    /// Environment variable holding the API key
    pub api_key_env: String,
    /// Inline API key; takes precedence over `api_key_env`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Endpoint root, overridable for proxies and tests
    pub base_url: String,
    /// Timeout in seconds for a single request
    pub timeout_seconds: Option<u64>,
}

impl Default for FileAiConfig {
    fn default() -> Self {
        Self {
            model: ModelId::default().to_string(),
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_seconds: Some(DEFAULT_TIMEOUT_SECONDS),
        }
    }
}

impl FileAiConfig {
    /// Configured model, falling back to the default when blank.
    pub fn model_id(&self) -> ModelId {
        ModelId::parse_checked(&self.model).unwrap_or_default()
    }

    /// Inline key if set, otherwise the value of `api_key_env`.
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .or_else(|| std::env::var(&self.api_key_env).ok())
            .filter(|key| !key.trim().is_empty())
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }

    /// Build gateway settings, reading the key from the environment.
    pub fn to_gemini_config(&self) -> GeminiConfig {
        GeminiConfig {
            api_key: self.resolve_api_key(),
            api_key_env: self.api_key_env.clone(),
            base_url: self.base_url.clone(),
            timeout: self.timeout(),
        }
    }
}
