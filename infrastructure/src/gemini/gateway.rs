//! Gemini LLM Gateway implementation

use super::error;
use super::protocol::ListModelsResponse;
use super::session::{API_KEY_HEADER, GeminiSession};
use async_trait::async_trait;
use smartconv_application::{GatewayError, LlmGateway, LlmSession};
use smartconv_domain::ModelId;
use std::time::Duration;
use tracing::{debug, info};

/// Public endpoint of the Generative Language API
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Environment variable the API key is read from by default
pub const DEFAULT_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Connection settings for [`GeminiLlmGateway`].
#[derive(Clone)]
pub struct GeminiConfig {
    /// Resolved API key; `None` defers the failure to the first request
    pub api_key: Option<String>,
    /// Variable name reported when the key is missing
    pub api_key_env: String,
    pub base_url: String,
    /// Per-request HTTP timeout
    pub timeout: Option<Duration>,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
        }
    }
}

// Never print the key itself.
impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("api_key_env", &self.api_key_env)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl GeminiConfig {
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}

/// LLM Gateway implementation for the Gemini REST API
pub struct GeminiLlmGateway {
    http: reqwest::Client,
    config: GeminiConfig,
}

impl GeminiLlmGateway {
    /// Create a gateway; no network traffic happens until a prompt is sent.
    pub fn new(config: GeminiConfig) -> Result<Self, GatewayError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| GatewayError::ConnectionError(e.to_string()))?;

        info!(
            "GeminiLlmGateway initialized (base_url={}, key={})",
            config.base_url,
            if config.api_key.is_some() { "set" } else { "missing" }
        );

        Ok(Self { http, config })
    }

    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    fn api_key(&self) -> Result<&str, GatewayError> {
        self.config
            .api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| GatewayError::MissingCredential(self.config.api_key_env.clone()))
    }
}

#[async_trait]
impl LlmGateway for GeminiLlmGateway {
    async fn create_session(&self, model: &ModelId) -> Result<Box<dyn LlmSession>, GatewayError> {
        let api_key = self.api_key()?.to_string();
        let session = GeminiSession::new(
            self.http.clone(),
            &self.config.base_url,
            api_key,
            model.clone(),
        );
        debug!("Session for {} -> {}", model, session.endpoint());
        Ok(Box::new(session))
    }

    async fn available_models(&self) -> Result<Vec<ModelId>, GatewayError> {
        let api_key = self.api_key()?;
        let url = format!(
            "{}/v1beta/models",
            self.config.base_url.trim_end_matches('/')
        );

        let response = self
            .http
            .get(&url)
            .header(API_KEY_HEADER, api_key)
            .send()
            .await
            .map_err(error::from_transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(error::from_status(status, &body));
        }

        let listing: ListModelsResponse = response.json().await.map_err(error::from_transport)?;
        Ok(listing
            .models
            .iter()
            .filter(|m| m.can_generate())
            .map(|m| ModelId::from(m.id()))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn gateway(server: &MockServer) -> GeminiLlmGateway {
        GeminiLlmGateway::new(
            GeminiConfig::default()
                .with_api_key("test-key")
                .with_base_url(server.base_url()),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_send_returns_candidate_text() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/v1beta/models/gemini-1.5-flash:generateContent")
                    .header("x-goog-api-key", "test-key")
                    .json_body(json!({
                        "contents": [{"role": "user", "parts": [{"text": "Capital of France?"}]}]
                    }));
                then.status(200)
                    .header("content-type", "application/json")
                    .json_body(json!({
                        "candidates": [{
                            "content": {"role": "model", "parts": [{"text": "Paris."}]},
                            "finishReason": "STOP"
                        }]
                    }));
            })
            .await;

        let session = gateway(&server)
            .create_session(&ModelId::Gemini15Flash)
            .await
            .unwrap();
        let text = session.send("Capital of France?").await.unwrap();

        assert_eq!(text, "Paris.");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_no_candidates_is_empty_text() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST);
                then.status(200).json_body(json!({
                    "promptFeedback": {"blockReason": "SAFETY"}
                }));
            })
            .await;

        let session = gateway(&server)
            .create_session(&ModelId::Gemini15Flash)
            .await
            .unwrap();
        assert_eq!(session.send("hi").await.unwrap(), "");
    }

    #[tokio::test]
    async fn test_unauthorized_maps_to_authentication() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST);
                then.status(401).json_body(json!({
                    "error": {"code": 401, "message": "Request is missing required authentication credential", "status": "UNAUTHENTICATED"}
                }));
            })
            .await;

        let session = gateway(&server)
            .create_session(&ModelId::Gemini15Flash)
            .await
            .unwrap();
        let err = session.send("hi").await.unwrap_err();
        assert!(matches!(err, GatewayError::Authentication(msg) if msg.contains("authentication credential")));
    }

    #[tokio::test]
    async fn test_rate_limit_maps_to_quota() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST);
                then.status(429).json_body(json!({
                    "error": {"code": 429, "message": "Resource has been exhausted", "status": "RESOURCE_EXHAUSTED"}
                }));
            })
            .await;

        let session = gateway(&server)
            .create_session(&ModelId::Gemini15Flash)
            .await
            .unwrap();
        assert_eq!(
            session.send("hi").await.unwrap_err(),
            GatewayError::QuotaExceeded("Resource has been exhausted".to_string())
        );
    }

    #[tokio::test]
    async fn test_server_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST);
                then.status(503).body("overloaded");
            })
            .await;

        let session = gateway(&server)
            .create_session(&ModelId::Gemini15Flash)
            .await
            .unwrap();
        assert_eq!(
            session.send("hi").await.unwrap_err(),
            GatewayError::ServerError("overloaded".to_string())
        );
    }

    #[tokio::test]
    async fn test_missing_key_fails_before_request() {
        let gateway = GeminiLlmGateway::new(GeminiConfig::default()).unwrap();
        let err = gateway
            .create_session(&ModelId::Gemini15Flash)
            .await
            .err()
            .unwrap();
        assert_eq!(err, GatewayError::MissingCredential("GEMINI_API_KEY".to_string()));
        assert!(err.to_string().contains("GEMINI_API_KEY"));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_connection_error() {
        let gateway = GeminiLlmGateway::new(
            GeminiConfig::default()
                .with_api_key("test-key")
                .with_base_url("http://127.0.0.1:1"),
        )
        .unwrap();
        let session = gateway.create_session(&ModelId::Gemini15Flash).await.unwrap();
        assert!(matches!(
            session.send("hi").await.unwrap_err(),
            GatewayError::ConnectionError(_)
        ));
    }

    #[tokio::test]
    async fn test_available_models_filters_generators() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/v1beta/models");
                then.status(200).json_body(json!({
                    "models": [
                        {"name": "models/gemini-1.5-flash", "supportedGenerationMethods": ["generateContent"]},
                        {"name": "models/text-embedding-004", "supportedGenerationMethods": ["embedContent"]},
                        {"name": "models/gemini-exp-1206", "supportedGenerationMethods": ["generateContent"]}
                    ]
                }));
            })
            .await;

        let models = gateway(&server).available_models().await.unwrap();
        assert_eq!(
            models,
            vec![
                ModelId::Gemini15Flash,
                ModelId::Custom("gemini-exp-1206".to_string())
            ]
        );
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = GeminiConfig::default().with_api_key("super-secret");
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
