//! Gemini session.
//!
//! Provides [`GeminiSession`] which implements [`LlmSession`] by issuing one
//! `generateContent` request per prompt. Sessions carry no history.

use super::error;
use super::protocol::{GenerateContentRequest, GenerateContentResponse};
use async_trait::async_trait;
use smartconv_application::{GatewayError, LlmSession};
use smartconv_domain::ModelId;
use tracing::{debug, warn};

/// Header carrying the API key
pub const API_KEY_HEADER: &str = "x-goog-api-key";

/// A stateless session bound to one model.
pub struct GeminiSession {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
    model: ModelId,
}

impl GeminiSession {
    pub(crate) fn new(
        http: reqwest::Client,
        base_url: &str,
        api_key: String,
        model: ModelId,
    ) -> Self {
        let endpoint = format!(
            "{}/v1beta/models/{}:generateContent",
            base_url.trim_end_matches('/'),
            model
        );
        Self {
            http,
            endpoint,
            api_key,
            model,
        }
    }

    /// Full URL prompts are posted to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl LlmSession for GeminiSession {
    fn model(&self) -> &ModelId {
        &self.model
    }

    async fn send(&self, content: &str) -> Result<String, GatewayError> {
        debug!("POST {} ({} chars)", self.endpoint, content.len());

        let response = self
            .http
            .post(&self.endpoint)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&GenerateContentRequest::user_text(content))
            .send()
            .await
            .map_err(error::from_transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let err = error::from_status(status, &body);
            warn!("generateContent returned {}: {}", status, err);
            return Err(err);
        }

        let body: GenerateContentResponse =
            response.json().await.map_err(error::from_transport)?;

        if let Some(reason) = body.block_reason() {
            debug!("Prompt blocked: {}", reason);
        }

        Ok(body.text())
    }
}
