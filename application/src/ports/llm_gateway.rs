//! LLM Gateway port
//!
//! Defines the interface for communicating with the hosted generative model.

use async_trait::async_trait;
use smartconv_domain::ModelId;
use thiserror::Error;

/// Errors that can occur during LLM gateway operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("API key not configured (set {0})")]
    MissingCredential(String),

    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Quota exceeded: {0}")]
    QuotaExceeded(String),

    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    #[error("Server error: {0}")]
    ServerError(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Timeout")]
    Timeout,

    #[error("Other error: {0}")]
    Other(String),
}

/// Gateway for LLM communication
///
/// This port defines how the application layer reaches the model provider.
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Create a new session with the specified model
    async fn create_session(&self, model: &ModelId) -> Result<Box<dyn LlmSession>, GatewayError>;

    /// Get available models
    async fn available_models(&self) -> Result<Vec<ModelId>, GatewayError>;
}

/// An active LLM session
#[async_trait]
pub trait LlmSession: Send + Sync {
    /// Get the model used by this session
    fn model(&self) -> &ModelId;

    /// Send a prompt and wait for the complete response.
    ///
    /// Returns an empty string when the provider answered without any text.
    async fn send(&self, content: &str) -> Result<String, GatewayError>;
}
