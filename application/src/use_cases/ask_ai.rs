//! Ask AI use case.
//!
//! Forwards a single prompt to the configured model and returns the complete
//! text response. One attempt per call: no retries, no caching, no streaming.

use crate::config::BehaviorConfig;
use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use crate::ports::progress::{AskProgressNotifier, NoProgress};
use smartconv_domain::{Answer, ModelId, Prompt, truncate};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur during an AI query.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AskError {
    #[error("Please enter a question")]
    EmptyPrompt,

    #[error("No response from model")]
    EmptyResponse,

    #[error("Transport error: {0}")]
    Transport(#[from] GatewayError),
}

/// Input for the [`AskAiUseCase`].
#[derive(Debug, Clone)]
pub struct AskInput {
    /// The user's question, as typed.
    pub prompt: String,
}

impl AskInput {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
        }
    }
}

/// Use case for asking the model a question.
///
/// 1. Validate the prompt (blank prompts never reach the network)
/// 2. Create a session for the configured model
/// 3. Send the prompt once, bounded by the configured timeout
/// 4. Return the text verbatim, or [`AskError::EmptyResponse`]
#[derive(Clone)]
pub struct AskAiUseCase {
    gateway: Arc<dyn LlmGateway>,
    config: BehaviorConfig,
}

impl AskAiUseCase {
    pub fn new(gateway: Arc<dyn LlmGateway>, config: BehaviorConfig) -> Self {
        Self { gateway, config }
    }

    /// Execute without progress reporting.
    pub async fn execute(&self, input: AskInput) -> Result<Answer, AskError> {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute with progress callbacks.
    pub async fn execute_with_progress(
        &self,
        input: AskInput,
        progress: &dyn AskProgressNotifier,
    ) -> Result<Answer, AskError> {
        let prompt = Prompt::new(input.prompt).map_err(|_| AskError::EmptyPrompt)?;
        let model = &self.config.model;

        info!("Asking {}: {}", model, truncate(prompt.content(), 100));

        progress.on_request_start(model);
        let result = self.send(&prompt).await;
        progress.on_request_end(result.is_ok());

        match &result {
            Ok(answer) => info!("Received {} bytes from {}", answer.text.len(), model),
            Err(e) => warn!("Query to {} failed: {}", model, e),
        }

        result
    }

    /// Models the gateway can answer with, bounded by the configured timeout.
    pub async fn available_models(&self) -> Result<Vec<ModelId>, AskError> {
        let request = self.gateway.available_models();
        let models = match self.config.timeout {
            Some(limit) => tokio::time::timeout(limit, request)
                .await
                .map_err(|_| GatewayError::Timeout)??,
            None => request.await?,
        };

        info!("Gateway lists {} models", models.len());
        Ok(models)
    }

    async fn send(&self, prompt: &Prompt) -> Result<Answer, AskError> {
        let model = &self.config.model;
        let request = async {
            let session = self.gateway.create_session(model).await?;
            let text = session.send(prompt.content()).await?;
            Ok::<String, GatewayError>(text)
        };

        let text = match self.config.timeout {
            Some(limit) => tokio::time::timeout(limit, request)
                .await
                .map_err(|_| GatewayError::Timeout)??,
            None => request.await?,
        };

        if text.trim().is_empty() {
            debug!("Model {} returned no text", model);
            return Err(AskError::EmptyResponse);
        }

        Ok(Answer::new(model.clone(), text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::llm_gateway::LlmSession;
    use async_trait::async_trait;
    use smartconv_domain::ModelId;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    // ==================== Test Mocks ====================

    #[derive(Clone)]
    enum Reply {
        Text(String),
        Fail(GatewayError),
        Hang,
    }

    struct MockSession {
        model: ModelId,
        reply: Reply,
        seen: Arc<Mutex<Vec<String>>>,
    }

    #[async_trait]
    impl LlmSession for MockSession {
        fn model(&self) -> &ModelId {
            &self.model
        }

        async fn send(&self, content: &str) -> Result<String, GatewayError> {
            self.seen.lock().unwrap().push(content.to_string());
            match &self.reply {
                Reply::Text(text) => Ok(text.clone()),
                Reply::Fail(err) => Err(err.clone()),
                Reply::Hang => {
                    tokio::time::sleep(Duration::from_secs(3600)).await;
                    Ok("too late".to_string())
                }
            }
        }
    }

    struct MockGateway {
        reply: Reply,
        sessions: AtomicUsize,
        seen: Arc<Mutex<Vec<String>>>,
    }

    impl MockGateway {
        fn new(reply: Reply) -> Self {
            Self {
                reply,
                sessions: AtomicUsize::new(0),
                seen: Arc::new(Mutex::new(Vec::new())),
            }
        }
    }

    #[async_trait]
    impl LlmGateway for MockGateway {
        async fn create_session(
            &self,
            model: &ModelId,
        ) -> Result<Box<dyn LlmSession>, GatewayError> {
            self.sessions.fetch_add(1, Ordering::SeqCst);
            Ok(Box::new(MockSession {
                model: model.clone(),
                reply: self.reply.clone(),
                seen: self.seen.clone(),
            }))
        }

        async fn available_models(&self) -> Result<Vec<ModelId>, GatewayError> {
            match &self.reply {
                Reply::Text(_) => Ok(vec![ModelId::Gemini15Flash, ModelId::Gemini25Pro]),
                Reply::Fail(err) => Err(err.clone()),
                Reply::Hang => {
                    tokio::time::sleep(Duration::from_secs(3600)).await;
                    Ok(Vec::new())
                }
            }
        }
    }

    struct RecordingProgress {
        events: Mutex<Vec<String>>,
    }

    impl AskProgressNotifier for RecordingProgress {
        fn on_request_start(&self, model: &ModelId) {
            self.events.lock().unwrap().push(format!("start:{}", model));
        }

        fn on_request_end(&self, success: bool) {
            self.events.lock().unwrap().push(format!("end:{}", success));
        }
    }

    // ==================== Tests ====================

    #[tokio::test]
    async fn test_returns_text_verbatim() {
        let gateway = Arc::new(MockGateway::new(Reply::Text(
            "  Paris is the capital.\n".to_string(),
        )));
        let use_case = AskAiUseCase::new(gateway.clone(), BehaviorConfig::default());

        let answer = use_case
            .execute(AskInput::new("Capital of France?"))
            .await
            .unwrap();

        assert_eq!(answer.text, "  Paris is the capital.\n");
        assert_eq!(answer.model, ModelId::Gemini15Flash);
        assert_eq!(
            gateway.seen.lock().unwrap().as_slice(),
            ["Capital of France?"]
        );
    }

    #[tokio::test]
    async fn test_empty_prompt_never_hits_gateway() {
        let gateway = Arc::new(MockGateway::new(Reply::Text("unused".to_string())));
        let use_case = AskAiUseCase::new(gateway.clone(), BehaviorConfig::default());

        let err = use_case.execute(AskInput::new("   ")).await.unwrap_err();

        assert_eq!(err, AskError::EmptyPrompt);
        assert_eq!(gateway.sessions.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_empty_response_is_error() {
        let gateway = Arc::new(MockGateway::new(Reply::Text(String::new())));
        let use_case = AskAiUseCase::new(gateway, BehaviorConfig::default());

        let err = use_case.execute(AskInput::new("Hello?")).await.unwrap_err();
        assert_eq!(err, AskError::EmptyResponse);
    }

    #[tokio::test]
    async fn test_gateway_error_becomes_transport() {
        let gateway = Arc::new(MockGateway::new(Reply::Fail(GatewayError::QuotaExceeded(
            "Resource has been exhausted".to_string(),
        ))));
        let use_case = AskAiUseCase::new(gateway, BehaviorConfig::default());

        let err = use_case.execute(AskInput::new("Hello?")).await.unwrap_err();
        assert_eq!(
            err,
            AskError::Transport(GatewayError::QuotaExceeded(
                "Resource has been exhausted".to_string()
            ))
        );
        assert!(err.to_string().contains("Resource has been exhausted"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_maps_to_transport() {
        let gateway = Arc::new(MockGateway::new(Reply::Hang));
        let config = BehaviorConfig::default().with_timeout_seconds(5);
        let use_case = AskAiUseCase::new(gateway, config);

        let err = use_case.execute(AskInput::new("Hello?")).await.unwrap_err();
        assert_eq!(err, AskError::Transport(GatewayError::Timeout));
    }

    #[tokio::test]
    async fn test_uses_configured_model_and_reports_progress() {
        let gateway = Arc::new(MockGateway::new(Reply::Text("ok".to_string())));
        let config = BehaviorConfig::default().with_model(ModelId::Gemini25Pro);
        let use_case = AskAiUseCase::new(gateway, config);
        let progress = RecordingProgress {
            events: Mutex::new(Vec::new()),
        };

        let answer = use_case
            .execute_with_progress(AskInput::new("hi"), &progress)
            .await
            .unwrap();

        assert_eq!(answer.model, ModelId::Gemini25Pro);
        assert_eq!(
            progress.events.lock().unwrap().as_slice(),
            ["start:gemini-2.5-pro", "end:true"]
        );
    }

    #[tokio::test]
    async fn test_failed_request_reports_progress_end_false() {
        let gateway = Arc::new(MockGateway::new(Reply::Fail(GatewayError::Authentication(
            "API key not valid".to_string(),
        ))));
        let use_case = AskAiUseCase::new(gateway, BehaviorConfig::default());
        let progress = RecordingProgress {
            events: Mutex::new(Vec::new()),
        };

        let result = use_case
            .execute_with_progress(AskInput::new("hi"), &progress)
            .await;

        assert!(matches!(
            result,
            Err(AskError::Transport(GatewayError::Authentication(_)))
        ));
        assert_eq!(progress.events.lock().unwrap().last().unwrap(), "end:false");
    }

    #[tokio::test]
    async fn test_available_models() {
        let gateway = Arc::new(MockGateway::new(Reply::Text("unused".to_string())));
        let use_case = AskAiUseCase::new(gateway.clone(), BehaviorConfig::default());

        let models = use_case.available_models().await.unwrap();
        assert_eq!(models, vec![ModelId::Gemini15Flash, ModelId::Gemini25Pro]);
        assert_eq!(gateway.sessions.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_available_models_errors() {
        let gateway = Arc::new(MockGateway::new(Reply::Fail(
            GatewayError::MissingCredential("GEMINI_API_KEY".to_string()),
        )));
        let use_case = AskAiUseCase::new(gateway, BehaviorConfig::default());
        assert_eq!(
            use_case.available_models().await.unwrap_err(),
            AskError::Transport(GatewayError::MissingCredential(
                "GEMINI_API_KEY".to_string()
            ))
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_available_models_timeout() {
        let gateway = Arc::new(MockGateway::new(Reply::Hang));
        let config = BehaviorConfig::default().with_timeout_seconds(5);
        let use_case = AskAiUseCase::new(gateway, config);

        let err = use_case.available_models().await.unwrap_err();
        assert_eq!(err, AskError::Transport(GatewayError::Timeout));
    }
}
