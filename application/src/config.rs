//! Application-level configuration.
//!
//! This module provides configuration types that control how use cases behave,
//! such as the model and API timeouts.

use smartconv_domain::ModelId;
use std::time::Duration;

/// Default timeout for a single AI request.
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 60;

/// Application behavior configuration.
///
/// Loaded once at startup and read-only afterwards.
#[derive(Debug, Clone)]
pub struct BehaviorConfig {
    /// Model prompts are sent to.
    pub model: ModelId,
    /// Maximum time to wait for an API response before timing out.
    pub timeout: Option<Duration>,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            model: ModelId::default(),
            timeout: Some(Duration::from_secs(DEFAULT_TIMEOUT_SECONDS)),
        }
    }
}

impl BehaviorConfig {
    /// Creates a BehaviorConfig with a timeout specified in seconds.
    pub fn with_timeout_seconds(mut self, seconds: u64) -> Self {
        self.timeout = Some(Duration::from_secs(seconds));
        self
    }

    /// Sets the timeout from an optional value in seconds.
    ///
    /// If `seconds` is `None`, no timeout is applied.
    pub fn with_optional_timeout(mut self, seconds: Option<u64>) -> Self {
        self.timeout = seconds.map(Duration::from_secs);
        self
    }

    pub fn with_model(mut self, model: ModelId) -> Self {
        self.model = model;
        self
    }
}
