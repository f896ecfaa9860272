//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod ai;
mod output;
mod repl;

pub use ai::FileAiConfig;
pub use output::{FileOutputConfig, FileOutputFormat};
pub use repl::FileReplConfig;

use serde::{Deserialize, Serialize};
use smartconv_application::BehaviorConfig;
use thiserror::Error;

/// Largest number of significant digits an `f64` can carry
pub const MAX_PRECISION: usize = 17;

/// Validation errors for configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("ai.timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("ai.model cannot be empty")]
    EmptyModelName,

    #[error("output.precision must be between 1 and {MAX_PRECISION}, got {0}")]
    InvalidPrecision(usize),
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Model and endpoint settings
    pub ai: FileAiConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// REPL settings
    pub repl: FileReplConfig,
}

impl FileConfig {
    /// Validate the configuration, stopping at the first problem.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if let Some(0) = self.ai.timeout_seconds {
            return Err(ConfigValidationError::InvalidTimeout);
        }

        if self.ai.model.trim().is_empty() {
            return Err(ConfigValidationError::EmptyModelName);
        }

        if !(1..=MAX_PRECISION).contains(&self.output.precision) {
            return Err(ConfigValidationError::InvalidPrecision(
                self.output.precision,
            ));
        }

        Ok(())
    }

    /// Use case settings derived from this file.
    pub fn behavior(&self) -> BehaviorConfig {
        BehaviorConfig::default()
            .with_model(self.ai.model_id())
            .with_optional_timeout(self.ai.timeout_seconds)
    }
}
