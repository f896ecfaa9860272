//! Infrastructure layer for smartconv
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod gemini;
pub mod units;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileAiConfig, FileConfig, FileOutputConfig,
    FileOutputFormat, FileReplConfig,
};
pub use gemini::{GeminiConfig, GeminiLlmGateway, GeminiSession};
pub use units::BuiltinUnitRegistry;
