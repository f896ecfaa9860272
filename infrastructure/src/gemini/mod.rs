//! Gemini REST adapter
//!
//! Implements LlmGateway for Google's Generative Language API.

pub mod error;
pub mod gateway;
pub mod protocol;
pub mod session;

pub use gateway::{DEFAULT_API_KEY_ENV, DEFAULT_BASE_URL, GeminiConfig, GeminiLlmGateway};
pub use session::GeminiSession;
