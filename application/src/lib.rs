//! Application layer for smartconv
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::BehaviorConfig;
pub use ports::{
    llm_gateway::{GatewayError, LlmGateway, LlmSession},
    progress::{AskProgressNotifier, NoProgress},
    unit_resolver::{ResolveError, UnitDescriptor, UnitResolver},
};
pub use use_cases::ask_ai::{AskAiUseCase, AskError, AskInput};
pub use use_cases::convert_units::{ConvertError, ConvertUnitsUseCase};
pub use use_cases::list_units::ListUnitsUseCase;
