//! Presentation layer for smartconv
//!
//! This crate contains CLI definitions, output formatters,
//! progress reporters, and the interactive REPL.

pub mod cli;
pub mod config;
pub mod output;
pub mod progress;
pub mod repl;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, OutputFormat};
pub use config::{OutputConfig, ReplConfig};
pub use output::console::ConsoleFormatter;
pub use output::formatter::OutputFormatter;
pub use output::formatter_for;
pub use output::json::JsonFormatter;
pub use progress::spinner::{SimpleProgress, SpinnerProgress};
pub use repl::assistant::{AssistantRepl, Flow};
pub use repl::input::{InputError, Mode, ReplCommand, parse_conversion};
