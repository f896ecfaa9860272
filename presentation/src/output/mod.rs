//! Output formatting

pub mod console;
pub mod formatter;
pub mod json;

use crate::config::OutputConfig;
use console::ConsoleFormatter;
use formatter::OutputFormatter;
use json::JsonFormatter;
use smartconv_domain::OutputFormat;

/// Formatter matching the configured output format.
pub fn formatter_for(config: &OutputConfig) -> Box<dyn OutputFormatter> {
    match config.format {
        OutputFormat::Text => Box::new(ConsoleFormatter::new(config.precision)),
        OutputFormat::Json => Box::new(JsonFormatter::new(config.precision)),
    }
}
