//! Console output formatter

use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use smartconv_application::{AskError, ConvertError, GatewayError, UnitDescriptor};
use smartconv_domain::{Answer, Conversion, DEFAULT_PRECISION, Dimension, ModelId};

/// Formats results as human-readable, colored text
#[derive(Debug, Clone, Copy)]
pub struct ConsoleFormatter {
    precision: usize,
}

impl Default for ConsoleFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_PRECISION)
    }
}

impl ConsoleFormatter {
    pub fn new(precision: usize) -> Self {
        Self { precision }
    }

    /// Plain warning line, used by the REPL for input problems.
    pub fn warning(message: &str) -> String {
        format!("⚠️  {}", message.yellow())
    }

    fn section_header(title: &str) -> String {
        format!("{}\n{}", title.cyan().bold(), "-".repeat(40).dimmed())
    }

    fn hint(error: &GatewayError) -> Option<String> {
        match error {
            GatewayError::MissingCredential(var) => Some(format!(
                "Set {} in your environment or a .env file to enable AI questions.",
                var
            )),
            GatewayError::Authentication(_) => Some("Check that your API key is valid.".to_string()),
            GatewayError::QuotaExceeded(_) => Some("Wait a moment and try again.".to_string()),
            _ => None,
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn conversion(&self, conversion: &Conversion) -> String {
        format!("✅ {}", conversion.formatted(self.precision).green().bold())
    }

    fn conversion_error(&self, error: &ConvertError) -> String {
        Self::warning(&error.to_string())
    }

    fn answer(&self, answer: &Answer) -> String {
        format!(
            "🤖 {} {}\n\n{}",
            "AI Response:".cyan().bold(),
            format!("({})", answer.model).dimmed(),
            answer.text.trim_end()
        )
    }

    fn ask_error(&self, error: &AskError) -> String {
        if let AskError::EmptyPrompt = error {
            return Self::warning("Please enter a question.");
        }

        let mut output = format!("❌ {} {}", "Error:".red().bold(), error);
        if let AskError::Transport(cause) = error
            && let Some(hint) = Self::hint(cause)
        {
            output.push_str(&format!("\n   {}", hint.dimmed()));
        }
        output
    }

    fn units(&self, units: &[UnitDescriptor]) -> String {
        let mut output = String::new();
        let mut current: Option<Dimension> = None;

        for unit in units {
            if current != Some(unit.dimension) {
                if current.is_some() {
                    output.push('\n');
                }
                output.push_str(&Self::section_header(&unit.dimension.to_string()));
                output.push('\n');
                current = Some(unit.dimension);
            }
            let prefix_mark = if unit.prefixable { "*" } else { " " };
            output.push_str(&format!(
                "  {:<12}{} {}\n",
                unit.symbol.bold(),
                prefix_mark,
                unit.name
            ));
        }

        if units.is_empty() {
            output.push_str(&Self::warning("No matching units."));
        } else {
            output.push_str(&format!("\n{}\n", "* accepts SI prefixes (k, m, µ, ...)".dimmed()));
        }
        output
    }

    fn models(&self, models: &[ModelId], current: &ModelId) -> String {
        if models.is_empty() {
            return Self::warning("No models available.");
        }

        let mut output = Self::section_header("Available models");
        for model in models {
            output.push('\n');
            if model == current {
                output.push_str(&format!(
                    "  {} {}",
                    model.to_string().green().bold(),
                    "(current)".dimmed()
                ));
            } else {
                output.push_str(&format!("  {}", model));
            }
        }
        output
    }
}
