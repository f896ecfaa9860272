//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// JSON document per result
    Json,
}

impl From<OutputFormat> for smartconv_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => smartconv_domain::OutputFormat::Text,
            OutputFormat::Json => smartconv_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for smartconv
#[derive(Parser, Debug)]
#[command(name = "smartconv")]
#[command(author, version, about = "Unit converter and AI assistant")]
#[command(long_about = r#"
smartconv converts values between units and forwards questions to a Gemini model.

Configuration files are loaded from (in priority order):
1. SMARTCONV_<SECTION>__<KEY>   Environment overrides
2. --config <path>               Explicit config file
3. ./smartconv.toml              Project-level config
4. ~/.config/smartconv/config.toml   Global config

The API key is read from GEMINI_API_KEY (or the variable named by
ai.api_key_env); a .env file in the working directory is honoured.

Example:
  smartconv convert 5 meters feet
  smartconv convert 100 degC degF
  smartconv ask "What is the speed of light in km/h?"
  smartconv units --like km/h
  smartconv models
  smartconv                      (interactive mode)
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Model to send questions to
    #[arg(short, long, global = true, value_name = "MODEL")]
    pub model: Option<String>,

    /// Timeout in seconds for AI requests
    #[arg(long, global = true, value_name = "SECONDS")]
    pub timeout: Option<u64>,

    /// Output format (overrides output.format)
    #[arg(short, long, global = true, value_enum)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Also write logs to this file
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Convert a value from one unit to another
    #[command(allow_negative_numbers = true)]
    Convert {
        /// Value to convert
        value: f64,
        /// Source unit, e.g. "meters" or "km/h"
        from: String,
        /// Target unit
        to: String,
    },

    /// Ask the AI model a question
    Ask {
        /// Question text; multiple words are joined with spaces
        #[arg(required = true, num_args = 1.., trailing_var_arg = true)]
        prompt: Vec<String>,
    },

    /// Start the interactive assistant (default)
    Interactive,

    /// List known units
    Units {
        /// Only list units with the same dimension as this expression
        #[arg(long, value_name = "EXPR")]
        like: Option<String>,
    },

    /// List the models the API key can generate with
    Models,
}

impl Cli {
    /// Subcommand to run; no subcommand means interactive mode.
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Interactive)
    }
}
