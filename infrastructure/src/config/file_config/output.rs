//! Output configuration from TOML (`[output]` section)

use serde::{Deserialize, Serialize};
use smartconv_domain::{DEFAULT_PRECISION, OutputFormat};

pub use smartconv_domain::OutputFormat as FileOutputFormat;

/// Raw output configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    pub format: OutputFormat,
    /// Enable colored terminal output
    pub color: bool,
    /// Significant digits in conversion results
    pub precision: usize,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            color: true,
            precision: DEFAULT_PRECISION,
        }
    }
}
