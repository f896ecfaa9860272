//! Output format value object

use serde::{Deserialize, Serialize};

/// How results are rendered on the terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable, optionally colored text (default)
    #[default]
    Text,
    /// One JSON document per result
    Json,
}
