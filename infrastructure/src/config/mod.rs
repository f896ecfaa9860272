//! Configuration file loading for smartconv
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `SMARTCONV_<SECTION>__<KEY>` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./smartconv.toml` or `./.smartconv.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/smartconv/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileAiConfig, FileConfig, FileOutputConfig, FileOutputFormat,
    FileReplConfig, MAX_PRECISION,
};
pub use loader::{ConfigLoader, ENV_PREFIX};
