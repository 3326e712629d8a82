//! Configuration file loading for reasoner
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `REASONER_*` environment variables (e.g. `REASONER_OLLAMA__BASE_URL`)
//! 2. `--config <path>` specified file
//! 3. Project root: `./reasoner.toml` or `./.reasoner.toml`
//! 4. Global: `$XDG_CONFIG_HOME/reasoner/config.toml` (or `~/.config/reasoner/config.toml`)
//! 5. Default values
//!
//! Command-line flags are applied on top by the binary.

mod file_config;
mod loader;

pub use file_config::{
    ConfigIssue, FileConfig, FileLoggingConfig, FileOllamaConfig, FileOutputConfig,
    FileReplConfig, FileSessionConfig,
};
pub use loader::ConfigLoader;
