//! Configuration file loading for strawhat-quiz
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./strawhat.toml` or `./.strawhat.toml`
//! 3. XDG config: `$XDG_CONFIG_HOME/strawhat-quiz/config.toml`
//! 4. Fallback: `~/.config/strawhat-quiz/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigIssue, DEFAULT_IMAGE_URL, DEFAULT_QUOTE_URL, DEFAULT_TIMEOUT_SECS, FileConfig,
    FileOutputConfig, FileQuizConfig, FileReplConfig, FileSourcesConfig, Severity,
};
pub use loader::ConfigLoader;
