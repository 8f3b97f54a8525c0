//! Infrastructure layer for strawhat-quiz
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod sources;

// Re-export commonly used types
pub use config::{
    ConfigIssue, ConfigLoader, FileConfig, FileOutputConfig, FileQuizConfig, FileReplConfig,
    FileSourcesConfig, Severity,
};
pub use sources::{
    CharacterImageSource, EmojiCatalogSource, QuoteApiSource, build_client, sources_from_config,
};
