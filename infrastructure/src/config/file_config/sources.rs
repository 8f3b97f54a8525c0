//! Data source configuration from TOML (`[sources]` section)
//!
//! Example configuration:
//!
//! ```toml
//! [sources]
//! quote_url = "https://yurippe.vercel.app/api/quotes"
//! show = "one piece"
//! quote_count = 10
//! image_url = "https://api.jikan.moe/v4/anime/21/characters"
//! image_limit = 75
//! emoji_catalog = "./one_piece_emojis.json"
//! timeout_secs = 10
//! ```

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default quote service endpoint
pub const DEFAULT_QUOTE_URL: &str = "https://yurippe.vercel.app/api/quotes";

/// Default per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default character roster endpoint (anime 21)
pub const DEFAULT_IMAGE_URL: &str = "https://api.jikan.moe/v4/anime/21/characters";

/// Raw source configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSourcesConfig {
    /// Quote service endpoint
    pub quote_url: String,
    /// Show identifier sent to the quote service
    pub show: String,
    /// Number of random quotes per retrieval
    pub quote_count: usize,
    /// Character roster endpoint
    pub image_url: String,
    /// How many of the most popular characters become image questions
    pub image_limit: usize,
    /// Emoji catalog file; the bundled catalog is used when unset
    pub emoji_catalog: Option<String>,
    /// Per-request timeout in seconds (`None` = no limit)
    pub timeout_secs: Option<u64>,
}

impl Default for FileSourcesConfig {
    fn default() -> Self {
        Self {
            quote_url: DEFAULT_QUOTE_URL.to_string(),
            show: "one piece".to_string(),
            quote_count: 10,
            image_url: DEFAULT_IMAGE_URL.to_string(),
            image_limit: 75,
            emoji_catalog: None,
            timeout_secs: Some(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl FileSourcesConfig {
    /// Timeout to apply to each retrieval. A zero value falls back to the
    /// default, `None` disables the limit.
    pub fn effective_timeout_secs(&self) -> Option<u64> {
        match self.timeout_secs {
            Some(0) => Some(DEFAULT_TIMEOUT_SECS),
            other => other,
        }
    }

    pub fn effective_timeout(&self) -> Option<Duration> {
        self.effective_timeout_secs().map(Duration::from_secs)
    }
}
