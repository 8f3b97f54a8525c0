//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod output;
mod quiz;
mod repl;
mod sources;

pub use output::FileOutputConfig;
pub use quiz::FileQuizConfig;
pub use repl::FileReplConfig;
pub use sources::{DEFAULT_IMAGE_URL, DEFAULT_QUOTE_URL, DEFAULT_TIMEOUT_SECS, FileSourcesConfig};

use serde::{Deserialize, Serialize};

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: a default is used instead.
    Warning,
}

/// A detected issue in the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub message: String,
}

impl ConfigIssue {
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Data source settings
    pub sources: FileSourcesConfig,
    /// Quiz rules
    pub quiz: FileQuizConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// REPL settings
    pub repl: FileReplConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        issues.extend(self.quiz.parse_mode().1);
        issues.extend(self.quiz.check());

        if self.sources.quote_count == 0 {
            issues.push(ConfigIssue::error(
                "sources.quote_count: must be at least 1",
            ));
        }
        if self.sources.image_limit == 0 {
            issues.push(ConfigIssue::error(
                "sources.image_limit: must be at least 1",
            ));
        }
        if self.sources.timeout_secs == Some(0) {
            issues.push(ConfigIssue::warning(format!(
                "sources.timeout_secs: 0 is not a usable limit, falling back to {}",
                DEFAULT_TIMEOUT_SECS
            )));
        }

        issues
    }

    /// True if any issue makes the configuration unusable
    pub fn has_errors(issues: &[ConfigIssue]) -> bool {
        issues.iter().any(|i| i.severity == Severity::Error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[sources]
show = "one piece"
quote_count = 5
emoji_catalog = "./emojis.json"

[quiz]
mode = "quote"

[output]
color = false

[repl]
history_file = "~/.local/share/strawhat-quiz/history.txt"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.sources.quote_count, 5);
        assert_eq!(
            config.sources.emoji_catalog,
            Some("./emojis.json".to_string())
        );
        assert_eq!(config.quiz.mode, "quote");
        assert!(!config.output.color);
        assert!(config.repl.history_file.is_some());
    }

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert_eq!(config.sources.quote_count, 10);
        assert_eq!(config.sources.image_limit, 75);
        assert_eq!(config.quiz.mode, "random");
        assert!(config.output.color);
    }

    #[test]
    fn test_validate_valid_config() {
        let config = FileConfig::default();
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_validate_reports_zero_counts() {
        let mut config = FileConfig::default();
        config.sources.quote_count = 0;
        config.sources.image_limit = 0;

        let issues = config.validate();
        assert_eq!(issues.len(), 2);
        assert!(FileConfig::has_errors(&issues));
    }

    #[test]
    fn test_zero_timeout_is_only_a_warning() {
        let mut config = FileConfig::default();
        config.sources.timeout_secs = Some(0);

        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Warning);
        assert!(!FileConfig::has_errors(&issues));
        assert_eq!(config.sources.effective_timeout_secs(), Some(DEFAULT_TIMEOUT_SECS));
    }
}
