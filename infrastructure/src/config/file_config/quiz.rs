//! Quiz rules from TOML (`[quiz]` section)
//!
//! ```toml
//! [quiz]
//! mode = "random"            # or "quote", "emoji", "image"
//!
//! [quiz.weights]
//! quote = 4
//! emoji = 3
//! image = 3
//! ```

use super::{ConfigIssue, Severity};
use quiz_application::QuizConfig;
use quiz_domain::{CategoryWeights, Mode, Roster};
use serde::{Deserialize, Serialize};

/// Raw quiz configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileQuizConfig {
    /// Starting mode
    pub mode: String,
    /// Random-mode weights
    pub weights: CategoryWeights,
    /// Replacement distractor roster
    pub roster: Option<Vec<String>>,
}

impl Default for FileQuizConfig {
    fn default() -> Self {
        Self {
            mode: Mode::Random.to_string(),
            weights: CategoryWeights::default(),
            roster: None,
        }
    }
}

impl FileQuizConfig {
    /// Parse the starting mode, falling back to random on bad input
    pub fn parse_mode(&self) -> (Mode, Vec<ConfigIssue>) {
        match self.mode.parse::<Mode>() {
            Ok(mode) => (mode, vec![]),
            Err(e) => (
                Mode::Random,
                vec![ConfigIssue::warning(format!(
                    "quiz.mode: {}, falling back to 'random'",
                    e
                ))],
            ),
        }
    }

    /// Check weights and roster for values the quiz cannot work with
    pub fn check(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        let total = self.weights.total();
        if total == 0 {
            issues.push(ConfigIssue {
                severity: Severity::Error,
                message: "quiz.weights: all weights are 0, random mode cannot pick a category"
                    .to_string(),
            });
        } else if total > u64::from(u32::MAX) {
            issues.push(ConfigIssue::error(format!(
                "quiz.weights: total weight {} exceeds the limit of {}",
                total,
                u32::MAX
            )));
        }

        if let Some(names) = &self.roster {
            let unique = Roster::new(names.iter().cloned()).unique_count();
            if unique < 4 {
                issues.push(ConfigIssue {
                    severity: Severity::Error,
                    message: format!(
                        "quiz.roster: needs at least 4 unique names, found {}",
                        unique
                    ),
                });
            }
        }

        issues
    }

    /// Convert into the application's quiz configuration
    pub fn to_quiz_config(&self) -> QuizConfig {
        let (mode, _) = self.parse_mode();
        let config = QuizConfig::default()
            .with_mode(mode)
            .with_weights(self.weights);

        match &self.roster {
            Some(names) => config.with_roster(Roster::new(names.iter().cloned())),
            None => config,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_weights_and_mode() {
        let toml_str = r#"
[quiz]
mode = "emoji"

[quiz.weights]
quote = 1
"#;
        let config: super::super::FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.quiz.parse_mode().0, Mode::Emoji);
        // Unspecified weights keep their defaults
        assert_eq!(config.quiz.weights, CategoryWeights::new(1, 3, 3));
    }

    #[test]
    fn test_unknown_mode_falls_back() {
        let config = FileQuizConfig {
            mode: "video".to_string(),
            ..Default::default()
        };
        let (mode, issues) = config.parse_mode();
        assert_eq!(mode, Mode::Random);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Warning);
    }

    #[test]
    fn test_zero_weights_are_an_error() {
        let config = FileQuizConfig {
            weights: CategoryWeights::new(0, 0, 0),
            ..Default::default()
        };
        let issues = config.check();
        assert!(issues.iter().any(|i| i.severity == Severity::Error));
    }

    #[test]
    fn test_overflowing_weights_are_an_error() {
        let toml_str = r#"
[quiz.weights]
quote = 4294967295
emoji = 1
image = 0
"#;
        let config: super::super::FileConfig = toml::from_str(toml_str).unwrap();
        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Error);
        assert!(issues[0].message.contains("exceeds"));
    }

    #[test]
    fn test_custom_roster() {
        let config = FileQuizConfig {
            roster: Some(
                ["Koby", "Helmeppo", "Tashigi", "Hina"]
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
            ),
            ..Default::default()
        };
        assert!(config.check().is_empty());
        assert_eq!(config.to_quiz_config().roster.len(), 4);
    }
}
