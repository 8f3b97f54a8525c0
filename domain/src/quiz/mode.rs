//! Question mode selected by the player.

use crate::core::error::DomainError;
use crate::core::question::QuestionKind;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Constraint on which category supplies the next question.
///
/// Persists until the player changes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Weighted random pick across all non-empty pools
    #[default]
    Random,
    Quote,
    Emoji,
    Image,
}

impl Mode {
    pub const ALL: [Mode; 4] = [Mode::Random, Mode::Quote, Mode::Emoji, Mode::Image];

    /// The fixed category of this mode, `None` for [`Mode::Random`]
    pub fn kind(&self) -> Option<QuestionKind> {
        match self {
            Mode::Random => None,
            Mode::Quote => Some(QuestionKind::Quote),
            Mode::Emoji => Some(QuestionKind::Emoji),
            Mode::Image => Some(QuestionKind::Image),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Random => "random",
            Mode::Quote => "quote",
            Mode::Emoji => "emoji",
            Mode::Image => "image",
        }
    }
}

impl From<QuestionKind> for Mode {
    fn from(kind: QuestionKind) -> Self {
        match kind {
            QuestionKind::Quote => Mode::Quote,
            QuestionKind::Emoji => Mode::Emoji,
            QuestionKind::Image => Mode::Image,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Mode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "random" | "mixed" => Ok(Mode::Random),
            "quote" | "quotes" => Ok(Mode::Quote),
            "emoji" | "emojis" => Ok(Mode::Emoji),
            "image" | "images" => Ok(Mode::Image),
            _ => Err(DomainError::InvalidMode(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_modes() {
        assert_eq!("random".parse::<Mode>().unwrap(), Mode::Random);
        assert_eq!("Quote".parse::<Mode>().unwrap(), Mode::Quote);
        assert_eq!(" emojis ".parse::<Mode>().unwrap(), Mode::Emoji);
        assert_eq!("IMAGE".parse::<Mode>().unwrap(), Mode::Image);
    }

    #[test]
    fn test_parse_invalid_mode() {
        let err = "gifs".parse::<Mode>().unwrap_err();
        assert_eq!(err, DomainError::InvalidMode("gifs".to_string()));
    }

    #[test]
    fn test_mode_kind() {
        assert_eq!(Mode::Random.kind(), None);
        assert_eq!(Mode::Image.kind(), Some(QuestionKind::Image));
        assert_eq!(Mode::from(QuestionKind::Emoji), Mode::Emoji);
    }

    #[test]
    fn test_default_is_random() {
        assert_eq!(Mode::default(), Mode::Random);
    }
}
