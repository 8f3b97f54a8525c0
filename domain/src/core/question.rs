//! Question value objects

use crate::core::character::CharacterName;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Category a question belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKind {
    /// A line spoken by the character
    Quote,
    /// An emoji clue describing the character
    Emoji,
    /// A character portrait, referenced by URL
    Image,
}

impl QuestionKind {
    pub const ALL: [QuestionKind; 3] = [QuestionKind::Quote, QuestionKind::Emoji, QuestionKind::Image];

    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionKind::Quote => "quote",
            QuestionKind::Emoji => "emoji",
            QuestionKind::Image => "image",
        }
    }

    /// Plural label used in status messages ("Fetching new quotes...")
    pub fn plural(&self) -> &'static str {
        match self {
            QuestionKind::Quote => "quotes",
            QuestionKind::Emoji => "emojis",
            QuestionKind::Image => "images",
        }
    }
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single askable question (Value Object)
///
/// `content` is the quote text, the emoji string or the image URL,
/// depending on `kind`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionItem {
    kind: QuestionKind,
    content: String,
    answer: CharacterName,
}

impl QuestionItem {
    pub fn new(kind: QuestionKind, content: impl Into<String>, answer: impl Into<CharacterName>) -> Self {
        Self {
            kind,
            content: content.into(),
            answer: answer.into(),
        }
    }

    pub fn quote(text: impl Into<String>, answer: impl Into<CharacterName>) -> Self {
        Self::new(QuestionKind::Quote, text, answer)
    }

    pub fn emoji(clue: impl Into<String>, answer: impl Into<CharacterName>) -> Self {
        Self::new(QuestionKind::Emoji, clue, answer)
    }

    pub fn image(url: impl Into<String>, answer: impl Into<CharacterName>) -> Self {
        Self::new(QuestionKind::Image, url, answer)
    }

    pub fn kind(&self) -> QuestionKind {
        self.kind
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn answer(&self) -> &CharacterName {
        &self.answer
    }

    /// Text shown to the player. Quotes are wrapped in double quotes.
    pub fn prompt(&self) -> String {
        match self.kind {
            QuestionKind::Quote => format!("\"{}\"", self.content),
            QuestionKind::Emoji | QuestionKind::Image => self.content.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_set_kind() {
        assert_eq!(QuestionItem::quote("q", "Zoro").kind(), QuestionKind::Quote);
        assert_eq!(QuestionItem::emoji("🍖", "Luffy").kind(), QuestionKind::Emoji);
        assert_eq!(QuestionItem::image("http://x", "Nami").kind(), QuestionKind::Image);
    }

    #[test]
    fn test_prompt_quotes_only_quotes() {
        let quote = QuestionItem::quote("I'm gonna be King of the Pirates!", "Monkey D. Luffy");
        assert_eq!(quote.prompt(), "\"I'm gonna be King of the Pirates!\"");

        let emoji = QuestionItem::emoji("🗡️🗡️🗡️", "Roronoa Zoro");
        assert_eq!(emoji.prompt(), "🗡️🗡️🗡️");
    }

    #[test]
    fn test_kind_serde_lowercase() {
        let json = serde_json::to_string(&QuestionKind::Image).unwrap();
        assert_eq!(json, "\"image\"");
    }
}
