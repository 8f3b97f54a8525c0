//! Character name value object

use serde::{Deserialize, Serialize};

/// Name of a character, used both as a correct answer and as a distractor.
///
/// Compared by exact string equality, the same way a clicked choice is
/// matched against the pending answer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CharacterName(String);

impl CharacterName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CharacterName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CharacterName {
    fn from(s: &str) -> Self {
        CharacterName::new(s)
    }
}

impl From<String> for CharacterName {
    fn from(s: String) -> Self {
        CharacterName::new(s)
    }
}

impl PartialEq<str> for CharacterName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for CharacterName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
