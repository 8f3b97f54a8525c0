//! Reference roster of character names used as distractors.

use crate::core::character::CharacterName;
use std::collections::HashSet;

/// Built-in One Piece roster
const DEFAULT_NAMES: &[&str] = &[
    "Monkey D. Luffy",
    "Roronoa Zoro",
    "Nami",
    "Usopp",
    "Sanji",
    "Tony Tony Chopper",
    "Nico Robin",
    "Franky",
    "Brook",
    "Jinbe",
    "Portgas D. Ace",
    "Shanks",
    "Trafalgar Law",
    "Eustass Kid",
    "Boa Hancock",
    "Dracule Mihawk",
    "Kaido",
    "Big Mom",
    "Gol D. Roger",
    "Edward Newgate",
    "Sabo",
    "Garp",
    "Smoker",
    "Buggy",
    "Crocodile",
    "Donquixote Doflamingo",
    "Katakuri",
    "Enel",
    "Arlong",
    "Kizaru",
    "Akainu",
    "Aokiji",
    "Fujitora",
    "Rob Lucci",
    "Vegapunk",
    "Yamato",
    "Oden",
    "King",
    "Queen",
    "Ivankov",
    "Bon Clay",
    "Magellan",
    "Hancock",
    "Kuma",
    "Reiju",
    "Caesar Clown",
    "Shiryu",
    "Blackbeard",
    "Hawkins",
    "X Drake",
    "Urouge",
];

/// Fixed list of known names that wrong answers are drawn from.
///
/// Independent of the pools: a pool answer does not have to appear here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    names: Vec<CharacterName>,
}

impl Roster {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<CharacterName>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn names(&self) -> &[CharacterName] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn contains(&self, name: &CharacterName) -> bool {
        self.names.contains(name)
    }

    /// Number of distinct names
    pub fn unique_count(&self) -> usize {
        self.names.iter().collect::<HashSet<_>>().len()
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::new(DEFAULT_NAMES.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_roster() {
        let roster = Roster::default();
        assert_eq!(roster.len(), 51);
        assert_eq!(roster.unique_count(), 51);
        assert!(roster.contains(&CharacterName::from("Nico Robin")));
    }

    #[test]
    fn test_unique_count_ignores_duplicates() {
        let roster = Roster::new(["Nami", "Nami", "Usopp"]);
        assert_eq!(roster.len(), 3);
        assert_eq!(roster.unique_count(), 2);
    }
}
