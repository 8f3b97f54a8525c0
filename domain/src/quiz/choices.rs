//! Multiple-choice generation.

use crate::core::character::CharacterName;
use crate::core::error::DomainError;
use crate::quiz::roster::Roster;
use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::HashSet;

/// Number of choices offered per question
pub const CHOICE_COUNT: usize = 4;

/// Build the answer choices for a question.
///
/// Returns exactly [`CHOICE_COUNT`] distinct names: `correct` plus
/// distractors drawn without replacement from the roster, in uniformly
/// shuffled order. Fails with [`DomainError::InsufficientRoster`] when the
/// roster cannot supply enough distinct distractors.
pub fn generate_choices<R: Rng + ?Sized>(
    correct: &CharacterName,
    roster: &Roster,
    rng: &mut R,
) -> Result<Vec<CharacterName>, DomainError> {
    let mut seen = HashSet::new();
    let mut wrong: Vec<&CharacterName> = roster
        .names()
        .iter()
        .filter(|name| *name != correct && seen.insert(*name))
        .collect();

    if wrong.len() < CHOICE_COUNT - 1 {
        return Err(DomainError::InsufficientRoster {
            unique: roster.unique_count(),
        });
    }

    let mut choices = Vec::with_capacity(CHOICE_COUNT);
    choices.push(correct.clone());
    while choices.len() < CHOICE_COUNT {
        let index = rng.random_range(0..wrong.len());
        choices.push(wrong.swap_remove(index).clone());
    }

    choices.shuffle(rng);
    Ok(choices)
}
