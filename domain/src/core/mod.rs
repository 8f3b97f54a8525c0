//! Core domain concepts shared across the quiz.
//!
//! - [`character::CharacterName`] — an answer / distractor name
//! - [`question::QuestionItem`] — a single askable question
//! - [`error::DomainError`] — domain-level errors

pub mod character;
pub mod error;
pub mod question;
