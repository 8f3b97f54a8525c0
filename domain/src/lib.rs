//! Domain layer for strawhat-quiz
//!
//! This crate contains the quiz's core rules and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Pools**: one draw-without-replacement pool per question category
//!   (quotes, emojis, images), refilled by replacing their contents
//! - **Mode**: fixed category or weighted random across non-empty pools
//! - **Choices**: the correct answer plus three distinct distractors from
//!   the roster, uniformly shuffled
//! - **Session**: current and best score, one evaluation per question

pub mod core;
pub mod quiz;

// Re-export commonly used types
pub use crate::core::{
    character::CharacterName,
    error::DomainError,
    question::{QuestionItem, QuestionKind},
};
pub use crate::quiz::{
    choices::{CHOICE_COUNT, generate_choices},
    mode::Mode,
    pool::{CategoryPool, PoolSet},
    roster::Roster,
    selector::{CategoryWeights, pick_kind},
    session::{AnswerOutcome, SessionState, Verdict},
};
