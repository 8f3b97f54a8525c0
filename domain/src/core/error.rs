//! Domain error types

use crate::core::question::QuestionKind;
use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A pool had nothing left to draw. Handled internally by refill or
    /// reinitialization and never shown to the player.
    #[error("No {0} questions left in the pool")]
    PoolExhausted(QuestionKind),

    #[error("Roster needs at least 4 unique names, found {unique}")]
    InsufficientRoster { unique: usize },

    #[error("No question is awaiting an answer")]
    NoPendingQuestion,

    #[error("Invalid mode: {0} (expected random, quote, emoji or image)")]
    InvalidMode(String),
}
