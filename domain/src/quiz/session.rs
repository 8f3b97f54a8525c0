//! Score keeping and answer evaluation.
//!
//! Each question moves through a small state machine:
//!
//! ```text
//! AwaitingAnswer ──evaluate(correct)───▶ Resolved(Correct)   ──begin_question──▶ AwaitingAnswer
//!                └─evaluate(incorrect)─▶ Resolved(Incorrect) ──begin_question──▶ AwaitingAnswer
//! ```
//!
//! Exactly one evaluation is accepted per question.

use crate::core::character::CharacterName;
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Whether the player's selection matched the pending answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Correct,
    Incorrect,
}

/// Result of evaluating one selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOutcome {
    pub verdict: Verdict,
    /// The choice the player picked
    pub selected: String,
    /// The correct answer of the question
    pub answer: CharacterName,
    pub current_score: u32,
    pub best_score: u32,
}

impl AnswerOutcome {
    pub fn is_correct(&self) -> bool {
        self.verdict == Verdict::Correct
    }
}

/// Running score of a play session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    current_score: u32,
    best_score: u32,
    pending_answer: Option<CharacterName>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_score(&self) -> u32 {
        self.current_score
    }

    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    pub fn pending_answer(&self) -> Option<&CharacterName> {
        self.pending_answer.as_ref()
    }

    /// True between `begin_question` and the evaluation of that question
    pub fn is_awaiting_answer(&self) -> bool {
        self.pending_answer.is_some()
    }

    /// Record the answer of the question just shown.
    ///
    /// Replaces any unanswered question, which then counts as skipped.
    pub fn begin_question(&mut self, answer: CharacterName) {
        self.pending_answer = Some(answer);
    }

    /// Drop the pending answer of a question that left the screen unanswered
    pub fn skip_question(&mut self) {
        self.pending_answer = None;
    }

    /// Evaluate the player's selection against the pending answer.
    ///
    /// Consumes the pending answer; a second call for the same question
    /// fails with [`DomainError::NoPendingQuestion`].
    pub fn evaluate(&mut self, selected: &str) -> Result<AnswerOutcome, DomainError> {
        let answer = self
            .pending_answer
            .take()
            .ok_or(DomainError::NoPendingQuestion)?;

        let verdict = if answer == selected {
            self.current_score += 1;
            if self.current_score > self.best_score {
                self.best_score = self.current_score;
            }
            Verdict::Correct
        } else {
            self.current_score = 0;
            Verdict::Incorrect
        };

        Ok(AnswerOutcome {
            verdict,
            selected: selected.to_string(),
            answer,
            current_score: self.current_score,
            best_score: self.best_score,
        })
    }
}
