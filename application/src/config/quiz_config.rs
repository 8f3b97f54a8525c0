//! Quiz rules a play session starts with.

use quiz_domain::{CategoryWeights, Mode, Roster};

/// Configuration consumed by [`PlayQuizUseCase`](crate::use_cases::play_quiz::PlayQuizUseCase).
#[derive(Debug, Clone)]
pub struct QuizConfig {
    /// Mode the session starts in
    pub mode: Mode,
    /// Random-mode category weights
    pub weights: CategoryWeights,
    /// Names distractors are drawn from
    pub roster: Roster,
    /// How many times selection re-runs when a chosen pool turns out empty
    pub max_selection_attempts: usize,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            mode: Mode::Random,
            weights: CategoryWeights::default(),
            roster: Roster::default(),
            max_selection_attempts: 8,
        }
    }
}

impl QuizConfig {
    // ==================== Builder Methods ====================

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_weights(mut self, weights: CategoryWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn with_roster(mut self, roster: Roster) -> Self {
        self.roster = roster;
        self
    }
}
