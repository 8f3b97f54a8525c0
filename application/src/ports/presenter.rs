//! Presentation port
//!
//! Everything the quiz wants the player to see goes through
//! [`QuizPresenter`]. The use cases never write to a terminal or any other
//! surface directly.

use quiz_domain::{AnswerOutcome, CharacterName, QuestionItem};

/// Output surface of the quiz
pub trait QuizPresenter: Send + Sync {
    /// Show a question with its four choices
    fn show_question(&self, item: &QuestionItem, choices: &[CharacterName]);

    /// Show the "correct answer" banner
    fn show_banner(&self, answer: &CharacterName);

    /// Remove the banner before the next question
    fn clear_banner(&self);

    /// Show the running and best score
    fn show_score(&self, current: u32, best: u32);

    /// Show the result of the player's selection
    fn show_feedback(&self, outcome: &AnswerOutcome);

    /// Show a blocking error; the quiz cannot continue
    fn show_error(&self, message: &str);

    /// Show a transient status line ("Fetching new quotes...")
    fn show_status(&self, message: &str);
}

/// Presenter that discards everything
pub struct NoPresenter;

impl QuizPresenter for NoPresenter {
    fn show_question(&self, _item: &QuestionItem, _choices: &[CharacterName]) {}
    fn show_banner(&self, _answer: &CharacterName) {}
    fn clear_banner(&self) {}
    fn show_score(&self, _current: u32, _best: u32) {}
    fn show_feedback(&self, _outcome: &AnswerOutcome) {}
    fn show_error(&self, _message: &str) {}
    fn show_status(&self, _message: &str) {}
}
