//! Application layer for strawhat-quiz
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{BehaviorConfig, QuizConfig};
pub use ports::{
    load_progress::{LoadProgressNotifier, NoLoadProgress},
    presenter::{NoPresenter, QuizPresenter},
    question_source::{QuestionSource, QuestionSources, SourceError},
};
pub use use_cases::load_pools::{LoadPoolsError, LoadPoolsUseCase};
pub use use_cases::play_quiz::{
    CycleOutcome, NO_QUESTIONS_MESSAGE, PlayQuizError, PlayQuizUseCase, PresentedQuestion,
    STARTUP_FAILURE_MESSAGE,
};
