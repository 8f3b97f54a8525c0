//! Interactive quiz module
//!
//! Provides a readline-based game loop on top of [`PlayQuizUseCase`](quiz_application::PlayQuizUseCase).

mod input;
mod repl;

pub use input::{ReplCommand, parse_input};
pub use repl::{QuizRepl, ReplExit};
