//! Presentation layer for strawhat-quiz
//!
//! This crate contains the CLI definition, console output,
//! load progress reporters, and the interactive quiz REPL.

pub mod cli;
pub mod game;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use game::{QuizRepl, ReplCommand, ReplExit, parse_input};
pub use output::console::{ConsoleFormatter, ConsolePresenter, set_color_enabled};
pub use progress::reporter::{LoadProgressReporter, SimpleLoadProgress};
