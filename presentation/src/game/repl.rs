//! REPL (Read-Eval-Print Loop) for the quiz

use super::input::{ReplCommand, parse_input};
use crate::ConsoleFormatter;
use colored::Colorize;
use quiz_application::{CycleOutcome, PlayQuizError, PlayQuizUseCase};
use quiz_domain::{CharacterName, Mode};
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::path::PathBuf;
use tracing::{debug, warn};

/// Why the REPL stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplExit {
    /// The player left
    Quit,
    /// A full data load failed and the session cannot go on
    Fatal,
}

/// Interactive quiz REPL
pub struct QuizRepl {
    use_case: PlayQuizUseCase,
    history_path: Option<PathBuf>,
}

impl QuizRepl {
    pub fn new(use_case: PlayQuizUseCase) -> Self {
        Self {
            use_case,
            history_path: dirs::data_dir().map(|p| p.join("strawhat-quiz").join("history.txt")),
        }
    }

    /// Override the history file location
    pub fn with_history_file(mut self, path: Option<PathBuf>) -> Self {
        if path.is_some() {
            self.history_path = path;
        }
        self
    }

    /// Run the interactive REPL
    pub async fn run(&mut self) -> RlResult<ReplExit> {
        let mut rl = DefaultEditor::new()?;

        if let Some(ref path) = self.history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome();

        let exit = match self.use_case.start().await {
            Ok(outcome) => {
                self.print_cycle_hint(&outcome);
                self.read_loop(&mut rl).await
            }
            Err(e) => {
                debug!("Startup failed: {}", e);
                ReplExit::Fatal
            }
        };

        if let Some(ref path) = self.history_path {
            let _ = rl.save_history(path);
        }

        Ok(exit)
    }

    async fn read_loop(&mut self, rl: &mut DefaultEditor) -> ReplExit {
        loop {
            let awaiting = self.use_case.session().is_awaiting_answer();
            let prompt = if awaiting { "answer> " } else { "next> " };

            let line = match rl.readline(prompt) {
                Ok(line) => line,
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    return ReplExit::Quit;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    return ReplExit::Quit;
                }
            };

            if !line.trim().is_empty() {
                let _ = rl.add_history_entry(line.trim());
            }

            let result = match parse_input(&line, awaiting) {
                ReplCommand::Quit => {
                    println!("Bye!");
                    return ReplExit::Quit;
                }
                ReplCommand::Help => {
                    self.print_help();
                    Ok(())
                }
                ReplCommand::Score => {
                    let session = self.use_case.session();
                    println!(
                        "{}",
                        ConsoleFormatter::format_score(session.current_score(), session.best_score())
                    );
                    Ok(())
                }
                ReplCommand::ShowMode => {
                    println!("Mode: {}", self.use_case.mode().to_string().bold());
                    Ok(())
                }
                ReplCommand::InvalidMode(value) => {
                    println!("Unknown mode: {}", value);
                    println!("Available modes: {}", Self::mode_names());
                    Ok(())
                }
                ReplCommand::Mode(mode) => self.switch_mode(mode).await,
                ReplCommand::Next => self.next_question(awaiting).await,
                ReplCommand::Choice(n) => self.answer_choice(n),
                ReplCommand::Answer(text) => self.answer_text(&text, awaiting),
                ReplCommand::Empty => Ok(()),
                ReplCommand::Unknown(cmd) => {
                    println!("Unknown command: {}", cmd);
                    println!("Type /help for available commands");
                    Ok(())
                }
            };

            match result {
                Ok(()) => {}
                Err(e) if e.is_fatal() => {
                    debug!("Session stopped: {}", e);
                    return ReplExit::Fatal;
                }
                Err(e) => {
                    warn!("{}", e);
                    eprintln!("{}", ConsoleFormatter::format_error(&e.to_string()));
                }
            }
        }
    }

    async fn switch_mode(&mut self, mode: Mode) -> Result<(), PlayQuizError> {
        let outcome = self.use_case.set_mode(mode).await?;
        self.print_cycle_hint(&outcome);
        Ok(())
    }

    async fn next_question(&mut self, awaiting: bool) -> Result<(), PlayQuizError> {
        if awaiting {
            println!("{}", "Answer the current question first.".dimmed());
            return Ok(());
        }
        let outcome = self.use_case.load_next_question().await?;
        self.print_cycle_hint(&outcome);
        Ok(())
    }

    fn answer_choice(&mut self, index: usize) -> Result<(), PlayQuizError> {
        if !self.use_case.session().is_awaiting_answer() {
            println!("{}", "No open question. Press Enter for the next one.".dimmed());
            return Ok(());
        }
        self.use_case.submit_choice(index)?;
        self.print_answer_hint();
        Ok(())
    }

    fn answer_text(&mut self, text: &str, awaiting: bool) -> Result<(), PlayQuizError> {
        if !awaiting {
            println!("{}", "No open question. Press Enter for the next one.".dimmed());
            return Ok(());
        }

        let choices = self
            .use_case
            .current_question()
            .map(|q| q.choices.as_slice())
            .unwrap_or_default();

        match match_choice(text, choices) {
            Some(choice) => {
                let choice = choice.as_str().to_string();
                self.use_case.submit_answer(&choice)?;
                self.print_answer_hint();
            }
            None => {
                println!("'{}' is not one of the choices. Pick 1-{}.", text, choices.len());
            }
        }
        Ok(())
    }

    fn print_cycle_hint(&self, outcome: &CycleOutcome) {
        match outcome {
            CycleOutcome::Presented(_) => {
                println!("{}", "Type 1-4 or the character's name.".dimmed());
            }
            CycleOutcome::Halted { .. } => {
                println!(
                    "{}",
                    "Use /mode to switch category or press Enter to try again.".dimmed()
                );
            }
        }
    }

    fn print_answer_hint(&self) {
        println!("{}", "Press Enter for the next question.".dimmed());
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│        Strawhat Quiz - One Piece Trivia     │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("Mode: {}", self.use_case.mode());
        println!();
        println!("Commands:");
        println!("  /help     - Show this help");
        println!("  /mode X   - Switch mode ({})", Self::mode_names());
        println!("  /quit     - Exit quiz");
        println!();
    }

    fn print_help(&self) {
        println!();
        println!("Answering:");
        println!("  1-4                - Pick a choice by number");
        println!("  <name>             - Pick a choice by name");
        println!("  Enter, n, next     - Next question (after answering)");
        println!();
        println!("Commands:");
        println!("  /help, /h, /?      - Show this help");
        println!("  /mode [X]          - Show or switch mode");
        println!("  /score             - Show current and max score");
        println!("  /next, /n          - Next question");
        println!("  /quit, /exit, /q   - Exit quiz");
        println!();
    }

    fn mode_names() -> String {
        Mode::ALL
            .iter()
            .map(|m| m.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Find the choice a typed name refers to, ignoring case
fn match_choice<'a>(text: &str, choices: &'a [CharacterName]) -> Option<&'a CharacterName> {
    let text = text.trim();
    choices
        .iter()
        .find(|c| c.as_str().eq_ignore_ascii_case(text))
}
