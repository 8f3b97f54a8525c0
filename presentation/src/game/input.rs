//! Parsing of player input lines

use quiz_domain::{CHOICE_COUNT, Mode};

/// A single parsed line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Quit,
    Help,
    Score,
    /// `/mode` without an argument
    ShowMode,
    Mode(Mode),
    InvalidMode(String),
    /// Advance to the next question
    Next,
    /// 1-based choice number
    Choice(usize),
    /// Answer typed out by name
    Answer(String),
    Empty,
    Unknown(String),
}

/// Parse one input line.
///
/// `awaiting` is true while a question is open; an empty line then does
/// nothing, whereas after an answer it advances.
pub fn parse_input(line: &str, awaiting: bool) -> ReplCommand {
    let line = line.trim();

    if line.is_empty() {
        return if awaiting {
            ReplCommand::Empty
        } else {
            ReplCommand::Next
        };
    }

    if let Some(rest) = line.strip_prefix('/') {
        let mut parts = rest.split_whitespace();
        let cmd = parts.next().unwrap_or_default();
        let arg = parts.next();
        return match (cmd, arg) {
            ("quit" | "exit" | "q", _) => ReplCommand::Quit,
            ("help" | "h" | "?", _) => ReplCommand::Help,
            ("score", _) => ReplCommand::Score,
            ("next" | "n", _) => ReplCommand::Next,
            ("mode", None) => ReplCommand::ShowMode,
            ("mode", Some(value)) => match value.parse::<Mode>() {
                Ok(mode) => ReplCommand::Mode(mode),
                Err(_) => ReplCommand::InvalidMode(value.to_string()),
            },
            _ => ReplCommand::Unknown(line.to_string()),
        };
    }

    if !awaiting && matches!(line.to_lowercase().as_str(), "next" | "n") {
        return ReplCommand::Next;
    }

    if let Ok(n) = line.parse::<usize>()
        && (1..=CHOICE_COUNT).contains(&n)
    {
        return ReplCommand::Choice(n);
    }

    ReplCommand::Answer(line.to_string())
}
