//! Console output for quiz questions, feedback and scores

use colored::Colorize;
use quiz_application::QuizPresenter;
use quiz_domain::{AnswerOutcome, CharacterName, QuestionItem, QuestionKind};

/// Turn colored output on or off for the whole process
pub fn set_color_enabled(enabled: bool) {
    colored::control::set_override(enabled);
}

/// Formats quiz output for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format a question and its numbered choices
    pub fn format_question(item: &QuestionItem, choices: &[CharacterName]) -> String {
        let mut output = String::new();

        output.push_str(&Self::section_header(Self::heading(item.kind())));
        output.push('\n');

        match item.kind() {
            QuestionKind::Image => {
                output.push_str(&format!("{} {}\n\n", "Image:".cyan().bold(), item.content()));
            }
            QuestionKind::Quote | QuestionKind::Emoji => {
                output.push_str(&format!("  {}\n\n", item.prompt().bold()));
            }
        }

        for (i, choice) in choices.iter().enumerate() {
            output.push_str(&format!("  {} {}\n", format!("{})", i + 1).yellow(), choice));
        }

        output
    }

    /// Format the correct-answer banner
    pub fn format_banner(answer: &CharacterName) -> String {
        format!("{} {}", "✔ Correct answer:".green().bold(), answer)
    }

    /// Format the running score line
    pub fn format_score(current: u32, best: u32) -> String {
        format!(
            "{} {}  |  {} {}",
            "Score:".bold(),
            current,
            "Max:".bold(),
            best
        )
    }

    /// Format the verdict on the player's selection
    pub fn format_feedback(outcome: &AnswerOutcome) -> String {
        if outcome.is_correct() {
            format!("{}", "Correct!".green().bold())
        } else {
            format!(
                "{} You picked {}, the answer was {}.",
                "✘ Wrong!".red().bold(),
                outcome.selected,
                outcome.answer.to_string().green()
            )
        }
    }

    pub fn format_error(message: &str) -> String {
        format!("{} {}", "Error:".red().bold(), message)
    }

    pub fn format_status(message: &str) -> String {
        format!("{}", message.dimmed())
    }

    fn heading(kind: QuestionKind) -> &'static str {
        match kind {
            QuestionKind::Quote => "Who said it?",
            QuestionKind::Emoji => "Who is this emoji clue about?",
            QuestionKind::Image => "Who is this?",
        }
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n", format!("── {} ──", title).cyan().bold())
    }
}

/// [`QuizPresenter`] that prints to stdout / stderr
pub struct ConsolePresenter;

impl ConsolePresenter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsolePresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl QuizPresenter for ConsolePresenter {
    fn show_question(&self, item: &QuestionItem, choices: &[CharacterName]) {
        println!("{}", ConsoleFormatter::format_question(item, choices));
    }

    fn show_banner(&self, answer: &CharacterName) {
        println!("{}", ConsoleFormatter::format_banner(answer));
    }

    // Lines already printed stay in the scrollback; nothing to remove.
    fn clear_banner(&self) {}

    fn show_score(&self, current: u32, best: u32) {
        println!("{}", ConsoleFormatter::format_score(current, best));
    }

    fn show_feedback(&self, outcome: &AnswerOutcome) {
        println!("{}", ConsoleFormatter::format_feedback(outcome));
    }

    fn show_error(&self, message: &str) {
        eprintln!("{}", ConsoleFormatter::format_error(message));
    }

    fn show_status(&self, message: &str) {
        println!("{}", ConsoleFormatter::format_status(message));
    }
}
