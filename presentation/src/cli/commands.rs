//! CLI command definitions

use clap::Parser;
use quiz_domain::Mode;
use std::path::PathBuf;

fn parse_mode(value: &str) -> Result<Mode, String> {
    value.parse::<Mode>().map_err(|e| e.to_string())
}

/// CLI arguments for strawhat-quiz
#[derive(Parser, Debug)]
#[command(name = "strawhat-quiz")]
#[command(author, version, about = "One Piece trivia quiz - quotes, emoji clues and character images")]
#[command(long_about = r#"
Strawhat Quiz asks who said a quote, who an emoji clue describes, or who is
shown in a character image. Every question has four choices.

Modes:
  random   Mix of all categories (quotes 4 : emojis 3 : images 3)
  quote    Quotes only, refetched from the quote service when used up
  emoji    Emoji clues only
  image    Character images only (shown as URLs)

Configuration files are loaded from (in priority order):
1. --config <path>       Explicit config file
2. ./strawhat.toml       Project-level config
3. ~/.config/strawhat-quiz/config.toml   Global config

Example:
  strawhat-quiz
  strawhat-quiz --mode quote
  strawhat-quiz --emoji-catalog ./my_emojis.json -v
"#)]
pub struct Cli {
    /// Starting mode: random, quote, emoji or image
    #[arg(short, long, value_name = "MODE", value_parser = parse_mode)]
    pub mode: Option<Mode>,

    /// Emoji catalog JSON file (defaults to the bundled catalog)
    #[arg(long, value_name = "PATH")]
    pub emoji_catalog: Option<PathBuf>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress loading spinners
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Write logs to a daily rotating file in this directory
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Skip discovered configuration files (an explicit --config is still read)
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
