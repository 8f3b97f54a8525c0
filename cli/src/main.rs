//! CLI entrypoint for Strawhat Quiz
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use quiz_application::{
    BehaviorConfig, LoadPoolsUseCase, LoadProgressNotifier, NoLoadProgress, PlayQuizUseCase,
};
use quiz_infrastructure::{ConfigLoader, FileConfig, Severity, sources_from_config};
use quiz_presentation::{
    Cli, ConsolePresenter, LoadProgressReporter, QuizRepl, ReplExit, SimpleLoadProgress,
    set_color_enabled,
};
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Keep the guard alive so buffered log lines are flushed on exit
    let _log_guard = init_logging(cli.verbose, cli.log_dir.as_ref())?;

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(ExitCode::SUCCESS);
    }

    info!("Starting Strawhat Quiz");

    // === Configuration ===
    let mut config = match (&cli.config, cli.no_config) {
        (Some(path), true) => {
            ConfigLoader::load_file(path).context("Failed to load configuration")?
        }
        (None, true) => ConfigLoader::load_defaults(),
        (path, false) => {
            ConfigLoader::load(path.as_ref()).context("Failed to load configuration")?
        }
    };

    let issues = config.validate();
    for issue in &issues {
        match issue.severity {
            Severity::Warning => warn!("Config: {}", issue.message),
            Severity::Error => eprintln!("Config error: {}", issue.message),
        }
    }
    if FileConfig::has_errors(&issues) {
        bail!("Invalid configuration");
    }

    // CLI flags win over config files
    if let Some(mode) = cli.mode {
        config.quiz.mode = mode.to_string();
    }
    if let Some(path) = &cli.emoji_catalog {
        config.sources.emoji_catalog = Some(path.display().to_string());
    }

    if cli.no_color || !config.output.color {
        set_color_enabled(false);
    }

    // === Dependency Injection ===
    let sources = sources_from_config(&config.sources).context("Failed to set up sources")?;
    let loader = LoadPoolsUseCase::new(sources).with_behavior(BehaviorConfig::from_timeout_seconds(
        config.sources.effective_timeout_secs(),
    ));

    let progress: Arc<dyn LoadProgressNotifier> = if cli.quiet || !config.output.show_progress {
        Arc::new(NoLoadProgress)
    } else if std::io::stdout().is_terminal() {
        Arc::new(LoadProgressReporter::new())
    } else {
        Arc::new(SimpleLoadProgress)
    };

    let use_case = PlayQuizUseCase::new(
        loader,
        Arc::new(ConsolePresenter::new()),
        config.quiz.to_quiz_config(),
    )
    .with_progress(progress);

    let history = config.repl.history_file.as_ref().map(PathBuf::from);
    let mut repl = QuizRepl::new(use_case).with_history_file(history);

    match repl.run().await? {
        ReplExit::Quit => Ok(ExitCode::SUCCESS),
        ReplExit::Fatal => Ok(ExitCode::FAILURE),
    }
}

/// Initialize logging based on verbosity level, optionally teeing into a
/// daily rotating file
fn init_logging(verbose: u8, log_dir: Option<&PathBuf>) -> Result<Option<WorkerGuard>> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
            let appender = tracing_appender::rolling::daily(dir, "strawhat-quiz.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(stderr_layer)
        .with(file_layer)
        .init();

    Ok(guard)
}
