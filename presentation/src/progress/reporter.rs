//! Progress reporting for source retrievals

use colored::Colorize;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use quiz_application::LoadProgressNotifier;
use quiz_domain::QuestionKind;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

/// Reports source retrievals with one spinner per category
pub struct LoadProgressReporter {
    multi: MultiProgress,
    bars: Mutex<HashMap<QuestionKind, ProgressBar>>,
}

impl LoadProgressReporter {
    pub fn new() -> Self {
        Self {
            multi: MultiProgress::new(),
            bars: Mutex::new(HashMap::new()),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn display_name(kind: QuestionKind) -> &'static str {
        match kind {
            QuestionKind::Quote => "Quotes",
            QuestionKind::Emoji => "Emojis",
            QuestionKind::Image => "Images",
        }
    }

    fn take_bar(&self, kind: QuestionKind) -> Option<ProgressBar> {
        self.bars.lock().ok()?.remove(&kind)
    }
}

impl Default for LoadProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl LoadProgressNotifier for LoadProgressReporter {
    fn on_load_start(&self, kinds: &[QuestionKind]) {
        let Ok(mut bars) = self.bars.lock() else {
            return;
        };
        for kind in kinds {
            let pb = self.multi.add(ProgressBar::new_spinner());
            pb.set_style(Self::spinner_style());
            pb.set_prefix(Self::display_name(*kind));
            pb.set_message("Fetching...");
            pb.enable_steady_tick(Duration::from_millis(100));
            bars.insert(*kind, pb);
        }
    }

    fn on_source_complete(&self, kind: QuestionKind, count: usize) {
        if let Some(pb) = self.take_bar(kind) {
            pb.finish_with_message(format!("{} {} loaded", "v".green(), count));
        }
    }

    fn on_source_failed(&self, kind: QuestionKind, error: &str) {
        if let Some(pb) = self.take_bar(kind) {
            pb.abandon_with_message(format!("{} {}", "x".red(), error));
        }
    }

    fn on_load_complete(&self, _success: bool) {
        // Sources still spinning were dropped by a fail-fast join
        if let Ok(mut bars) = self.bars.lock() {
            for (_, pb) in bars.drain() {
                pb.abandon_with_message("cancelled".dimmed().to_string());
            }
        }
    }
}

/// Simple text-based progress (no spinners)
pub struct SimpleLoadProgress;

impl LoadProgressNotifier for SimpleLoadProgress {
    fn on_load_start(&self, kinds: &[QuestionKind]) {
        let names: Vec<&str> = kinds
            .iter()
            .map(|k| LoadProgressReporter::display_name(*k))
            .collect();
        println!("{} Loading {}", "->".cyan(), names.join(", ").bold());
    }

    fn on_source_complete(&self, kind: QuestionKind, count: usize) {
        println!(
            "  {} {} ({})",
            "v".green(),
            LoadProgressReporter::display_name(kind),
            count
        );
    }

    fn on_source_failed(&self, kind: QuestionKind, error: &str) {
        println!(
            "  {} {} ({})",
            "x".red(),
            LoadProgressReporter::display_name(kind),
            error
        );
    }

    fn on_load_complete(&self, _success: bool) {}
}
