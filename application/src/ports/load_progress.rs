//! Load progress notification port
//!
//! Defines the interface for reporting progress while question pools
//! are fetched.

use quiz_domain::QuestionKind;

/// Callback for progress updates while sources are fetched
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (spinner, plain text, etc.)
pub trait LoadProgressNotifier: Send + Sync {
    /// Called before the given sources are fetched
    fn on_load_start(&self, kinds: &[QuestionKind]);

    /// Called when one source finishes
    fn on_source_complete(&self, kind: QuestionKind, count: usize);

    /// Called when one source fails
    fn on_source_failed(&self, kind: QuestionKind, error: &str);

    /// Called once the load has finished, successfully or not
    fn on_load_complete(&self, success: bool);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoLoadProgress;

impl LoadProgressNotifier for NoLoadProgress {
    fn on_load_start(&self, _kinds: &[QuestionKind]) {}
    fn on_source_complete(&self, _kind: QuestionKind, _count: usize) {}
    fn on_source_failed(&self, _kind: QuestionKind, _error: &str) {}
    fn on_load_complete(&self, _success: bool) {}
}
