//! Question source port
//!
//! Defines the interface for retrieving question items from quote,
//! emoji and image providers.

use async_trait::async_trait;
use quiz_domain::{QuestionItem, QuestionKind};
use std::sync::Arc;
use thiserror::Error;

/// Errors a question source can report.
///
/// Adapters convert transport, I/O and decoding failures into one of these
/// before they reach a use case.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    /// Network, HTTP status, file access or timeout failure
    #[error("Fetch error: {0}")]
    Fetch(String),

    /// The response did not have the expected shape
    #[error("Parse error: {0}")]
    Parse(String),
}

impl SourceError {
    pub fn fetch(message: impl Into<String>) -> Self {
        SourceError::Fetch(message.into())
    }

    pub fn parse(message: impl Into<String>) -> Self {
        SourceError::Parse(message.into())
    }
}

/// A provider of question items for one category.
///
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait QuestionSource: Send + Sync {
    /// Category of the items this source returns
    fn kind(&self) -> QuestionKind;

    /// Perform one retrieval and return the normalized items
    async fn fetch(&self) -> Result<Vec<QuestionItem>, SourceError>;
}

/// One source per question category
#[derive(Clone)]
pub struct QuestionSources {
    pub quotes: Arc<dyn QuestionSource>,
    pub emojis: Arc<dyn QuestionSource>,
    pub images: Arc<dyn QuestionSource>,
}

impl QuestionSources {
    pub fn new(
        quotes: Arc<dyn QuestionSource>,
        emojis: Arc<dyn QuestionSource>,
        images: Arc<dyn QuestionSource>,
    ) -> Self {
        Self {
            quotes,
            emojis,
            images,
        }
    }

    pub fn get(&self, kind: QuestionKind) -> &Arc<dyn QuestionSource> {
        match kind {
            QuestionKind::Quote => &self.quotes,
            QuestionKind::Emoji => &self.emojis,
            QuestionKind::Image => &self.images,
        }
    }
}

impl std::fmt::Debug for QuestionSources {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuestionSources")
            .field("quotes", &self.quotes.kind())
            .field("emojis", &self.emojis.kind())
            .field("images", &self.images.kind())
            .finish()
    }
}
