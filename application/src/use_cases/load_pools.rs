//! Load Pools use case
//!
//! Fetches question items from the three sources: all of them at once at
//! startup, or a single category when its pool runs dry.

use crate::config::BehaviorConfig;
use crate::ports::load_progress::{LoadProgressNotifier, NoLoadProgress};
use crate::ports::question_source::{QuestionSources, SourceError};
use quiz_domain::{PoolSet, QuestionItem, QuestionKind};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur while loading pools
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadPoolsError {
    #[error("Could not load {kind} questions: {source}")]
    Source {
        kind: QuestionKind,
        #[source]
        source: SourceError,
    },

    #[error("No {0} questions were returned")]
    Empty(QuestionKind),
}

impl LoadPoolsError {
    /// Category whose load failed
    pub fn kind(&self) -> QuestionKind {
        match self {
            LoadPoolsError::Source { kind, .. } => *kind,
            LoadPoolsError::Empty(kind) => *kind,
        }
    }
}

/// Use case for filling question pools from their sources
pub struct LoadPoolsUseCase {
    sources: QuestionSources,
    behavior: BehaviorConfig,
}

impl LoadPoolsUseCase {
    pub fn new(sources: QuestionSources) -> Self {
        Self {
            sources,
            behavior: BehaviorConfig::default(),
        }
    }

    pub fn with_behavior(mut self, behavior: BehaviorConfig) -> Self {
        self.behavior = behavior;
        self
    }

    /// Fetch all three categories with default (no-op) progress
    pub async fn load_all(&self) -> Result<PoolSet, LoadPoolsError> {
        self.load_all_with_progress(&NoLoadProgress).await
    }

    /// Fetch all three categories concurrently.
    ///
    /// All-or-nothing: the first failing source aborts the whole load and
    /// the other retrievals are dropped.
    pub async fn load_all_with_progress(
        &self,
        progress: &dyn LoadProgressNotifier,
    ) -> Result<PoolSet, LoadPoolsError> {
        info!("Loading all question pools");
        progress.on_load_start(&QuestionKind::ALL);

        let result = futures::try_join!(
            self.fetch_one(QuestionKind::Quote, progress),
            self.fetch_one(QuestionKind::Emoji, progress),
            self.fetch_one(QuestionKind::Image, progress),
        );
        progress.on_load_complete(result.is_ok());

        let (quotes, emojis, images) = result?;
        info!(
            "Pools loaded: {} quotes, {} emojis, {} images",
            quotes.len(),
            emojis.len(),
            images.len()
        );
        Ok(PoolSet::from_items(quotes, emojis, images))
    }

    /// Fetch a fresh set for one category.
    ///
    /// An empty result counts as a failure: there would be nothing to draw.
    pub async fn refill(
        &self,
        kind: QuestionKind,
        progress: &dyn LoadProgressNotifier,
    ) -> Result<Vec<QuestionItem>, LoadPoolsError> {
        info!("Refilling {} pool", kind);
        progress.on_load_start(&[kind]);

        let result = self.fetch_one(kind, progress).await.and_then(|items| {
            if items.is_empty() {
                Err(LoadPoolsError::Empty(kind))
            } else {
                Ok(items)
            }
        });
        progress.on_load_complete(result.is_ok());
        result
    }

    async fn fetch_one(
        &self,
        kind: QuestionKind,
        progress: &dyn LoadProgressNotifier,
    ) -> Result<Vec<QuestionItem>, LoadPoolsError> {
        let source = Arc::clone(self.sources.get(kind));

        let result = match self.behavior.fetch_timeout {
            Some(limit) => match tokio::time::timeout(limit, source.fetch()).await {
                Ok(result) => result,
                Err(_) => Err(SourceError::fetch(format!(
                    "timed out after {} ms",
                    limit.as_millis()
                ))),
            },
            None => source.fetch().await,
        };

        match result {
            Ok(items) => {
                debug!("{} source returned {} items", kind, items.len());
                progress.on_source_complete(kind, items.len());
                Ok(items)
            }
            Err(e) => {
                warn!("{} source failed: {}", kind, e);
                progress.on_source_failed(kind, &e.to_string());
                Err(LoadPoolsError::Source { kind, source: e })
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::ports::question_source::QuestionSource;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    // === Mock implementations ===

    /// Source that replays scripted responses, repeating the last one
    pub(crate) struct ScriptedSource {
        kind: QuestionKind,
        responses: Mutex<Vec<Result<Vec<QuestionItem>, SourceError>>>,
        delay: Option<Duration>,
        pub(crate) calls: AtomicUsize,
    }

    impl ScriptedSource {
        pub(crate) fn new(
            kind: QuestionKind,
            responses: Vec<Result<Vec<QuestionItem>, SourceError>>,
        ) -> Self {
            Self {
                kind,
                responses: Mutex::new(responses),
                delay: None,
                calls: AtomicUsize::new(0),
            }
        }

        pub(crate) fn ok(kind: QuestionKind, items: Vec<QuestionItem>) -> Self {
            Self::new(kind, vec![Ok(items)])
        }

        pub(crate) fn failing(kind: QuestionKind) -> Self {
            Self::new(kind, vec![Err(SourceError::fetch("HTTP error: 503"))])
        }

        pub(crate) fn with_delay(mut self, delay: Duration) -> Self {
            self.delay = Some(delay);
            self
        }

        pub(crate) fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl QuestionSource for ScriptedSource {
        fn kind(&self) -> QuestionKind {
            self.kind
        }

        async fn fetch(&self) -> Result<Vec<QuestionItem>, SourceError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            let mut responses = self.responses.lock().unwrap();
            if responses.len() > 1 {
                responses.remove(0)
            } else {
                responses[0].clone()
            }
        }
    }

    pub(crate) fn quotes(names: &[&str]) -> Vec<QuestionItem> {
        names
            .iter()
            .map(|name| QuestionItem::quote(format!("a line by {name}"), *name))
            .collect()
    }

    pub(crate) fn emojis(names: &[&str]) -> Vec<QuestionItem> {
        names
            .iter()
            .map(|name| QuestionItem::emoji(format!("🏴‍☠️ {name}"), *name))
            .collect()
    }

    pub(crate) fn images(names: &[&str]) -> Vec<QuestionItem> {
        names
            .iter()
            .map(|name| QuestionItem::image(format!("https://img.example/{name}.jpg"), *name))
            .collect()
    }

    fn sources(
        quote: ScriptedSource,
        emoji: ScriptedSource,
        image: ScriptedSource,
    ) -> QuestionSources {
        QuestionSources::new(Arc::new(quote), Arc::new(emoji), Arc::new(image))
    }

    #[tokio::test]
    async fn test_load_all_fills_every_pool() {
        let use_case = LoadPoolsUseCase::new(sources(
            ScriptedSource::ok(QuestionKind::Quote, quotes(&["Zoro", "Nami"])),
            ScriptedSource::ok(QuestionKind::Emoji, emojis(&["Luffy"])),
            ScriptedSource::ok(QuestionKind::Image, images(&["Sanji", "Usopp", "Brook"])),
        ));

        let pools = use_case.load_all().await.unwrap();
        assert_eq!(pools.len(QuestionKind::Quote), 2);
        assert_eq!(pools.len(QuestionKind::Emoji), 1);
        assert_eq!(pools.len(QuestionKind::Image), 3);
    }

    #[tokio::test]
    async fn test_load_all_fails_when_any_source_fails() {
        let use_case = LoadPoolsUseCase::new(sources(
            ScriptedSource::ok(QuestionKind::Quote, quotes(&["Zoro"])),
            ScriptedSource::ok(QuestionKind::Emoji, emojis(&["Luffy"])),
            ScriptedSource::failing(QuestionKind::Image),
        ));

        let err = use_case.load_all().await.unwrap_err();
        assert_eq!(err.kind(), QuestionKind::Image);
        assert!(matches!(
            err,
            LoadPoolsError::Source {
                source: SourceError::Fetch(_),
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_load_all_fails_fast() {
        let use_case = LoadPoolsUseCase::new(sources(
            ScriptedSource::failing(QuestionKind::Quote),
            ScriptedSource::ok(QuestionKind::Emoji, emojis(&["Luffy"])),
            ScriptedSource::ok(QuestionKind::Image, images(&["Sanji"]))
                .with_delay(Duration::from_secs(30)),
        ))
        .with_behavior(BehaviorConfig::from_timeout_seconds(None));

        let result = tokio::time::timeout(Duration::from_secs(5), use_case.load_all()).await;
        let err = result.expect("load should not wait for the slow source").unwrap_err();
        assert_eq!(err.kind(), QuestionKind::Quote);
    }

    #[tokio::test]
    async fn test_slow_source_times_out_as_fetch_error() {
        let use_case = LoadPoolsUseCase::new(sources(
            ScriptedSource::ok(QuestionKind::Quote, quotes(&["Zoro"]))
                .with_delay(Duration::from_secs(30)),
            ScriptedSource::ok(QuestionKind::Emoji, emojis(&["Luffy"])),
            ScriptedSource::ok(QuestionKind::Image, images(&["Sanji"])),
        ))
        .with_behavior(BehaviorConfig {
            fetch_timeout: Some(Duration::from_millis(50)),
        });

        let err = use_case.load_all().await.unwrap_err();
        match err {
            LoadPoolsError::Source {
                kind,
                source: SourceError::Fetch(message),
            } => {
                assert_eq!(kind, QuestionKind::Quote);
                assert!(message.contains("timed out"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_refill_rejects_empty_result() {
        let use_case = LoadPoolsUseCase::new(sources(
            ScriptedSource::ok(QuestionKind::Quote, quotes(&["Zoro"])),
            ScriptedSource::ok(QuestionKind::Emoji, vec![]),
            ScriptedSource::ok(QuestionKind::Image, images(&["Sanji"])),
        ));

        let err = use_case
            .refill(QuestionKind::Emoji, &NoLoadProgress)
            .await
            .unwrap_err();
        assert_eq!(err, LoadPoolsError::Empty(QuestionKind::Emoji));
    }

    #[tokio::test]
    async fn test_refill_only_touches_one_source() {
        let quote = Arc::new(ScriptedSource::ok(QuestionKind::Quote, quotes(&["Zoro"])));
        let emoji = Arc::new(ScriptedSource::ok(QuestionKind::Emoji, emojis(&["Luffy"])));
        let image = Arc::new(ScriptedSource::ok(QuestionKind::Image, images(&["Sanji"])));
        let use_case = LoadPoolsUseCase::new(QuestionSources::new(
            quote.clone(),
            emoji.clone(),
            image.clone(),
        ));

        let items = use_case
            .refill(QuestionKind::Quote, &NoLoadProgress)
            .await
            .unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(quote.call_count(), 1);
        assert_eq!(emoji.call_count(), 0);
        assert_eq!(image.call_count(), 0);
    }
}
