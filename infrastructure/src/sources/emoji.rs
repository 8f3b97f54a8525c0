//! Emoji catalog adapter

use super::http::decode_json;
use async_trait::async_trait;
use quiz_application::{QuestionSource, SourceError};
use quiz_domain::{QuestionItem, QuestionKind};
use serde::Deserialize;
use std::path::PathBuf;
use tracing::debug;

/// Catalog compiled into the binary
const BUNDLED_CATALOG: &str = include_str!("../../data/one_piece_emojis.json");

#[derive(Debug, Deserialize)]
struct EmojiRecord {
    emoji: String,
    character: String,
}

/// Where the catalog is read from
#[derive(Debug, Clone, PartialEq, Eq)]
enum CatalogLocation {
    Bundled,
    File(PathBuf),
}

/// Loads emoji clues from a local JSON catalog.
///
/// Every fetch re-reads the catalog, so a refill restores the full set.
pub struct EmojiCatalogSource {
    location: CatalogLocation,
}

impl EmojiCatalogSource {
    pub fn bundled() -> Self {
        Self {
            location: CatalogLocation::Bundled,
        }
    }

    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self {
            location: CatalogLocation::File(path.into()),
        }
    }

    fn parse(body: &[u8]) -> Result<Vec<QuestionItem>, SourceError> {
        let records: Vec<EmojiRecord> = decode_json(body, "emoji catalog")?;
        Ok(records
            .into_iter()
            .map(|r| QuestionItem::emoji(r.emoji, r.character))
            .collect())
    }
}

#[async_trait]
impl QuestionSource for EmojiCatalogSource {
    fn kind(&self) -> QuestionKind {
        QuestionKind::Emoji
    }

    async fn fetch(&self) -> Result<Vec<QuestionItem>, SourceError> {
        match &self.location {
            CatalogLocation::Bundled => Self::parse(BUNDLED_CATALOG.as_bytes()),
            CatalogLocation::File(path) => {
                debug!("Reading emoji catalog {}", path.display());
                let body = tokio::fs::read(path).await.map_err(|e| {
                    SourceError::fetch(format!(
                        "Emoji file could not be loaded: {}: {}",
                        path.display(),
                        e
                    ))
                })?;
                Self::parse(&body)
            }
        }
    }
}
