//! Character roster adapter for image questions

use super::http::{decode_json, fetch_body};
use async_trait::async_trait;
use quiz_application::{QuestionSource, SourceError};
use quiz_domain::{QuestionItem, QuestionKind};
use serde::Deserialize;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct CharactersResponse {
    data: Vec<CharacterEntry>,
}

#[derive(Debug, Deserialize)]
struct CharacterEntry {
    character: CharacterInfo,
    #[serde(default)]
    favorites: u64,
}

#[derive(Debug, Deserialize)]
struct CharacterInfo {
    name: String,
    #[serde(default)]
    images: Option<CharacterImages>,
}

#[derive(Debug, Deserialize)]
struct CharacterImages {
    #[serde(default)]
    jpg: Option<ImageUrls>,
}

#[derive(Debug, Deserialize)]
struct ImageUrls {
    #[serde(default)]
    image_url: Option<String>,
}

impl CharacterEntry {
    fn image_url(&self) -> Option<&str> {
        self.character
            .images
            .as_ref()?
            .jpg
            .as_ref()?
            .image_url
            .as_deref()
            .filter(|url| !url.is_empty())
    }
}

/// Turns the most popular characters of a series into image questions
pub struct CharacterImageSource {
    client: reqwest::Client,
    url: String,
    limit: usize,
}

impl CharacterImageSource {
    pub fn new(client: reqwest::Client, url: impl Into<String>, limit: usize) -> Self {
        Self {
            client,
            url: url.into(),
            limit,
        }
    }

    /// Drop entries without an image, rank by favorites (ties keep their
    /// original order) and keep the first `limit`.
    fn parse(body: &[u8], limit: usize) -> Result<Vec<QuestionItem>, SourceError> {
        let response: CharactersResponse = decode_json(body, "character")?;

        let mut entries: Vec<CharacterEntry> = response
            .data
            .into_iter()
            .filter(|entry| entry.image_url().is_some())
            .collect();
        entries.sort_by(|a, b| b.favorites.cmp(&a.favorites));

        Ok(entries
            .iter()
            .take(limit)
            .filter_map(|entry| {
                entry
                    .image_url()
                    .map(|url| QuestionItem::image(url, entry.character.name.as_str()))
            })
            .collect())
    }
}

#[async_trait]
impl QuestionSource for CharacterImageSource {
    fn kind(&self) -> QuestionKind {
        QuestionKind::Image
    }

    async fn fetch(&self) -> Result<Vec<QuestionItem>, SourceError> {
        debug!("Fetching character roster from {}", self.url);
        let body = fetch_body(self.client.get(&self.url)).await?;
        Self::parse(&body, self.limit)
    }
}
