//! Quote service adapter

use super::http::{decode_json, fetch_body};
use async_trait::async_trait;
use quiz_application::{QuestionSource, SourceError};
use quiz_domain::{QuestionItem, QuestionKind};
use serde::Deserialize;
use tracing::debug;

/// One entry of the quote service response
#[derive(Debug, Deserialize)]
struct QuoteRecord {
    quote: String,
    character: String,
}

/// Fetches random quotes for a show from the quote service
pub struct QuoteApiSource {
    client: reqwest::Client,
    url: String,
    show: String,
    count: usize,
}

impl QuoteApiSource {
    pub fn new(
        client: reqwest::Client,
        url: impl Into<String>,
        show: impl Into<String>,
        count: usize,
    ) -> Self {
        Self {
            client,
            url: url.into(),
            show: show.into(),
            count,
        }
    }

    fn parse(body: &[u8]) -> Result<Vec<QuestionItem>, SourceError> {
        let records: Vec<QuoteRecord> = decode_json(body, "quote")?;
        Ok(records
            .into_iter()
            .map(|r| QuestionItem::quote(r.quote, r.character))
            .collect())
    }
}

#[async_trait]
impl QuestionSource for QuoteApiSource {
    fn kind(&self) -> QuestionKind {
        QuestionKind::Quote
    }

    async fn fetch(&self) -> Result<Vec<QuestionItem>, SourceError> {
        debug!("Fetching {} quotes for '{}'", self.count, self.show);
        let request = self.client.get(&self.url).query(&[
            ("show", self.show.clone()),
            ("random", self.count.to_string()),
        ]);
        let body = fetch_body(request).await?;
        Self::parse(&body)
    }
}
