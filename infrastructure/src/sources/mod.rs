//! Question source adapters
//!
//! Each adapter implements [`QuestionSource`](quiz_application::QuestionSource)
//! for one category and converts transport and decoding failures into
//! [`SourceError`](quiz_application::SourceError).
//!
//! | Adapter | Category | Backing data |
//! |---------|----------|--------------|
//! | [`QuoteApiSource`] | quote | remote quote service |
//! | [`EmojiCatalogSource`] | emoji | bundled or on-disk JSON catalog |
//! | [`CharacterImageSource`] | image | remote character roster |

pub mod emoji;
pub mod http;
pub mod image;
pub mod quote;

pub use emoji::EmojiCatalogSource;
pub use http::build_client;
pub use image::CharacterImageSource;
pub use quote::QuoteApiSource;

use crate::config::FileSourcesConfig;
use quiz_application::{QuestionSources, SourceError};
use std::sync::Arc;

/// Build the three sources described by the `[sources]` section
pub fn sources_from_config(config: &FileSourcesConfig) -> Result<QuestionSources, SourceError> {
    let client = build_client(config.effective_timeout())?;

    let emojis = match &config.emoji_catalog {
        Some(path) => EmojiCatalogSource::from_path(path),
        None => EmojiCatalogSource::bundled(),
    };

    Ok(QuestionSources::new(
        Arc::new(QuoteApiSource::new(
            client.clone(),
            &config.quote_url,
            &config.show,
            config.quote_count,
        )),
        Arc::new(emojis),
        Arc::new(CharacterImageSource::new(
            client,
            &config.image_url,
            config.image_limit,
        )),
    ))
}
