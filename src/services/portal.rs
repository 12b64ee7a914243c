// src/services/portal.rs

//! Portal fetcher.
//!
//! Downloads the portal page and pulls the text of the announcement block out
//! of it.

use async_trait::async_trait;
use reqwest::Client;
use scraper::{Html, Selector};

use crate::error::{AppError, Result};
use crate::models::PortalConfig;
use crate::utils::http;

/// Anything that can produce the raw announcement text.
#[async_trait]
pub trait AnnouncementSource: Send + Sync {
    /// Fetch the announcement text. An empty string means the block was absent.
    async fn fetch_text(&self) -> Result<String>;
}

/// Fetches the announcement block from the school portal.
pub struct PortalFetcher {
    client: Client,
    url: String,
    selector: Selector,
}

impl PortalFetcher {
    /// Create a fetcher from the portal configuration.
    pub fn new(config: &PortalConfig) -> Result<Self> {
        Ok(Self {
            client: http::create_async_client(config)?,
            url: config.url.clone(),
            selector: parse_selector(&config.selector)?,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl AnnouncementSource for PortalFetcher {
    async fn fetch_text(&self) -> Result<String> {
        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(AppError::fetch(&self.url, format!("status {status}")));
        }

        let html = response.text().await?;
        let text = extract_block(&html, &self.selector);
        if text.is_empty() {
            log::debug!("No element matched the announcement selector on {}", self.url);
        }
        Ok(text)
    }
}

/// Text of the first element matching `selector`, one text node per line.
///
/// Returns an empty string when nothing matches.
pub fn extract_block(html: &str, selector: &Selector) -> String {
    let document = Html::parse_document(html);
    document
        .select(selector)
        .next()
        .map(|element| element.text().collect::<Vec<_>>().join("\n"))
        .unwrap_or_default()
}

/// Parse a CSS selector, mapping failures to [`AppError::Selector`].
pub fn parse_selector(s: &str) -> Result<Selector> {
    Selector::parse(s).map_err(|e| AppError::selector(s, format!("{e:?}")))
}
