//! Keyword image search.
//!
//! Scrapes the first result page of an image search engine and returns the
//! thumbnails it lists. Only Bing is supported.

mod bing;

use std::fmt;
use std::str::FromStr;

use reqwest::Url;
use serde::Deserialize;

use crate::fetch::{FetchError, ImageClient};

pub use bing::{parse_results, rewrite_thumbnail_size, BING_IMAGE_SEARCH_URL};

/// Default thumbnail edge length requested from the search engine.
pub const DEFAULT_THUMBNAIL_SIZE: u32 = 200;

/// Supported image search engines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchEngine {
    #[default]
    Bing,
}

impl SearchEngine {
    /// Get a human-readable name for the engine.
    pub fn name(&self) -> &'static str {
        match self {
            SearchEngine::Bing => "bing",
        }
    }

    /// Default search page URL for this engine.
    pub fn base_url(&self) -> &'static str {
        match self {
            SearchEngine::Bing => BING_IMAGE_SEARCH_URL,
        }
    }
}

impl fmt::Display for SearchEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SearchEngine {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bing" => Ok(SearchEngine::Bing),
            other => Err(SearchError::UnknownEngine(other.to_string())),
        }
    }
}

/// One search hit: a title and a thumbnail URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageResult {
    /// Alt text of the thumbnail, empty when the page has none
    pub title: String,
    pub url: String,
}

/// Errors that can occur during an image search.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("Search keyword is empty")]
    EmptyKeyword,

    #[error("Unknown search engine '{0}'. Available engines: bing")]
    UnknownEngine(String),

    #[error("Request response is not valid (status code {0})")]
    BadStatus(u16),

    #[error("Invalid search URL: {0}")]
    InvalidUrl(String),

    #[error(transparent)]
    Fetch(FetchError),
}

impl From<FetchError> for SearchError {
    fn from(err: FetchError) -> Self {
        match err {
            FetchError::Status { status, .. } => SearchError::BadStatus(status),
            other => SearchError::Fetch(other),
        }
    }
}

/// Build the results page URL for `keyword`.
pub fn search_url(base_url: &str, keyword: &str) -> Result<String, SearchError> {
    let mut url = Url::parse(base_url).map_err(|_| SearchError::InvalidUrl(base_url.to_string()))?;
    url.query_pairs_mut().append_pair("q", keyword);
    Ok(url.to_string())
}

/// Image search against one engine.
pub struct ImageSearch<'a> {
    client: &'a ImageClient,
    engine: SearchEngine,
    base_url: String,
    thumbnail_size: u32,
}

impl<'a> ImageSearch<'a> {
    pub fn new(client: &'a ImageClient, engine: SearchEngine) -> Self {
        Self {
            client,
            engine,
            base_url: engine.base_url().to_string(),
            thumbnail_size: DEFAULT_THUMBNAIL_SIZE,
        }
    }

    /// Point the search at a different results page URL.
    ///
    /// Useful for testing against a mock server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_thumbnail_size(mut self, size: u32) -> Self {
        self.thumbnail_size = size;
        self
    }

    pub fn engine(&self) -> SearchEngine {
        self.engine
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn thumbnail_size(&self) -> u32 {
        self.thumbnail_size
    }

    /// Search for `keyword` and return the results in page order.
    ///
    /// # Errors
    ///
    /// Returns `SearchError::EmptyKeyword` for blank keywords,
    /// `SearchError::BadStatus` when the results page is not served
    /// successfully, or `SearchError::Fetch` for network failures.
    pub async fn search(&self, keyword: &str) -> Result<Vec<ImageResult>, SearchError> {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            return Err(SearchError::EmptyKeyword);
        }

        let url = search_url(&self.base_url, keyword)?;
        log::info!("Searching {} for \"{}\"", self.engine, keyword);

        let html = self.client.get_text(&url).await?;
        let results = match self.engine {
            SearchEngine::Bing => parse_results(&html, self.thumbnail_size),
        };

        log::info!("Found {} images for \"{}\"", results.len(), keyword);
        Ok(results)
    }
}
