//! ImageClient - plain HTTP GETs for search pages and image downloads.

use std::time::Duration;

use futures_util::StreamExt;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT_LANGUAGE, HOST, ORIGIN, REFERER, USER_AGENT};
use reqwest::Url;

use super::retry::{
    calculate_backoff, is_transient_network_error, is_transient_status, DEFAULT_BACKOFF_BASE,
    DEFAULT_BACKOFF_MAX, DEFAULT_NETWORK_RETRIES,
};
use crate::ascii::{DecodeError, GrayFrame};

/// Desktop browser user agent. Image search pages serve a stripped-down
/// layout without the thumbnail attributes to unknown clients.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 \
    (KHTML, like Gecko) Chrome/73.0.3683.86 Safari/537.36";

/// Default Accept-Language header value.
pub const DEFAULT_ACCEPT_LANGUAGE: &str = "en-GB,en;q=0.5";

/// Largest image body accepted (20 MiB).
pub const DEFAULT_MAX_IMAGE_BYTES: u64 = 20 * 1024 * 1024;

/// Default timeout for HTTP requests (30 seconds).
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default connection timeout (10 seconds).
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Errors that can occur while fetching pages or images.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Invalid URL '{0}': must start with http:// or https://")]
    InvalidUrl(String),

    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Request to {url} failed with status {status}")]
    Status {
        /// HTTP status code returned by the server
        status: u16,
        url: String,
    },

    #[error("Network error: {message} (after {attempts} attempts)")]
    NetworkError {
        /// Human-readable network error message
        message: String,
        /// Number of attempts made before giving up
        attempts: u32,
    },

    #[error("Response body exceeds {limit} bytes")]
    TooLarge {
        /// Configured size limit in bytes
        limit: u64,
    },

    #[error(transparent)]
    Decode(#[from] DecodeError),
}

impl FetchError {
    /// Whether retrying the same request could succeed.
    pub fn is_transient(&self) -> bool {
        match self {
            FetchError::HttpError(e) => is_transient_network_error(e),
            FetchError::Status { status, .. } => is_transient_status(*status),
            _ => false,
        }
    }
}

/// Check that a URL is an absolute http(s) URL.
pub fn validate_url(url: &str) -> Result<Url, FetchError> {
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(FetchError::InvalidUrl(url.to_string()));
    }
    Url::parse(url).map_err(|_| FetchError::InvalidUrl(url.to_string()))
}

/// Build the request headers for `url`.
///
/// Besides the browser-like defaults, `Host`, `Referer` and `Origin` are all
/// pointed at the target's own origin (`scheme://host[:port]`).
pub fn request_headers(
    url: &str,
    user_agent: &str,
    accept_language: &str,
) -> Result<HeaderMap, FetchError> {
    let parsed = validate_url(url)?;
    let host = match (parsed.host_str(), parsed.port()) {
        (Some(host), Some(port)) => format!("{}:{}", host, port),
        (Some(host), None) => host.to_string(),
        (None, _) => return Err(FetchError::InvalidUrl(url.to_string())),
    };
    let origin = format!("{}://{}", parsed.scheme(), host);

    let value = |v: &str| HeaderValue::from_str(v).map_err(|_| FetchError::InvalidUrl(url.to_string()));

    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, value(user_agent)?);
    headers.insert(ACCEPT_LANGUAGE, value(accept_language)?);
    headers.insert(HOST, value(&host)?);
    headers.insert(REFERER, value(&origin)?);
    headers.insert(ORIGIN, value(&origin)?);
    Ok(headers)
}

/// Tunables for [`ImageClient`].
#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub user_agent: String,
    pub accept_language: String,
    pub timeout: Duration,
    pub connect_timeout: Duration,
    /// Retries after the first attempt for transient failures
    pub max_retries: u32,
    pub backoff_base: Duration,
    pub backoff_max: Duration,
    pub max_image_bytes: u64,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            accept_language: DEFAULT_ACCEPT_LANGUAGE.to_string(),
            timeout: DEFAULT_TIMEOUT,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            max_retries: DEFAULT_NETWORK_RETRIES,
            backoff_base: DEFAULT_BACKOFF_BASE,
            backoff_max: DEFAULT_BACKOFF_MAX,
            max_image_bytes: DEFAULT_MAX_IMAGE_BYTES,
        }
    }
}

/// HTTP client for search result pages and image downloads.
pub struct ImageClient {
    settings: ClientSettings,
    http_client: reqwest::Client,
}

impl ImageClient {
    /// Create a client with default settings.
    pub fn new() -> Result<Self, FetchError> {
        Self::with_settings(ClientSettings::default())
    }

    /// Create a client with custom settings.
    pub fn with_settings(settings: ClientSettings) -> Result<Self, FetchError> {
        let http_client = reqwest::Client::builder()
            .timeout(settings.timeout)
            .connect_timeout(settings.connect_timeout)
            .build()?;

        Ok(Self {
            settings,
            http_client,
        })
    }

    /// Get the client settings.
    pub fn settings(&self) -> &ClientSettings {
        &self.settings
    }

    /// One GET attempt; non-2xx responses become `FetchError::Status`.
    async fn get_once(&self, url: &str) -> Result<reqwest::Response, FetchError> {
        let headers = request_headers(url, &self.settings.user_agent, &self.settings.accept_language)?;

        let response = self.http_client.get(url).headers(headers).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response)
    }

    /// GET `url`, retrying transient failures with exponential backoff.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::InvalidUrl` for non-http(s) URLs,
    /// `FetchError::Status` for error responses (after retries for
    /// 502/503/504), `FetchError::NetworkError` once network retries are
    /// exhausted, or `FetchError::HttpError` for other request failures.
    pub async fn get(&self, url: &str) -> Result<reqwest::Response, FetchError> {
        let max_retries = self.settings.max_retries;
        let mut attempt = 0u32;

        loop {
            match self.get_once(url).await {
                Ok(response) => return Ok(response),
                Err(e) if e.is_transient() && attempt < max_retries => {
                    let delay = calculate_backoff(
                        attempt,
                        self.settings.backoff_base,
                        self.settings.backoff_max,
                    );
                    log::warn!(
                        "Request to {} failed (attempt {}/{}): {}. Retrying in {:?}...",
                        url,
                        attempt + 1,
                        max_retries + 1,
                        e,
                        delay
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(FetchError::HttpError(e)) if is_transient_network_error(&e) => {
                    log::error!("Giving up on {} after {} attempts", url, attempt + 1);
                    return Err(FetchError::NetworkError {
                        message: e.to_string(),
                        attempts: attempt + 1,
                    });
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// GET `url` and return the body as text.
    pub async fn get_text(&self, url: &str) -> Result<String, FetchError> {
        let response = self.get(url).await?;
        Ok(response.text().await?)
    }

    /// GET `url` and return the body, refusing anything over `max_image_bytes`.
    ///
    /// The limit is enforced while streaming, so an oversized body is never
    /// held in memory in full.
    pub async fn get_bytes(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let limit = self.settings.max_image_bytes;
        let response = self.get(url).await?;

        if let Some(len) = response.content_length() {
            if len > limit {
                return Err(FetchError::TooLarge { limit });
            }
        }

        let mut body = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk?;
            if body.len() as u64 + chunk.len() as u64 > limit {
                return Err(FetchError::TooLarge { limit });
            }
            body.extend_from_slice(&chunk);
        }

        Ok(body)
    }

    /// Download an image and decode it to grayscale.
    pub async fn fetch_image(&self, url: &str) -> Result<GrayFrame, FetchError> {
        log::info!("Downloading image from: {}", url);
        let bytes = self.get_bytes(url).await?;
        Ok(GrayFrame::decode(&bytes)?)
    }
}
