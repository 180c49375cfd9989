//! Image download over HTTP.
//!
//! Builds browser-like requests, retries transient failures and decodes
//! downloaded bytes into grayscale frames ready for rendering.

mod client;
mod retry;

pub use client::{
    request_headers, validate_url, ClientSettings, FetchError, ImageClient,
    DEFAULT_ACCEPT_LANGUAGE, DEFAULT_CONNECT_TIMEOUT, DEFAULT_MAX_IMAGE_BYTES, DEFAULT_TIMEOUT,
    DEFAULT_USER_AGENT,
};
pub use retry::{
    calculate_backoff, is_transient_network_error, is_transient_status, DEFAULT_BACKOFF_BASE,
    DEFAULT_BACKOFF_MAX, DEFAULT_NETWORK_RETRIES,
};
