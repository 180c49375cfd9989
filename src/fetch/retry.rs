//! Retry and backoff utilities for HTTP downloads.
//!
//! Connection failures, timeouts and gateway errors are worth another try;
//! everything else (404, bad content, oversized bodies) is returned at once.

use std::time::Duration;

/// Default number of retry attempts for transient network errors.
pub const DEFAULT_NETWORK_RETRIES: u32 = 3;

/// Base delay for exponential backoff (500 milliseconds).
pub const DEFAULT_BACKOFF_BASE: Duration = Duration::from_millis(500);

/// Maximum delay cap for exponential backoff (10 seconds).
pub const DEFAULT_BACKOFF_MAX: Duration = Duration::from_secs(10);

/// Whether an HTTP status is a temporary server-side condition.
///
/// 502 Bad Gateway, 503 Service Unavailable and 504 Gateway Timeout.
pub fn is_transient_status(status: u16) -> bool {
    matches!(status, 502..=504)
}

/// Determine if a reqwest error is a transient network error that should be retried.
pub fn is_transient_network_error(error: &reqwest::Error) -> bool {
    if error.is_connect() || error.is_timeout() || error.is_body() {
        return true;
    }

    error
        .status()
        .map(|status| is_transient_status(status.as_u16()))
        .unwrap_or(false)
}

/// Calculate exponential backoff delay with jitter.
///
/// Uses the formula: min(base * 2^attempt + jitter, max_delay)
/// where jitter is half the base, capped at 500ms.
pub fn calculate_backoff(attempt: u32, base: Duration, max: Duration) -> Duration {
    let exponential = base.saturating_mul(2u32.saturating_pow(attempt));
    let jitter_ms = (base.as_millis() as u64).min(1000);
    let jitter = Duration::from_millis(jitter_ms / 2);
    exponential.saturating_add(jitter).min(max)
}
