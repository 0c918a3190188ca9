//! Retry and backoff for provider HTTP calls.
//!
//! Transient network failures, gateway errors and rate limiting are retried
//! with exponential backoff. Everything else is returned immediately.

use std::future::Future;
use std::time::Duration;

use super::error::ProviderError;

/// Default number of retry attempts after the first request.
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Base delay for exponential backoff (1 second).
pub const DEFAULT_BACKOFF_BASE: Duration = Duration::from_secs(1);

/// Maximum delay cap for exponential backoff (60 seconds).
pub const DEFAULT_BACKOFF_MAX: Duration = Duration::from_secs(60);

/// How often and how patiently a request is retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub backoff_base: Duration,
    pub backoff_max: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: DEFAULT_MAX_RETRIES,
            backoff_base: DEFAULT_BACKOFF_BASE,
            backoff_max: DEFAULT_BACKOFF_MAX,
        }
    }
}

impl RetryPolicy {
    /// A policy that makes exactly one attempt.
    pub fn none() -> Self {
        Self {
            max_retries: 0,
            ..Self::default()
        }
    }
}

/// Whether a reqwest error is a temporary failure worth retrying.
///
/// Connection errors, timeouts and interrupted bodies qualify.
pub fn is_transient_network_error(error: &reqwest::Error) -> bool {
    error.is_connect() || error.is_timeout() || error.is_body()
}

/// Whether an HTTP status indicates a temporary server-side problem.
/// 502 Bad Gateway, 503 Service Unavailable, 504 Gateway Timeout.
pub fn is_transient_status(status: u16) -> bool {
    matches!(status, 502..=504)
}

/// Parse the Retry-After header (integer seconds only).
pub fn parse_retry_after(response: &reqwest::Response) -> Option<u64> {
    response
        .headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.trim().parse::<u64>().ok())
}

/// Exponential backoff with a fixed jitter: `min(base * 2^attempt + base/2, max)`.
/// The jitter is capped at 500ms.
pub fn calculate_backoff(attempt: u32, base: Duration, max: Duration) -> Duration {
    let exponential = base.saturating_mul(2u32.saturating_pow(attempt));
    let jitter_ms = (base.as_millis() as u64).min(1000);
    let jitter = Duration::from_millis(jitter_ms / 2);
    exponential.saturating_add(jitter).min(max)
}

/// Run `op` until it succeeds, fails permanently, or retries run out.
///
/// Rate limits honour the server's Retry-After (capped at
/// `backoff_max`). Exhausted network retries are reported as
/// [`ProviderError::NetworkError`] with the attempt count.
pub async fn with_retry<T, F, Fut>(policy: &RetryPolicy, mut op: F) -> Result<T, ProviderError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, ProviderError>>,
{
    let mut attempt = 0u32;

    loop {
        let err = match op().await {
            Ok(value) => return Ok(value),
            Err(e) => e,
        };

        let backoff = calculate_backoff(attempt, policy.backoff_base, policy.backoff_max);
        let delay = match &err {
            ProviderError::RateLimit {
                retry_after_secs: Some(secs),
                ..
            } => Some(Duration::from_secs(*secs).min(policy.backoff_max)),
            ProviderError::RateLimit { .. } => Some(backoff),
            ProviderError::HttpError(http_err) if is_transient_network_error(http_err) => {
                Some(backoff)
            }
            ProviderError::ApiError { status, .. } if is_transient_status(*status) => Some(backoff),
            _ => None,
        };
        let Some(delay) = delay else {
            return Err(err);
        };

        if attempt >= policy.max_retries {
            log::error!("Giving up after {} attempts: {}", attempt + 1, err);
            return Err(match err {
                ProviderError::HttpError(http_err) => ProviderError::NetworkError {
                    message: http_err.to_string(),
                    attempts: attempt + 1,
                },
                other => other,
            });
        }

        log::warn!(
            "Request failed (attempt {}/{}): {}. Retrying in {:?}...",
            attempt + 1,
            policy.max_retries + 1,
            err,
            delay
        );
        tokio::time::sleep(delay).await;
        attempt += 1;
    }
}
