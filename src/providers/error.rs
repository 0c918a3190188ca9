//! Error type shared by all text-generation providers.

/// Errors that can occur while generating art from a prompt.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("API key not configured (set {env})")]
    MissingApiKey {
        /// Environment variable the key is read from
        env: String,
    },

    #[error("Unknown provider '{0}'. Available providers: openai, ollama, offline")]
    UnknownProvider(String),

    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("API error ({status}): {message}")]
    ApiError { status: u16, message: String },

    #[error("Rate limited: {message}")]
    RateLimit {
        /// Human-readable rate limit message
        message: String,
        /// Retry-After header value in seconds, if provided
        retry_after_secs: Option<u64>,
    },

    #[error("Network error: {message} (after {attempts} attempts)")]
    NetworkError {
        /// Human-readable network error message
        message: String,
        /// Number of attempts made before giving up
        attempts: u32,
    },

    #[error("Empty prompt")]
    EmptyPrompt,

    #[error("Provider returned no content")]
    EmptyResponse,
}
