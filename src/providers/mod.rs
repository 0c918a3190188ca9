//! Text-generation providers for prompt-driven art.
//!
//! Three backends are available:
//! - `openai` - OpenAI chat completions (needs an API key)
//! - `ollama` - a local Ollama server
//! - `offline` - built-in templates, no network
//!
//! Remote output is whatever the model returns; nothing here checks that
//! it actually looks like art. When a remote provider fails,
//! [`generate_with_fallback`] can fall back to the offline templates.

mod error;
mod offline;
mod ollama;
mod openai;
mod retry;

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

pub use error::ProviderError;
pub use offline::{generate_offline, OFFLINE_STYLES};
pub use ollama::{OllamaClient, DEFAULT_OLLAMA_HOST, DEFAULT_OLLAMA_MODEL, OLLAMA_HOST_ENV};
pub use openai::{OpenAiClient, DEFAULT_OPENAI_MODEL, OPENAI_API_BASE_URL, OPENAI_API_KEY_ENV};
pub use retry::{
    calculate_backoff, with_retry, RetryPolicy, DEFAULT_BACKOFF_BASE, DEFAULT_BACKOFF_MAX,
    DEFAULT_MAX_RETRIES,
};

/// Default timeout for remote HTTP requests.
const HTTP_TIMEOUT: Duration = Duration::from_secs(60);

/// Default connection timeout.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default art style.
pub const DEFAULT_STYLE: &str = "ascii";

/// A text-generation backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Provider {
    #[default]
    OpenAi,
    Ollama,
    Offline,
}

impl Provider {
    pub fn name(&self) -> &'static str {
        match self {
            Provider::OpenAi => "openai",
            Provider::Ollama => "ollama",
            Provider::Offline => "offline",
        }
    }

    /// Whether this provider talks to a server.
    pub fn is_remote(&self) -> bool {
        !matches!(self, Provider::Offline)
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Provider {
    type Err = ProviderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "openai" => Ok(Provider::OpenAi),
            "ollama" | "local" => Ok(Provider::Ollama),
            "offline" => Ok(Provider::Offline),
            _ => Err(ProviderError::UnknownProvider(s.to_string())),
        }
    }
}

/// Resolved connection settings for the OpenAI backend.
#[derive(Debug, Clone, PartialEq)]
pub struct OpenAiSettings {
    pub api_key: Option<String>,
    /// Environment variable the key came from, for error messages.
    pub api_key_env: String,
    pub base_url: String,
    pub model: String,
}

impl Default for OpenAiSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            api_key_env: OPENAI_API_KEY_ENV.to_string(),
            base_url: OPENAI_API_BASE_URL.to_string(),
            model: DEFAULT_OPENAI_MODEL.to_string(),
        }
    }
}

/// Resolved connection settings for the Ollama backend.
#[derive(Debug, Clone, PartialEq)]
pub struct OllamaSettings {
    pub host: String,
    pub model: String,
}

impl Default for OllamaSettings {
    fn default() -> Self {
        Self {
            host: DEFAULT_OLLAMA_HOST.to_string(),
            model: DEFAULT_OLLAMA_MODEL.to_string(),
        }
    }
}

/// Everything the providers need, resolved by the caller from config
/// files and the environment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProviderSettings {
    pub openai: OpenAiSettings,
    pub ollama: OllamaSettings,
    pub retry: RetryPolicy,
}

impl ProviderSettings {
    /// Override the model of `provider` (no effect for `offline`).
    pub fn set_model(&mut self, provider: Provider, model: String) {
        match provider {
            Provider::OpenAi => self.openai.model = model,
            Provider::Ollama => self.ollama.model = model,
            Provider::Offline => {}
        }
    }
}

/// Generated art and the provider that actually produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Generated {
    pub text: String,
    pub provider: Provider,
}

/// Reject prompts that are empty or whitespace-only.
pub fn validate_prompt(prompt: &str) -> Result<(), ProviderError> {
    if prompt.trim().is_empty() {
        return Err(ProviderError::EmptyPrompt);
    }
    Ok(())
}

/// Instructions sent to remote models along with the user's prompt.
pub fn system_prompt(style: &str) -> String {
    format!(
        "You are an expert art generator. Create a piece of text art in the style of '{}' \
         based on the following prompt. Return only the art itself, with no additional \
         text, explanation, or markdown.",
        style
    )
}

/// Map a non-success response to an error; pass successful ones through.
pub(crate) async fn check_status(
    response: reqwest::Response,
) -> Result<reqwest::Response, ProviderError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
        let retry_after_secs = retry::parse_retry_after(&response);
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Rate limit exceeded".to_string());
        log::warn!("Rate limited. Retry-After: {:?} seconds", retry_after_secs);
        return Err(ProviderError::RateLimit {
            message,
            retry_after_secs,
        });
    }

    let message = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());
    Err(ProviderError::ApiError {
        status: status.as_u16(),
        message,
    })
}

/// Generate art with one provider, retrying transient failures.
pub async fn generate(
    provider: Provider,
    prompt: &str,
    style: &str,
    settings: &ProviderSettings,
) -> Result<String, ProviderError> {
    validate_prompt(prompt)?;
    log::info!("Generating '{}' art with {}", style, provider);

    match provider {
        Provider::OpenAi => {
            let api_key = settings.openai.api_key.clone().ok_or_else(|| {
                ProviderError::MissingApiKey {
                    env: settings.openai.api_key_env.clone(),
                }
            })?;
            let client = OpenAiClient::with_base_url(
                api_key,
                settings.openai.model.clone(),
                settings.openai.base_url.clone(),
            )?;
            with_retry(&settings.retry, || client.complete(prompt, style)).await
        }
        Provider::Ollama => {
            let client =
                OllamaClient::new(settings.ollama.host.clone(), settings.ollama.model.clone())?;
            with_retry(&settings.retry, || client.complete(prompt, style)).await
        }
        Provider::Offline => Ok(generate_offline(prompt, style, &mut rand::thread_rng())),
    }
}

/// Like [`generate`], but a failing remote provider falls back to the
/// offline templates when `fallback` is set.
///
/// An empty prompt is never covered by the fallback.
pub async fn generate_with_fallback(
    provider: Provider,
    prompt: &str,
    style: &str,
    settings: &ProviderSettings,
    fallback: bool,
) -> Result<Generated, ProviderError> {
    match generate(provider, prompt, style, settings).await {
        Ok(text) => Ok(Generated { text, provider }),
        Err(ProviderError::EmptyPrompt) => Err(ProviderError::EmptyPrompt),
        Err(e) if fallback && provider.is_remote() => {
            log::warn!("{} failed ({}); using offline templates", provider, e);
            Ok(Generated {
                text: generate_offline(prompt, style, &mut rand::thread_rng()),
                provider: Provider::Offline,
            })
        }
        Err(e) => Err(e),
    }
}
