//! Local Ollama server client.

use serde::{Deserialize, Serialize};

use super::error::ProviderError;
use super::{check_status, system_prompt, validate_prompt, CONNECT_TIMEOUT};

/// Environment variable that overrides the Ollama host.
pub const OLLAMA_HOST_ENV: &str = "OLLAMA_HOST";

/// Default Ollama host.
pub const DEFAULT_OLLAMA_HOST: &str = "http://localhost:11434";

/// Default local model.
pub const DEFAULT_OLLAMA_MODEL: &str = "llama2";

/// Local models can take a while to load on first use.
const OLLAMA_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(300);

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: String,
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    response: String,
}

/// Client for Ollama's `/api/generate` endpoint.
pub struct OllamaClient {
    host: String,
    model: String,
    http_client: reqwest::Client,
}

impl OllamaClient {
    pub fn new(host: String, model: String) -> Result<Self, ProviderError> {
        let http_client = reqwest::Client::builder()
            .timeout(OLLAMA_TIMEOUT)
            .connect_timeout(CONNECT_TIMEOUT)
            .build()?;

        Ok(Self {
            host: host.trim_end_matches('/').to_string(),
            model,
            http_client,
        })
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Generate art with a single non-streaming request.
    ///
    /// Ollama has no separate system role on this endpoint, so the system
    /// prompt is prepended to the user prompt.
    pub async fn complete(&self, prompt: &str, style: &str) -> Result<String, ProviderError> {
        validate_prompt(prompt)?;

        let url = format!("{}/api/generate", self.host);
        let body = GenerateRequest {
            model: &self.model,
            prompt: format!("{}\n\n{}", system_prompt(style), prompt),
            stream: false,
        };

        log::debug!("POST {} (model {})", url, self.model);
        let response = self.http_client.post(&url).json(&body).send().await?;
        let response = check_status(response).await?;
        let generated: GenerateResponse = response.json().await?;

        if generated.response.trim().is_empty() {
            return Err(ProviderError::EmptyResponse);
        }
        Ok(generated.response)
    }
}
