//! Configuration file handling for artgen.
//!
//! Loads configuration from `~/.config/artgen/config.toml` or a custom path.
//! Command-line flags override values from the file.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::ascii::{
    parse_ramp, CharSet, LuminancePolicy, QuantizePolicy, RenderConfig, RenderError,
    DEFAULT_ASPECT_CORRECTION, DEFAULT_OUTPUT_WIDTH, DEFAULT_THRESHOLD,
};
use crate::providers::{
    OllamaSettings, OpenAiSettings, Provider, ProviderError, ProviderSettings, RetryPolicy,
    DEFAULT_OLLAMA_HOST, DEFAULT_OLLAMA_MODEL, DEFAULT_OPENAI_MODEL, DEFAULT_STYLE,
    OLLAMA_HOST_ENV, OPENAI_API_BASE_URL, OPENAI_API_KEY_ENV,
};

/// Configuration file structure.
#[derive(Debug, Deserialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub render: RenderSettings,
    #[serde(default)]
    pub providers: ProvidersConfig,
}

/// `[render]` section. Names are resolved by [`RenderSettings::to_render_config`].
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct RenderSettings {
    pub width: u32,
    pub charset: String,
    /// Custom ramp, overrides `charset` when set.
    pub ramp: Option<String>,
    pub aspect: f64,
    pub row_stride: u32,
    pub luminance: String,
    pub quantize: String,
    pub threshold: f64,
    pub invert: bool,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            width: DEFAULT_OUTPUT_WIDTH,
            charset: CharSet::default().name().to_string(),
            ramp: None,
            aspect: DEFAULT_ASPECT_CORRECTION,
            row_stride: 1,
            luminance: LuminancePolicy::default().name().to_string(),
            quantize: QuantizePolicy::default().name().to_string(),
            threshold: DEFAULT_THRESHOLD,
            invert: false,
        }
    }
}

impl RenderSettings {
    /// Resolve charset and policy names into a validated [`RenderConfig`].
    pub fn to_render_config(&self) -> Result<RenderConfig, RenderError> {
        let ramp = match &self.ramp {
            Some(custom) => parse_ramp(custom)?,
            None => CharSet::from_name(&self.charset)?.chars(),
        };

        let quantize = match self.quantize.parse::<QuantizePolicy>()? {
            QuantizePolicy::Binary { .. } => QuantizePolicy::Binary {
                threshold: self.threshold,
            },
            graded => graded,
        };

        let config = RenderConfig {
            output_width: self.width,
            ramp,
            aspect_correction: self.aspect,
            row_stride: self.row_stride,
            luminance: self.luminance.parse()?,
            quantize,
            invert: self.invert,
        };
        config.validate()?;
        Ok(config)
    }
}

/// `[providers]` section.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ProvidersConfig {
    /// Provider used by `gen` when none is given.
    pub default: String,
    pub style: String,
    /// Fall back to offline templates when a remote provider fails.
    pub fallback: bool,
    pub openai: OpenAiConfig,
    pub ollama: OllamaConfig,
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        Self {
            default: Provider::default().name().to_string(),
            style: DEFAULT_STYLE.to_string(),
            fallback: true,
            openai: OpenAiConfig::default(),
            ollama: OllamaConfig::default(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct OpenAiConfig {
    pub model: String,
    pub base_url: String,
    pub api_key_env: String,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_OPENAI_MODEL.to_string(),
            base_url: OPENAI_API_BASE_URL.to_string(),
            api_key_env: OPENAI_API_KEY_ENV.to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct OllamaConfig {
    pub host: String,
    pub model: String,
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_OLLAMA_HOST.to_string(),
            model: DEFAULT_OLLAMA_MODEL.to_string(),
        }
    }
}

impl ProvidersConfig {
    pub fn default_provider(&self) -> Result<Provider, ProviderError> {
        self.default.parse()
    }

    /// Resolve provider settings, reading credentials through `env`.
    ///
    /// The OpenAI key comes from the variable named by `api_key_env`;
    /// `OLLAMA_HOST` overrides the configured Ollama host.
    pub fn resolve<F>(&self, env: F) -> ProviderSettings
    where
        F: Fn(&str) -> Option<String>,
    {
        ProviderSettings {
            openai: OpenAiSettings {
                api_key: env(&self.openai.api_key_env).filter(|k| !k.trim().is_empty()),
                api_key_env: self.openai.api_key_env.clone(),
                base_url: self.openai.base_url.clone(),
                model: self.openai.model.clone(),
            },
            ollama: OllamaSettings {
                host: env(OLLAMA_HOST_ENV).unwrap_or_else(|| self.ollama.host.clone()),
                model: self.ollama.model.clone(),
            },
            retry: RetryPolicy::default(),
        }
    }

    /// [`resolve`](Self::resolve) against the process environment.
    pub fn resolve_from_env(&self) -> ProviderSettings {
        self.resolve(|name| std::env::var(name).ok())
    }
}

impl Config {
    /// Load configuration from a file path.
    /// Returns default config if the file doesn't exist.
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.map(PathBuf::from).unwrap_or_else(default_path);

        if !path.exists() {
            log::debug!("No config file at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        let config = Self::parse(&content).map_err(|source| ConfigError::Parse {
            path: path.clone(),
            source,
        })?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse config file '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Get the default config file path.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("artgen").join("config.toml"))
        .unwrap_or_else(|| PathBuf::from(".config/artgen/config.toml"))
}

/// Contents written by `artgen cfg init`.
pub const DEFAULT_CONFIG_TOML: &str = r#"# artgen configuration

[render]
# Output width in characters
width = 80
# Character set: standard, detailed, blocks, minimal, classic
charset = "standard"
# Custom ramp, darkest-pixel glyph first (overrides charset)
# ramp = "@%#*+=-:. "
# Vertical correction for tall terminal cells
aspect = 0.5
# Render every n-th row
row_stride = 1
# Luminance policy: perceptual, uniform
luminance = "perceptual"
# Quantize policy: graded, binary
quantize = "graded"
# Cutoff for the binary policy (0-255)
threshold = 128.0
# Invert brightness (for dark terminals)
invert = false

[providers]
# Provider for `gen`: openai, ollama, offline
default = "openai"
# Art style passed to the provider: ascii, chaos, verse, banner
style = "ascii"
# Fall back to offline templates when a remote provider fails
fallback = true

[providers.openai]
model = "gpt-4o-mini"
base_url = "https://api.openai.com"
# Environment variable holding the API key (a .env file is read too)
api_key_env = "OPENAI_API_KEY"

[providers.ollama]
# OLLAMA_HOST overrides this
host = "http://localhost:11434"
model = "llama2"
"#;
