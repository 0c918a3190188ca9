//! CLI enum types for character set, policy and provider options.

use clap::ValueEnum;

use crate::ascii;
use crate::providers;

/// ASCII character set for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum CharacterSet {
    #[default]
    Standard,
    Detailed,
    Blocks,
    Minimal,
    Classic,
}

impl From<CharacterSet> for ascii::CharSet {
    fn from(c: CharacterSet) -> Self {
        match c {
            CharacterSet::Standard => ascii::CharSet::Standard,
            CharacterSet::Detailed => ascii::CharSet::Detailed,
            CharacterSet::Blocks => ascii::CharSet::Blocks,
            CharacterSet::Minimal => ascii::CharSet::Minimal,
            CharacterSet::Classic => ascii::CharSet::Classic,
        }
    }
}

/// Brightness formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Luminance {
    /// (R + G + B) / 3
    Uniform,
    /// ITU-R BT.601 weights
    Perceptual,
}

impl From<Luminance> for ascii::LuminancePolicy {
    fn from(l: Luminance) -> Self {
        match l {
            Luminance::Uniform => ascii::LuminancePolicy::Uniform,
            Luminance::Perceptual => ascii::LuminancePolicy::Perceptual,
        }
    }
}

/// Brightness to glyph mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Quantize {
    /// Two glyphs split at --threshold
    Binary,
    /// The whole ramp
    Graded,
}

impl Quantize {
    pub fn name(&self) -> &'static str {
        match self {
            Quantize::Binary => "binary",
            Quantize::Graded => "graded",
        }
    }
}

/// Text-generation backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ProviderName {
    Openai,
    Ollama,
    Offline,
}

impl From<ProviderName> for providers::Provider {
    fn from(p: ProviderName) -> Self {
        match p {
            ProviderName::Openai => providers::Provider::OpenAi,
            ProviderName::Ollama => providers::Provider::Ollama,
            ProviderName::Offline => providers::Provider::Offline,
        }
    }
}
