//! CLI argument parsing with clap.

use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

use super::enums::{CharacterSet, Luminance, ProviderName, Quantize};
use crate::ascii;
use crate::config::RenderSettings;

/// Parse and validate the output width (1 to `MAX_OUTPUT_WIDTH` characters)
fn parse_width(s: &str) -> Result<u32, String> {
    let width: u32 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid width", s))?;
    if !(1..=ascii::MAX_OUTPUT_WIDTH).contains(&width) {
        return Err(format!(
            "Width must be between 1 and {}, got {}",
            ascii::MAX_OUTPUT_WIDTH,
            width
        ));
    }
    Ok(width)
}

/// Parse a strictly positive, finite number
fn parse_positive(s: &str) -> Result<f64, String> {
    let value: f64 = s.parse().map_err(|_| format!("'{}' is not a valid number", s))?;
    if !value.is_finite() || value <= 0.0 {
        return Err(format!("Value must be greater than 0, got {}", value));
    }
    Ok(value)
}

/// Parse and validate a brightness threshold (0-255)
fn parse_threshold(s: &str) -> Result<f64, String> {
    let value: f64 = s.parse().map_err(|_| format!("'{}' is not a valid number", s))?;
    if !(0.0..=255.0).contains(&value) {
        return Err(format!("Threshold must be between 0 and 255, got {}", value));
    }
    Ok(value)
}

/// Parse a custom character ramp (at least 2 distinct characters)
fn parse_ramp(s: &str) -> Result<String, String> {
    ascii::parse_ramp(s).map_err(|e| e.to_string())?;
    Ok(s.to_string())
}

/// AI-powered ASCII art generator for the terminal
#[derive(Parser, Debug)]
#[command(name = "artgen")]
#[command(version, about = "AI-powered ASCII art generator for the terminal", long_about = None)]
#[command(after_help = "EXAMPLES:
    # Render a photo 100 columns wide
    artgen create photo.jpg --width 100

    # Old-school two-glyph look
    artgen crt logo.png --quantize binary --charset classic

    # Ask a local model for art, falling back to templates if it is down
    artgen gen \"a lighthouse at night\" --provider ollama")]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Config file path
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create ASCII art from an image file (PNG or JPEG)
    #[command(visible_alias = "crt")]
    Create(CreateArgs),
    /// Generate art from a text prompt
    Gen(GenArgs),
    /// Configuration management
    Cfg {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(ClapArgs, Debug, Clone, Default)]
pub struct CreateArgs {
    /// Image file to convert
    pub file: PathBuf,

    /// Width of the output in characters
    #[arg(short, long, value_parser = parse_width)]
    pub width: Option<u32>,

    /// ASCII character set
    #[arg(long)]
    pub charset: Option<CharacterSet>,

    /// Custom ramp, darkest-pixel glyph first (overrides --charset)
    #[arg(long, value_parser = parse_ramp)]
    pub ramp: Option<String>,

    /// Vertical aspect correction for tall terminal cells
    #[arg(long, value_parser = parse_positive)]
    pub aspect: Option<f64>,

    /// Render every n-th row
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub row_stride: Option<u32>,

    /// Brightness formula
    #[arg(long)]
    pub luminance: Option<Luminance>,

    /// Brightness to glyph mapping
    #[arg(long)]
    pub quantize: Option<Quantize>,

    /// Cutoff for --quantize binary (0-255)
    #[arg(long, value_parser = parse_threshold)]
    pub threshold: Option<f64>,

    /// Invert brightness (for dark terminals)
    #[arg(long)]
    pub invert: bool,

    /// Do not invert, even if the config file says so
    #[arg(long, conflicts_with = "invert")]
    pub no_invert: bool,

    /// Output file path
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl CreateArgs {
    /// Overlay the flags that were given on top of config file settings.
    pub fn apply_to(&self, settings: &mut RenderSettings) {
        if let Some(width) = self.width {
            settings.width = width;
        }
        if let Some(charset) = self.charset {
            settings.charset = ascii::CharSet::from(charset).name().to_string();
            settings.ramp = None;
        }
        if let Some(ramp) = &self.ramp {
            settings.ramp = Some(ramp.clone());
        }
        if let Some(aspect) = self.aspect {
            settings.aspect = aspect;
        }
        if let Some(stride) = self.row_stride {
            settings.row_stride = stride;
        }
        if let Some(luminance) = self.luminance {
            settings.luminance = ascii::LuminancePolicy::from(luminance).name().to_string();
        }
        if let Some(quantize) = self.quantize {
            settings.quantize = quantize.name().to_string();
        }
        if let Some(threshold) = self.threshold {
            settings.threshold = threshold;
        }
        if self.invert {
            settings.invert = true;
        } else if self.no_invert {
            settings.invert = false;
        }

        if self.threshold_is_ignored(settings) {
            log::warn!(
                "--threshold only applies to --quantize binary; the graded policy ignores it"
            );
        }
    }

    /// `--threshold` was given but the effective policy is graded.
    pub fn threshold_is_ignored(&self, settings: &RenderSettings) -> bool {
        self.threshold.is_some()
            && matches!(
                settings.quantize.parse::<ascii::QuantizePolicy>(),
                Ok(ascii::QuantizePolicy::Graded)
            )
    }
}

#[derive(ClapArgs, Debug, Clone)]
pub struct GenArgs {
    /// What the art should show
    pub prompt: String,

    /// AI provider to use
    #[arg(short, long)]
    pub provider: Option<ProviderName>,

    /// Model to use for generation
    #[arg(short, long)]
    pub model: Option<String>,

    /// Art style: ascii, chaos, verse, banner
    #[arg(short, long)]
    pub style: Option<String>,

    /// Output file path
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Fail instead of falling back to offline templates
    #[arg(long)]
    pub no_fallback: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Create default config file
    Init,
}
