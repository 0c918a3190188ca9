//! RGB to brightness conversion.

use std::str::FromStr;

use super::error::RenderError;

/// How an RGB triple is collapsed into a single brightness value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LuminancePolicy {
    /// Plain channel average: (R + G + B) / 3
    Uniform,
    /// ITU-R BT.601 weighting: 0.299*R + 0.587*G + 0.114*B
    #[default]
    Perceptual,
}

impl LuminancePolicy {
    pub fn name(&self) -> &'static str {
        match self {
            LuminancePolicy::Uniform => "uniform",
            LuminancePolicy::Perceptual => "perceptual",
        }
    }
}

impl FromStr for LuminancePolicy {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "uniform" | "average" => Ok(LuminancePolicy::Uniform),
            "perceptual" | "bt601" => Ok(LuminancePolicy::Perceptual),
            _ => Err(RenderError::unsupported("luminance policy", s)),
        }
    }
}

/// Brightness of an RGB triple in `[0, 255]`.
///
/// Alpha is not an input; images are treated as opaque.
#[inline]
pub fn luminance(policy: LuminancePolicy, r: u8, g: u8, b: u8) -> f64 {
    let (r, g, b) = (r as f64, g as f64, b as f64);
    let y = match policy {
        LuminancePolicy::Uniform => (r + g + b) / 3.0,
        LuminancePolicy::Perceptual => 0.299 * r + 0.587 * g + 0.114 * b,
    };
    // Weights sum to 1.0 but float rounding can push white a hair past 255
    y.clamp(0.0, 255.0)
}
