//! Brightness to character mapping.

use std::str::FromStr;

use super::error::RenderError;

/// Default cutoff for [`QuantizePolicy::Binary`].
pub const DEFAULT_THRESHOLD: f64 = 128.0;

/// How a brightness value selects a glyph from the ramp.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum QuantizePolicy {
    /// Two-level output: brightness above `threshold` picks the lightest
    /// glyph, everything else the darkest.
    Binary { threshold: f64 },
    /// Spread brightness evenly across every glyph in the ramp.
    #[default]
    Graded,
}

impl QuantizePolicy {
    pub fn name(&self) -> &'static str {
        match self {
            QuantizePolicy::Binary { .. } => "binary",
            QuantizePolicy::Graded => "graded",
        }
    }
}

impl FromStr for QuantizePolicy {
    type Err = RenderError;

    /// Parses `binary` (with the default threshold) or `graded`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "binary" | "threshold" => Ok(QuantizePolicy::Binary {
                threshold: DEFAULT_THRESHOLD,
            }),
            "graded" | "ramp" => Ok(QuantizePolicy::Graded),
            _ => Err(RenderError::unsupported("quantize policy", s)),
        }
    }
}

/// Ramp index selected for a brightness value.
///
/// Index 0 is the glyph for the darkest pixels, `levels - 1` the glyph for
/// the lightest. With `invert` the direction is flipped. The result is
/// always in `[0, levels - 1]`.
///
/// `levels` must be non-zero.
pub fn quantize_index(
    policy: QuantizePolicy,
    luminance: f64,
    levels: usize,
    invert: bool,
) -> usize {
    let last = levels - 1;
    let idx = match policy {
        QuantizePolicy::Binary { threshold } => {
            if luminance > threshold {
                last
            } else {
                0
            }
        }
        QuantizePolicy::Graded => {
            let scaled = (luminance / 255.0) * last as f64;
            // NaN and negatives saturate to 0 in the cast
            (scaled.floor() as usize).min(last)
        }
    };

    if invert {
        last - idx
    } else {
        idx
    }
}

/// Pick the glyph for a brightness value.
///
/// `ramp` must be non-empty; the render engine validates this up front.
#[inline]
pub fn quantize(policy: QuantizePolicy, luminance: f64, ramp: &[char], invert: bool) -> char {
    ramp[quantize_index(policy, luminance, ramp.len(), invert)]
}
