//! Character ramps for rendering.
//!
//! Every ramp is ordered from the glyph used for the darkest pixels (the
//! densest, most ink) to the glyph used for the lightest pixels (usually a
//! space). This reads correctly on a light background; pass `invert` when
//! rendering for a dark terminal.

use std::str::FromStr;

use super::error::RenderError;

/// Standard ASCII density ramp (10 levels).
pub const STANDARD_CHARSET: &[char] = &['@', '%', '#', '*', '+', '=', '-', ':', '.', ' '];

/// Paul Bourke's 70-level ramp for fine tonal detail.
pub const DETAILED_CHARSET: &str =
    "$@B%8&WM#*oahkbdpqwmZO0QLCJUYXzcvunxrjft/\\|()1{}[]?-_+~<>i!lI;:,\"^`'. ";

/// Block character set (5 levels) using Unicode shading blocks.
pub const BLOCKS_CHARSET: &[char] = &['█', '▓', '▒', '░', ' '];

/// Minimal character set (4 levels). Clean, less noisy look.
pub const MINIMAL_CHARSET: &[char] = &['#', ':', '.', ' '];

/// Two-level ramp: dense glyph on dark pixels, blank elsewhere.
pub const CLASSIC_CHARSET: &[char] = &['@', ' '];

/// Named built-in character ramp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CharSet {
    /// Standard ASCII density ramp (10 levels)
    #[default]
    Standard,
    /// 70-level ramp
    Detailed,
    /// Unicode block characters (5 levels)
    Blocks,
    /// 4 levels
    Minimal,
    /// `@` and space
    Classic,
}

impl CharSet {
    pub const ALL: [CharSet; 5] = [
        CharSet::Standard,
        CharSet::Detailed,
        CharSet::Blocks,
        CharSet::Minimal,
        CharSet::Classic,
    ];

    /// Glyphs of this ramp, darkest-pixel glyph first.
    pub fn chars(&self) -> Vec<char> {
        match self {
            CharSet::Standard => STANDARD_CHARSET.to_vec(),
            CharSet::Detailed => DETAILED_CHARSET.chars().collect(),
            CharSet::Blocks => BLOCKS_CHARSET.to_vec(),
            CharSet::Minimal => MINIMAL_CHARSET.to_vec(),
            CharSet::Classic => CLASSIC_CHARSET.to_vec(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            CharSet::Standard => "standard",
            CharSet::Detailed => "detailed",
            CharSet::Blocks => "blocks",
            CharSet::Minimal => "minimal",
            CharSet::Classic => "classic",
        }
    }

    /// Resolve a style name (case-insensitive).
    pub fn from_name(name: &str) -> Result<Self, RenderError> {
        let wanted = name.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.name() == wanted)
            .ok_or_else(|| RenderError::unsupported("character set", name))
    }
}

impl FromStr for CharSet {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CharSet::from_name(s)
    }
}

/// Turn a user-supplied ramp string into glyphs, checking it can show contrast.
pub fn parse_ramp(ramp: &str) -> Result<Vec<char>, RenderError> {
    let chars: Vec<char> = ramp.chars().collect();
    validate_ramp(&chars)?;
    Ok(chars)
}

/// A ramp needs at least two distinct glyphs.
pub fn validate_ramp(ramp: &[char]) -> Result<(), RenderError> {
    let distinct = ramp.first().is_some_and(|first| ramp.iter().any(|c| c != first));
    if distinct {
        Ok(())
    } else {
        Err(RenderError::InvalidRamp(ramp.iter().collect()))
    }
}
