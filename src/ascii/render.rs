//! Image to character grid rendering.

use super::charset::{validate_ramp, CharSet};
use super::dimensions::{output_height, DEFAULT_ASPECT_CORRECTION};
use super::error::RenderError;
use super::luminance::{luminance, LuminancePolicy};
use super::pixel_buffer::PixelBuffer;
use super::quantize::{quantize, QuantizePolicy};
use super::sampler::map_coordinate;

/// Default output width in characters.
pub const DEFAULT_OUTPUT_WIDTH: u32 = 80;

/// Widest grid the renderer accepts, in characters.
pub const MAX_OUTPUT_WIDTH: u32 = 10_000;

/// Everything that controls how a [`PixelBuffer`] becomes text.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Character columns per row.
    pub output_width: u32,
    /// Glyphs ordered from darkest-pixel glyph to lightest-pixel glyph.
    pub ramp: Vec<char>,
    /// Vertical correction for non-square character cells.
    pub aspect_correction: f64,
    /// Emit every n-th row of the grid.
    pub row_stride: u32,
    pub luminance: LuminancePolicy,
    pub quantize: QuantizePolicy,
    /// Flip the ramp direction (light glyphs for dark pixels).
    pub invert: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            output_width: DEFAULT_OUTPUT_WIDTH,
            ramp: CharSet::default().chars(),
            aspect_correction: DEFAULT_ASPECT_CORRECTION,
            row_stride: 1,
            luminance: LuminancePolicy::default(),
            quantize: QuantizePolicy::default(),
            invert: false,
        }
    }
}

impl RenderConfig {
    /// Check the invariants the renderer relies on.
    pub fn validate(&self) -> Result<(), RenderError> {
        if !(1..=MAX_OUTPUT_WIDTH).contains(&self.output_width) {
            return Err(RenderError::InvalidDimensions(format!(
                "output width must be between 1 and {}, got {}",
                MAX_OUTPUT_WIDTH, self.output_width
            )));
        }
        if self.row_stride == 0 {
            return Err(RenderError::InvalidDimensions(
                "row stride must be at least 1".to_string(),
            ));
        }
        if !self.aspect_correction.is_finite() || self.aspect_correction <= 0.0 {
            return Err(RenderError::InvalidDimensions(format!(
                "aspect correction must be a positive number, got {}",
                self.aspect_correction
            )));
        }
        if let QuantizePolicy::Binary { threshold } = self.quantize {
            if !(0.0..=255.0).contains(&threshold) {
                return Err(RenderError::UnsupportedConfig {
                    kind: "binary threshold",
                    name: threshold.to_string(),
                });
            }
        }
        validate_ramp(&self.ramp)
    }
}

/// Render `buffer` as newline-separated rows of `config.output_width` glyphs.
///
/// The grid has `floor(output_width * height / width * aspect_correction)`
/// rows, of which every `row_stride`-th is emitted. The output has no
/// trailing newline and is identical for identical inputs.
///
/// # Errors
/// Fails on an invalid config or when the image yields zero rows. No
/// partial output is produced.
pub fn render(buffer: &PixelBuffer, config: &RenderConfig) -> Result<String, RenderError> {
    config.validate()?;

    let out_w = config.output_width;
    let out_h = output_height(
        buffer.width(),
        buffer.height(),
        out_w,
        config.aspect_correction,
    )?;

    // Column mapping is the same for every row
    let src_cols: Vec<u32> = (0..out_w)
        .map(|x| map_coordinate(x, 0, out_w, out_h, buffer.width(), buffer.height()).0)
        .collect();

    let rows = out_h.div_ceil(config.row_stride) as usize;
    let mut out = String::with_capacity(rows * (out_w as usize + 1));

    for (i, y) in (0..out_h).step_by(config.row_stride as usize).enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let (_, src_y) = map_coordinate(0, y, out_w, out_h, buffer.width(), buffer.height());
        for &src_x in &src_cols {
            let px = buffer.get_pixel(src_x, src_y)?;
            let lum = luminance(config.luminance, px.r, px.g, px.b);
            out.push(quantize(config.quantize, lum, &config.ramp, config.invert));
        }
    }

    Ok(out)
}
