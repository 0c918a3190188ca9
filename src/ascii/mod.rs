//! Image to ASCII art rendering engine.
//!
//! Converts a decoded image into a deterministic grid of characters:
//!
//! 1. **Sampling** - nearest-neighbor mapping from grid cells to pixels
//! 2. **Luminance** - RGB to brightness, uniform or BT.601 weighted
//! 3. **Quantization** - brightness to a glyph, binary or graded
//! 4. **Rendering** - rows of glyphs joined by newlines
//!
//! The engine is a pure function of a [`PixelBuffer`] and a
//! [`RenderConfig`]. It does no I/O.
//!
//! # Character Sets
//!
//! Built-in ramps are available via [`CharSet`]:
//! - `Standard` - 10-level ASCII density ramp
//! - `Detailed` - 70-level ramp
//! - `Blocks` - Unicode shading blocks
//! - `Minimal` - 4-level clean look
//! - `Classic` - `@` and space

mod charset;
mod dimensions;
mod error;
mod luminance;
mod pixel_buffer;
mod quantize;
mod render;
mod sampler;

pub use charset::{
    parse_ramp, validate_ramp, CharSet, BLOCKS_CHARSET, CLASSIC_CHARSET, DETAILED_CHARSET,
    MINIMAL_CHARSET, STANDARD_CHARSET,
};
pub use dimensions::{output_height, DEFAULT_ASPECT_CORRECTION};
pub use error::RenderError;
pub use luminance::{luminance, LuminancePolicy};
pub use pixel_buffer::{PixelBuffer, Rgba};
pub use quantize::{quantize, quantize_index, QuantizePolicy, DEFAULT_THRESHOLD};
pub use render::{render, RenderConfig, DEFAULT_OUTPUT_WIDTH, MAX_OUTPUT_WIDTH};
pub use sampler::map_coordinate;
