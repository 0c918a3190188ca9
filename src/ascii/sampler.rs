//! Nearest-neighbor mapping from character cells to source pixels.

/// Map an output grid coordinate to the source pixel it samples.
///
/// `src = floor(out * source / output)` on each axis. No averaging is done,
/// so every cell reads exactly one pixel. When the output is larger than
/// the source, neighbouring cells read the same pixel.
///
/// `output_width` and `output_height` must be non-zero; the render engine
/// validates this before sampling.
#[inline]
pub fn map_coordinate(
    out_x: u32,
    out_y: u32,
    output_width: u32,
    output_height: u32,
    source_width: u32,
    source_height: u32,
) -> (u32, u32) {
    // u64 keeps the product exact for any u32 inputs
    let src_x = out_x as u64 * source_width as u64 / output_width as u64;
    let src_y = out_y as u64 * source_height as u64 / output_height as u64;
    (src_x as u32, src_y as u32)
}
