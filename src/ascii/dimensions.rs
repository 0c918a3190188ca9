//! Output grid size with aspect correction.

use super::error::RenderError;

/// Default vertical correction factor.
/// Terminal cells are roughly twice as tall as they are wide, so the grid
/// gets about half as many rows as a square-pixel mapping would.
pub const DEFAULT_ASPECT_CORRECTION: f64 = 0.5;

/// Number of character rows for an image rendered `output_width` columns wide.
///
/// `floor(output_width * (img_height / img_width) * aspect_correction)`
///
/// # Errors
/// `InvalidDimensions` if any input is zero or the result rounds down to
/// zero rows (e.g. a very wide, short image at a small width).
pub fn output_height(
    img_width: u32,
    img_height: u32,
    output_width: u32,
    aspect_correction: f64,
) -> Result<u32, RenderError> {
    if img_width == 0 || img_height == 0 || output_width == 0 {
        return Err(RenderError::InvalidDimensions(format!(
            "cannot render a {}x{} image at width {}",
            img_width, img_height, output_width
        )));
    }

    let aspect = img_height as f64 / img_width as f64;
    let rows = (output_width as f64 * aspect * aspect_correction).floor();

    if rows.is_nan() || rows < 1.0 {
        return Err(RenderError::InvalidDimensions(format!(
            "a {}x{} image at width {} with aspect correction {} yields no rows",
            img_width, img_height, output_width, aspect_correction
        )));
    }

    Ok(rows.min(u32::MAX as f64) as u32)
}
