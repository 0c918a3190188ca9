//! Decoding image files into pixel buffers.
//!
//! Decoding is delegated to the `image` crate. Only PNG and JPEG are
//! accepted; the file extension picks the decoder.

use std::path::{Path, PathBuf};

use image::ImageFormat;

use crate::ascii::{PixelBuffer, RenderError};

/// Errors that can occur while loading an image.
#[derive(Debug, thiserror::Error)]
pub enum ImageSourceError {
    #[error("Unsupported image format '{}'. Please use PNG or JPEG.", path.display())]
    UnsupportedFormat { path: PathBuf },

    #[error("Failed to read image '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    #[error("Decoded image is unusable: {0}")]
    Buffer(#[from] RenderError),
}

/// Pick a decoder from the file extension (case-insensitive).
pub fn format_for_path(path: &Path) -> Result<ImageFormat, ImageSourceError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match ext.as_deref() {
        Some("png") => Ok(ImageFormat::Png),
        Some("jpg") | Some("jpeg") => Ok(ImageFormat::Jpeg),
        _ => Err(ImageSourceError::UnsupportedFormat {
            path: path.to_path_buf(),
        }),
    }
}

/// Decode an in-memory PNG or JPEG into RGBA pixels.
pub fn decode_image(bytes: &[u8], format: ImageFormat) -> Result<PixelBuffer, ImageSourceError> {
    let img = image::load_from_memory_with_format(bytes, format)?;
    log::debug!(
        "Decoded {:?} image: {}x{} ({:?})",
        format,
        img.width(),
        img.height(),
        img.color()
    );
    Ok(PixelBuffer::from_rgba_image(img.into_rgba8())?)
}

/// Read and decode an image file.
pub fn load_image(path: &Path) -> Result<PixelBuffer, ImageSourceError> {
    let format = format_for_path(path)?;
    let bytes = std::fs::read(path).map_err(|source| ImageSourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    decode_image(&bytes, format)
}
