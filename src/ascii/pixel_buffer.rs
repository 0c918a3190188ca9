//! Read-only RGBA pixel storage handed over by the image decoder.

use super::error::RenderError;

/// A single RGBA pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// Decoded image: dimensions plus interleaved RGBA bytes in row-major order.
///
/// The length of `pixels` is always `width * height * 4`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl PixelBuffer {
    /// Wrap raw RGBA bytes.
    ///
    /// # Errors
    /// `InvalidDimensions` if either side is zero, `BufferSize` if the
    /// byte count does not match `width * height * 4`.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, RenderError> {
        if width == 0 || height == 0 {
            return Err(RenderError::InvalidDimensions(format!(
                "image must be at least 1x1, got {}x{}",
                width, height
            )));
        }

        let expected = width as usize * height as usize * 4;
        if pixels.len() != expected {
            return Err(RenderError::BufferSize {
                expected,
                actual: pixels.len(),
            });
        }

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Take ownership of a decoded RGBA8 image without copying its bytes.
    pub fn from_rgba_image(image: image::RgbaImage) -> Result<Self, RenderError> {
        let (width, height) = image.dimensions();
        Self::new(width, height, image.into_raw())
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    /// Look up the pixel at `(x, y)`.
    ///
    /// # Errors
    /// `OutOfBounds` if the coordinate lies outside the image. Well-formed
    /// sampling never produces such a coordinate.
    pub fn get_pixel(&self, x: u32, y: u32) -> Result<Rgba, RenderError> {
        if x >= self.width || y >= self.height {
            return Err(RenderError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }

        let idx = (y as usize * self.width as usize + x as usize) * 4;
        let px = &self.pixels[idx..idx + 4];
        Ok(Rgba {
            r: px[0],
            g: px[1],
            b: px[2],
            a: px[3],
        })
    }
}
