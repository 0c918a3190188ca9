//! Error type for the rendering pipeline.

/// Errors produced while building or rendering a character grid.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RenderError {
    #[error("Invalid dimensions: {0}")]
    InvalidDimensions(String),

    #[error("Pixel ({x}, {y}) is outside the {width}x{height} buffer")]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    #[error("Pixel buffer holds {actual} bytes, expected {expected}")]
    BufferSize { expected: usize, actual: usize },

    #[error("Unsupported {kind} '{name}'")]
    UnsupportedConfig {
        /// What was being configured (e.g. "luminance policy")
        kind: &'static str,
        /// The name that could not be resolved
        name: String,
    },

    #[error("Character ramp needs at least 2 distinct characters, got {0:?}")]
    InvalidRamp(String),
}

impl RenderError {
    pub(crate) fn unsupported(kind: &'static str, name: &str) -> Self {
        RenderError::UnsupportedConfig {
            kind,
            name: name.to_string(),
        }
    }
}
