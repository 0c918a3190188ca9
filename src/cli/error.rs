use std::path::PathBuf;
use thiserror::Error;

use crate::ascii::RenderError;
use crate::config::ConfigError;
use crate::image_source::ImageSourceError;
use crate::providers::ProviderError;

/// Anything a subcommand can fail with. `main` prints it and exits 1.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Image(#[from] ImageSourceError),

    #[error("Render failed: {0}")]
    Render(#[from] RenderError),

    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error(
        "Config file already exists: {}. Use 'artgen cfg show' to view current settings.",
        .0.display()
    )]
    ConfigExists(PathBuf),

    #[error("Failed to write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to start async runtime: {0}")]
    Runtime(std::io::Error),
}
