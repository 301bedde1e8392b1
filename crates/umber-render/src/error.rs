//! Error types for the render crate.

use thiserror::Error;

/// Errors that can occur during raster operations.
#[derive(Error, Debug)]
pub enum RenderError {
    /// Failed to load an image from disk or memory.
    #[error("failed to load image: {0}")]
    ImageLoad(String),

    /// Failed to encode or save an image.
    #[error("failed to save image: {0}")]
    ImageSave(String),

    /// Failed to load a font file.
    #[error("failed to load font: {0}")]
    FontLoad(String),

    /// Invalid surface dimensions for the requested operation.
    #[error("invalid surface dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
}

/// Result type for render operations.
pub type RenderResult<T> = Result<T, RenderError>;
