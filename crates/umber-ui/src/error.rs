//! Error types for the widget crate.

use thiserror::Error;
use umber_render::{RenderError, Size};

/// Errors that can occur configuring a widget.
#[derive(Error, Debug)]
pub enum WidgetError {
    /// The three state images of an image-backed button must share pixel
    /// dimensions. Raised before any widget state is modified.
    #[error(
        "{slot} image is {}x{} but the normal image is {}x{}",
        .actual.width,
        .actual.height,
        .expected.width,
        .expected.height
    )]
    ImageSizeMismatch {
        /// Which slot mismatched ("pressed" or "highlight").
        slot: &'static str,
        /// Dimensions of the normal image.
        expected: Size,
        /// Dimensions of the mismatched image.
        actual: Size,
    },

    /// A render-layer failure (image or font loading).
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Result type for widget operations.
pub type WidgetResult<T> = Result<T, WidgetError>;
