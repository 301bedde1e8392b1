//! CPU raster backend for the Umber widget toolkit.
//!
//! This crate provides the drawing substrate widgets are built on:
//!
//! - [`Surface`]: an RGBA8 pixel buffer with fill, blit, outline, rescale,
//!   and file load/save operations
//! - [`Point`], [`Size`], [`Rect`], [`Color`]: integer pixel geometry and
//!   color types
//! - [`text`]: font management ([`FontSystem`]) and single-line caption
//!   rasterization
//!
//! # Example
//!
//! ```no_run
//! use umber_render::{Color, Point, Surface, text::{Font, FontSystem}};
//!
//! let mut fonts = FontSystem::new();
//! let caption = umber_render::text::raster_line(
//!     &mut fonts,
//!     "OK",
//!     &Font::default(),
//!     Color::WHITE,
//!     Color::LIGHT_GRAY,
//! );
//!
//! let mut canvas = Surface::from_color(200, 80, Color::DARK_GRAY);
//! canvas.blit(&caption, Point::new(10, 10));
//! ```

mod error;
mod surface;
pub mod text;
mod types;

pub use error::{RenderError, RenderResult};
pub use surface::{ResizeFilter, Surface};
pub use text::{Font, FontFamily, FontSystem, FontSystemConfig};
pub use types::{Color, Point, Rect, Size};
