//! Convenience re-exports of the working set.
//!
//! ```
//! use umber_ui::prelude::*;
//! ```

pub use umber_render::{
    Color, Font, FontFamily, FontSystem, FontSystemConfig, Point, Rect, RenderError, ResizeFilter,
    Size, Surface,
};

pub use crate::button::{Button, ButtonBuilder, ButtonEvent, ButtonHooks, ImageSource};
pub use crate::error::{WidgetError, WidgetResult};
pub use crate::input::{InputEvent, Key, PointerButton};
