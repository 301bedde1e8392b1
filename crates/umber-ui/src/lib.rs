//! Widget layer of the Umber toolkit.
//!
//! This crate provides [`Button`], a retained-mode clickable button that a
//! host loop drives directly:
//!
//! 1. Forward each raw [`InputEvent`] to [`Button::handle_event`] and react
//!    to the returned [`ButtonEvent`]s (or install [`ButtonHooks`] and
//!    react in callbacks — same events, same order).
//! 2. Call [`Button::draw`] each frame to blit the surface matching the
//!    button's current state onto a destination canvas.
//!
//! Rendering is CPU-side through [`umber_render`]; there is no windowing,
//! layout, or focus machinery here. Widgets are single-threaded
//! state-and-render components driven entirely by the host's cadence.
//!
//! # Example
//!
//! ```no_run
//! use umber_ui::prelude::*;
//!
//! fn run() -> WidgetResult<()> {
//!     let mut fonts = FontSystem::new();
//!     let mut quit = Button::builder()
//!         .rect(Rect::new(20, 20, 120, 36))
//!         .caption("Quit")
//!         .background(Color::LIGHT_GRAY)
//!         .foreground(Color::BLACK)
//!         .build(&mut fonts)?;
//!
//!     let mut frame = Surface::from_color(640, 480, Color::DARK_GRAY);
//!     // ... in the host loop:
//!     for event in host_events() {
//!         for produced in quit.handle_event(&event) {
//!             if produced == ButtonEvent::Click {
//!                 // shut down
//!             }
//!         }
//!     }
//!     quit.draw(&mut frame);
//!     Ok(())
//! }
//! # fn host_events() -> Vec<umber_ui::InputEvent> { Vec::new() }
//! ```

mod button;
mod error;
mod input;
pub mod prelude;

pub use button::{Button, ButtonBuilder, ButtonEvent, ButtonHooks, Hook, ImageSource};
pub use error::{WidgetError, WidgetResult};
pub use input::{InputEvent, Key, PointerButton};

// Re-export the render layer under a short alias so hosts can reach the
// drawing types without a separate dependency declaration.
pub use umber_render as render;
