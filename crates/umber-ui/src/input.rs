//! Raw input events forwarded by the host loop.
//!
//! The host owns the event pump; widgets only see this already-translated
//! union. Pointer events carry a screen position, key events carry the key.
//! Kinds a widget does not recognize (e.g. [`InputEvent::Scroll`] for a
//! button) are silently ignored by its event handler.

use umber_render::Point;

/// A pointer device button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    Left,
    Middle,
    Right,
}

/// A keyboard key.
///
/// Only the keys widgets care about are named; everything else arrives as
/// [`Key::Character`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Space,
    Enter,
    Escape,
    Character(char),
}

/// A raw input event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// The pointer moved.
    PointerMoved {
        /// Position in the host's coordinate space.
        pos: Point,
    },
    /// A pointer button was pressed.
    PointerPressed {
        pos: Point,
        button: PointerButton,
    },
    /// A pointer button was released.
    PointerReleased {
        pos: Point,
        button: PointerButton,
    },
    /// A key was pressed.
    KeyPressed { key: Key },
    /// A key was released.
    KeyReleased { key: Key },
    /// The scroll wheel or trackpad scrolled.
    Scroll { delta_x: f32, delta_y: f32 },
}

impl InputEvent {
    /// The pointer position, for pointer event kinds.
    pub fn pointer_position(&self) -> Option<Point> {
        match self {
            InputEvent::PointerMoved { pos }
            | InputEvent::PointerPressed { pos, .. }
            | InputEvent::PointerReleased { pos, .. } => Some(*pos),
            _ => None,
        }
    }

    /// Check if this is a pointer event kind.
    pub fn is_pointer(&self) -> bool {
        self.pointer_position().is_some()
    }

    /// Shorthand for a pointer move at the given coordinates.
    pub fn pointer_moved(x: i32, y: i32) -> Self {
        InputEvent::PointerMoved {
            pos: Point::new(x, y),
        }
    }

    /// Shorthand for a left-button press at the given coordinates.
    pub fn pointer_pressed(x: i32, y: i32) -> Self {
        InputEvent::PointerPressed {
            pos: Point::new(x, y),
            button: PointerButton::Left,
        }
    }

    /// Shorthand for a left-button release at the given coordinates.
    pub fn pointer_released(x: i32, y: i32) -> Self {
        InputEvent::PointerReleased {
            pos: Point::new(x, y),
            button: PointerButton::Left,
        }
    }
}
