//! Clickable button widget.
//!
//! # Overview
//!
//! [`Button`] owns a rectangle of screen space, three precomputed state
//! surfaces (normal, pressed, highlighted), and a small amount of
//! interaction state. The host loop forwards each raw [`InputEvent`] to
//! [`Button::handle_event`], which updates that state and returns the
//! semantic [`ButtonEvent`]s the input produced; once per frame the host
//! calls [`Button::draw`] to blit the surface matching the current state.
//!
//! # Appearance
//!
//! A button is either text-backed (caption rendered over a solid
//! background, with an inverted pressed state) or image-backed (three
//! caller-supplied surfaces rescaled to the button's bounds). Every mutator
//! that affects appearance regenerates the state surfaces as a documented
//! postcondition; setting a text property on an image-backed button drops
//! the images and returns it to text rendering.
//!
//! # Event ordering
//!
//! When one raw event produces several semantic events, they are reported
//! in a fixed relative order: enter, move, down, up, click, exit. In
//! particular `enter` precedes `move`, `up` precedes `click`, and a `move`
//! processed in the same event precedes `exit`.
//!
//! # Example
//!
//! ```no_run
//! use umber_render::{Color, FontSystem, Rect, Surface};
//! use umber_ui::{Button, ButtonEvent, InputEvent};
//!
//! let mut fonts = FontSystem::new();
//! let mut button = Button::builder()
//!     .rect(Rect::new(10, 10, 100, 30))
//!     .caption("OK")
//!     .build(&mut fonts)
//!     .unwrap();
//!
//! let mut canvas = Surface::from_color(320, 240, Color::DARK_GRAY);
//! for event in [
//!     InputEvent::pointer_moved(60, 25),
//!     InputEvent::pointer_pressed(60, 25),
//!     InputEvent::pointer_released(60, 25),
//! ] {
//!     if button.handle_event(&event).contains(&ButtonEvent::Click) {
//!         println!("clicked");
//!     }
//! }
//! button.draw(&mut canvas);
//! ```

use std::fmt;
use std::path::PathBuf;

use tracing::{debug, trace};
use umber_render::text::{self, Font};
use umber_render::{Color, FontSystem, Point, Rect, ResizeFilter, Size, Surface};

use crate::error::{WidgetError, WidgetResult};
use crate::input::InputEvent;

/// Placeholder bounds used when a button is built without a rectangle.
const DEFAULT_RECT: Rect = Rect::new(0, 0, 30, 60);

/// Outline thickness on the normal surface. Drawn in the background color,
/// so it is invisible against the fill; kept for parity with the pressed
/// surface.
const NORMAL_BORDER: u32 = 5;

/// Outline thickness on the pressed surface.
const PRESSED_BORDER: u32 = 1;

/// Filter used when rescaling image-backed buttons.
const IMAGE_FILTER: ResizeFilter = ResizeFilter::Triangle;

/// A semantic event produced by [`Button::handle_event`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonEvent {
    /// The pointer moved into the button's bounds.
    Enter,
    /// The pointer moved while inside the bounds.
    Move,
    /// A press started on the button (pointer inside bounds, or any key).
    Down,
    /// A held press was released.
    Up,
    /// A release completed a press that started on the button.
    Click,
    /// The pointer moved out of the button's bounds.
    Exit,
}

impl ButtonEvent {
    /// Stable lowercase name, useful for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ButtonEvent::Enter => "enter",
            ButtonEvent::Move => "move",
            ButtonEvent::Down => "down",
            ButtonEvent::Up => "up",
            ButtonEvent::Click => "click",
            ButtonEvent::Exit => "exit",
        }
    }
}

impl fmt::Display for ButtonEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A callback invoked when the button produces the matching semantic event.
pub type Hook = Box<dyn FnMut(&InputEvent) + Send>;

/// Optional per-event callbacks.
///
/// Each slot defaults to empty. Hosts that prefer inspecting the returned
/// [`ButtonEvent`] sequence can ignore hooks entirely; the two mechanisms
/// report the same events in the same order.
#[derive(Default)]
pub struct ButtonHooks {
    enter: Option<Hook>,
    moved: Option<Hook>,
    down: Option<Hook>,
    up: Option<Hook>,
    click: Option<Hook>,
    exit: Option<Hook>,
}

impl ButtonHooks {
    /// Create an empty hook set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the enter hook.
    pub fn on_enter(mut self, hook: impl FnMut(&InputEvent) + Send + 'static) -> Self {
        self.enter = Some(Box::new(hook));
        self
    }

    /// Set the move hook.
    pub fn on_move(mut self, hook: impl FnMut(&InputEvent) + Send + 'static) -> Self {
        self.moved = Some(Box::new(hook));
        self
    }

    /// Set the down hook.
    pub fn on_down(mut self, hook: impl FnMut(&InputEvent) + Send + 'static) -> Self {
        self.down = Some(Box::new(hook));
        self
    }

    /// Set the up hook.
    pub fn on_up(mut self, hook: impl FnMut(&InputEvent) + Send + 'static) -> Self {
        self.up = Some(Box::new(hook));
        self
    }

    /// Set the click hook.
    pub fn on_click(mut self, hook: impl FnMut(&InputEvent) + Send + 'static) -> Self {
        self.click = Some(Box::new(hook));
        self
    }

    /// Set the exit hook.
    pub fn on_exit(mut self, hook: impl FnMut(&InputEvent) + Send + 'static) -> Self {
        self.exit = Some(Box::new(hook));
        self
    }

    fn fire(slot: &mut Option<Hook>, event: &InputEvent) {
        if let Some(hook) = slot.as_mut() {
            hook(event);
        }
    }
}

impl fmt::Debug for ButtonHooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ButtonHooks")
            .field("enter", &self.enter.is_some())
            .field("move", &self.moved.is_some())
            .field("down", &self.down.is_some())
            .field("up", &self.up.is_some())
            .field("click", &self.click.is_some())
            .field("exit", &self.exit.is_some())
            .finish()
    }
}

/// One image slot for [`Button::set_images`]: an already-loaded surface or
/// a file path to load it from.
#[derive(Debug, Clone)]
pub enum ImageSource {
    Surface(Surface),
    Path(PathBuf),
}

impl ImageSource {
    fn load(self) -> WidgetResult<Surface> {
        match self {
            ImageSource::Surface(surface) => Ok(surface),
            ImageSource::Path(path) => Ok(Surface::from_file(path)?),
        }
    }
}

impl From<Surface> for ImageSource {
    fn from(surface: Surface) -> Self {
        ImageSource::Surface(surface)
    }
}

impl From<PathBuf> for ImageSource {
    fn from(path: PathBuf) -> Self {
        ImageSource::Path(path)
    }
}

impl From<&str> for ImageSource {
    fn from(path: &str) -> Self {
        ImageSource::Path(PathBuf::from(path))
    }
}

/// The three per-state surfaces of a button.
#[derive(Debug, Clone)]
struct StateSurfaces {
    normal: Surface,
    pressed: Surface,
    highlight: Surface,
}

impl StateSurfaces {
    fn empty() -> Self {
        Self {
            normal: Surface::new(0, 0),
            pressed: Surface::new(0, 0),
            highlight: Surface::new(0, 0),
        }
    }

    fn rescaled(&self, size: Size, filter: ResizeFilter) -> Self {
        Self {
            normal: self.normal.rescaled(size, filter),
            pressed: self.pressed.rescaled(size, filter),
            highlight: self.highlight.rescaled(size, filter),
        }
    }
}

/// How the state surfaces are produced.
///
/// The image payload only exists while the button is image-backed; there
/// are no stale image fields to read in text mode. The text configuration
/// (caption, colors, font) stays on the button either way, because it is
/// the state a text-affecting setter returns to.
#[derive(Debug)]
enum Mode {
    Text,
    Image {
        /// Unscaled source images, retained so every rescale starts from
        /// full quality.
        originals: StateSurfaces,
    },
}

/// A clickable button widget.
///
/// See the [module documentation](self) for the interaction model.
#[derive(Debug)]
pub struct Button {
    bounds: Rect,
    caption: String,
    background: Color,
    foreground: Color,
    font: Font,
    mode: Mode,
    surfaces: StateSurfaces,

    /// A press is currently held and started on the button.
    pressed: bool,
    /// The pointer is currently inside the bounds.
    hovered: bool,
    /// The most recent press-down originated inside the bounds; decides
    /// whether the next release counts as a click.
    click_armed: bool,
    /// Invisible buttons ignore all input and are not drawn.
    visible: bool,

    hooks: ButtonHooks,
}

impl Button {
    /// Create a text button with the given bounds and caption, using the
    /// default colors and font.
    pub fn new(fonts: &mut FontSystem, rect: Rect, caption: impl Into<String>) -> Self {
        let mut button = Self::bare(rect, caption.into(), ButtonHooks::new());
        button.regenerate(fonts);
        button
    }

    /// Start building a button.
    pub fn builder() -> ButtonBuilder {
        ButtonBuilder::new()
    }

    fn bare(bounds: Rect, caption: String, hooks: ButtonHooks) -> Self {
        Self {
            bounds,
            caption,
            background: Color::LIGHT_GRAY,
            foreground: Color::WHITE,
            font: Font::default(),
            mode: Mode::Text,
            surfaces: StateSurfaces::empty(),
            pressed: false,
            hovered: false,
            click_armed: false,
            visible: true,
            hooks,
        }
    }

    // =========================================================================
    // Event Handling
    // =========================================================================

    /// Feed one raw input event to the button.
    ///
    /// Returns the semantic events the input produced, in order (possibly
    /// none). The matching hooks are invoked as each event is recorded.
    /// Invisible buttons return an empty sequence and change no state, as
    /// do event kinds the button does not recognize.
    pub fn handle_event(&mut self, event: &InputEvent) -> Vec<ButtonEvent> {
        if !self.visible {
            return Vec::new();
        }

        let mut produced = Vec::new();
        let mut exited = false;

        if let Some(pos) = event.pointer_position() {
            let inside = self.bounds.contains(pos);

            if !self.hovered && inside {
                // Pointer has entered the button.
                self.hovered = true;
                ButtonHooks::fire(&mut self.hooks.enter, event);
                produced.push(ButtonEvent::Enter);
            } else if self.hovered && !inside {
                // Pointer has left; report exit last, after any move from
                // this same event.
                self.hovered = false;
                exited = true;
            }

            if inside {
                match event {
                    InputEvent::PointerMoved { .. } => {
                        ButtonHooks::fire(&mut self.hooks.moved, event);
                        produced.push(ButtonEvent::Move);
                    }
                    InputEvent::PointerPressed { .. } => {
                        self.pressed = true;
                        self.click_armed = true;
                        ButtonHooks::fire(&mut self.hooks.down, event);
                        produced.push(ButtonEvent::Down);
                    }
                    _ => {}
                }
            } else if matches!(
                event,
                InputEvent::PointerPressed { .. } | InputEvent::PointerReleased { .. }
            ) {
                // A press or release off the button disarms the pending
                // click. An outside move does not.
                self.click_armed = false;
            }
        } else if matches!(event, InputEvent::KeyPressed { .. }) {
            // Keys activate the button with no geometric test.
            self.pressed = true;
            self.click_armed = true;
            ButtonHooks::fire(&mut self.hooks.down, event);
            produced.push(ButtonEvent::Down);
        }

        // Releases apply whether or not they are over the button.
        if matches!(
            event,
            InputEvent::PointerReleased { .. } | InputEvent::KeyReleased { .. }
        ) {
            let do_click = self.click_armed;
            self.click_armed = false;

            if self.pressed {
                self.pressed = false;
                ButtonHooks::fire(&mut self.hooks.up, event);
                produced.push(ButtonEvent::Up);
            }
            if do_click {
                self.pressed = false;
                ButtonHooks::fire(&mut self.hooks.click, event);
                produced.push(ButtonEvent::Click);
            }
        }

        if exited {
            ButtonHooks::fire(&mut self.hooks.exit, event);
            produced.push(ButtonEvent::Exit);
        }

        if !produced.is_empty() {
            trace!(events = ?produced, "button produced events");
        }
        produced
    }

    // =========================================================================
    // Drawing
    // =========================================================================

    /// Blit the surface matching the current state onto `target` at the
    /// button's position. No-op while invisible.
    pub fn draw(&self, target: &mut Surface) {
        if !self.visible {
            return;
        }
        let surface = if self.pressed {
            &self.surfaces.pressed
        } else if self.hovered {
            &self.surfaces.highlight
        } else {
            &self.surfaces.normal
        };
        target.blit(surface, self.bounds.origin());
    }

    // =========================================================================
    // Appearance
    // =========================================================================

    /// Switch to image-backed rendering.
    ///
    /// Omitted `pressed`/`highlight` slots default to the normal image.
    /// All three images must share pixel dimensions; on mismatch this
    /// returns [`WidgetError::ImageSizeMismatch`] and the button is left
    /// exactly as it was. On success the bounds keep their position and
    /// take the images' size, and the unscaled images are retained so later
    /// resizes never accumulate filtering loss.
    pub fn set_images(
        &mut self,
        normal: impl Into<ImageSource>,
        pressed: Option<ImageSource>,
        highlight: Option<ImageSource>,
    ) -> WidgetResult<()> {
        let normal = normal.into().load()?;
        let pressed = match pressed {
            Some(source) => source.load()?,
            None => normal.clone(),
        };
        let highlight = match highlight {
            Some(source) => source.load()?,
            None => normal.clone(),
        };

        // Validate before touching any state.
        if pressed.size() != normal.size() {
            return Err(WidgetError::ImageSizeMismatch {
                slot: "pressed",
                expected: normal.size(),
                actual: pressed.size(),
            });
        }
        if highlight.size() != normal.size() {
            return Err(WidgetError::ImageSizeMismatch {
                slot: "highlight",
                expected: normal.size(),
                actual: highlight.size(),
            });
        }

        debug!(
            width = normal.width(),
            height = normal.height(),
            "button switched to image-backed rendering"
        );
        self.bounds = self.bounds.with_size(normal.size());
        let originals = StateSurfaces {
            normal,
            pressed,
            highlight,
        };
        self.surfaces = originals.clone();
        self.mode = Mode::Image { originals };
        Ok(())
    }

    /// Regenerate the three state surfaces from the current configuration.
    ///
    /// Every appearance mutator funnels through here, so the surfaces
    /// always match the bounds exactly.
    fn regenerate(&mut self, fonts: &mut FontSystem) {
        let size = self.bounds.size();
        match &self.mode {
            Mode::Image { originals } => {
                self.surfaces = originals.rescaled(size, IMAGE_FILTER);
            }
            Mode::Text => {
                let local = Rect::from_origin_size(Point::ZERO, size);

                let caption_normal = text::raster_line(
                    fonts,
                    &self.caption,
                    &self.font,
                    self.foreground,
                    self.background,
                );
                let caption_pressed = text::raster_line(
                    fonts,
                    &self.caption,
                    &self.font,
                    self.background,
                    self.foreground,
                );
                let at = Point::new(
                    (size.width / 2) as i32 - (caption_normal.width() / 2) as i32,
                    (size.height / 2) as i32 - (caption_normal.height() / 2) as i32,
                );

                let mut normal = Surface::from_color(size.width, size.height, self.background);
                normal.blit(&caption_normal, at);
                normal.stroke_rect(local, self.background, NORMAL_BORDER);

                let mut pressed = Surface::from_color(size.width, size.height, self.foreground);
                pressed.stroke_rect(local, self.foreground, PRESSED_BORDER);
                pressed.blit(&caption_pressed, at);

                let highlight = normal.clone();
                self.surfaces = StateSurfaces {
                    normal,
                    pressed,
                    highlight,
                };
            }
        }
        trace!(
            width = size.width,
            height = size.height,
            image_backed = self.is_image_backed(),
            "regenerated button surfaces"
        );
    }

    /// Drop image-backed rendering, if active, because a text property is
    /// about to change.
    fn leave_image_mode(&mut self) {
        if matches!(self.mode, Mode::Image { .. }) {
            debug!("button returned to text rendering");
            self.mode = Mode::Text;
        }
    }

    // =========================================================================
    // Properties
    // =========================================================================

    /// Get the button's bounds.
    pub fn rect(&self) -> Rect {
        self.bounds
    }

    /// Set the button's bounds.
    ///
    /// Postcondition: the state surfaces are regenerated at the new size
    /// (image-backed buttons rescale from their retained originals).
    pub fn set_rect(&mut self, fonts: &mut FontSystem, rect: Rect) {
        self.bounds = rect;
        self.regenerate(fonts);
    }

    /// Get the caption text.
    pub fn caption(&self) -> &str {
        &self.caption
    }

    /// Set the caption text.
    ///
    /// Postcondition: the button is text-backed and its surfaces are
    /// regenerated.
    pub fn set_caption(&mut self, fonts: &mut FontSystem, caption: impl Into<String>) {
        self.leave_image_mode();
        self.caption = caption.into();
        self.regenerate(fonts);
    }

    /// Get the background color.
    pub fn background(&self) -> Color {
        self.background
    }

    /// Set the background color.
    ///
    /// Postcondition: the button is text-backed and its surfaces are
    /// regenerated.
    pub fn set_background(&mut self, fonts: &mut FontSystem, color: Color) {
        self.leave_image_mode();
        self.background = color;
        self.regenerate(fonts);
    }

    /// Get the foreground (caption) color.
    pub fn foreground(&self) -> Color {
        self.foreground
    }

    /// Set the foreground (caption) color.
    ///
    /// Postcondition: the button is text-backed and its surfaces are
    /// regenerated.
    pub fn set_foreground(&mut self, fonts: &mut FontSystem, color: Color) {
        self.leave_image_mode();
        self.foreground = color;
        self.regenerate(fonts);
    }

    /// Get the caption font.
    pub fn font(&self) -> &Font {
        &self.font
    }

    /// Set the caption font.
    ///
    /// Postcondition: the button is text-backed and its surfaces are
    /// regenerated.
    pub fn set_font(&mut self, fonts: &mut FontSystem, font: Font) {
        self.leave_image_mode();
        self.font = font;
        self.regenerate(fonts);
    }

    /// Check if the button is visible.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Show or hide the button. Hidden buttons ignore input and are not
    /// drawn. Does not regenerate surfaces.
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Check if a press is currently held on the button.
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Check if the pointer is currently inside the bounds.
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Check if the button renders from caller-supplied images.
    pub fn is_image_backed(&self) -> bool {
        matches!(self.mode, Mode::Image { .. })
    }

    /// Replace the hook set.
    pub fn set_hooks(&mut self, hooks: ButtonHooks) {
        self.hooks = hooks;
    }

    /// Mutable access to the hook set.
    pub fn hooks_mut(&mut self) -> &mut ButtonHooks {
        &mut self.hooks
    }

    /// The surface drawn in the idle state.
    pub fn normal_surface(&self) -> &Surface {
        &self.surfaces.normal
    }

    /// The surface drawn while a press is held.
    pub fn pressed_surface(&self) -> &Surface {
        &self.surfaces.pressed
    }

    /// The surface drawn while hovered.
    pub fn highlight_surface(&self) -> &Surface {
        &self.surfaces.highlight
    }
}

/// Builder for [`Button`].
///
/// Supplying images switches the result to image-backed rendering and makes
/// the caption, color, and font options inert until a text property is set
/// again.
#[derive(Debug)]
pub struct ButtonBuilder {
    rect: Rect,
    caption: String,
    background: Color,
    foreground: Color,
    font: Font,
    images: Option<(ImageSource, Option<ImageSource>, Option<ImageSource>)>,
    hooks: ButtonHooks,
}

impl ButtonBuilder {
    /// Create a builder with the default configuration.
    pub fn new() -> Self {
        Self {
            rect: DEFAULT_RECT,
            caption: String::new(),
            background: Color::LIGHT_GRAY,
            foreground: Color::WHITE,
            font: Font::default(),
            images: None,
            hooks: ButtonHooks::new(),
        }
    }

    /// Set the bounds.
    pub fn rect(mut self, rect: Rect) -> Self {
        self.rect = rect;
        self
    }

    /// Set the caption text.
    pub fn caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = caption.into();
        self
    }

    /// Set the background color.
    pub fn background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    /// Set the foreground (caption) color.
    pub fn foreground(mut self, color: Color) -> Self {
        self.foreground = color;
        self
    }

    /// Set the caption font.
    pub fn font(mut self, font: Font) -> Self {
        self.font = font;
        self
    }

    /// Supply state images, switching the button to image-backed rendering.
    ///
    /// Omitted `pressed`/`highlight` slots default to the normal image.
    pub fn images(
        mut self,
        normal: impl Into<ImageSource>,
        pressed: Option<ImageSource>,
        highlight: Option<ImageSource>,
    ) -> Self {
        self.images = Some((normal.into(), pressed, highlight));
        self
    }

    /// Set the hook set.
    pub fn hooks(mut self, hooks: ButtonHooks) -> Self {
        self.hooks = hooks;
        self
    }

    /// Build the button.
    ///
    /// Fails if a supplied image cannot be loaded or the three images do
    /// not share dimensions; no button exists in that case.
    pub fn build(self, fonts: &mut FontSystem) -> WidgetResult<Button> {
        let mut button = Button {
            background: self.background,
            foreground: self.foreground,
            font: self.font,
            ..Button::bare(self.rect, self.caption, self.hooks)
        };
        match self.images {
            None => button.regenerate(fonts),
            Some((normal, pressed, highlight)) => {
                button.set_images(normal, pressed, highlight)?;
            }
        }
        Ok(button)
    }
}

impl Default for ButtonBuilder {
    fn default() -> Self {
        Self::new()
    }
}

static_assertions::assert_impl_all!(Button: Send);

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::Mutex;

    use umber_render::{FontSystemConfig, Size};

    use super::*;
    use crate::input::Key;

    /// A font system with no faces: caption rasters degrade to empty
    /// surfaces, which keeps these tests independent of host fonts.
    fn fonts() -> FontSystem {
        FontSystem::with_config(FontSystemConfig::new().load_system_fonts(false))
    }

    fn ok_button(fonts: &mut FontSystem) -> Button {
        Button::builder()
            .rect(Rect::new(0, 0, 100, 30))
            .caption("OK")
            .build(fonts)
            .unwrap()
    }

    fn state_surfaces(size: Size) -> (Surface, Surface, Surface) {
        (
            Surface::from_color(size.width, size.height, Color::RED),
            Surface::from_color(size.width, size.height, Color::GREEN),
            Surface::from_color(size.width, size.height, Color::BLUE),
        )
    }

    #[test]
    fn test_pointer_click_scenario() {
        let mut fonts = fonts();
        let mut button = ok_button(&mut fonts);

        assert_eq!(
            button.handle_event(&InputEvent::pointer_moved(50, 15)),
            vec![ButtonEvent::Enter, ButtonEvent::Move]
        );
        assert!(button.is_hovered());

        assert_eq!(
            button.handle_event(&InputEvent::pointer_pressed(50, 15)),
            vec![ButtonEvent::Down]
        );
        assert!(button.is_pressed());

        assert_eq!(
            button.handle_event(&InputEvent::pointer_released(50, 15)),
            vec![ButtonEvent::Up, ButtonEvent::Click]
        );
        assert!(!button.is_pressed());

        assert_eq!(
            button.handle_event(&InputEvent::pointer_moved(200, 200)),
            vec![ButtonEvent::Exit]
        );
        assert!(!button.is_hovered());
    }

    #[test]
    fn test_enter_fires_once() {
        let mut fonts = fonts();
        let mut button = ok_button(&mut fonts);

        assert!(button.handle_event(&InputEvent::pointer_moved(200, 200)).is_empty());
        assert_eq!(
            button.handle_event(&InputEvent::pointer_moved(10, 10)),
            vec![ButtonEvent::Enter, ButtonEvent::Move]
        );
        // Still inside: move only.
        assert_eq!(
            button.handle_event(&InputEvent::pointer_moved(11, 10)),
            vec![ButtonEvent::Move]
        );
    }

    #[test]
    fn test_release_outside_cancels_click_and_reports_up_before_exit() {
        let mut fonts = fonts();
        let mut button = ok_button(&mut fonts);

        button.handle_event(&InputEvent::pointer_moved(50, 15));
        assert_eq!(
            button.handle_event(&InputEvent::pointer_pressed(50, 15)),
            vec![ButtonEvent::Down]
        );
        // Release off the button: the press ends, no click, and the hover
        // exit is reported after the up.
        assert_eq!(
            button.handle_event(&InputEvent::pointer_released(200, 200)),
            vec![ButtonEvent::Up, ButtonEvent::Exit]
        );
        assert!(!button.is_pressed());
        assert!(!button.is_hovered());
    }

    #[test]
    fn test_outside_move_does_not_cancel_pending_click() {
        let mut fonts = fonts();
        let mut button = ok_button(&mut fonts);

        button.handle_event(&InputEvent::pointer_pressed(50, 15));
        // Wandering off the button is not a cancel...
        assert_eq!(
            button.handle_event(&InputEvent::pointer_moved(200, 200)),
            vec![ButtonEvent::Exit]
        );
        // ...so returning and releasing inside still clicks.
        button.handle_event(&InputEvent::pointer_moved(50, 15));
        assert_eq!(
            button.handle_event(&InputEvent::pointer_released(50, 15)),
            vec![ButtonEvent::Up, ButtonEvent::Click]
        );
    }

    #[test]
    fn test_outside_press_disarms_click() {
        let mut fonts = fonts();
        let mut button = ok_button(&mut fonts);

        button.handle_event(&InputEvent::pointer_pressed(50, 15));
        // A second press outside the button disarms the pending click but
        // leaves the held press in place. It also ends the hover.
        assert_eq!(
            button.handle_event(&InputEvent::pointer_pressed(200, 200)),
            vec![ButtonEvent::Exit]
        );
        assert!(button.is_pressed());
        // Releasing back inside re-enters but no longer clicks.
        assert_eq!(
            button.handle_event(&InputEvent::pointer_released(50, 15)),
            vec![ButtonEvent::Enter, ButtonEvent::Up]
        );
        assert!(!button.is_pressed());
    }

    #[test]
    fn test_key_activation_ignores_geometry() {
        let mut fonts = fonts();
        let mut button = ok_button(&mut fonts);

        assert_eq!(
            button.handle_event(&InputEvent::KeyPressed { key: Key::Space }),
            vec![ButtonEvent::Down]
        );
        assert!(button.is_pressed());
        assert!(!button.is_hovered());

        assert_eq!(
            button.handle_event(&InputEvent::KeyReleased { key: Key::Space }),
            vec![ButtonEvent::Up, ButtonEvent::Click]
        );
        assert!(!button.is_pressed());
    }

    #[test]
    fn test_stray_key_release_is_silent() {
        let mut fonts = fonts();
        let mut button = ok_button(&mut fonts);
        assert!(
            button
                .handle_event(&InputEvent::KeyReleased { key: Key::Enter })
                .is_empty()
        );
    }

    #[test]
    fn test_invisible_button_ignores_everything() {
        let mut fonts = fonts();
        let mut button = ok_button(&mut fonts);
        button.set_visible(false);

        for event in [
            InputEvent::pointer_moved(50, 15),
            InputEvent::pointer_pressed(50, 15),
            InputEvent::pointer_released(50, 15),
            InputEvent::KeyPressed { key: Key::Space },
        ] {
            assert!(button.handle_event(&event).is_empty());
        }
        assert!(!button.is_pressed());
        assert!(!button.is_hovered());

        // Not drawn either.
        let mut canvas = Surface::from_color(120, 50, Color::DARK_GRAY);
        let before = canvas.clone();
        button.draw(&mut canvas);
        assert_eq!(canvas, before);
    }

    #[test]
    fn test_scroll_is_ignored() {
        let mut fonts = fonts();
        let mut button = ok_button(&mut fonts);
        assert!(
            button
                .handle_event(&InputEvent::Scroll {
                    delta_x: 0.0,
                    delta_y: -3.0
                })
                .is_empty()
        );
    }

    #[test]
    fn test_hooks_fire_in_event_order() {
        let mut fonts = fonts();
        let log = Arc::new(Mutex::new(Vec::new()));
        let push = |name: &'static str| {
            let log = Arc::clone(&log);
            move |_: &InputEvent| log.lock().unwrap().push(name)
        };
        let hooks = ButtonHooks::new()
            .on_enter(push("enter"))
            .on_move(push("move"))
            .on_down(push("down"))
            .on_up(push("up"))
            .on_click(push("click"))
            .on_exit(push("exit"));
        let mut button = Button::builder()
            .rect(Rect::new(0, 0, 100, 30))
            .hooks(hooks)
            .build(&mut fonts)
            .unwrap();

        button.handle_event(&InputEvent::pointer_moved(50, 15));
        button.handle_event(&InputEvent::pointer_pressed(50, 15));
        button.handle_event(&InputEvent::pointer_released(50, 15));
        button.handle_event(&InputEvent::pointer_moved(200, 200));

        assert_eq!(
            *log.lock().unwrap(),
            vec!["enter", "move", "down", "up", "click", "exit"]
        );
    }

    #[test]
    fn test_text_surfaces_match_bounds_and_colors() {
        let mut fonts = fonts();
        let mut button = Button::builder()
            .rect(Rect::new(5, 5, 40, 20))
            .background(Color::TEAL)
            .foreground(Color::WHITE)
            .build(&mut fonts)
            .unwrap();

        assert_eq!(button.normal_surface().size(), Size::new(40, 20));
        assert_eq!(button.pressed_surface().size(), Size::new(40, 20));
        assert_eq!(button.highlight_surface().size(), Size::new(40, 20));

        // Normal is a background fill (the border matches the fill);
        // pressed is inverted with a foreground border.
        assert_eq!(button.normal_surface().pixel(20, 10), Some(Color::TEAL));
        assert_eq!(button.normal_surface().pixel(0, 0), Some(Color::TEAL));
        assert_eq!(button.pressed_surface().pixel(20, 10), Some(Color::WHITE));
        assert_eq!(button.pressed_surface().pixel(0, 0), Some(Color::WHITE));
        // Highlight renders like normal.
        assert_eq!(button.highlight_surface(), button.normal_surface());

        // Resizing regenerates all three at the new size.
        button.set_rect(&mut fonts, Rect::new(5, 5, 64, 32));
        assert_eq!(button.normal_surface().size(), Size::new(64, 32));
        assert_eq!(button.pressed_surface().size(), Size::new(64, 32));
        assert_eq!(button.highlight_surface().size(), Size::new(64, 32));
    }

    #[test]
    fn test_draw_blits_state_surface_at_bounds() {
        let mut fonts = fonts();
        let (normal, pressed, highlight) = state_surfaces(Size::new(20, 10));
        let mut button = Button::builder()
            .rect(Rect::new(7, 3, 1, 1))
            .images(normal, Some(pressed.into()), Some(highlight.into()))
            .build(&mut fonts)
            .unwrap();

        // Bounds keep their position and take the image size.
        assert_eq!(button.rect(), Rect::new(7, 3, 20, 10));

        let mut canvas = Surface::from_color(60, 40, Color::BLACK);
        button.draw(&mut canvas);
        assert_eq!(canvas.pixel(7, 3), Some(Color::RED));
        assert_eq!(canvas.pixel(6, 3), Some(Color::BLACK));

        // Hovered draws the highlight surface.
        button.handle_event(&InputEvent::pointer_moved(10, 5));
        button.draw(&mut canvas);
        assert_eq!(canvas.pixel(7, 3), Some(Color::BLUE));

        // Held press draws the pressed surface.
        button.handle_event(&InputEvent::pointer_pressed(10, 5));
        button.draw(&mut canvas);
        assert_eq!(canvas.pixel(7, 3), Some(Color::GREEN));
    }

    #[test]
    fn test_set_images_defaults_missing_slots_to_normal() {
        let mut fonts = fonts();
        let mut button = ok_button(&mut fonts);
        let normal = Surface::from_color(8, 8, Color::RED);

        button.set_images(normal.clone(), None, None).unwrap();
        assert!(button.is_image_backed());
        assert_eq!(button.pressed_surface(), &normal);
        assert_eq!(button.highlight_surface(), &normal);
    }

    #[test]
    fn test_mismatched_images_fail_without_mutation() {
        let mut fonts = fonts();
        let mut button = ok_button(&mut fonts);
        let rect_before = button.rect();
        let normal_before = button.normal_surface().clone();

        let err = button
            .set_images(
                Surface::from_color(20, 10, Color::RED),
                Some(Surface::from_color(10, 10, Color::GREEN).into()),
                None,
            )
            .unwrap_err();
        assert!(matches!(
            err,
            WidgetError::ImageSizeMismatch { slot: "pressed", .. }
        ));

        // The failed call left the button exactly as it was.
        assert!(!button.is_image_backed());
        assert_eq!(button.rect(), rect_before);
        assert_eq!(button.normal_surface(), &normal_before);
    }

    #[test]
    fn test_builder_with_mismatched_images_yields_no_button() {
        let mut fonts = fonts();
        let result = Button::builder()
            .images(
                Surface::from_color(4, 4, Color::RED),
                None,
                Some(Surface::from_color(5, 4, Color::BLUE).into()),
            )
            .build(&mut fonts);
        assert!(matches!(
            result,
            Err(WidgetError::ImageSizeMismatch {
                slot: "highlight",
                ..
            })
        ));
    }

    #[test]
    fn test_image_resize_round_trip_is_lossless() {
        let mut fonts = fonts();
        // A non-uniform image so filtering loss would be visible.
        let mut normal = Surface::from_color(16, 8, Color::TEAL);
        normal.set_pixel(3, 3, Color::WHITE);
        normal.set_pixel(12, 5, Color::BLACK);

        let mut button = Button::builder()
            .images(normal.clone(), None, None)
            .build(&mut fonts)
            .unwrap();

        // Several resizes away and back.
        button.set_rect(&mut fonts, Rect::new(0, 0, 8, 4));
        button.set_rect(&mut fonts, Rect::new(0, 0, 31, 17));
        button.set_rect(&mut fonts, Rect::new(0, 0, 16, 8));

        // Pixel-identical to the retained original, not a re-filtered copy.
        assert_eq!(button.normal_surface(), &normal);
    }

    #[test]
    fn test_text_setter_drops_image_mode() {
        let mut fonts = fonts();
        let mut button = ok_button(&mut fonts);
        button
            .set_images(Surface::from_color(12, 6, Color::RED), None, None)
            .unwrap();
        assert!(button.is_image_backed());

        button.set_background(&mut fonts, Color::TEAL);
        assert!(!button.is_image_backed());
        // Surfaces regenerated as text at the current bounds size.
        assert_eq!(button.normal_surface().size(), Size::new(12, 6));
        assert_eq!(button.normal_surface().pixel(6, 3), Some(Color::TEAL));
    }

    #[test]
    fn test_set_images_from_file() {
        let mut fonts = fonts();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("normal.png");
        Surface::from_color(6, 6, Color::GREEN).save(&path).unwrap();

        let mut button = ok_button(&mut fonts);
        button
            .set_images(ImageSource::Path(path), None, None)
            .unwrap();
        assert!(button.is_image_backed());
        assert_eq!(button.rect().size(), Size::new(6, 6));
        assert_eq!(button.normal_surface().pixel(0, 0), Some(Color::GREEN));
    }

    #[test]
    fn test_default_rect_placeholder() {
        let mut fonts = fonts();
        let button = Button::builder().build(&mut fonts).unwrap();
        assert_eq!(button.rect(), Rect::new(0, 0, 30, 60));
        assert!(button.is_visible());
        assert!(!button.is_image_backed());
    }

    #[test]
    fn test_button_event_names() {
        assert_eq!(ButtonEvent::Enter.as_str(), "enter");
        assert_eq!(ButtonEvent::Click.to_string(), "click");
    }
}
