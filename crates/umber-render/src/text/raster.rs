//! Single-line caption measurement and rasterization.
//!
//! These are the two text capabilities the widget layer needs: query the
//! bounding box of a caption, and render it as an opaque
//! foreground-on-background bitmap ready for centering onto a widget
//! surface.

use cosmic_text::{Buffer, Metrics, Shaping};

use super::font::Font;
use super::font_system::FontSystem;
use crate::surface::Surface;
use crate::types::{Color, Size};

/// Line height as a multiple of the font size.
const LINE_HEIGHT_FACTOR: f32 = 1.2;

/// Measure the pixel bounding box of a single line of text.
pub fn measure_line(fonts: &mut FontSystem, text: &str, font: &Font) -> Size {
    let buffer = shape(fonts, text, font);
    measure_buffer(&buffer)
}

/// Render a single line of text onto an opaque background.
///
/// The returned surface is exactly the measured bounding box, filled with
/// `bg`, with glyphs alpha-blended in `fg`. Empty or unshapable text yields
/// an empty surface.
pub fn raster_line(
    fonts: &mut FontSystem,
    text: &str,
    font: &Font,
    fg: Color,
    bg: Color,
) -> Surface {
    let buffer = shape(fonts, text, font);
    let size = measure_buffer(&buffer);
    let mut surface = Surface::from_color(size.width, size.height, bg);
    if size.is_empty() {
        return surface;
    }

    let draw_color = cosmic_text::Color::rgba(fg.r, fg.g, fg.b, fg.a);
    buffer.draw(
        &mut fonts.inner,
        &mut fonts.swash,
        draw_color,
        |x, y, w, h, color| {
            let a = color.a();
            if a == 0 {
                return;
            }
            let px = Color::rgba(color.r(), color.g(), color.b(), a);
            for dy in 0..h {
                for dx in 0..w {
                    let cx = x + dx as i32;
                    let cy = y + dy as i32;
                    if cx >= 0 && cy >= 0 {
                        surface.blend_pixel(cx as u32, cy as u32, px);
                    }
                }
            }
        },
    );
    surface
}

fn shape(fonts: &mut FontSystem, text: &str, font: &Font) -> Buffer {
    let metrics = Metrics::new(font.size(), font.size() * LINE_HEIGHT_FACTOR);
    let mut buffer = Buffer::new(&mut fonts.inner, metrics);
    // Unconstrained: captions are a single line, never wrapped.
    buffer.set_size(&mut fonts.inner, None, None);
    buffer.set_text(&mut fonts.inner, text, font.to_attrs(), Shaping::Advanced);
    buffer.shape_until_scroll(&mut fonts.inner, false);
    buffer
}

fn measure_buffer(buffer: &Buffer) -> Size {
    let mut width = 0f32;
    let mut height = 0f32;
    for run in buffer.layout_runs() {
        width = width.max(run.line_w);
        height = height.max(run.line_top + run.line_height);
    }
    Size::new(width.ceil() as u32, height.ceil() as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::font_system::FontSystemConfig;

    fn empty_fonts() -> FontSystem {
        FontSystem::with_config(FontSystemConfig::new().load_system_fonts(false))
    }

    #[test]
    fn test_empty_text_measures_zero_width() {
        let mut fonts = empty_fonts();
        let size = measure_line(&mut fonts, "", &Font::default());
        assert_eq!(size.width, 0);
    }

    #[test]
    fn test_raster_without_fonts_is_empty() {
        // With no faces in the database nothing can shape, and the raster
        // degrades to an empty surface rather than an error.
        let mut fonts = empty_fonts();
        let surface = raster_line(
            &mut fonts,
            "OK",
            &Font::default(),
            Color::WHITE,
            Color::BLACK,
        );
        assert_eq!(surface.width(), 0);
    }
}
