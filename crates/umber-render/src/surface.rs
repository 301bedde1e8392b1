//! CPU raster surfaces.
//!
//! [`Surface`] is an RGBA8 pixel buffer with the small set of operations the
//! widget layer composes its appearance from: solid fills, alpha-over blits,
//! rectangle outlines, interpolated rescaling, and file load/save.

use std::path::Path;

use image::{Rgba, RgbaImage, imageops};
use tracing::debug;

use crate::error::{RenderError, RenderResult};
use crate::types::{Color, Point, Rect, Size};

/// Resampling filter for rescale operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResizeFilter {
    /// Nearest neighbor. Fast but pixelated.
    Nearest,
    /// Bilinear interpolation. Balanced speed and quality.
    #[default]
    Triangle,
    /// Catmull-Rom bicubic interpolation. Good quality.
    CatmullRom,
    /// Lanczos interpolation with window size 3. High quality.
    Lanczos3,
}

impl ResizeFilter {
    fn to_image_filter(self) -> imageops::FilterType {
        match self {
            ResizeFilter::Nearest => imageops::FilterType::Nearest,
            ResizeFilter::Triangle => imageops::FilterType::Triangle,
            ResizeFilter::CatmullRom => imageops::FilterType::CatmullRom,
            ResizeFilter::Lanczos3 => imageops::FilterType::Lanczos3,
        }
    }
}

/// An owned RGBA8 pixel buffer.
///
/// All drawing operations clip to the surface bounds; out-of-range
/// coordinates are never an error.
#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    inner: RgbaImage,
}

impl Surface {
    /// Create a transparent surface of the given size.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            inner: RgbaImage::new(width, height),
        }
    }

    /// Create a surface filled with a solid color.
    pub fn from_color(width: u32, height: u32, color: Color) -> Self {
        Self {
            inner: RgbaImage::from_pixel(width, height, Rgba(color.to_array())),
        }
    }

    /// Load a surface from an image file.
    ///
    /// The format is detected from the file contents; pixels are converted
    /// to RGBA8.
    pub fn from_file(path: impl AsRef<Path>) -> RenderResult<Self> {
        let path = path.as_ref();
        let img = image::open(path)
            .map_err(|e| RenderError::ImageLoad(format!("{}: {e}", path.display())))?;
        let surface = Self {
            inner: img.to_rgba8(),
        };
        debug!(
            path = %path.display(),
            width = surface.width(),
            height = surface.height(),
            "loaded surface from file"
        );
        Ok(surface)
    }

    /// Wrap an existing RGBA8 buffer.
    pub fn from_image(image: RgbaImage) -> Self {
        Self { inner: image }
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width()
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height()
    }

    /// Size in pixels.
    #[inline]
    pub fn size(&self) -> Size {
        Size::new(self.inner.width(), self.inner.height())
    }

    /// Check if the surface has zero area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size().is_empty()
    }

    /// Read a pixel, or `None` if the coordinates are out of range.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x < self.width() && y < self.height() {
            Some(Color::from(self.inner.get_pixel(x, y).0))
        } else {
            None
        }
    }

    /// Write a pixel. Out-of-range coordinates are ignored.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Color) {
        if x < self.width() && y < self.height() {
            self.inner.put_pixel(x, y, Rgba(color.to_array()));
        }
    }

    /// Composite a single pixel with alpha-over blending.
    /// Out-of-range coordinates are ignored.
    pub fn blend_pixel(&mut self, x: u32, y: u32, color: Color) {
        if x >= self.width() || y >= self.height() {
            return;
        }
        let sa = color.a as u32;
        if sa == 0 {
            return;
        }
        if sa == 255 {
            self.inner.put_pixel(x, y, Rgba(color.to_array()));
            return;
        }
        let dst = Color::from(self.inner.get_pixel(x, y).0);
        let da = dst.a as u32;
        let out_a = sa + da * (255 - sa) / 255;
        let blend = |s: u8, d: u8| -> u8 {
            let s = s as u32;
            let d = d as u32;
            ((s * sa + d * da * (255 - sa) / 255) / out_a) as u8
        };
        let out = Color::rgba(
            blend(color.r, dst.r),
            blend(color.g, dst.g),
            blend(color.b, dst.b),
            out_a as u8,
        );
        self.inner.put_pixel(x, y, Rgba(out.to_array()));
    }

    /// Fill the whole surface with a solid color.
    pub fn fill(&mut self, color: Color) {
        let px = Rgba(color.to_array());
        for pixel in self.inner.pixels_mut() {
            *pixel = px;
        }
    }

    /// Fill a rectangle with a solid color (replacing, not blending),
    /// clipped to the surface.
    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        let Some(clipped) = rect.intersect(&Rect::new(0, 0, self.width(), self.height())) else {
            return;
        };
        let px = Rgba(color.to_array());
        for y in clipped.top()..clipped.bottom() {
            for x in clipped.left()..clipped.right() {
                self.inner.put_pixel(x as u32, y as u32, px);
            }
        }
    }

    /// Draw a rectangle outline of the given thickness, clipped to the
    /// surface. The outline grows inward from the rectangle's edges.
    pub fn stroke_rect(&mut self, rect: Rect, color: Color, thickness: u32) {
        if rect.is_empty() || thickness == 0 {
            return;
        }
        let t = thickness.min(rect.width).min(rect.height);
        // Top, bottom, left, right bands.
        self.fill_rect(Rect::new(rect.x, rect.y, rect.width, t), color);
        self.fill_rect(
            Rect::new(rect.x, rect.bottom() - t as i32, rect.width, t),
            color,
        );
        self.fill_rect(Rect::new(rect.x, rect.y, t, rect.height), color);
        self.fill_rect(
            Rect::new(rect.right() - t as i32, rect.y, t, rect.height),
            color,
        );
    }

    /// Composite another surface onto this one with alpha-over blending,
    /// placing its top-left corner at `at`. Clipped to this surface.
    pub fn blit(&mut self, src: &Surface, at: Point) {
        imageops::overlay(&mut self.inner, &src.inner, at.x as i64, at.y as i64);
    }

    /// Return a copy rescaled to the given size with the given filter.
    ///
    /// Rescaling to the current size returns a pixel-identical copy without
    /// resampling, so repeated round trips through the same size never
    /// accumulate filtering artifacts.
    pub fn rescaled(&self, size: Size, filter: ResizeFilter) -> Surface {
        if size == self.size() {
            return self.clone();
        }
        if size.is_empty() {
            return Surface::new(size.width, size.height);
        }
        debug!(
            from_width = self.width(),
            from_height = self.height(),
            to_width = size.width,
            to_height = size.height,
            ?filter,
            "rescaling surface"
        );
        Surface {
            inner: imageops::resize(
                &self.inner,
                size.width,
                size.height,
                filter.to_image_filter(),
            ),
        }
    }

    /// Save the surface to a file. The format is chosen from the extension.
    pub fn save(&self, path: impl AsRef<Path>) -> RenderResult<()> {
        let path = path.as_ref();
        self.inner
            .save(path)
            .map_err(|e| RenderError::ImageSave(format!("{}: {e}", path.display())))
    }

    /// Access the underlying RGBA8 buffer.
    pub fn as_image(&self) -> &RgbaImage {
        &self.inner
    }

    /// Consume the surface, returning the underlying RGBA8 buffer.
    pub fn into_image(self) -> RgbaImage {
        self.inner
    }
}
