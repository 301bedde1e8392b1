//! Basic geometry and color types for CPU rasterization.
//!
//! Surfaces are pixel buffers, so geometry here is integral: positions are
//! `i32` (a point may sit off-surface, e.g. a pointer outside a widget) and
//! extents are `u32`.

/// A point in 2D pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Create a new point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The origin point (0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Translate by the given deltas.
    #[inline]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl From<[i32; 2]> for Point {
    fn from([x, y]: [i32; 2]) -> Self {
        Self { x, y }
    }
}

/// A size in pixels (width and height).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    /// Create a new size.
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Zero size.
    pub const ZERO: Self = Self {
        width: 0,
        height: 0,
    };

    /// Check if the size has zero area.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Total number of pixels.
    #[inline]
    pub const fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }
}

impl From<(u32, u32)> for Size {
    fn from((width, height): (u32, u32)) -> Self {
        Self { width, height }
    }
}

/// A rectangle defined by its top-left corner and size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    /// Create a new rectangle from position and size.
    #[inline]
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle from an origin point and a size.
    #[inline]
    pub const fn from_origin_size(origin: Point, size: Size) -> Self {
        Self {
            x: origin.x,
            y: origin.y,
            width: size.width,
            height: size.height,
        }
    }

    /// Empty rectangle at the origin.
    pub const ZERO: Self = Self {
        x: 0,
        y: 0,
        width: 0,
        height: 0,
    };

    /// Left edge x coordinate.
    #[inline]
    pub const fn left(&self) -> i32 {
        self.x
    }

    /// Top edge y coordinate.
    #[inline]
    pub const fn top(&self) -> i32 {
        self.y
    }

    /// Right edge x coordinate (exclusive).
    #[inline]
    pub const fn right(&self) -> i32 {
        self.x + self.width as i32
    }

    /// Bottom edge y coordinate (exclusive).
    #[inline]
    pub const fn bottom(&self) -> i32 {
        self.y + self.height as i32
    }

    /// Top-left corner.
    #[inline]
    pub const fn origin(&self) -> Point {
        Point {
            x: self.x,
            y: self.y,
        }
    }

    /// Size of the rectangle.
    #[inline]
    pub const fn size(&self) -> Size {
        Size {
            width: self.width,
            height: self.height,
        }
    }

    /// Center point of the rectangle.
    #[inline]
    pub const fn center(&self) -> Point {
        Point {
            x: self.x + (self.width / 2) as i32,
            y: self.y + (self.height / 2) as i32,
        }
    }

    /// Check if the rectangle has zero area.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.size().is_empty()
    }

    /// Check if a point is inside the rectangle.
    ///
    /// Left and top edges are inclusive, right and bottom exclusive.
    #[inline]
    pub const fn contains(&self, point: Point) -> bool {
        point.x >= self.left()
            && point.x < self.right()
            && point.y >= self.top()
            && point.y < self.bottom()
    }

    /// Compute the intersection of two rectangles.
    pub fn intersect(&self, other: &Rect) -> Option<Rect> {
        let left = self.left().max(other.left());
        let top = self.top().max(other.top());
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        if left < right && top < bottom {
            Some(Rect::new(
                left,
                top,
                (right - left) as u32,
                (bottom - top) as u32,
            ))
        } else {
            None
        }
    }

    /// Compute the union (bounding box) of two rectangles.
    pub fn union(&self, other: &Rect) -> Rect {
        let left = self.left().min(other.left());
        let top = self.top().min(other.top());
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        Rect::new(left, top, (right - left) as u32, (bottom - top) as u32)
    }

    /// Translate the rectangle by the given deltas.
    #[inline]
    pub const fn offset(&self, dx: i32, dy: i32) -> Rect {
        Rect {
            x: self.x + dx,
            y: self.y + dy,
            width: self.width,
            height: self.height,
        }
    }

    /// The same rectangle with a different size.
    #[inline]
    pub const fn with_size(&self, size: Size) -> Rect {
        Rect {
            x: self.x,
            y: self.y,
            width: size.width,
            height: size.height,
        }
    }
}

impl From<(i32, i32, u32, u32)> for Rect {
    fn from((x, y, width, height): (i32, i32, u32, u32)) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// A non-premultiplied RGBA color with 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Create an opaque color from RGB components.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a color from RGBA components.
    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a color from a hex string (e.g. "#FF0000" or "#FF0000FF").
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        let len = hex.len();

        if len != 6 && len != 8 {
            return None;
        }

        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        let a = if len == 8 {
            u8::from_str_radix(&hex[6..8], 16).ok()?
        } else {
            255
        };

        Some(Self { r, g, b, a })
    }

    /// Return the same color with a different alpha.
    #[inline]
    pub const fn with_alpha(self, alpha: u8) -> Self {
        Self { a: alpha, ..self }
    }

    /// Linear interpolation between two colors.
    pub fn lerp(self, other: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Self {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
            a: mix(self.a, other.a),
        }
    }

    /// Convert to an `[r, g, b, a]` array.
    #[inline]
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    // Common colors
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const RED: Self = Self::rgb(255, 0, 0);
    pub const GREEN: Self = Self::rgb(0, 255, 0);
    pub const BLUE: Self = Self::rgb(0, 0, 255);
    pub const GRAY: Self = Self::rgb(128, 128, 128);
    pub const DARK_GRAY: Self = Self::rgb(64, 64, 64);
    pub const LIGHT_GRAY: Self = Self::rgb(212, 208, 200);
    pub const TEAL: Self = Self::rgb(58, 138, 112);
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::rgb(r, g, b)
    }
}

impl From<[u8; 4]> for Color {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self { r, g, b, a }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_creation() {
        let p = Point::new(1, 2);
        assert_eq!(p.x, 1);
        assert_eq!(p.y, 2);

        let p2: Point = (3, 4).into();
        assert_eq!(p2, Point::new(3, 4));
        assert_eq!(p2.offset(-3, -4), Point::ZERO);
    }

    #[test]
    fn test_rect_geometry() {
        let r = Rect::new(10, 20, 100, 50);
        assert_eq!(r.left(), 10);
        assert_eq!(r.top(), 20);
        assert_eq!(r.right(), 110);
        assert_eq!(r.bottom(), 70);
        assert_eq!(r.size(), Size::new(100, 50));
        assert_eq!(r.center(), Point::new(60, 45));
        assert_eq!(r.origin(), Point::new(10, 20));
    }

    #[test]
    fn test_rect_contains() {
        let r = Rect::new(0, 0, 100, 100);
        assert!(r.contains(Point::new(50, 50)));
        assert!(r.contains(Point::new(0, 0)));
        assert!(r.contains(Point::new(99, 99)));
        // Right/bottom edge is exclusive
        assert!(!r.contains(Point::new(100, 100)));
        assert!(!r.contains(Point::new(-1, 50)));
    }

    #[test]
    fn test_rect_intersect_union() {
        let r1 = Rect::new(0, 0, 100, 100);
        let r2 = Rect::new(50, 50, 100, 100);

        assert_eq!(r1.intersect(&r2), Some(Rect::new(50, 50, 50, 50)));
        assert_eq!(r1.union(&r2), Rect::new(0, 0, 150, 150));

        let r3 = Rect::new(200, 200, 50, 50);
        assert!(r1.intersect(&r3).is_none());
    }

    #[test]
    fn test_size_empty() {
        assert!(Size::ZERO.is_empty());
        assert!(Size::new(0, 10).is_empty());
        assert!(!Size::new(1, 1).is_empty());
        assert_eq!(Size::new(4, 3).area(), 12);
    }

    #[test]
    fn test_color_from_hex() {
        let c = Color::from_hex("#FF0000").unwrap();
        assert_eq!(c, Color::RED);

        let c2 = Color::from_hex("00FF0080").unwrap();
        assert_eq!(c2, Color::rgba(0, 255, 0, 128));

        assert!(Color::from_hex("#12345").is_none());
        assert!(Color::from_hex("#GGGGGG").is_none());
    }

    #[test]
    fn test_color_lerp() {
        let gray = Color::BLACK.lerp(Color::WHITE, 0.5);
        assert_eq!(gray, Color::rgb(128, 128, 128));

        assert_eq!(Color::RED.lerp(Color::BLUE, 0.0), Color::RED);
        assert_eq!(Color::RED.lerp(Color::BLUE, 1.0), Color::BLUE);
    }
}
