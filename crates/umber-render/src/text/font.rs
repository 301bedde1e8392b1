//! Font selection descriptor.
//!
//! [`Font`] describes which face to use and at what size; the actual face
//! resolution happens inside [`FontSystem`](super::FontSystem) when text is
//! shaped.

/// A font family selector.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FontFamily {
    /// A specific family by name (e.g. "Inter").
    Named(String),
    /// The generic sans-serif family.
    #[default]
    SansSerif,
    /// The generic serif family.
    Serif,
    /// The generic monospace family.
    Monospace,
}

impl FontFamily {
    fn to_cosmic(&self) -> cosmic_text::Family<'_> {
        match self {
            FontFamily::Named(name) => cosmic_text::Family::Name(name.as_str()),
            FontFamily::SansSerif => cosmic_text::Family::SansSerif,
            FontFamily::Serif => cosmic_text::Family::Serif,
            FontFamily::Monospace => cosmic_text::Family::Monospace,
        }
    }
}

/// A font descriptor: family plus pixel size.
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    family: FontFamily,
    size: f32,
}

impl Font {
    /// The default font size in pixels.
    pub const DEFAULT_SIZE: f32 = 14.0;

    /// Create a new font descriptor.
    pub fn new(family: FontFamily, size: f32) -> Self {
        Self { family, size }
    }

    /// Get the font family.
    pub fn family(&self) -> &FontFamily {
        &self.family
    }

    /// Get the font size in pixels.
    pub fn size(&self) -> f32 {
        self.size
    }

    /// The same font at a different size.
    pub fn with_size(&self, size: f32) -> Self {
        Self {
            family: self.family.clone(),
            size,
        }
    }

    /// The same size with a different family.
    pub fn with_family(&self, family: FontFamily) -> Self {
        Self {
            family,
            size: self.size,
        }
    }

    /// Convert to cosmic-text attributes for shaping.
    pub fn to_attrs(&self) -> cosmic_text::Attrs<'_> {
        cosmic_text::Attrs::new().family(self.family.to_cosmic())
    }
}

impl Default for Font {
    fn default() -> Self {
        Self {
            family: FontFamily::SansSerif,
            size: Self::DEFAULT_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_defaults() {
        let font = Font::default();
        assert_eq!(*font.family(), FontFamily::SansSerif);
        assert_eq!(font.size(), Font::DEFAULT_SIZE);
    }

    #[test]
    fn test_font_with_size_and_family() {
        let font = Font::default().with_size(22.0);
        assert_eq!(font.size(), 22.0);

        let named = font.with_family(FontFamily::Named("Inter".into()));
        assert_eq!(*named.family(), FontFamily::Named("Inter".into()));
        assert_eq!(named.size(), 22.0);
    }
}
