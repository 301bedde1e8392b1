//! Font system management and font database access.

use std::path::Path;

use cosmic_text::SwashCache;
use tracing::debug;

use crate::error::{RenderError, RenderResult};

/// Configuration for initializing the font system.
#[derive(Debug, Clone)]
pub struct FontSystemConfig {
    /// Whether to load system fonts on initialization.
    pub load_system_fonts: bool,
    /// Locale string for text shaping (e.g. "en-US").
    pub locale: String,
}

impl Default for FontSystemConfig {
    fn default() -> Self {
        Self {
            load_system_fonts: true,
            locale: sys_locale::get_locale().unwrap_or_else(|| "en-US".to_string()),
        }
    }
}

impl FontSystemConfig {
    /// Create a new configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether to load system fonts on initialization.
    pub fn load_system_fonts(mut self, load: bool) -> Self {
        self.load_system_fonts = load;
        self
    }

    /// Set the locale for text shaping.
    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }
}

/// The font system manages font loading, matching, and glyph rasterization.
///
/// It wraps cosmic-text's font system together with the swash rasterization
/// cache. Not `Sync`; single-threaded UI usage is assumed, use one per
/// thread otherwise.
pub struct FontSystem {
    pub(crate) inner: cosmic_text::FontSystem,
    pub(crate) swash: SwashCache,
}

impl FontSystem {
    /// Create a font system with system fonts loaded.
    pub fn new() -> Self {
        Self::with_config(FontSystemConfig::default())
    }

    /// Create a font system with explicit configuration.
    pub fn with_config(config: FontSystemConfig) -> Self {
        let mut db = fontdb::Database::new();
        if config.load_system_fonts {
            db.load_system_fonts();
        }
        let inner = cosmic_text::FontSystem::new_with_locale_and_db(config.locale, db);
        debug!(faces = inner.db().len(), "font system initialized");
        Self {
            inner,
            swash: SwashCache::new(),
        }
    }

    /// Load a font file from disk and register its faces.
    pub fn load_font_file(&mut self, path: impl AsRef<Path>) -> RenderResult<()> {
        let path = path.as_ref();
        self.inner
            .db_mut()
            .load_font_file(path)
            .map_err(|e| RenderError::FontLoad(format!("{}: {e}", path.display())))?;
        debug!(path = %path.display(), "loaded font file");
        Ok(())
    }

    /// Load raw font data (TTF/OTF/TTC/OTC contents) from memory.
    pub fn load_font_data(&mut self, data: Vec<u8>) {
        self.inner.db_mut().load_font_data(data);
    }

    /// Check whether a font family is available by name.
    pub fn has_family(&self, family: &str) -> bool {
        self.inner
            .db()
            .faces()
            .any(|face| face.families.iter().any(|(name, _)| name == family))
    }

    /// Number of font faces in the database.
    pub fn face_count(&self) -> usize {
        self.inner.db().len()
    }

    /// Access the wrapped cosmic-text font system.
    pub fn inner(&self) -> &cosmic_text::FontSystem {
        &self.inner
    }

    /// Mutable access to the wrapped cosmic-text font system.
    pub fn inner_mut(&mut self) -> &mut cosmic_text::FontSystem {
        &mut self.inner
    }
}

impl Default for FontSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FontSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontSystem")
            .field("faces", &self.face_count())
            .finish_non_exhaustive()
    }
}
