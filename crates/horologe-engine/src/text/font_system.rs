use std::collections::HashMap;
use std::fmt;

use crate::coords::Vec2;

/// Error returned by [`FontSystem::load_font`].
#[derive(Debug, Clone)]
pub struct FontLoadError(pub String);

impl fmt::Display for FontLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "font load error: {}", self.0)
    }
}

impl std::error::Error for FontLoadError {}

/// Opaque handle to a font loaded into a [`FontSystem`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct FontId(pub(crate) usize);

/// Owns loaded fonts and the family names they are registered under.
///
/// Family lookup is case-insensitive. When a requested family is not
/// registered, the first loaded font stands in for it, so a single loaded
/// font is enough to render every text command.
pub struct FontSystem {
    fonts: Vec<fontdue::Font>,
    families: HashMap<String, FontId>,
}

impl FontSystem {
    pub fn new() -> Self {
        Self { fonts: Vec::new(), families: HashMap::new() }
    }

    /// Parses a TrueType or OpenType font and registers it under `family`.
    ///
    /// Registering a family twice replaces the earlier mapping.
    pub fn load_font(&mut self, family: &str, bytes: &[u8]) -> Result<FontId, FontLoadError> {
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| FontLoadError(format!("{family}: {e}")))?;
        let id = FontId(self.fonts.len());
        self.fonts.push(font);
        self.families.insert(family.trim().to_ascii_lowercase(), id);
        log::debug!("font family {family:?} registered as {id:?}");
        Ok(id)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }

    /// Resolves a family name to a loaded font, falling back to the first
    /// loaded font. Returns `None` only when no font is loaded.
    pub fn resolve(&self, family: &str) -> Option<&fontdue::Font> {
        let key = family.trim().to_ascii_lowercase();
        match self.families.get(&key) {
            Some(id) => self.fonts.get(id.0),
            None => self.fonts.first(),
        }
    }

    /// Computes the advance width and line height of a single-line string.
    ///
    /// Returns `(width, height)` in pixels; an unresolvable family measures
    /// as zero width.
    #[must_use]
    pub fn measure_text(&self, text: &str, family: &str, size: f32) -> Vec2 {
        use fontdue::layout::{CoordinateSystem, Layout, LayoutSettings, TextStyle};

        let Some(font) = self.resolve(family) else {
            return Vec2::new(0.0, size * 1.2);
        };

        let mut layout: Layout<()> = Layout::new(CoordinateSystem::PositiveYDown);
        layout.reset(&LayoutSettings::default());
        layout.append(&[font], &TextStyle::new(text, size, 0));

        let glyphs = layout.glyphs();
        if glyphs.is_empty() {
            return Vec2::new(0.0, size * 1.2);
        }

        // Pen position after each glyph rather than its bitmap edge, so
        // trailing advances (e.g. the gap after `:`) count toward the width.
        let w = glyphs.iter().map(|g| {
            let m = font.metrics_indexed(g.key.glyph_index, size);
            (g.x - m.xmin as f32 + m.advance_width).max(0.0)
        }).fold(0.0f32, f32::max);
        let h = glyphs.iter().map(|g| g.y + g.height as f32).fold(size, f32::max);
        Vec2::new(w, h)
    }
}

impl Default for FontSystem {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_system_resolves_nothing() {
        let fonts = FontSystem::new();
        assert!(fonts.is_empty());
        assert!(fonts.resolve("Arial").is_none());
        assert_eq!(fonts.measure_text("12", "Arial", 10.0).x, 0.0);
    }

    #[test]
    fn garbage_bytes_fail_to_load() {
        let mut fonts = FontSystem::new();
        let err = fonts.load_font("Arial", b"not a font").unwrap_err();
        assert!(err.to_string().contains("Arial"));
        assert!(fonts.is_empty());
    }
}
