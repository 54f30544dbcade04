use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use horologe_engine::render::save_png;
use horologe_engine::text::FontSystem;
use horologe_face::{Surface, SurfaceDocument};

use crate::cli::FontArg;

/// Loads every `--font` into a fresh font system.
pub fn load_fonts(args: &[FontArg]) -> Result<FontSystem> {
    let mut fonts = FontSystem::new();
    for arg in args {
        let bytes = fs::read(&arg.path).with_context(|| format!("reading font {}", arg.path.display()))?;
        fonts
            .load_font(&arg.family, &bytes)
            .with_context(|| format!("loading font {} for family {}", arg.path.display(), arg.family))?;
        log::debug!("font family {} <- {}", arg.family, arg.path.display());
    }
    if fonts.is_empty() {
        log::info!("no --font given; numerals and digital faces will render without text");
    }
    Ok(fonts)
}

/// Writes one PNG per marked surface into `dir`. With a `frame` number the
/// file names carry it as a suffix (`lobby-003.png`).
pub fn export_marked(
    doc: &SurfaceDocument,
    marker: &str,
    fonts: &FontSystem,
    dir: &Path,
    frame: Option<u32>,
) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;

    let mut written = Vec::new();
    for (index, surface) in doc.by_class(marker).enumerate() {
        let stem = file_stem(surface, index + 1);
        let name = match frame {
            Some(n) => format!("{stem}-{n:03}.png"),
            None => format!("{stem}.png"),
        };
        let path = dir.join(name);
        save_png(surface.canvas().draw_list(), surface.width(), surface.height(), fonts, &path)
            .with_context(|| format!("writing {}", path.display()))?;
        log::debug!("wrote {}", path.display());
        written.push(path);
    }
    Ok(written)
}

/// The surface id made filesystem-safe, or `surface-<n>` for anonymous surfaces.
fn file_stem(surface: &Surface, ordinal: usize) -> String {
    match surface.id() {
        Some(id) if !id.is_empty() => id
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect(),
        _ => format!("surface-{ordinal}"),
    }
}
