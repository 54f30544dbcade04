use std::fmt;
use std::path::Path as FsPath;

use fontdue::layout::{CoordinateSystem, Layout, LayoutSettings, TextStyle};
use tiny_skia as sk;

use crate::coords::{Rect, Vec2};
use crate::paint::{Color, Paint};
use crate::scene::shapes::{TextAlign, TextCmd, TextMode};
use crate::scene::{ArcSeg, DrawCmd, DrawList, Path, PathEl, Stroke};
use crate::text::FontSystem;

/// Angle step used to flatten partial arcs.
const ARC_STEP: f32 = core::f32::consts::PI / 48.0;

/// Error returned by [`rasterize`] and [`save_png`].
#[derive(Debug, Clone, PartialEq)]
pub enum RasterError {
    /// The pixmap could not be allocated for this size (zero or too large).
    InvalidSize { width: u32, height: u32 },
    /// PNG encoding or writing failed.
    Encode(String),
}

impl fmt::Display for RasterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RasterError::InvalidSize { width, height } => {
                write!(f, "cannot allocate a {width}x{height} pixmap")
            }
            RasterError::Encode(msg) => write!(f, "png encode error: {msg}"),
        }
    }
}

impl std::error::Error for RasterError {}

/// Rasterizes a recorded frame onto a transparent pixmap.
///
/// Text commands need a font in `fonts`; without one they are skipped.
pub fn rasterize(
    list: &DrawList,
    width: u32,
    height: u32,
    fonts: &FontSystem,
) -> Result<sk::Pixmap, RasterError> {
    let mut pixmap = sk::Pixmap::new(width, height).ok_or(RasterError::InvalidSize { width, height })?;

    for cmd in list.items() {
        match cmd {
            DrawCmd::FillRect(c) => fill_rect(&mut pixmap, c.rect, &c.paint),
            DrawCmd::StrokeRect(c) => {
                if let Some(rect) = to_sk_rect(c.rect) {
                    stroke_path(&mut pixmap, &sk::PathBuilder::from_rect(rect), c.stroke);
                }
            }
            DrawCmd::FillPath(c) => {
                if let Some(path) = build_path(&c.path) {
                    let paint = to_sk_paint(&c.paint);
                    pixmap.fill_path(&path, &paint, sk::FillRule::Winding, sk::Transform::identity(), None);
                }
            }
            DrawCmd::StrokePath(c) => {
                if let Some(path) = build_path(&c.path) {
                    stroke_path(&mut pixmap, &path, c.stroke);
                }
            }
            DrawCmd::Text(c) => draw_text(&mut pixmap, c, fonts),
        }
    }

    Ok(pixmap)
}

/// Rasterizes `list` and writes it to `path` as PNG.
pub fn save_png(
    list: &DrawList,
    width: u32,
    height: u32,
    fonts: &FontSystem,
    path: impl AsRef<FsPath>,
) -> Result<(), RasterError> {
    let pixmap = rasterize(list, width, height, fonts)?;
    pixmap.save_png(path).map_err(|e| RasterError::Encode(e.to_string()))
}

// ── conversions ───────────────────────────────────────────────────────────

fn to_sk_color(c: Color) -> sk::Color {
    let (r, g, b, a) = c.to_straight();
    sk::Color::from_rgba(r, g, b, a).unwrap_or(sk::Color::TRANSPARENT)
}

fn to_sk_rect(r: Rect) -> Option<sk::Rect> {
    if r.is_empty() || !r.is_finite() {
        return None;
    }
    sk::Rect::from_xywh(r.origin.x, r.origin.y, r.size.x, r.size.y)
}

fn to_sk_point(v: Vec2) -> sk::Point {
    sk::Point::from_xy(v.x, v.y)
}

fn to_sk_paint(paint: &Paint) -> sk::Paint<'static> {
    let mut out = sk::Paint::default();
    out.anti_alias = true;
    match paint {
        Paint::Solid(c) => out.set_color(to_sk_color(*c)),
        Paint::LinearGradient(g) if g.is_valid() => {
            let stops = g.stops
                .iter()
                .map(|s| sk::GradientStop::new(s.t, to_sk_color(s.color)))
                .collect();
            match sk::LinearGradient::new(
                to_sk_point(g.start),
                to_sk_point(g.end),
                stops,
                sk::SpreadMode::Pad,
                sk::Transform::identity(),
            ) {
                Some(shader) => out.shader = shader,
                None => out.set_color(to_sk_color(paint.dominant_color())),
            }
        }
        Paint::LinearGradient(_) => out.set_color(to_sk_color(paint.dominant_color())),
    }
    out
}

// ── geometry ──────────────────────────────────────────────────────────────

fn fill_rect(pixmap: &mut sk::Pixmap, rect: Rect, paint: &Paint) {
    if let Some(rect) = to_sk_rect(rect) {
        pixmap.fill_rect(rect, &to_sk_paint(paint), sk::Transform::identity(), None);
    }
}

fn stroke_path(pixmap: &mut sk::Pixmap, path: &sk::Path, stroke: Stroke) {
    if stroke.width.is_nan() || stroke.width <= 0.0 {
        return;
    }
    let paint = to_sk_paint(&Paint::Solid(stroke.color));
    let sk_stroke = sk::Stroke { width: stroke.width, ..sk::Stroke::default() };
    pixmap.stroke_path(path, &paint, &sk_stroke, sk::Transform::identity(), None);
}

fn build_path(path: &Path) -> Option<sk::Path> {
    let mut pb = sk::PathBuilder::new();
    let mut has_current = false;
    for el in path.elements() {
        match *el {
            PathEl::MoveTo(p) => {
                pb.move_to(p.x, p.y);
                has_current = true;
            }
            PathEl::LineTo(p) => {
                if has_current {
                    pb.line_to(p.x, p.y);
                } else {
                    pb.move_to(p.x, p.y);
                    has_current = true;
                }
            }
            PathEl::Arc(arc) => push_arc(&mut pb, &arc, &mut has_current),
        }
    }
    pb.finish()
}

fn push_arc(pb: &mut sk::PathBuilder, arc: &ArcSeg, has_current: &mut bool) {
    if arc.is_full() {
        let oval = sk::Rect::from_xywh(
            arc.center.x - arc.radii.x,
            arc.center.y - arc.radii.y,
            arc.radii.x * 2.0,
            arc.radii.y * 2.0,
        );
        if let Some(oval) = oval {
            pb.push_oval(oval);
            *has_current = false;
            return;
        }
    }

    let sweep = arc.sweep();
    let steps = ((sweep.abs() / ARC_STEP).ceil() as usize).max(1);
    let start = arc.start_point();
    if *has_current {
        pb.line_to(start.x, start.y);
    } else {
        pb.move_to(start.x, start.y);
        *has_current = true;
    }
    for i in 1..=steps {
        let angle = arc.start + sweep * (i as f32 / steps as f32);
        let p = Vec2::on_ellipse(arc.center, arc.radii, angle);
        pb.line_to(p.x, p.y);
    }
}

// ── text ──────────────────────────────────────────────────────────────────

/// A rasterized glyph placed in surface pixels.
struct PlacedGlyph {
    x: i32,
    y: i32,
    width: usize,
    height: usize,
    coverage: Vec<u8>,
}

fn layout_glyphs(font: &fontdue::Font, cmd: &TextCmd, fonts: &FontSystem) -> Vec<PlacedGlyph> {
    let advance = fonts.measure_text(&cmd.text, &cmd.family, cmd.size).x;
    let left = match cmd.align {
        TextAlign::Start => cmd.anchor.x,
        TextAlign::Center => cmd.anchor.x - advance / 2.0,
        TextAlign::End => cmd.anchor.x - advance,
    };
    let ascent = font
        .horizontal_line_metrics(cmd.size)
        .map(|m| m.ascent)
        .unwrap_or(cmd.size * 0.8);

    let mut layout: Layout<()> = Layout::new(CoordinateSystem::PositiveYDown);
    layout.reset(&LayoutSettings { x: left, y: cmd.anchor.y - ascent, ..LayoutSettings::default() });
    layout.append(&[font], &TextStyle::new(&cmd.text, cmd.size, 0));

    layout
        .glyphs()
        .iter()
        .filter(|g| g.char_data.rasterize() && g.width > 0 && g.height > 0)
        .map(|g| {
            let (metrics, coverage) = font.rasterize_config(g.key);
            PlacedGlyph {
                x: g.x.round() as i32,
                y: g.y.round() as i32,
                width: metrics.width,
                height: metrics.height,
                coverage,
            }
        })
        .collect()
}

/// Pixel radius of the band an outline of `width` covers on each side of the glyph edge.
fn outline_radius(width: f32) -> usize {
    if width.is_finite() { (width / 2.0).ceil().max(1.0) as usize } else { 1 }
}

/// Draws text through a coverage mask sized to the text bounds.
///
/// Outlined text strokes the glyph edges: the band between the coverage
/// dilated and eroded by half the line width.
fn draw_text(pixmap: &mut sk::Pixmap, cmd: &TextCmd, fonts: &FontSystem) {
    let Some(font) = fonts.resolve(&cmd.family) else {
        log::debug!("raster: no font loaded, skipping text {:?}", cmd.text);
        return;
    };
    let glyphs = layout_glyphs(font, cmd, fonts);
    let pad = match cmd.mode {
        TextMode::Fill => 0,
        TextMode::Stroke { width } => outline_radius(width) as i32,
    };

    let x0 = glyphs.iter().map(|g| g.x).min().unwrap_or(0).saturating_sub(pad).max(0);
    let y0 = glyphs.iter().map(|g| g.y).min().unwrap_or(0).saturating_sub(pad).max(0);
    let x1 = glyphs.iter().map(|g| g.x + g.width as i32).max().unwrap_or(0).saturating_add(pad).min(pixmap.width() as i32);
    let y1 = glyphs.iter().map(|g| g.y + g.height as i32).max().unwrap_or(0).saturating_add(pad).min(pixmap.height() as i32);
    if x1 <= x0 || y1 <= y0 {
        return;
    }
    let (bw, bh) = ((x1 - x0) as usize, (y1 - y0) as usize);

    let mut coverage = vec![0u8; bw * bh];
    for g in &glyphs {
        for row in 0..g.height {
            let y = g.y + row as i32 - y0;
            if y < 0 || y >= bh as i32 {
                continue;
            }
            for col in 0..g.width {
                let x = g.x + col as i32 - x0;
                if x < 0 || x >= bw as i32 {
                    continue;
                }
                let idx = y as usize * bw + x as usize;
                coverage[idx] = coverage[idx].max(g.coverage[row * g.width + col]);
            }
        }
    }
    if let TextMode::Stroke { width } = cmd.mode {
        coverage = outline(&coverage, bw, bh, outline_radius(width));
    }
    if coverage.iter().all(|&c| c == 0) {
        return;
    }

    let Some(mut mask) = sk::Mask::new(bw as u32, bh as u32) else { return };
    mask.data_mut().copy_from_slice(&coverage);
    let Some(mut patch) = sk::Pixmap::new(bw as u32, bh as u32) else { return };
    let Some(bounds) = sk::Rect::from_xywh(x0 as f32, y0 as f32, bw as f32, bh as f32) else { return };

    // The shader stays in surface space; only the patch is offset.
    let to_patch = sk::Transform::from_translate(-x0 as f32, -y0 as f32);
    patch.fill_rect(bounds, &to_sk_paint(&cmd.paint), to_patch, Some(&mask));
    pixmap.draw_pixmap(x0, y0, patch.as_ref(), &sk::PixmapPaint::default(), sk::Transform::identity(), None);
}

/// Morphological gradient: dilation minus erosion over a square of `radius`.
/// Pixels outside the buffer count as empty.
fn outline(coverage: &[u8], width: usize, height: usize, radius: usize) -> Vec<u8> {
    let dilated = morph(coverage, width, height, radius, u8::max, 0);
    let eroded = morph(coverage, width, height, radius, u8::min, u8::MAX);
    dilated.iter().zip(&eroded).map(|(d, e)| d.saturating_sub(*e)).collect()
}

fn morph(src: &[u8], width: usize, height: usize, radius: usize, pick: fn(u8, u8) -> u8, init: u8) -> Vec<u8> {
    let r = radius as isize;
    let sample = |buf: &[u8], x: isize, y: isize| {
        if x < 0 || y < 0 || x >= width as isize || y >= height as isize {
            0
        } else {
            buf[y as usize * width + x as usize]
        }
    };

    let mut rows = vec![0u8; src.len()];
    for y in 0..height as isize {
        for x in 0..width as isize {
            rows[y as usize * width + x as usize] = (-r..=r).fold(init, |acc, d| pick(acc, sample(src, x + d, y)));
        }
    }
    let mut out = vec![0u8; src.len()];
    for y in 0..height as isize {
        for x in 0..width as isize {
            out[y as usize * width + x as usize] = (-r..=r).fold(init, |acc, d| pick(acc, sample(&rows, x, y + d)));
        }
    }
    out
}
