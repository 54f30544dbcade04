use crate::coords::{Rect, Transform, Vec2};
use crate::paint::{Color, Paint};
use crate::scene::shapes::{TextAlign, TextCmd, TextMode};
use crate::scene::{ArcSeg, DrawList, Path, Stroke};

use super::Font;

/// Style and transform state saved/restored by [`Canvas::save`] / [`Canvas::restore`].
#[derive(Debug, Clone)]
struct State {
    transform: Transform,
    fill: Paint,
    stroke: Color,
    line_width: f32,
    font: Font,
    align: TextAlign,
}

impl Default for State {
    fn default() -> Self {
        Self {
            transform: Transform::identity(),
            fill: Paint::Solid(Color::BLACK),
            stroke: Color::BLACK,
            line_width: 1.0,
            font: Font::default(),
            align: TextAlign::Start,
        }
    }
}

/// Recording 2D drawing context bound to a fixed-size surface.
///
/// The current path is not part of the saved state, matching the usual 2D
/// canvas model: `restore` leaves an in-progress path untouched, and points
/// are mapped through the transform at the moment they are added.
#[derive(Debug, Clone)]
pub struct Canvas {
    width: u32,
    height: u32,
    state: State,
    stack: Vec<State>,
    path: Path,
    list: DrawList,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            state: State::default(),
            stack: Vec::new(),
            path: Path::new(),
            list: DrawList::new(),
        }
    }

    // ── surface ───────────────────────────────────────────────────────────

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Commands recorded since the last [`begin_frame`](Self::begin_frame).
    #[inline]
    pub fn draw_list(&self) -> &DrawList {
        &self.list
    }

    /// Starts a fresh frame: drops recorded commands, the current path, and
    /// any saved state, and resets styles to their defaults.
    pub fn begin_frame(&mut self) {
        self.list.clear();
        self.stack.clear();
        self.state = State::default();
        self.path = Path::new();
    }

    // ── state ─────────────────────────────────────────────────────────────

    pub fn save(&mut self) {
        self.stack.push(self.state.clone());
    }

    /// Pops the last saved state. Unbalanced calls are ignored.
    pub fn restore(&mut self) {
        if let Some(state) = self.stack.pop() {
            self.state = state;
        }
    }

    pub fn translate(&mut self, x: f32, y: f32) {
        self.state.transform = self.state.transform.pre_translate(x, y);
    }

    pub fn scale(&mut self, sx: f32, sy: f32) {
        self.state.transform = self.state.transform.pre_scale(sx, sy);
    }

    pub fn set_fill_style(&mut self, paint: impl Into<Paint>) {
        self.state.fill = paint.into();
    }

    #[inline]
    pub fn fill_style(&self) -> &Paint {
        &self.state.fill
    }

    pub fn set_stroke_style(&mut self, color: Color) {
        self.state.stroke = color;
    }

    #[inline]
    pub fn stroke_style(&self) -> Color {
        self.state.stroke
    }

    /// Sets the line width in user space. Non-finite or non-positive values
    /// are ignored.
    pub fn set_line_width(&mut self, width: f32) {
        if width.is_finite() && width > 0.0 {
            self.state.line_width = width;
        }
    }

    #[inline]
    pub fn line_width(&self) -> f32 {
        self.state.line_width
    }

    pub fn set_font(&mut self, font: Font) {
        self.state.font = font;
    }

    #[inline]
    pub fn font(&self) -> &Font {
        &self.state.font
    }

    pub fn set_text_align(&mut self, align: TextAlign) {
        self.state.align = align;
    }

    // ── paths ─────────────────────────────────────────────────────────────

    pub fn begin_path(&mut self) {
        self.path = Path::new();
    }

    pub fn move_to(&mut self, x: f32, y: f32) {
        let p = self.map(x, y);
        self.path.move_to(p);
    }

    pub fn line_to(&mut self, x: f32, y: f32) {
        let p = self.map(x, y);
        self.path.line_to(p);
    }

    /// Adds a circular arc in user space; under a non-uniform scale it lands
    /// as an elliptical arc in surface pixels. Negative radii are ignored.
    pub fn arc(&mut self, x: f32, y: f32, radius: f32, start: f32, end: f32, anticlockwise: bool) {
        if radius.is_nan() || radius < 0.0 {
            log::debug!("canvas: ignoring arc with radius {radius}");
            return;
        }
        let scale = self.state.transform.scale;
        self.path.arc(ArcSeg {
            center: self.map(x, y),
            radii: Vec2::new(radius * scale.x.abs(), radius * scale.y.abs()),
            start,
            end,
            anticlockwise,
        });
    }

    /// Fills the current path with the fill style.
    pub fn fill(&mut self) {
        self.list.push_fill_path(self.path.clone(), self.state.fill.clone());
    }

    /// Strokes the current path with the stroke style and line width.
    pub fn stroke(&mut self) {
        let stroke = self.current_stroke();
        self.list.push_stroke_path(self.path.clone(), stroke);
    }

    // ── rects ─────────────────────────────────────────────────────────────

    pub fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        let rect = self.map_rect(x, y, w, h);
        self.list.push_fill_rect(rect, self.state.fill.clone());
    }

    pub fn stroke_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        let rect = self.map_rect(x, y, w, h);
        let stroke = self.current_stroke();
        self.list.push_stroke_rect(rect, stroke);
    }

    // ── text ──────────────────────────────────────────────────────────────

    /// Fills `text` with its alphabetic baseline at `(x, y)`.
    pub fn fill_text(&mut self, text: &str, x: f32, y: f32) {
        let cmd = self.text_cmd(text, x, y, self.state.fill.clone(), TextMode::Fill);
        self.list.push_text(cmd);
    }

    /// Outlines `text` with the stroke style and line width.
    pub fn stroke_text(&mut self, text: &str, x: f32, y: f32) {
        let width = self.current_stroke().width;
        let paint = Paint::Solid(self.state.stroke);
        let cmd = self.text_cmd(text, x, y, paint, TextMode::Stroke { width });
        self.list.push_text(cmd);
    }

    // ── internal ──────────────────────────────────────────────────────────

    #[inline]
    fn map(&self, x: f32, y: f32) -> Vec2 {
        self.state.transform.apply(Vec2::new(x, y))
    }

    fn map_rect(&self, x: f32, y: f32, w: f32, h: f32) -> Rect {
        let origin = self.map(x, y);
        let size = Vec2::new(w, h).scale(self.state.transform.scale);
        Rect::new(origin.x, origin.y, size.x, size.y).normalized()
    }

    fn current_stroke(&self) -> Stroke {
        Stroke::new(self.state.line_width * self.state.transform.mean_scale(), self.state.stroke)
    }

    fn text_cmd(&self, text: &str, x: f32, y: f32, paint: Paint, mode: TextMode) -> TextCmd {
        TextCmd {
            text: text.to_string(),
            family: self.state.font.family.clone(),
            size: self.state.font.size * self.state.transform.mean_scale(),
            paint,
            anchor: self.map(x, y),
            align: self.state.align,
            mode,
        }
    }
}

#[cfg(test)]
mod tests {
    use core::f32::consts::TAU;

    use super::*;
    use crate::scene::{DrawCmd, PathEl};

    // ── state stack ───────────────────────────────────────────────────────

    #[test]
    fn restore_brings_back_styles() {
        let mut c = Canvas::new(100, 100);
        c.set_stroke_style(Color::WHITE);
        c.set_fill_style(Color::WHITE);
        c.save();
        c.set_stroke_style(Color::BLACK);
        c.set_fill_style(Color::BLACK);
        c.set_line_width(4.0);
        c.restore();
        assert_eq!(c.stroke_style(), Color::WHITE);
        assert_eq!(c.fill_style(), &Paint::Solid(Color::WHITE));
        assert_eq!(c.line_width(), 1.0);
    }

    #[test]
    fn unbalanced_restore_is_ignored() {
        let mut c = Canvas::new(10, 10);
        c.set_line_width(3.0);
        c.restore();
        assert_eq!(c.line_width(), 3.0);
    }

    #[test]
    fn begin_frame_resets_everything() {
        let mut c = Canvas::new(10, 10);
        c.set_line_width(3.0);
        c.fill_rect(0.0, 0.0, 10.0, 10.0);
        c.begin_frame();
        assert!(c.draw_list().is_empty());
        assert_eq!(c.line_width(), 1.0);
    }

    // ── transforms ────────────────────────────────────────────────────────

    #[test]
    fn unit_arc_under_scale_becomes_ellipse() {
        let mut c = Canvas::new(200, 100);
        c.save();
        c.begin_path();
        c.translate(100.0, 50.0);
        c.scale(100.0, 50.0);
        c.arc(0.0, 0.0, 1.0, 0.0, TAU, false);
        c.restore();
        c.fill();

        let DrawCmd::FillPath(cmd) = &c.draw_list().items()[0] else { panic!("expected a fill") };
        let PathEl::Arc(arc) = cmd.path.elements()[0] else { panic!("expected an arc") };
        assert_eq!(arc.center, Vec2::new(100.0, 50.0));
        assert_eq!(arc.radii, Vec2::new(100.0, 50.0));
        assert!(arc.is_full());
    }

    #[test]
    fn stroke_width_uses_transform_at_stroke_time() {
        let mut c = Canvas::new(10, 10);
        c.begin_path();
        c.move_to(0.0, 0.0);
        c.line_to(5.0, 5.0);
        c.scale(2.0, 2.0);
        c.set_line_width(3.0);
        c.stroke();
        let DrawCmd::StrokePath(cmd) = &c.draw_list().items()[0] else { panic!("expected a stroke") };
        assert_eq!(cmd.stroke.width, 6.0);
    }

    #[test]
    fn rects_are_mapped() {
        let mut c = Canvas::new(50, 50);
        c.translate(10.0, 10.0);
        c.fill_rect(0.0, 0.0, 5.0, 5.0);
        let DrawCmd::FillRect(cmd) = &c.draw_list().items()[0] else { panic!("expected a rect") };
        assert_eq!(cmd.rect, Rect::new(10.0, 10.0, 5.0, 5.0));
    }

    // ── text ──────────────────────────────────────────────────────────────

    #[test]
    fn stroke_text_uses_stroke_color() {
        let mut c = Canvas::new(50, 50);
        c.set_stroke_style(Color::WHITE);
        c.set_font(Font::new(12.0, "Arial"));
        c.set_text_align(TextAlign::Center);
        c.stroke_text("XII", 25.0, 10.0);
        let DrawCmd::Text(cmd) = &c.draw_list().items()[0] else { panic!("expected text") };
        assert_eq!(cmd.paint, Paint::Solid(Color::WHITE));
        assert_eq!(cmd.align, TextAlign::Center);
        assert_eq!(cmd.family, "Arial");
        assert_eq!(cmd.mode, TextMode::Stroke { width: 1.0 });
    }
}
