//! Clock face painting.
//!
//! [`paint`] turns one surface plus one [`TimeSample`] into a fresh frame on
//! the surface canvas. Every size below is relative to the surface: `w`/`h`
//! are its dimensions, `m` the smaller of the two.

use core::f32::consts::{FRAC_PI_2, TAU};

use horologe_engine::canvas::{Canvas, Font};
use horologe_engine::paint::Color;
use horologe_engine::scene::shapes::TextAlign;
use horologe_engine::time::TimeSample;

use crate::config::{ClockConfig, FaceKind, TickStyle};
use crate::surface::Surface;

/// Surface metrics shared by every drawing step.
#[derive(Debug, Copy, Clone)]
struct Frame {
    w: f32,
    h: f32,
    cx: f32,
    cy: f32,
    m: f32,
}

impl Frame {
    fn of(surface: &Surface) -> Self {
        let w = surface.width() as f32;
        let h = surface.height() as f32;
        Self { w, h, cx: w / 2.0, cy: h / 2.0, m: w.min(h) }
    }

    /// Point at `angle` on the ellipse of radii `w / div, h / div`.
    fn polar(&self, angle: f32, div: f32) -> (f32, f32) {
        (self.cx + angle.cos() * self.w / div, self.cy + angle.sin() * self.h / div)
    }
}

/// Hand angles in radians; 12 o'clock is `-π/2` and angles grow clockwise.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HandAngles {
    pub hour: f32,
    pub minute: f32,
    pub second: f32,
}

impl HandAngles {
    pub fn at(time: &TimeSample) -> Self {
        let turn = |fraction: f64| (-core::f64::consts::FRAC_PI_2 + fraction * core::f64::consts::TAU) as f32;
        Self {
            hour: turn((time.hours % 12.0) / 12.0),
            minute: turn(time.minutes / 60.0),
            second: turn(time.seconds / 60.0),
        }
    }
}

/// Paints `surface` for `time`, replacing whatever the canvas held.
///
/// Never fails: attributes that are missing or invalid take their defaults.
/// The surface title is set to the full timestamp.
pub fn paint(surface: &mut Surface, time: &TimeSample) {
    let config = ClockConfig::from_surface(surface);
    let frame = Frame::of(surface);
    surface.set_title(time.title());

    let canvas = surface.canvas_mut();
    canvas.begin_frame();
    canvas.set_stroke_style(config.color);
    canvas.set_fill_style(config.background_paint(frame.w, frame.h));

    match config.face {
        FaceKind::Analog => paint_analog(canvas, &config, frame, time),
        FaceKind::Digital => paint_digital(canvas, &config, frame, time),
    }
}

// ── analog ────────────────────────────────────────────────────────────────

fn paint_analog(canvas: &mut Canvas, config: &ClockConfig, f: Frame, time: &TimeSample) {
    // outer background
    canvas.save();
    canvas.set_fill_style(config.outer_color);
    canvas.fill_rect(0.0, 0.0, f.w, f.h);
    canvas.restore();

    // dial
    canvas.begin_path();
    canvas.set_line_width(1.0);
    let inset = canvas.line_width();
    add_ellipse(canvas, f.cx, f.cy, f.w - inset, f.h - inset);
    canvas.fill();
    canvas.stroke();

    paint_ticks(canvas, config.ticks, f);
    paint_numerals(canvas, config, f);

    let angles = HandAngles::at(time);
    hand(canvas, f, angles.hour, 4.0, 0.0, 3.0);
    hand(canvas, f, angles.minute, 2.0, 0.0, 2.5);
    hand(canvas, f, angles.second, 1.0, -6.6, 2.2);

    // center cap
    canvas.begin_path();
    canvas.set_fill_style(canvas.stroke_style());
    canvas.arc(f.cx, f.cy, f.m / 20.0, 0.0, TAU, false);
    canvas.fill();
}

/// Adds a `w × h` ellipse around `(x, y)` to the current path.
///
/// Drawn as a unit circle under a non-uniform scale; the line width is
/// compensated while scaled so a stroke issued inside would not distort.
fn add_ellipse(canvas: &mut Canvas, x: f32, y: f32, w: f32, h: f32) {
    canvas.save();
    canvas.begin_path();
    canvas.translate(x, y);
    canvas.scale(w / 2.0, h / 2.0);
    canvas.set_line_width(canvas.line_width() * 2.0 / w);
    canvas.arc(0.0, 0.0, 1.0, 0.0, TAU, false);
    canvas.restore();
}

fn paint_ticks(canvas: &mut Canvas, style: TickStyle, f: Frame) {
    for i in 0..60 {
        let angle = TAU / 60.0 * i as f32;
        let on_hour = i % 5 == 0;
        canvas.begin_path();

        match style {
            TickStyle::Lines => {
                let (x0, y0) = f.polar(angle, 2.0);
                let (width, div) = if on_hour { (2.0, 2.5) } else { (1.0, 2.2) };
                let (x1, y1) = f.polar(angle, div);
                canvas.set_line_width(width);
                canvas.move_to(x0, y0);
                canvas.line_to(x1, y1);
                canvas.stroke();
            }
            TickStyle::Circles => {
                let radius = if on_hour { f.m / 50.0 } else { f.m / 100.0 };
                let (x, y) = f.polar(angle, 2.3);
                canvas.set_fill_style(canvas.stroke_style());
                canvas.arc(x, y, radius, 0.0, TAU, false);
                canvas.fill();
            }
            TickStyle::None => return,
        }
    }
}

fn paint_numerals(canvas: &mut Canvas, config: &ClockConfig, f: Frame) {
    let Some(labels) = config.numerals.labels() else {
        return;
    };

    canvas.begin_path();
    canvas.set_text_align(TextAlign::Center);
    canvas.set_font(Font::new(f.m / 12.0, config.font_family.clone()));

    for (i, label) in (1..=12).zip(labels) {
        let angle = -FRAC_PI_2 + TAU / 12.0 * i as f32;
        let (x, y) = f.polar(angle, 2.8);
        let y = y + f.m / 30.0;

        canvas.save();
        canvas.set_stroke_style(Color::BLACK);
        canvas.stroke_text(label, x + 1.0, y + 1.0);
        canvas.restore();
        canvas.stroke_text(label, x, y);
    }
}

/// Strokes a hand along `angle` from `w / tail` (0 = the center) out to `w / reach`.
fn hand(canvas: &mut Canvas, f: Frame, angle: f32, width: f32, tail: f32, reach: f32) {
    canvas.begin_path();
    canvas.set_line_width(width);
    let (x0, y0) = if tail == 0.0 { (f.cx, f.cy) } else { f.polar(angle, tail) };
    let (x1, y1) = f.polar(angle, reach);
    canvas.move_to(x0, y0);
    canvas.line_to(x1, y1);
    canvas.stroke();
}

// ── digital ───────────────────────────────────────────────────────────────

fn paint_digital(canvas: &mut Canvas, config: &ClockConfig, f: Frame, time: &TimeSample) {
    canvas.set_line_width(1.0);
    canvas.fill_rect(0.0, 0.0, f.w, f.h);
    canvas.stroke_rect(0.0, 0.0, f.w, f.h);

    let text = time.digital();
    let size = (f.w / 5.0).min(f.h);
    canvas.set_text_align(TextAlign::Center);
    canvas.set_font(Font::new(size, config.font_family.clone()));
    canvas.set_fill_style(canvas.stroke_style());

    let baseline = f.cy + size / 3.0;
    canvas.save();
    canvas.set_fill_style(Color::BLACK);
    canvas.fill_text(&text, f.cx + 1.0, baseline + 1.0);
    canvas.restore();
    canvas.fill_text(&text, f.cx, baseline);
}
