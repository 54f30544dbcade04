use crate::coords::Vec2;

use super::Color;

/// A single gradient stop.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColorStop {
    pub t: f32,
    pub color: Color,
}

impl ColorStop {
    #[inline]
    pub const fn new(t: f32, color: Color) -> Self {
        Self { t, color }
    }
}

/// Linear gradient definition in surface pixel space.
///
/// Semantics match a 2D canvas `createLinearGradient`: `start` and `end` are
/// positions in the same space as geometry, stops are added in order, and
/// the area outside the axis pads with the edge colors.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub start: Vec2,
    pub end: Vec2,
    pub stops: Vec<ColorStop>,
}

impl LinearGradient {
    pub fn new(start: Vec2, end: Vec2) -> Self {
        Self { start, end, stops: Vec::new() }
    }

    /// Builds a gradient whose colors are spread evenly over `[0, 1]`.
    ///
    /// With `n` colors, stop `i` lands at `i / (n - 1)`. A single color
    /// produces one stop at 0.
    pub fn evenly_spaced(start: Vec2, end: Vec2, colors: &[Color]) -> Self {
        let mut gradient = Self::new(start, end);
        let last = colors.len().saturating_sub(1).max(1) as f32;
        for (i, color) in colors.iter().enumerate() {
            gradient.add_color_stop(i as f32 / last, *color);
        }
        gradient
    }

    /// Appends a stop; `t` is clamped into `[0, 1]`.
    pub fn add_color_stop(&mut self, t: f32, color: Color) {
        self.stops.push(ColorStop::new(t.clamp(0.0, 1.0), color));
    }

    /// Returns true when the gradient definition is structurally usable.
    ///
    /// Renderers fall back to the first stop color when this is false.
    pub fn is_valid(&self) -> bool {
        self.start.is_finite()
            && self.end.is_finite()
            && self.stops.iter().all(|s| s.t.is_finite() && s.color.is_finite())
            && self.stops.len() >= 2
            && (self.end.x != self.start.x || self.end.y != self.start.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_colors_land_on_thirds() {
        let g = LinearGradient::evenly_spaced(
            Vec2::zero(),
            Vec2::new(10.0, 10.0),
            &[Color::BLACK, Color::WHITE, Color::TRANSPARENT],
        );
        let ts: Vec<f32> = g.stops.iter().map(|s| s.t).collect();
        assert_eq!(ts, vec![0.0, 0.5, 1.0]);
        assert!(g.is_valid());
    }

    #[test]
    fn degenerate_axis_is_invalid() {
        let g = LinearGradient::evenly_spaced(Vec2::zero(), Vec2::zero(), &[Color::BLACK, Color::WHITE]);
        assert!(!g.is_valid());
    }

    #[test]
    fn stop_offsets_are_clamped() {
        let mut g = LinearGradient::new(Vec2::zero(), Vec2::new(1.0, 0.0));
        g.add_color_stop(1.5, Color::BLACK);
        assert_eq!(g.stops[0].t, 1.0);
    }
}
