use core::f32::consts::TAU;

use crate::coords::Vec2;

/// Elliptical arc segment in surface pixels.
///
/// Produced by a canvas `arc` call under an axis-aligned transform: the unit
/// of the call's radius is scaled independently per axis.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ArcSeg {
    pub center: Vec2,
    pub radii: Vec2,
    /// Start angle in radians (clockwise from +X).
    pub start: f32,
    /// End angle in radians.
    pub end: f32,
    pub anticlockwise: bool,
}

impl ArcSeg {
    /// Signed sweep in radians, following canvas rules: a clockwise request
    /// spanning at least a full turn draws the full ellipse, otherwise the
    /// sweep is reduced modulo a full turn in the requested direction.
    pub fn sweep(&self) -> f32 {
        let raw = self.end - self.start;
        if !self.anticlockwise {
            if raw >= TAU { TAU } else { raw.rem_euclid(TAU) }
        } else if -raw >= TAU {
            -TAU
        } else {
            -(-raw).rem_euclid(TAU)
        }
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.sweep().abs() >= TAU - 1e-4
    }

    #[inline]
    pub fn start_point(&self) -> Vec2 {
        Vec2::on_ellipse(self.center, self.radii, self.start)
    }

    #[inline]
    pub fn end_point(&self) -> Vec2 {
        Vec2::on_ellipse(self.center, self.radii, self.start + self.sweep())
    }
}

/// One path verb.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PathEl {
    MoveTo(Vec2),
    LineTo(Vec2),
    Arc(ArcSeg),
}

/// A path in surface pixels, built by the canvas between `begin_path` calls.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    elements: Vec<PathEl>,
    current: Option<Vec2>,
}

impl Path {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn elements(&self) -> &[PathEl] {
        &self.elements
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn move_to(&mut self, p: Vec2) {
        self.elements.push(PathEl::MoveTo(p));
        self.current = Some(p);
    }

    /// Adds a line from the current point. Without a current point this acts
    /// as `move_to`, matching canvas behavior.
    pub fn line_to(&mut self, p: Vec2) {
        if self.current.is_none() {
            self.move_to(p);
            return;
        }
        self.elements.push(PathEl::LineTo(p));
        self.current = Some(p);
    }

    /// Adds an arc. When a current point exists, a straight line joins it to
    /// the arc start first.
    pub fn arc(&mut self, arc: ArcSeg) {
        let start = arc.start_point();
        if self.current.is_some() {
            self.elements.push(PathEl::LineTo(start));
        }
        self.elements.push(PathEl::Arc(arc));
        self.current = Some(arc.end_point());
    }

    /// Iterates over the arcs contained in the path.
    pub fn arcs(&self) -> impl Iterator<Item = &ArcSeg> {
        self.elements.iter().filter_map(|el| match el {
            PathEl::Arc(a) => Some(a),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use core::f32::consts::PI;

    use super::*;

    fn unit_arc(start: f32, end: f32, anticlockwise: bool) -> ArcSeg {
        ArcSeg { center: Vec2::zero(), radii: Vec2::new(1.0, 1.0), start, end, anticlockwise }
    }

    // ── sweep ─────────────────────────────────────────────────────────────

    #[test]
    fn full_turn_is_full() {
        assert!(unit_arc(0.0, TAU, false).is_full());
        assert!(unit_arc(0.0, 3.0 * TAU, false).is_full());
    }

    #[test]
    fn half_turn_sweeps() {
        assert!((unit_arc(0.0, PI, false).sweep() - PI).abs() < 1e-6);
        assert!((unit_arc(0.0, PI, true).sweep() + PI).abs() < 1e-6);
    }

    // ── path building ─────────────────────────────────────────────────────

    #[test]
    fn line_to_without_current_point_moves() {
        let mut p = Path::new();
        p.line_to(Vec2::new(1.0, 2.0));
        assert_eq!(p.elements(), &[PathEl::MoveTo(Vec2::new(1.0, 2.0))]);
    }

    #[test]
    fn arc_after_move_joins_with_a_line() {
        let mut p = Path::new();
        p.move_to(Vec2::new(5.0, 5.0));
        p.arc(unit_arc(0.0, TAU, false));
        assert!(matches!(p.elements()[1], PathEl::LineTo(v) if v == Vec2::new(1.0, 0.0)));
        assert_eq!(p.arcs().count(), 1);
    }

    #[test]
    fn lone_arc_has_no_join() {
        let mut p = Path::new();
        p.arc(unit_arc(0.0, TAU, false));
        assert_eq!(p.elements().len(), 1);
    }
}
