use super::Vec2;

/// Scale-then-translate transform from user space to surface pixels.
///
/// The canvas only exposes `translate` and `scale`, so the current transform is
/// always axis-aligned. That keeps arcs representable as axis-aligned ellipses
/// after mapping, which is what the clock face relies on.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform {
    pub scale: Vec2,
    pub translate: Vec2,
}

impl Transform {
    #[inline]
    pub const fn identity() -> Self {
        Self { scale: Vec2::new(1.0, 1.0), translate: Vec2::zero() }
    }

    /// Maps a user-space point into surface pixels.
    #[inline]
    pub fn apply(&self, p: Vec2) -> Vec2 {
        p.scale(self.scale) + self.translate
    }

    /// Appends a translation expressed in the current user space.
    #[inline]
    pub fn pre_translate(self, dx: f32, dy: f32) -> Self {
        Self {
            scale: self.scale,
            translate: self.translate + Vec2::new(dx, dy).scale(self.scale),
        }
    }

    /// Appends a scale expressed in the current user space.
    #[inline]
    pub fn pre_scale(self, sx: f32, sy: f32) -> Self {
        Self { scale: self.scale.scale(Vec2::new(sx, sy)), translate: self.translate }
    }

    /// Geometric mean of the axis scales.
    ///
    /// Used to map user-space line widths and font sizes into pixels under a
    /// non-uniform scale.
    #[inline]
    pub fn mean_scale(&self) -> f32 {
        (self.scale.x * self.scale.y).abs().sqrt()
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translate_then_scale_maps_unit_circle_to_ellipse() {
        let t = Transform::identity().pre_translate(100.0, 50.0).pre_scale(100.0, 50.0);
        assert_eq!(t.apply(Vec2::new(1.0, 0.0)), Vec2::new(200.0, 50.0));
        assert_eq!(t.apply(Vec2::new(0.0, -1.0)), Vec2::new(100.0, 0.0));
    }

    #[test]
    fn translate_after_scale_is_in_scaled_units() {
        let t = Transform::identity().pre_scale(2.0, 3.0).pre_translate(1.0, 1.0);
        assert_eq!(t.translate, Vec2::new(2.0, 3.0));
    }

    #[test]
    fn mean_scale_of_non_uniform() {
        let t = Transform::identity().pre_scale(4.0, 9.0);
        assert!((t.mean_scale() - 6.0).abs() < 1e-6);
    }
}
