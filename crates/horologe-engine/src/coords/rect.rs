use super::Vec2;

/// Axis-aligned rectangle in surface pixels (top-left origin).
///
/// Canvas calls may produce negative extents (`fill_rect(10, 0, -4, 5)`);
/// [`normalized`](Self::normalized) folds them back before rasterization.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { origin: Vec2::new(x, y), size: Vec2::new(w, h) }
    }

    /// True when either extent is zero, negative, or NaN.
    #[inline]
    pub fn is_empty(self) -> bool {
        !(self.size.x > 0.0 && self.size.y > 0.0)
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.origin.is_finite() && self.size.is_finite()
    }

    /// Same area with non-negative extents.
    pub fn normalized(self) -> Self {
        let (x0, x1) = (self.origin.x, self.origin.x + self.size.x);
        let (y0, y1) = (self.origin.y, self.origin.y + self.size.y);
        Rect::new(x0.min(x1), y0.min(y1), self.size.x.abs(), self.size.y.abs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_extents_fold_back() {
        let n = Rect::new(10.0, 8.0, -4.0, -8.0).normalized();
        assert_eq!(n, Rect::new(6.0, 0.0, 4.0, 8.0));
        let r = Rect::new(1.0, 2.0, 10.0, 20.0);
        assert_eq!(r.normalized(), r);
    }

    #[test]
    fn emptiness() {
        assert!(Rect::new(0.0, 0.0, 0.0, 5.0).is_empty());
        assert!(Rect::new(0.0, 0.0, 5.0, f32::NAN).is_empty());
        assert!(!Rect::new(0.0, 0.0, 1.0, 1.0).is_empty());
    }
}
