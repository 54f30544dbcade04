pub(crate) mod path;
pub(crate) mod rect;
pub(crate) mod text;

pub use path::{FillPathCmd, StrokePathCmd};
pub use rect::{RectCmd, StrokeRectCmd};
pub use text::{TextAlign, TextCmd, TextMode};

use crate::paint::Color;

/// Stroke style resolved at the time a stroke was issued.
///
/// `width` is in surface pixels, already multiplied by the transform scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub width: f32,
    pub color: Color,
}

impl Stroke {
    #[inline]
    pub fn new(width: f32, color: Color) -> Self {
        Self { width, color }
    }
}
