use crate::coords::Rect;
use crate::paint::Paint;
use crate::scene::{DrawCmd, DrawList};

use super::Stroke;

/// Filled rectangle payload.
#[derive(Debug, Clone, PartialEq)]
pub struct RectCmd {
    pub rect: Rect,
    pub paint: Paint,
}

/// Stroked rectangle outline payload.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeRectCmd {
    pub rect: Rect,
    pub stroke: Stroke,
}

impl DrawList {
    /// Records a filled rectangle.
    #[inline]
    pub fn push_fill_rect(&mut self, rect: Rect, paint: Paint) {
        self.push(DrawCmd::FillRect(RectCmd { rect, paint }));
    }

    /// Records a rectangle outline.
    #[inline]
    pub fn push_stroke_rect(&mut self, rect: Rect, stroke: Stroke) {
        self.push(DrawCmd::StrokeRect(StrokeRectCmd { rect, stroke }));
    }
}
