use crate::scene::shapes::path::{FillPathCmd, StrokePathCmd};
use crate::scene::shapes::rect::{RectCmd, StrokeRectCmd};
use crate::scene::shapes::text::TextCmd;

/// Renderer-agnostic draw command stream.
///
/// All geometry is already mapped into surface pixels; commands carry the
/// style that was current when they were issued.
///
/// Extending the scene:
/// - add a new shape module under `scene::shapes::*`
/// - add a new variant here
/// - implement push helpers inside that shape module
/// - teach `render::raster` to draw it
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    FillRect(RectCmd),
    StrokeRect(StrokeRectCmd),
    FillPath(FillPathCmd),
    StrokePath(StrokePathCmd),
    Text(TextCmd),
}
