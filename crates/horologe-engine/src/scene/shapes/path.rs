use crate::paint::Paint;
use crate::scene::{DrawCmd, DrawList, Path};

use super::Stroke;

/// Filled path payload (nonzero winding).
#[derive(Debug, Clone, PartialEq)]
pub struct FillPathCmd {
    pub path: Path,
    pub paint: Paint,
}

/// Stroked path payload.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokePathCmd {
    pub path: Path,
    pub stroke: Stroke,
}

impl DrawList {
    /// Records a path fill. Empty paths are dropped.
    #[inline]
    pub fn push_fill_path(&mut self, path: Path, paint: Paint) {
        if !path.is_empty() {
            self.push(DrawCmd::FillPath(FillPathCmd { path, paint }));
        }
    }

    /// Records a path stroke. Empty paths are dropped.
    #[inline]
    pub fn push_stroke_path(&mut self, path: Path, stroke: Stroke) {
        if !path.is_empty() {
            self.push(DrawCmd::StrokePath(StrokePathCmd { path, stroke }));
        }
    }
}
