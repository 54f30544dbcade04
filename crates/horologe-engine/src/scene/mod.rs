//! Scene (draw stream) types.
//!
//! Responsibilities:
//! - store renderer-agnostic draw commands in paint order
//! - keep shape-specific helpers isolated per shape file under `scene::shapes`

mod cmd;
mod list;
mod path;

pub mod shapes;

pub use cmd::DrawCmd;
pub use list::DrawList;
pub use path::{ArcSeg, Path, PathEl};
pub use shapes::Stroke;
