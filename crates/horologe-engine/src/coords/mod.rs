//! Coordinate and geometry types shared by the canvas, scene and rasterizer.
//!
//! Canonical space:
//! - Surface pixels
//! - Origin top-left
//! - +X right, +Y down
//!
//! Angles follow the same convention: 0 points along +X and positive angles
//! turn clockwise on screen, so 12 o'clock sits at `-π/2`.

mod rect;
mod transform;
mod vec2;

pub use rect::Rect;
pub use transform::Transform;
pub use vec2::Vec2;
