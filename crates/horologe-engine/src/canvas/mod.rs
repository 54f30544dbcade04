//! Recording 2D drawing context.
//!
//! [`Canvas`] exposes the familiar immediate-mode 2D API (state stack,
//! transforms, paths, rect and text helpers) and records every draw call into a
//! [`DrawList`](crate::scene::DrawList) with geometry already mapped into
//! surface pixels. The list can then be inspected, or rasterized by
//! [`render::raster`](crate::render::raster).

mod context;
mod font;

pub use context::Canvas;
pub use font::Font;
