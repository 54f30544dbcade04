//! Horologe engine crate.
//!
//! This crate owns the drawing primitives used by the clock renderer: geometry,
//! the paint model, a recording 2D canvas, a CPU rasterizer, text, and time.

pub mod canvas;
pub mod coords;
pub mod logging;
pub mod paint;
pub mod render;
pub mod scene;
pub mod text;
pub mod time;
