//! CPU rendering of recorded draw streams.
//!
//! Renderers consume `scene` draw lists and paint them into pixels. Geometry
//! in the list is already in surface pixels, so no viewport mapping happens
//! here.

pub mod raster;

pub use raster::{rasterize, save_png, RasterError};
