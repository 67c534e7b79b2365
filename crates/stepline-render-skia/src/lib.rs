// File: crates/stepline-render-skia/src/lib.rs
// Summary: Skia raster backend for stepline scenes: curve geometry, text shaping, PNG/RGBA output and a Host.

pub mod curve;
pub mod host;
pub mod raster;
pub mod text;

pub use host::SkiaHost;
pub use raster::{to_skia, RasterOptions, SkiaRaster};
pub use text::TextShaper;
