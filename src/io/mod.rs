//! I/O layer: source image loading (`source`), SVG rasterization backends
//! (`raster`), and `writers` for PNG icons and web app manifest fragments.
pub mod raster;
pub use raster::{MagickRasterizer, Rasterizer, ResvgRasterizer, SvgDocument};

pub mod source;
pub use source::{SourceData, SourceImage};

pub mod writers;
