//! Raster I/O module
//!
//! This module provides the in-memory grayscale raster type and the
//! reader/writer collaborators used to load and store it.

mod png_reader;
mod png_writer;
mod reader;
pub mod types;
mod writer;

pub use png_reader::PngRasterReader;
pub use png_writer::PngRasterWriter;
pub use reader::RasterReader;
pub use types::GrayRaster;
pub use writer::RasterWriter;
