//! PNG raster reader implementation using the image library.
//!
//! Stitched mosaics arrive as 8-bit grayscale PNG files. Any format the
//! image crate can decode is accepted; non-grayscale input is converted to
//! luma before entering the pipeline.

use tracing::debug;

use crate::destripe::common::error::{DestripeError, Result};
use crate::destripe::raster::reader::RasterReader;
use crate::destripe::raster::types::GrayRaster;

pub struct PngRasterReader;

impl RasterReader for PngRasterReader {
    fn read_gray(&self, data: &[u8]) -> Result<GrayRaster> {
        debug!("Decoding raster, {} bytes", data.len());

        let decoded = image::load_from_memory(data)
            .map_err(|e| DestripeError::DecodeError(e.to_string()))?;

        let gray = decoded.into_luma8();
        let (width, height) = gray.dimensions();

        debug!("Decoded raster: {}x{}", width, height);

        GrayRaster::from_raw(width as usize, height as usize, gray.into_raw())
    }
}
