use std::io::Write;

use image::ImageEncoder;
use image::codecs::png::PngEncoder;
use tracing::debug;

use crate::destripe::common::error::{DestripeError, Result};
use crate::destripe::raster::types::GrayRaster;
use crate::destripe::raster::writer::RasterWriter;

pub struct PngRasterWriter;

impl RasterWriter for PngRasterWriter {
    fn write_gray(&self, image: &GrayRaster, output: &mut dyn Write) -> Result<()> {
        debug!("Encoding PNG image: {}x{}", image.width(), image.height());

        let mut buffer = Vec::new();

        PngEncoder::new(&mut buffer)
            .write_image(
                image.data(),
                image.width() as u32,
                image.height() as u32,
                image::ExtendedColorType::L8,
            )
            .map_err(|e| DestripeError::EncodeError(e.to_string()))?;

        output.write_all(&buffer)?;

        debug!("PNG encoding complete");
        Ok(())
    }
}
