use std::io::Write;

use crate::destripe::common::error::Result;
use crate::destripe::raster::types::GrayRaster;

pub trait RasterWriter {
    fn write_gray(&self, image: &GrayRaster, output: &mut dyn Write) -> Result<()>;
}
