use crate::destripe::common::error::Result;
use crate::destripe::raster::types::GrayRaster;

pub trait RasterReader {
    fn read_gray(&self, data: &[u8]) -> Result<GrayRaster>;
}
