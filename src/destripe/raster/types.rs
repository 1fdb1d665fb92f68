//! Grayscale raster type

use crate::destripe::common::error::{DestripeError, Result};

/// A row-major 8-bit single-channel raster.
///
/// All pixel access goes through the bounds-checked `get`/`set` accessors;
/// the width and height travel with the buffer so callers never do their own
/// index arithmetic into the flat storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrayRaster {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl GrayRaster {
    /// Wraps an existing row-major pixel buffer.
    pub fn from_raw(width: usize, height: usize, data: Vec<u8>) -> Result<Self> {
        if data.len() != width * height {
            return Err(DestripeError::InvalidDimensions(width, height));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Allocates a raster with every pixel set to `value`.
    pub fn filled(width: usize, height: usize, value: u8) -> Self {
        Self {
            width,
            height,
            data: vec![value; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[self.index(x, y)]
    }

    pub fn set(&mut self, x: usize, y: usize, value: u8) {
        let i = self.index(x, y);
        self.data[i] = value;
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    fn index(&self, x: usize, y: usize) -> usize {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) out of bounds for {}x{} raster",
            self.width,
            self.height
        );
        x + y * self.width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_mismatched_buffer_length() {
        let result = GrayRaster::from_raw(4, 4, vec![0u8; 15]);
        assert!(matches!(
            result,
            Err(DestripeError::InvalidDimensions(4, 4))
        ));
    }

    #[test]
    fn get_and_set_round_trip() {
        let mut raster = GrayRaster::filled(3, 2, 7);
        raster.set(2, 1, 42);
        assert_eq!(raster.get(2, 1), 42);
        assert_eq!(raster.get(0, 0), 7);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn out_of_bounds_access_panics() {
        let raster = GrayRaster::filled(3, 2, 0);
        raster.get(3, 0);
    }
}
