//! Column profile builder

use crate::destripe::common::error::Result;
use crate::destripe::diagnostics::DiagnosticSink;
use crate::destripe::raster::types::GrayRaster;
use crate::destripe::stats::MeanStd;

/// Computes the mean pixel value of every column, reporting each column's
/// mean and standard deviation to the diagnostic sink along the way.
pub fn column_means(image: &GrayRaster, sink: &mut dyn DiagnosticSink) -> Result<Vec<f64>> {
    let mut means = Vec::with_capacity(image.width());
    for x in 0..image.width() {
        let mut m = MeanStd::new();
        for y in 0..image.height() {
            m.add(image.get(x, y) as f64);
        }
        sink.record_column(x, m.mean(), m.stddev())?;
        means.push(m.mean());
    }
    Ok(means)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::destripe::diagnostics::NullSink;

    #[test]
    fn per_column_means_over_all_rows() {
        // column x holds the values x and x + 2, so its mean is x + 1
        let mut image = GrayRaster::filled(4, 2, 0);
        for x in 0..4 {
            image.set(x, 0, x as u8);
            image.set(x, 1, x as u8 + 2);
        }
        let means = column_means(&image, &mut NullSink).unwrap();
        assert_eq!(means, vec![1.0, 2.0, 3.0, 4.0]);
    }
}
