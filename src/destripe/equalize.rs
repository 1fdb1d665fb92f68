//! Slab equalizer
//!
//! First correction pass: within each slab (the columns between two
//! consecutive seams), every column is shifted so its mean matches the
//! slab-wide mean, removing gross per-column brightness variation before
//! the finer seam-level correction runs.

use tracing::debug;

use crate::destripe::raster::types::GrayRaster;
use crate::destripe::stats::MeanStd;

/// Equalizes column means within each slab, mutating the raster in place.
///
/// `column_means` must hold one entry per column of `image`; it describes
/// the image as it was before any shifting and is stale afterwards.
pub fn equalize_slabs(image: &mut GrayRaster, seams: &[i64], column_means: &[f64]) {
    let w = image.width() as i64;
    for i in 0..seams.len() - 1 {
        let xmin = (seams[i] + 1).max(0);
        let xmax = (seams[i + 1] - 1).min(w - 1);
        if xmin > xmax {
            // adjacent seams leave no columns between them
            continue;
        }
        let (xmin, xmax) = (xmin as usize, xmax as usize);

        let mut overall = MeanStd::new();
        for x in xmin..=xmax {
            overall.add(column_means[x]);
        }
        let slab_mean = overall.mean();
        debug!(slab = i, mean = format!("{slab_mean:.2}"), "slab mean");

        for x in xmin..=xmax {
            let delta = (slab_mean - column_means[x]).round() as i64;
            for y in 0..image.height() {
                let pix = (image.get(x, y) as i64 + delta).clamp(0, 255);
                image.set(x, y, pix as u8);
            }
        }
    }
}
