//! Correction grid
//!
//! Second correction pass input: for every interior seam and every interior
//! row band, a local window on each side of the seam yields a pair of
//! intensity deltas that would bring the two sides to parity. Windows whose
//! statistics look unreliable contribute no correction and the grid cell
//! stays at zero.

use tracing::debug;

use crate::destripe::raster::types::GrayRaster;
use crate::destripe::stats::MeanStd;

/// Rows sampled above and below a band center.
const BAND_HALF_HEIGHT: i64 = 500;
/// Columns immediately next to the seam are skipped; they carry the very
/// artifacts being corrected.
const SEAM_GUARD: i64 = 10;
/// Farthest column offset sampled on each side of a seam.
const SEAM_REACH: i64 = 100;

/// How much to add to the pixels immediately on each side of a seam.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Correction {
    pub left: f64,
    pub right: f64,
}

/// Table of corrections indexed by `(seam_index, band_index)`.
///
/// The grid is unevenly spaced in both directions (seam positions and band
/// centers), but the number of points per row and column is fixed, so a
/// flat buffer with explicit extents is enough.
#[derive(Debug, Clone)]
pub struct CorrectionGrid {
    seam_count: usize,
    band_count: usize,
    cells: Vec<Correction>,
}

impl CorrectionGrid {
    pub fn new(seam_count: usize, band_count: usize) -> Self {
        Self {
            seam_count,
            band_count,
            cells: vec![Correction::default(); seam_count * band_count],
        }
    }

    pub fn seam_count(&self) -> usize {
        self.seam_count
    }

    pub fn band_count(&self) -> usize {
        self.band_count
    }

    pub fn at(&self, seam: usize, band: usize) -> Correction {
        self.cells[self.index(seam, band)]
    }

    pub(crate) fn at_mut(&mut self, seam: usize, band: usize) -> &mut Correction {
        let i = self.index(seam, band);
        &mut self.cells[i]
    }

    fn index(&self, seam: usize, band: usize) -> usize {
        assert!(
            seam < self.seam_count && band < self.band_count,
            "grid cell ({seam}, {band}) out of bounds for {}x{} grid",
            self.seam_count,
            self.band_count
        );
        seam + band * self.seam_count
    }
}

/// Returns the `YC + 2` row positions used as vertical interpolation knots:
/// a sentinel at -1, the centers of `YC` equal-height bands, and a sentinel
/// at the image height.
pub fn row_band_centers(row_band_count: usize, height: usize) -> Vec<i64> {
    let mut ys = Vec::with_capacity(row_band_count + 2);
    ys.push(-1);
    for i in 1..=row_band_count {
        ys.push(((i as f64 - 0.5) / row_band_count as f64 * height as f64) as i64);
    }
    ys.push(height as i64);
    ys
}

/// Whether a window's statistics are trustworthy enough to assert a
/// correction: mean strictly inside (100, 220) and stddev strictly inside
/// (15, 60). Background, saturated, and near-uniform windows fall outside
/// these bands and would produce unreliable estimates.
pub fn plausible(stats: &MeanStd) -> bool {
    stats.count() > 0
        && stats.mean() > 100.0
        && stats.mean() < 220.0
        && stats.stddev() > 15.0
        && stats.stddev() < 60.0
}

/// Builds the correction grid from the slab-equalized raster.
///
/// Only interior seams and interior bands are measured; the sentinel rows
/// and columns of the grid keep their zero default so interpolation fades
/// corrections out toward the image edges.
pub fn build_correction_grid(image: &GrayRaster, seams: &[i64], ys: &[i64]) -> CorrectionGrid {
    let mut grid = CorrectionGrid::new(seams.len(), ys.len());
    let w = image.width() as i64;
    let h = image.height() as i64;

    for (i, &xmid) in seams.iter().enumerate().take(seams.len() - 1).skip(1) {
        for (iy, &y0) in ys.iter().enumerate().take(ys.len() - 1).skip(1) {
            let mut left = MeanStd::new();
            let mut right = MeanStd::new();

            let ylo = (y0 - BAND_HALF_HEIGHT).max(0);
            let yhi = (y0 + BAND_HALF_HEIGHT).min(h);
            for y in ylo..yhi {
                for dx in SEAM_GUARD..=SEAM_REACH {
                    if xmid - dx >= 0 {
                        left.add(image.get((xmid - dx) as usize, y as usize) as f64);
                    }
                    if xmid + dx < w {
                        right.add(image.get((xmid + dx) as usize, y as usize) as f64);
                    }
                }
            }

            debug!(
                y0,
                xmid,
                left_mean = format!("{:.2}", left.mean()),
                left_std = format!("{:.3}", left.stddev()),
                right_mean = format!("{:.2}", right.mean()),
                right_std = format!("{:.3}", right.stddev()),
                "seam window statistics"
            );

            if plausible(&left) && plausible(&right) {
                let mid = (left.mean() + right.mean()) / 2.0;
                let cell = grid.at_mut(i, iy);
                cell.left = mid - left.mean();
                cell.right = mid - right.mean();
            }
        }
    }
    grid
}
