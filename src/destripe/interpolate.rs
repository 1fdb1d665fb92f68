//! Bilinear corrector
//!
//! Final pass: every pixel receives a correction interpolated from the four
//! surrounding grid cells. A column's horizontal weight comes from its
//! position between the two bounding seams, a row's vertical weight from
//! its position between the two bounding band centers. Columns that sit
//! exactly on a seam have no enclosing bin and are copied through instead.

use tracing::{debug, warn};

use crate::destripe::grid::CorrectionGrid;
use crate::destripe::raster::types::GrayRaster;

/// Replacement for isolated black pixels on seam-coincident columns. The
/// consuming pipeline treats white as the benign default, so a stray black
/// pixel left by upstream stitching is pushed to a bright value.
const ISOLATED_BLACK_FILL: u8 = 225;

/// Applies the correction grid to the slab-equalized raster, returning the
/// corrected output raster.
pub fn apply_corrections(
    image: &GrayRaster,
    seams: &[i64],
    ys: &[i64],
    grid: &CorrectionGrid,
    row_band_count: usize,
) -> GrayRaster {
    let w = image.width();
    let h = image.height();
    let mut out = GrayRaster::filled(w, h, 0);
    let band_height = h as f64 / row_band_count as f64;

    for x in 0..w {
        let Some(ix) = seam_bin(seams, x as i64) else {
            debug!(x, "column has no seam bin, copying");
            copy_guarded_column(image, &mut out, x);
            continue;
        };
        let alpha = (x as i64 - seams[ix]) as f64 / (seams[ix + 1] - seams[ix]) as f64;

        for y in 0..h {
            let slot = (y as f64 / band_height + 0.5) as usize;
            if (y as i64) < ys[slot] || (y as i64) > ys[slot + 1] {
                warn!(
                    y,
                    slot,
                    band_lo = ys[slot],
                    band_hi = ys[slot + 1],
                    "row outside its band slot"
                );
            }
            let beta = (y as i64 - ys[slot]) as f64 / (ys[slot + 1] - ys[slot]) as f64;

            let incr = (1.0 - alpha) * (1.0 - beta) * grid.at(ix, slot).right
                + alpha * (1.0 - beta) * grid.at(ix + 1, slot).left
                + (1.0 - alpha) * beta * grid.at(ix, slot + 1).right
                + alpha * beta * grid.at(ix + 1, slot + 1).left;

            let pix = (image.get(x, y) as i64 + incr.round() as i64).clamp(0, 255);
            out.set(x, y, pix as u8);
        }
    }
    out
}

/// Finds `ix` with `seams[ix] < x < seams[ix + 1]`. A column sitting
/// exactly on a seam belongs to no bin.
fn seam_bin(seams: &[i64], x: i64) -> Option<usize> {
    (0..seams.len() - 1).find(|&ix| seams[ix] < x && x < seams[ix + 1])
}

/// Copies one column unchanged except for the isolated-black substitution:
/// a pixel of exactly 0 with at least one nonzero horizontal neighbor is
/// assumed to be a stitching artifact rather than real content.
fn copy_guarded_column(src: &GrayRaster, dst: &mut GrayRaster, x: usize) {
    for y in 0..src.height() {
        let mut pix = src.get(x, y);
        if pix == 0 && has_nonzero_neighbor(src, x, y) {
            pix = ISOLATED_BLACK_FILL;
        }
        dst.set(x, y, pix);
    }
}

/// Boundary columns only consult the neighbor that exists.
fn has_nonzero_neighbor(image: &GrayRaster, x: usize, y: usize) -> bool {
    let left = x > 0 && image.get(x - 1, y) != 0;
    let right = x + 1 < image.width() && image.get(x + 1, y) != 0;
    left || right
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::destripe::grid::row_band_centers;

    #[test]
    fn seam_bin_excludes_exact_seam_positions() {
        let seams = vec![-1, 5, 10];
        assert_eq!(seam_bin(&seams, 0), Some(0));
        assert_eq!(seam_bin(&seams, 4), Some(0));
        assert_eq!(seam_bin(&seams, 5), None);
        assert_eq!(seam_bin(&seams, 6), Some(1));
        assert_eq!(seam_bin(&seams, 9), Some(1));
        assert_eq!(seam_bin(&seams, 10), None);
    }

    #[test]
    fn bilinear_weights_sum_to_one() {
        for ai in 0..=10 {
            for bi in 0..=10 {
                let alpha = ai as f64 / 10.0;
                let beta = bi as f64 / 10.0;
                let total = (1.0 - alpha) * (1.0 - beta)
                    + alpha * (1.0 - beta)
                    + (1.0 - alpha) * beta
                    + alpha * beta;
                assert!((total - 1.0).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn zero_grid_copies_interior_columns_verbatim() {
        let mut image = GrayRaster::filled(8, 8, 90);
        image.set(3, 3, 0); // zeros survive on interior columns
        let seams = vec![-1, 8];
        let ys = row_band_centers(2, 8);
        let grid = CorrectionGrid::new(seams.len(), ys.len());
        let out = apply_corrections(&image, &seams, &ys, &grid, 2);
        assert_eq!(out, image);
    }

    #[test]
    fn seam_column_substitutes_isolated_black_pixels() {
        let mut image = GrayRaster::filled(10, 3, 80);
        image.set(5, 0, 0); // neighbors at 80: artifact
        image.set(4, 1, 0);
        image.set(5, 1, 0);
        image.set(6, 1, 0); // fully black neighborhood: genuine content
        let seams = vec![-1, 5, 10];
        let ys = row_band_centers(1, 3);
        let grid = CorrectionGrid::new(seams.len(), ys.len());
        let out = apply_corrections(&image, &seams, &ys, &grid, 1);
        assert_eq!(out.get(5, 0), ISOLATED_BLACK_FILL);
        assert_eq!(out.get(5, 1), 0);
    }

    #[test]
    fn boundary_columns_check_only_existing_neighbors() {
        let mut image = GrayRaster::filled(3, 1, 50);
        image.set(0, 0, 0);
        image.set(2, 0, 0);
        assert!(has_nonzero_neighbor(&image, 0, 0));
        assert!(has_nonzero_neighbor(&image, 2, 0));
        let mut lone = GrayRaster::filled(1, 1, 0);
        assert!(!has_nonzero_neighbor(&lone, 0, 0));
        lone.set(0, 0, 9);
        assert!(!has_nonzero_neighbor(&lone, 0, 0));
    }

    #[test]
    fn corrections_are_clamped_to_byte_range() {
        let image = GrayRaster::filled(4, 4, 250);
        let seams = vec![-1, 2, 4];
        let ys = row_band_centers(1, 4);
        let mut grid = CorrectionGrid::new(seams.len(), ys.len());
        // force a huge positive correction everywhere around seam 1
        for band in 0..ys.len() {
            let cell = grid.at_mut(1, band);
            cell.left = 500.0;
            cell.right = 500.0;
        }
        let out = apply_corrections(&image, &seams, &ys, &grid, 1);
        for x in 0..4 {
            for y in 0..4 {
                // every interior column gets a positive share of the 500
                // and saturates; the seam column x=2 is copied through
                let expected = if x == 2 { 250 } else { 255 };
                assert_eq!(out.get(x, y), expected);
            }
        }
    }
}
