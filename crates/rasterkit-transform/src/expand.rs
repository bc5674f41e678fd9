//! Image expansion by pixel-pair averaging
//!
//! Doubles both dimensions of an image. Output positions with even row
//! and column copy the source pixel; odd rows and columns fall between
//! source pixels and average the two or four surrounding ones. Averages
//! cover all four channels, alpha included, with truncating division,
//! and shrink to the pixels that exist at the right and bottom edges.

use crate::error::TransformResult;
use rasterkit_core::{Error, Raster, RasterRead, pixel};

/// Expand an image to twice its width and height.
///
/// # Errors
///
/// Returns an error if the doubled dimensions cannot be allocated.
pub fn expand(src: &impl RasterRead) -> TransformResult<Raster> {
    let mut out = Raster::new(src.width() * 2, src.height() * 2)?;
    fill_expand(src, &mut out);
    Ok(out)
}

/// Expand into a caller-allocated output raster.
///
/// # Errors
///
/// Returns an error if `dst` is not exactly twice the source size in
/// both dimensions.
pub fn expand_into(src: &impl RasterRead, dst: &mut Raster) -> TransformResult<()> {
    let expected = (src.width() * 2, src.height() * 2);
    if (dst.width(), dst.height()) != expected {
        return Err(Error::DimensionMismatch {
            expected,
            actual: (dst.width(), dst.height()),
        }
        .into());
    }

    fill_expand(src, dst);
    Ok(())
}

/// Write the expanded pixels; `dst` must be exactly twice the source
/// size in both dimensions.
fn fill_expand(src: &impl RasterRead, dst: &mut Raster) {
    let src_w = src.width();
    let src_h = src.height();

    for row in 0..dst.height() {
        let src_row = row / 2;
        let row_odd = row % 2 == 1;
        for col in 0..dst.width() {
            let src_col = col / 2;
            let col_odd = col % 2 == 1;

            // Collect the source pixel plus the in-bounds neighbors an
            // odd coordinate falls between.
            let mut neighbors = [0u32; 4];
            let mut n = 0;
            neighbors[n] = src.get_pixel_unchecked(src_row, src_col);
            n += 1;
            if col_odd && src_col + 1 < src_w {
                neighbors[n] = src.get_pixel_unchecked(src_row, src_col + 1);
                n += 1;
            }
            if row_odd && src_row + 1 < src_h {
                neighbors[n] = src.get_pixel_unchecked(src_row + 1, src_col);
                n += 1;
            }
            if row_odd && col_odd && src_row + 1 < src_h && src_col + 1 < src_w {
                neighbors[n] = src.get_pixel_unchecked(src_row + 1, src_col + 1);
                n += 1;
            }

            dst.set_pixel_unchecked(row, col, pixel::average(&neighbors[..n]));
        }
    }
}
