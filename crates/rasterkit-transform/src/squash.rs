//! Image squashing by integer point sampling
//!
//! Shrinks an image by keeping every `x_factor`-th column and every
//! `y_factor`-th row, starting at the origin. Each output pixel is a
//! copy of one source pixel; there is no averaging or interpolation.
//!
//! # Examples
//!
//! ```
//! use rasterkit_core::Raster;
//! use rasterkit_transform::squash;
//!
//! let src = Raster::from_pixels(4, 2, vec![1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
//! let out = squash(&src, 2, 2).unwrap();
//! assert_eq!(out.width(), 2);
//! assert_eq!(out.height(), 1);
//! assert_eq!(out.pixels(), &[1, 3]);
//! ```

use crate::error::{TransformError, TransformResult};
use rasterkit_core::{Raster, RasterRead};

/// Validate that both sampling factors are nonzero.
fn check_factors(x_factor: u32, y_factor: u32) -> TransformResult<()> {
    if x_factor == 0 || y_factor == 0 {
        return Err(TransformError::InvalidScaleFactor(format!(
            "sampling factors must be nonzero: ({}, {})",
            x_factor, y_factor
        )));
    }
    Ok(())
}

/// Squash an image by integer sampling factors.
///
/// The output has `ceil(width / x_factor)` columns and
/// `ceil(height / y_factor)` rows, so every output position samples an
/// in-bounds source pixel: output (row, col) is the source pixel at
/// (row * y_factor, col * x_factor).
///
/// # Errors
///
/// Returns [`TransformError::InvalidScaleFactor`] if either factor is 0.
pub fn squash(src: &impl RasterRead, x_factor: u32, y_factor: u32) -> TransformResult<Raster> {
    check_factors(x_factor, y_factor)?;

    let out_width = src.width().div_ceil(x_factor);
    let out_height = src.height().div_ceil(y_factor);
    let mut out = Raster::new(out_width, out_height)?;
    fill_squash(src, &mut out, x_factor, y_factor);
    Ok(out)
}

/// Squash into a caller-sized output raster.
///
/// The output keeps its own dimensions: for every output position
/// (row, col), the source pixel at (row * y_factor, col * x_factor) is
/// copied when that position exists. Output cells whose sample position
/// falls outside the input keep their previous contents.
///
/// # Errors
///
/// Returns [`TransformError::InvalidScaleFactor`] if either factor is 0.
pub fn squash_into(
    src: &impl RasterRead,
    dst: &mut Raster,
    x_factor: u32,
    y_factor: u32,
) -> TransformResult<()> {
    check_factors(x_factor, y_factor)?;
    fill_squash(src, dst, x_factor, y_factor);
    Ok(())
}

/// Copy sampled source pixels into `dst`; sample positions are computed
/// in u64 so large factors cannot overflow.
fn fill_squash(src: &impl RasterRead, dst: &mut Raster, x_factor: u32, y_factor: u32) {
    for row in 0..dst.height() {
        let src_row = u64::from(row) * u64::from(y_factor);
        if src_row >= u64::from(src.height()) {
            continue;
        }
        for col in 0..dst.width() {
            let src_col = u64::from(col) * u64::from(x_factor);
            if src_col >= u64::from(src.width()) {
                continue;
            }
            let px = src.get_pixel_unchecked(src_row as u32, src_col as u32);
            dst.set_pixel_unchecked(row, col, px);
        }
    }
}
