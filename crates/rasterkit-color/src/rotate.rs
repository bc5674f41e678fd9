//! Color channel rotation
//!
//! Cycles the color channels of every pixel one step: blue becomes red,
//! red becomes green, green becomes blue. Alpha passes through untouched.
//! Three applications restore the original image.
//!
//! # Examples
//!
//! ```
//! use rasterkit_color::rotate_pixel;
//!
//! // Pure red cycles to pure green
//! assert_eq!(rotate_pixel(0xFF0000FF), 0x00FF00FF);
//! ```

use crate::error::ColorResult;
use rasterkit_core::{Error, Raster, RasterRead, pixel};

// =============================================================================
// Pixel-level functions
// =============================================================================

/// Cycle the color channels of a single pixel.
///
/// The output red is the input blue, the output green is the input red,
/// and the output blue is the input green. Alpha is unchanged.
#[inline]
pub fn rotate_pixel(pixel: u32) -> u32 {
    let (r, g, b, a) = pixel::extract_rgba(pixel);
    pixel::compose_rgba(b, r, g, a)
}

// =============================================================================
// Image-level functions
// =============================================================================

/// Cycle the color channels of every pixel.
///
/// Returns a new raster with the same dimensions as the source.
pub fn rotate(src: &impl RasterRead) -> ColorResult<Raster> {
    let mut out = src.create_template();
    rotate_into(src, &mut out)?;
    Ok(out)
}

/// Cycle color channels into a caller-allocated output raster.
///
/// # Errors
///
/// Returns an error if `dst` does not match the source dimensions.
pub fn rotate_into(src: &impl RasterRead, dst: &mut Raster) -> ColorResult<()> {
    if !src.sizes_equal(dst) {
        return Err(Error::DimensionMismatch {
            expected: (src.width(), src.height()),
            actual: (dst.width(), dst.height()),
        }
        .into());
    }

    for (out, &px) in dst.pixels_mut().iter_mut().zip(src.pixels()) {
        *out = rotate_pixel(px);
    }

    Ok(())
}
