//! Shared raster fixtures for regression tests
//!
//! Small images whose transformed values are known exactly, plus
//! generators for uniform, gradient, and seeded-random rasters. The
//! pixel arrays are exported so tests can also wrap them in a borrowed
//! [`RasterView`](rasterkit_core::RasterView).

use rand::{RngExt, SeedableRng, rngs::StdRng};
use rasterkit_core::{Raster, pixel};

/// Pixel data for [`dot_3x3`]: opaque black with an opaque white center.
pub const DOT_3X3: [u32; 9] = [
    0x000000FF, 0x000000FF, 0x000000FF,
    0x000000FF, 0xFFFFFFFF, 0x000000FF,
    0x000000FF, 0x000000FF, 0x000000FF,
];

/// Pixel data for [`rgb_3x3`]: nine distinct colors, all with alpha 0x80.
pub const RGB_3X3: [u32; 9] = [
    0xFF000080, 0x00FF0080, 0x0000FF80,
    0x80800080, 0xFFFFFF80, 0x00000080,
    0xFF00FF80, 0x00FFFF80, 0xFFFF0080,
];

/// Pixel data for [`row_1x3`]: a single row of three translucent colors.
pub const ROW_1X3: [u32; 3] = [0x40000020, 0x00400020, 0x00004020];

/// 3x3 image: opaque black ring around a single opaque white pixel.
pub fn dot_3x3() -> Raster {
    Raster::from_pixels(3, 3, DOT_3X3.to_vec()).expect("fixture data matches dimensions")
}

/// 3x3 image with nine distinct colors and uniform alpha 0x80.
pub fn rgb_3x3() -> Raster {
    Raster::from_pixels(3, 3, RGB_3X3.to_vec()).expect("fixture data matches dimensions")
}

/// 1-row, 3-column image of translucent primaries.
pub fn row_1x3() -> Raster {
    Raster::from_pixels(3, 1, ROW_1X3.to_vec()).expect("fixture data matches dimensions")
}

/// Image with every pixel set to `val`.
///
/// # Panics
///
/// Panics if `width` or `height` is 0.
pub fn uniform(width: u32, height: u32, val: u32) -> Raster {
    let mut raster = Raster::new(width, height).expect("fixture dimensions must be non-zero");
    raster.fill(val);
    raster
}

/// Image whose channels vary smoothly with position.
///
/// Red tracks the column, green the row, blue is constant, and alpha
/// tracks the diagonal, so no two nearby pixels are equal.
///
/// # Panics
///
/// Panics if `width` or `height` is 0.
pub fn gradient(width: u32, height: u32) -> Raster {
    let mut raster = Raster::new(width, height).expect("fixture dimensions must be non-zero");
    for row in 0..height {
        for col in 0..width {
            let r = ((col * 50) % 256) as u8;
            let g = ((row * 50) % 256) as u8;
            let b = 128;
            let a = (((row + col) * 29) % 256) as u8;
            raster.set_pixel_unchecked(row, col, pixel::compose_rgba(r, g, b, a));
        }
    }
    raster
}

/// Image filled with seeded random pixels.
///
/// The same seed always produces the same image.
///
/// # Panics
///
/// Panics if `width` or `height` is 0.
pub fn random(width: u32, height: u32, seed: u64) -> Raster {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut raster = Raster::new(width, height).expect("fixture dimensions must be non-zero");
    for px in raster.pixels_mut() {
        *px = rng.random();
    }
    raster
}
