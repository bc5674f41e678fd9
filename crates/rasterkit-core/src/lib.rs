//! Rasterkit Core - Basic data structures for image processing
//!
//! This crate provides the fundamental data structures used throughout
//! the rasterkit image processing library:
//!
//! - [`Raster`] - The owned image container
//! - [`RasterView`] - A borrowed, copyable view of pixel data
//! - [`RasterRead`] - Read-only access shared by both containers
//! - [`pixel`] - Helper functions for packed 32-bit RGBA pixels

pub mod error;
pub mod raster;

pub use error::{Error, Result};
pub use raster::{Raster, RasterRead, RasterView};

/// Helper functions for 32-bit RGBA pixels.
///
/// # Pixel format
///
/// 32-bit pixels are stored as `0xRRGGBBAA` (red in MSB, alpha in LSB).
pub mod pixel {
    /// Shift amounts for extracting color channels
    pub const RED_SHIFT: u32 = 24;
    pub const GREEN_SHIFT: u32 = 16;
    pub const BLUE_SHIFT: u32 = 8;
    pub const ALPHA_SHIFT: u32 = 0;

    /// Extract red component from a 32-bit pixel.
    #[inline]
    pub fn red(pixel: u32) -> u8 {
        ((pixel >> RED_SHIFT) & 0xff) as u8
    }

    /// Extract green component from a 32-bit pixel.
    #[inline]
    pub fn green(pixel: u32) -> u8 {
        ((pixel >> GREEN_SHIFT) & 0xff) as u8
    }

    /// Extract blue component from a 32-bit pixel.
    #[inline]
    pub fn blue(pixel: u32) -> u8 {
        ((pixel >> BLUE_SHIFT) & 0xff) as u8
    }

    /// Extract alpha component from a 32-bit pixel.
    #[inline]
    pub fn alpha(pixel: u32) -> u8 {
        ((pixel >> ALPHA_SHIFT) & 0xff) as u8
    }

    /// Compose a 32-bit RGB pixel (alpha = 255).
    #[inline]
    pub fn compose_rgb(r: u8, g: u8, b: u8) -> u32 {
        ((r as u32) << RED_SHIFT)
            | ((g as u32) << GREEN_SHIFT)
            | ((b as u32) << BLUE_SHIFT)
            | (255 << ALPHA_SHIFT)
    }

    /// Compose a 32-bit RGBA pixel.
    #[inline]
    pub fn compose_rgba(r: u8, g: u8, b: u8, a: u8) -> u32 {
        ((r as u32) << RED_SHIFT)
            | ((g as u32) << GREEN_SHIFT)
            | ((b as u32) << BLUE_SHIFT)
            | ((a as u32) << ALPHA_SHIFT)
    }

    /// Extract RGB values from a 32-bit pixel.
    #[inline]
    pub fn extract_rgb(pixel: u32) -> (u8, u8, u8) {
        (red(pixel), green(pixel), blue(pixel))
    }

    /// Extract RGBA values from a 32-bit pixel.
    #[inline]
    pub fn extract_rgba(pixel: u32) -> (u8, u8, u8, u8) {
        (red(pixel), green(pixel), blue(pixel), alpha(pixel))
    }

    /// Average a non-empty slice of RGBA pixels channel-wise.
    ///
    /// Each channel, alpha included, is summed separately and divided by
    /// the pixel count with truncating integer division.
    ///
    /// # Panics
    ///
    /// Panics if `pixels` is empty.
    pub fn average(pixels: &[u32]) -> u32 {
        assert!(!pixels.is_empty(), "cannot average zero pixels");

        let mut r = 0u64;
        let mut g = 0u64;
        let mut b = 0u64;
        let mut a = 0u64;
        for &p in pixels {
            r += red(p) as u64;
            g += green(p) as u64;
            b += blue(p) as u64;
            a += alpha(p) as u64;
        }

        let n = pixels.len() as u64;
        compose_rgba(
            (r / n) as u8,
            (g / n) as u8,
            (b / n) as u8,
            (a / n) as u8,
        )
    }

}
