//! RASTER - The main image container
//!
//! The `Raster` structure is the fundamental image type in rasterkit.
//! It holds a dense grid of 32-bit RGBA pixels.
//!
//! # Pixel layout
//!
//! - Each pixel is one 32-bit word, stored as `0xRRGGBBAA`
//! - Pixels are stored in row-major order: the pixel at (row, col)
//!   lives at buffer index `row * width + col`
//! - Rows are contiguous, with no padding between them
//!
//! # Ownership model
//!
//! `Raster` owns its pixel buffer and is the only mutable container.
//! [`RasterView`] borrows a buffer without copying; [`Raster::as_view`]
//! and [`RasterView::to_raster`] convert between them. Read access is
//! shared through the [`RasterRead`] trait, so transforms accept either
//! container.

use crate::error::{Error, Result};

/// Read-only access to a grid of 32-bit RGBA pixels.
///
/// Implemented by [`Raster`] and [`RasterView`]. Functions that only
/// read image data take `&impl RasterRead` so owned and borrowed
/// containers both flow in.
pub trait RasterRead {
    /// Get the image width in pixels.
    fn width(&self) -> u32;

    /// Get the image height in pixels.
    fn height(&self) -> u32;

    /// Get raw access to the pixel data in row-major order.
    fn pixels(&self) -> &[u32];

    /// Compute the buffer index of the pixel at (row, col).
    ///
    /// Valid only for `row < height` and `col < width`.
    #[inline]
    fn index(&self, row: u32, col: u32) -> usize {
        (row as usize) * (self.width() as usize) + (col as usize)
    }

    /// Get the pixel value at (row, col).
    ///
    /// Returns `None` if coordinates are out of bounds.
    fn get_pixel(&self, row: u32, col: u32) -> Option<u32> {
        if row >= self.height() || col >= self.width() {
            return None;
        }
        Some(self.pixels()[self.index(row, col)])
    }

    /// Get a pixel value without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `row >= height` or `col >= width`.
    #[inline]
    fn get_pixel_unchecked(&self, row: u32, col: u32) -> u32 {
        debug_assert!(
            row < self.height() && col < self.width(),
            "pixel ({}, {}) out of bounds for {}x{}",
            row,
            col,
            self.width(),
            self.height()
        );
        self.pixels()[self.index(row, col)]
    }

    /// Get one full row of pixels.
    ///
    /// # Panics
    ///
    /// Panics if `row >= height`.
    #[inline]
    fn row(&self, row: u32) -> &[u32] {
        let start = (row as usize) * (self.width() as usize);
        let end = start + self.width() as usize;
        &self.pixels()[start..end]
    }

    /// Check if two rasters have the same width and height.
    fn sizes_equal(&self, other: &impl RasterRead) -> bool {
        self.width() == other.width() && self.height() == other.height()
    }

    /// Create a new zero-filled `Raster` with the same dimensions.
    fn create_template(&self) -> Raster {
        let data_size = (self.width() as usize) * (self.height() as usize);
        Raster {
            width: self.width(),
            height: self.height(),
            data: vec![0u32; data_size],
        }
    }
}

/// RASTER - Main image container
///
/// `Raster` owns a dense row-major buffer of 32-bit RGBA pixels.
///
/// # Examples
///
/// ```
/// use rasterkit_core::{Raster, RasterRead};
///
/// let raster = Raster::new(640, 480).unwrap();
/// assert_eq!(raster.width(), 640);
/// assert_eq!(raster.height(), 480);
/// assert_eq!(raster.get_pixel(0, 0), Some(0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// The pixel data in row-major order
    data: Vec<u32>,
}

impl Raster {
    /// Create a new raster with the specified dimensions.
    ///
    /// All pixels are initialized to zero (transparent black).
    ///
    /// # Arguments
    ///
    /// * `width` - Width in pixels (must be > 0)
    /// * `height` - Height in pixels (must be > 0)
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }

        let data_size = (width as usize) * (height as usize);
        Ok(Raster {
            width,
            height,
            data: vec![0u32; data_size],
        })
    }

    /// Create a raster that takes ownership of an existing pixel buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0, or
    /// [`Error::InvalidPixelCount`] if the buffer length is not
    /// `width * height`.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<u32>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }

        let expected = (width as usize) * (height as usize);
        if pixels.len() != expected {
            return Err(Error::InvalidPixelCount {
                expected,
                actual: pixels.len(),
            });
        }

        Ok(Raster {
            width,
            height,
            data: pixels,
        })
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get raw access to the pixel data.
    #[inline]
    pub fn pixels(&self) -> &[u32] {
        &self.data
    }

    /// Get raw mutable access to the pixel data.
    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [u32] {
        &mut self.data
    }

    /// Get mutable access to one full row of pixels.
    ///
    /// # Panics
    ///
    /// Panics if `row >= height`.
    #[inline]
    pub fn row_mut(&mut self, row: u32) -> &mut [u32] {
        let start = (row as usize) * (self.width as usize);
        let end = start + self.width as usize;
        &mut self.data[start..end]
    }

    /// Set every pixel to the same value.
    pub fn fill(&mut self, val: u32) {
        self.data.fill(val);
    }

    /// Set a pixel value at (row, col).
    ///
    /// # Errors
    ///
    /// Returns [`Error::PixelOutOfBounds`] if coordinates are out of bounds.
    pub fn set_pixel(&mut self, row: u32, col: u32, val: u32) -> Result<()> {
        if row >= self.height || col >= self.width {
            return Err(Error::PixelOutOfBounds {
                row,
                col,
                width: self.width,
                height: self.height,
            });
        }

        let idx = (row as usize) * (self.width as usize) + (col as usize);
        self.data[idx] = val;
        Ok(())
    }

    /// Set a pixel value without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `row >= height` or `col >= width`.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, row: u32, col: u32, val: u32) {
        debug_assert!(
            row < self.height && col < self.width,
            "pixel ({}, {}) out of bounds for {}x{}",
            row,
            col,
            self.width,
            self.height
        );
        let idx = (row as usize) * (self.width as usize) + (col as usize);
        self.data[idx] = val;
    }

    /// Borrow this raster as a [`RasterView`].
    #[inline]
    pub fn as_view(&self) -> RasterView<'_> {
        RasterView {
            width: self.width,
            height: self.height,
            data: &self.data,
        }
    }
}

impl RasterRead for Raster {
    #[inline]
    fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn pixels(&self) -> &[u32] {
        &self.data
    }
}

/// A borrowed, read-only view of pixel data.
///
/// `RasterView` pairs dimensions with a borrowed row-major buffer, so
/// static fixture data or a slice of an existing [`Raster`] can be read
/// through [`RasterRead`] without copying. Views are `Copy`.
///
/// # Examples
///
/// ```
/// use rasterkit_core::{RasterRead, RasterView};
///
/// static PIXELS: [u32; 4] = [0xFF0000FF, 0x00FF00FF, 0x0000FFFF, 0xFFFFFFFF];
///
/// let view = RasterView::new(2, 2, &PIXELS).unwrap();
/// assert_eq!(view.get_pixel(1, 0), Some(0x0000FFFF));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RasterView<'a> {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Borrowed pixel data in row-major order
    data: &'a [u32],
}

impl<'a> RasterView<'a> {
    /// Create a view over an existing pixel buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0, or
    /// [`Error::InvalidPixelCount`] if the buffer length is not
    /// `width * height`.
    pub fn new(width: u32, height: u32, pixels: &'a [u32]) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }

        let expected = (width as usize) * (height as usize);
        if pixels.len() != expected {
            return Err(Error::InvalidPixelCount {
                expected,
                actual: pixels.len(),
            });
        }

        Ok(RasterView {
            width,
            height,
            data: pixels,
        })
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get raw access to the pixel data.
    #[inline]
    pub fn pixels(&self) -> &[u32] {
        self.data
    }

    /// Copy the viewed pixels into an owning [`Raster`].
    pub fn to_raster(&self) -> Raster {
        Raster {
            width: self.width,
            height: self.height,
            data: self.data.to_vec(),
        }
    }
}

impl RasterRead for RasterView<'_> {
    #[inline]
    fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn pixels(&self) -> &[u32] {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ---- construction tests ----

    #[test]
    fn test_new_valid() {
        let raster = Raster::new(4, 3).unwrap();
        assert_eq!(raster.width(), 4);
        assert_eq!(raster.height(), 3);
        assert_eq!(raster.pixels().len(), 12);
        assert!(raster.pixels().iter().all(|&p| p == 0));
    }

    #[test]
    fn test_new_zero_dimensions() {
        assert!(matches!(
            Raster::new(0, 10),
            Err(Error::InvalidDimension { width: 0, height: 10 })
        ));
        assert!(matches!(
            Raster::new(10, 0),
            Err(Error::InvalidDimension { width: 10, height: 0 })
        ));
        assert!(Raster::new(0, 0).is_err());
    }

    #[test]
    fn test_from_pixels() {
        let raster = Raster::from_pixels(2, 2, vec![1, 2, 3, 4]).unwrap();
        assert_eq!(raster.get_pixel(0, 0), Some(1));
        assert_eq!(raster.get_pixel(0, 1), Some(2));
        assert_eq!(raster.get_pixel(1, 0), Some(3));
        assert_eq!(raster.get_pixel(1, 1), Some(4));
    }

    #[test]
    fn test_from_pixels_wrong_count() {
        assert!(matches!(
            Raster::from_pixels(2, 2, vec![1, 2, 3]),
            Err(Error::InvalidPixelCount {
                expected: 4,
                actual: 3
            })
        ));
    }

    #[test]
    fn test_create_template() {
        let mut src = Raster::new(5, 4).unwrap();
        src.fill(0xFF00FF00);

        let template = src.create_template();
        assert_eq!(template.width(), 5);
        assert_eq!(template.height(), 4);
        assert!(template.pixels().iter().all(|&p| p == 0));
    }

    // ---- access tests ----

    #[test]
    fn test_index_row_major() {
        let raster = Raster::new(4, 3).unwrap();
        assert_eq!(raster.index(0, 0), 0);
        assert_eq!(raster.index(0, 3), 3);
        assert_eq!(raster.index(1, 0), 4);
        assert_eq!(raster.index(2, 3), 11);
    }

    #[test]
    fn test_get_pixel_bounds() {
        let raster = Raster::from_pixels(3, 2, vec![10, 11, 12, 13, 14, 15]).unwrap();
        assert_eq!(raster.get_pixel(1, 2), Some(15));
        assert_eq!(raster.get_pixel(2, 0), None);
        assert_eq!(raster.get_pixel(0, 3), None);
    }

    #[test]
    fn test_set_pixel() {
        let mut raster = Raster::new(3, 3).unwrap();
        raster.set_pixel(1, 2, 0xDEADBEEF).unwrap();
        assert_eq!(raster.get_pixel(1, 2), Some(0xDEADBEEF));
        assert_eq!(raster.get_pixel(2, 1), Some(0));
    }

    #[test]
    fn test_set_pixel_out_of_bounds() {
        let mut raster = Raster::new(3, 3).unwrap();
        assert!(matches!(
            raster.set_pixel(3, 0, 1),
            Err(Error::PixelOutOfBounds { row: 3, col: 0, .. })
        ));
        assert!(raster.set_pixel(0, 3, 1).is_err());
    }

    #[test]
    fn test_unchecked_roundtrip() {
        let mut raster = Raster::new(2, 2).unwrap();
        raster.set_pixel_unchecked(1, 0, 42);
        assert_eq!(raster.get_pixel_unchecked(1, 0), 42);
    }

    #[test]
    fn test_row_slices() {
        let mut raster = Raster::from_pixels(3, 2, vec![1, 2, 3, 4, 5, 6]).unwrap();
        assert_eq!(raster.row(0), &[1, 2, 3]);
        assert_eq!(raster.row(1), &[4, 5, 6]);

        raster.row_mut(1).copy_from_slice(&[7, 8, 9]);
        assert_eq!(raster.row(1), &[7, 8, 9]);
    }

    #[test]
    fn test_fill() {
        let mut raster = Raster::new(3, 3).unwrap();
        raster.fill(0x12345678);
        assert!(raster.pixels().iter().all(|&p| p == 0x12345678));
    }

    #[test]
    fn test_sizes_equal() {
        let a = Raster::new(4, 3).unwrap();
        let b = Raster::new(4, 3).unwrap();
        let c = Raster::new(3, 4).unwrap();

        assert!(a.sizes_equal(&b));
        assert!(!a.sizes_equal(&c)); // transposed dimensions differ
    }

    #[test]
    fn test_raster_equality() {
        let a = Raster::from_pixels(2, 1, vec![5, 6]).unwrap();
        let b = Raster::from_pixels(2, 1, vec![5, 6]).unwrap();
        let c = Raster::from_pixels(1, 2, vec![5, 6]).unwrap();

        assert_eq!(a, b);
        // same buffer, different shape
        assert_ne!(a, c);
    }

    // ---- view tests ----

    #[test]
    fn test_view_over_static_data() {
        static PIXELS: [u32; 6] = [1, 2, 3, 4, 5, 6];

        let view = RasterView::new(3, 2, &PIXELS).unwrap();
        assert_eq!(view.width(), 3);
        assert_eq!(view.height(), 2);
        assert_eq!(view.get_pixel(1, 1), Some(5));
        assert_eq!(view.get_pixel(2, 0), None);
    }

    #[test]
    fn test_view_validation() {
        let pixels = [1u32, 2, 3];
        assert!(RasterView::new(2, 2, &pixels).is_err());
        assert!(RasterView::new(0, 3, &pixels).is_err());
    }

    #[test]
    fn test_view_is_copy() {
        let raster = Raster::from_pixels(2, 2, vec![1, 2, 3, 4]).unwrap();
        let view = raster.as_view();
        let copy = view;
        // both copies read the same underlying buffer
        assert_eq!(view.get_pixel(0, 1), copy.get_pixel(0, 1));
    }

    #[test]
    fn test_view_to_raster() {
        let src = Raster::from_pixels(2, 2, vec![9, 8, 7, 6]).unwrap();
        let copied = src.as_view().to_raster();
        assert_eq!(copied, src);
    }
}
