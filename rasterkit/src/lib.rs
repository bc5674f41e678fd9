//! Rasterkit - RGBA raster processing for Rust
//!
//! # Overview
//!
//! Rasterkit operates on dense 32-bit RGBA rasters and provides:
//!
//! - Core raster types and pixel packing (`rasterkit-core`)
//! - Size reduction by point sampling and 2x expansion (`rasterkit-transform`)
//! - Box blur over a clamped square window (`rasterkit-filter`)
//! - Color channel rotation (`rasterkit-color`)
//!
//! # Example
//!
//! ```
//! use rasterkit::{Raster, RasterRead, pixel};
//!
//! let mut image = Raster::new(4, 4).unwrap();
//! image.fill(pixel::compose_rgba(200, 100, 50, 255));
//!
//! // A uniform image is unchanged by blurring
//! let blurred = rasterkit::filter::blur(&image, 1).unwrap();
//! assert_eq!(
//!     blurred.get_pixel(2, 2),
//!     Some(pixel::compose_rgba(200, 100, 50, 255))
//! );
//! ```

// Re-export core types (primary data structures used everywhere)
pub use rasterkit_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use rasterkit_color as color;
pub use rasterkit_filter as filter;
pub use rasterkit_transform as transform;
