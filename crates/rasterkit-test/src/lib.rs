//! rasterkit-test - Regression test framework for rasterkit
//!
//! This crate provides the shared harness used by the `*_reg` integration
//! tests: a [`RegParams`] tracker that numbers comparisons and reports
//! failures, and a [`fixtures`] module with small raster images whose
//! transformed values are known exactly.
//!
//! # Usage
//!
//! ```
//! use rasterkit_test::{RegParams, fixtures};
//!
//! let mut rp = RegParams::new("example");
//! let image = fixtures::dot_3x3();
//! rp.compare_values(3.0, image.width() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```

mod params;

pub mod fixtures;

pub use params::RegParams;
