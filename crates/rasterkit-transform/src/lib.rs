//! rasterkit-transform - Geometric transformations
//!
//! This crate provides the geometric raster transforms:
//!
//! - Squashing by integer point sampling ([`squash`], [`squash_into`])
//! - Expansion to double size by pixel-pair averaging ([`expand`],
//!   [`expand_into`])
//!
//! Both come in an allocating form and an `_into` form that writes to a
//! caller-allocated raster.

mod error;
pub mod expand;
pub mod squash;

pub use error::{TransformError, TransformResult};
pub use expand::{expand, expand_into};
pub use squash::{squash, squash_into};
