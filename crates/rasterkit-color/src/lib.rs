//! rasterkit-color - Color channel operations
//!
//! This crate provides channel-level color transforms:
//!
//! - Channel rotation (cycling B -> R -> G -> B, alpha untouched)
//!
//! The rotation is available per pixel ([`rotate_pixel`]) and per image
//! ([`rotate`] / [`rotate_into`]).

mod error;
pub mod rotate;

// Types
pub use error::{ColorError, ColorResult};

// Functions
pub use rotate::{rotate, rotate_into, rotate_pixel};
