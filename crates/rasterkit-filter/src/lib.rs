//! rasterkit-filter - Image filtering operations
//!
//! This crate provides pixel-averaging filters:
//!
//! - Box blur over a clamped square window ([`blur`], [`blur_into`])
//! - Single-pixel windowed mean ([`blur_pixel`])
//!
//! The window is clamped independently on all four sides, so border
//! pixels average only the pixels that exist. Color channels are blurred;
//! alpha is copied from the window center.

pub mod blur;
mod error;

pub use error::{FilterError, FilterResult};

// Re-export commonly used functions
pub use blur::{blur, blur_into, blur_pixel};
