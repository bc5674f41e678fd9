//! Error types for rasterkit-color

use thiserror::Error;

/// Errors that can occur during color processing operations
#[derive(Debug, Error)]
pub enum ColorError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] rasterkit_core::Error),
}

/// Result type for color operations
pub type ColorResult<T> = Result<T, ColorError>;
