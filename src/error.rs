//! # Error Types
//!
//! This module defines error types used throughout the glint library.

use thiserror::Error;

/// Main error type for glint operations
#[derive(Debug, Error)]
pub enum GlintError {
    /// Width or height of zero requested
    #[error("Invalid dimensions: {width}x{height} (both must be positive)")]
    InvalidDimension { width: u32, height: u32 },

    /// Pixel buffer length does not match the declared dimensions
    #[error("Encoding error: pixel buffer is {actual} bytes, expected {expected} for {width}x{height} RGBA")]
    Encoding {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    /// I/O error wrapper (also covers deflate failures)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
