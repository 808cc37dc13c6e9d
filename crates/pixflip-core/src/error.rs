//! Error types for pixflip-core
//!
//! Provides a unified error type for all operations in the core crate.
//! Each variant captures enough context for diagnostics without exposing
//! the grid's storage layout.

use thiserror::Error;

/// pixflip-core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid image dimensions
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Channel count outside 1..=4
    #[error("invalid channel count: {0}")]
    InvalidChannels(u32),

    /// Sample buffer does not match the declared shape
    #[error("sample buffer length mismatch: expected {expected}, got {actual}")]
    DataLength { expected: usize, actual: usize },

    /// Index out of bounds
    #[error("index out of bounds: {index} >= {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Pixel position outside the grid
    #[error("pixel ({row}, {col}) outside {height}x{width} grid")]
    PixelOutOfBounds {
        row: u32,
        col: u32,
        height: u32,
        width: u32,
    },
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;
