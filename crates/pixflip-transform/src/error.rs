//! Error types for pixflip-transform

use thiserror::Error;

/// Errors that can occur during orientation transforms
#[derive(Debug, Error)]
pub enum TransformError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] pixflip_core::Error),
}

/// Result type for transform operations
pub type TransformResult<T> = Result<T, TransformError>;
