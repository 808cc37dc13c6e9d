//! Error types for the mirror operation

use pixflip_io::IoError;
use pixflip_transform::TransformError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by [`mirror`](crate::mirror) and its variants
#[derive(Debug, Error)]
pub enum MirrorError {
    /// The input is missing, unreadable or not a recognized image
    #[error("failed to decode '{}': {source}", path.display())]
    Decode { path: PathBuf, source: IoError },

    /// The output could not be encoded or written
    #[error("failed to encode '{}': {source}", path.display())]
    Encode { path: PathBuf, source: IoError },

    /// Channel or geometry transform failed
    #[error("transform error: {0}")]
    Transform(#[from] TransformError),
}

impl From<pixflip_core::Error> for MirrorError {
    fn from(err: pixflip_core::Error) -> Self {
        MirrorError::Transform(TransformError::Core(err))
    }
}

/// Result type for mirror operations
pub type MirrorResult<T> = Result<T, MirrorError>;
