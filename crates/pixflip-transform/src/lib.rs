//! pixflip-transform - Orientation transforms for pixflip
//!
//! This crate provides the orthogonal geometric transformations of a
//! [`PixelGrid`](pixflip_core::PixelGrid):
//!
//! - Horizontal and vertical flips
//! - Transpose (main diagonal) and anti-diagonal mirror
//! - Orthogonal rotations (90, 180, 270 degrees)

mod error;
pub mod orient;

pub use error::{TransformError, TransformResult};
pub use orient::{
    flip_lr, flip_tb, mirror_anti_diagonal, rotate_90, rotate_180, rotate_orth, transpose,
};
