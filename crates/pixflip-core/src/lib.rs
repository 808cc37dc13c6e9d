//! pixflip-core - Basic data structures for pixflip
//!
//! This crate provides the data model shared by the other pixflip crates:
//!
//! - [`PixelGrid`] - Decoded image as a dense array of 8-bit samples
//! - [`Channels`] - Channel layout (gray, gray+alpha, RGB, RGBA)
//! - [`ImageFormat`] - Image file formats
//! - [`strip_alpha`] / [`extract_channel`] - Channel operations

pub mod error;
pub mod format;
pub mod grid;

pub use error::{Error, Result};
pub use format::ImageFormat;
pub use grid::{Channels, PixelGrid, extract_channel, strip_alpha};
