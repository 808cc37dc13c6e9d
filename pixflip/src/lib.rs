//! pixflip - Mirror raster images across their anti-diagonal
//!
//! Loads an image, drops an RGBA image's alpha channel, reflects it across
//! the axis running from the bottom-left to the top-right corner and writes
//! the result to a new file.
//!
//! # Example
//!
//! ```no_run
//! // Writes data/convex_mirrored.png
//! let written = pixflip::mirror("data/convex.png").unwrap();
//!
//! // Caller-chosen output; format follows the extension
//! pixflip::mirror_to("data/convex.png", "data/concave.png").unwrap();
//! # let _ = written;
//! ```
//!
//! The building blocks are re-exported as modules: [`io`] for decoding and
//! encoding, [`transform`] for the orientation operations.

mod mirror_error;
pub mod mirror;

pub use mirror_error::{MirrorError, MirrorResult};
pub use mirror::{
    DEFAULT_OUTPUT_SUFFIX, MirrorOptions, default_output_path, mirror, mirror_grid, mirror_to,
    mirror_with_options,
};

// Re-export core types (primary data structures used everywhere)
pub use pixflip_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use pixflip_io as io;
pub use pixflip_transform as transform;
