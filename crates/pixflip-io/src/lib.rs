//! pixflip-io - Image I/O for pixflip
//!
//! Reads image files into [`PixelGrid`]s and writes grids back out.
//!
//! - PNG is handled directly with the `png` crate (`png-format` feature)
//! - JPEG, BMP, PNM, GIF, TIFF and WebP go through the `image` crate, each
//!   behind its own feature
//!
//! Input formats are detected from magic numbers, never from the file
//! name. Output formats are chosen by the caller or from the output
//! extension (see [`format_from_path`]).

mod error;
pub mod format;
#[cfg(feature = "png-format")]
pub mod png;
pub mod raster;

pub use error::{IoError, IoResult};
pub use format::{detect_format, detect_format_from_bytes, format_from_path};
pub use pixflip_core::ImageFormat;

use log::debug;
use pixflip_core::PixelGrid;
use std::fs;
use std::path::Path;

/// Read an image from a file path
///
/// # Errors
///
/// Returns [`IoError::Io`] if the file cannot be read,
/// [`IoError::UnsupportedFormat`] if its format is not recognized or not
/// enabled, and [`IoError::DecodeError`] if the data is corrupt.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<PixelGrid> {
    let path = path.as_ref();
    let data = fs::read(path)?;
    debug!("read {} bytes from {}", data.len(), path.display());
    read_image_mem(&data)
}

/// Read an image from memory
pub fn read_image_mem(data: &[u8]) -> IoResult<PixelGrid> {
    let format = detect_format_from_bytes(data)?;
    let grid = match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::read_png(std::io::Cursor::new(data))?,
        #[cfg(not(feature = "png-format"))]
        ImageFormat::Png => {
            return Err(IoError::UnsupportedFormat(
                "PNG support not enabled (png-format feature)".to_string(),
            ));
        }
        other => raster::read_raster(data, other)?,
    };
    debug!(
        "decoded {:?} image: {}x{}, {} channel(s)",
        format,
        grid.width(),
        grid.height(),
        grid.channels().count()
    );
    Ok(grid)
}

/// Encode an image into memory
pub fn write_image_mem(grid: &PixelGrid, format: ImageFormat) -> IoResult<Vec<u8>> {
    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => {
            let mut buffer = Vec::new();
            png::write_png(grid, &mut buffer)?;
            Ok(buffer)
        }
        #[cfg(not(feature = "png-format"))]
        ImageFormat::Png => Err(IoError::UnsupportedFormat(
            "PNG support not enabled (png-format feature)".to_string(),
        )),
        other => raster::write_raster(grid, other),
    }
}

/// Write an image to a file path
///
/// The image is encoded in memory first; the file is only created once
/// encoding has succeeded, so a failed encode leaves nothing behind.
///
/// # Errors
///
/// Returns [`IoError::Io`] if the file cannot be created or written
/// (missing directory, permissions), and the encoder's error if the grid
/// cannot be represented in `format`.
pub fn write_image<P: AsRef<Path>>(grid: &PixelGrid, path: P, format: ImageFormat) -> IoResult<()> {
    let path = path.as_ref();
    let encoded = write_image_mem(grid, format)?;
    fs::write(path, &encoded)?;
    debug!(
        "wrote {:?} image {}x{} ({} bytes) to {}",
        format,
        grid.width(),
        grid.height(),
        encoded.len(),
        path.display()
    );
    Ok(())
}
