//! Anti-diagonal mirror of an image file
//!
//! The operation runs four steps, each producing a new value:
//!
//! 1. decode the input file into a [`PixelGrid`]
//! 2. drop the alpha channel of an RGBA grid
//! 3. mirror the grid across its anti-diagonal (flip both axes, then
//!    transpose)
//! 4. encode the result and write it to the output path
//!
//! Any failure aborts the whole operation; there are no retries.

use crate::mirror_error::{MirrorError, MirrorResult};
use log::{debug, info};
use pixflip_core::{ImageFormat, PixelGrid, strip_alpha};
use pixflip_io::{format_from_path, read_image, write_image};
use pixflip_transform::mirror_anti_diagonal;
use std::path::{Path, PathBuf};

/// Suffix appended to the input's file stem by [`default_output_path`]
pub const DEFAULT_OUTPUT_SUFFIX: &str = "_mirrored";

/// Options for [`mirror_with_options`]
#[derive(Debug, Clone, Default)]
pub struct MirrorOptions {
    /// Output path (None = [`default_output_path`] of the input)
    pub output: Option<PathBuf>,
    /// Output format (None = chosen from the output extension)
    pub format: Option<ImageFormat>,
}

impl MirrorOptions {
    /// Create options writing to a specific path
    pub fn with_output<P: Into<PathBuf>>(output: P) -> Self {
        Self {
            output: Some(output.into()),
            ..Default::default()
        }
    }

    /// Force the output format regardless of the output extension
    pub fn format(mut self, format: ImageFormat) -> Self {
        self.format = Some(format);
        self
    }
}

/// Path written by [`mirror`]: `<stem>_mirrored.png` next to the input.
pub fn default_output_path<P: AsRef<Path>>(input: P) -> PathBuf {
    let input = input.as_ref();
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string());
    input.with_file_name(format!(
        "{}{}.{}",
        stem,
        DEFAULT_OUTPUT_SUFFIX,
        ImageFormat::Png.extension()
    ))
}

/// Strip alpha and mirror a decoded grid across its anti-diagonal.
///
/// An `H x W` input becomes `W x H`; the pixel at `(r, c)` lands at
/// `(W-1-c, H-1-r)`. RGBA input comes out as RGB; every other layout is
/// kept.
pub fn mirror_grid(grid: &PixelGrid) -> MirrorResult<PixelGrid> {
    let opaque = strip_alpha(grid)?;
    if opaque.channels() != grid.channels() {
        debug!(
            "dropped alpha: {:?} -> {:?}",
            grid.channels(),
            opaque.channels()
        );
    }
    Ok(mirror_anti_diagonal(&opaque)?)
}

/// Mirror the image at `input` and write it to [`default_output_path`].
///
/// Returns the path written.
pub fn mirror<P: AsRef<Path>>(input: P) -> MirrorResult<PathBuf> {
    mirror_with_options(input, &MirrorOptions::default())
}

/// Mirror the image at `input` and write it to `output`.
///
/// The output format follows the extension of `output` (PNG when there is
/// none). Returns the path written.
pub fn mirror_to<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output: Q) -> MirrorResult<PathBuf> {
    mirror_with_options(input, &MirrorOptions::with_output(output.as_ref()))
}

/// Mirror the image at `input` as configured by `options`.
///
/// # Errors
///
/// - [`MirrorError::Decode`] if `input` does not exist, cannot be read or
///   is not a recognized image
/// - [`MirrorError::Encode`] if the output extension has no encoder, the
///   format cannot hold the grid, or the output cannot be written
pub fn mirror_with_options<P: AsRef<Path>>(
    input: P,
    options: &MirrorOptions,
) -> MirrorResult<PathBuf> {
    let input = input.as_ref();
    let output = options
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(input));

    let grid = read_image(input).map_err(|source| MirrorError::Decode {
        path: input.to_path_buf(),
        source,
    })?;

    let mirrored = mirror_grid(&grid)?;

    let encode_error = |source| MirrorError::Encode {
        path: output.clone(),
        source,
    };
    let format = match options.format {
        Some(format) => format,
        None => format_from_path(&output).map_err(encode_error)?,
    };
    write_image(&mirrored, &output, format).map_err(encode_error)?;

    info!(
        "mirrored {} ({}x{}) -> {} ({}x{}, {:?})",
        input.display(),
        grid.width(),
        grid.height(),
        output.display(),
        mirrored.width(),
        mirrored.height(),
        format
    );
    Ok(output)
}
