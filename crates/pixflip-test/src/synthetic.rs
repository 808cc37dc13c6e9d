//! Synthetic test images
//!
//! Regression tests build their inputs here instead of loading image
//! files, so every expected value can be derived from pixel positions.

use crate::error::{TestError, TestResult};
use pixflip_core::{Channels, PixelGrid};

fn build<F>(name: &str, width: u32, height: u32, channels: Channels, f: F) -> TestResult<PixelGrid>
where
    F: FnMut(u32, u32, usize) -> u8,
{
    PixelGrid::from_fn(width, height, channels, f).map_err(|e| TestError::ImageBuild {
        name: name.to_string(),
        message: e.to_string(),
    })
}

/// Grid whose samples spell out their own position.
///
/// Gray pixels hold `row * width + col` (wrapping). With two or more
/// channels the first two samples are `row` and `col` and the rest are
/// `200 + channel`, so every pixel of a grid smaller than 256x256 is
/// unique.
pub fn position_grid(width: u32, height: u32, channels: Channels) -> TestResult<PixelGrid> {
    build("position", width, height, channels, |r, c, ch| match (channels, ch) {
        (Channels::Gray, _) => (r * width + c) as u8,
        (_, 0) => r as u8,
        (_, 1) => c as u8,
        (_, n) => 200 + n as u8,
    })
}

/// Smooth diagonal gradient, one phase-shifted ramp per channel.
pub fn gradient_grid(width: u32, height: u32, channels: Channels) -> TestResult<PixelGrid> {
    let span = (width + height).max(2) - 1;
    build("gradient", width, height, channels, |r, c, ch| {
        let t = (r + c) * 255 / span;
        (t + ch as u32 * 64) as u8
    })
}

/// Append an alpha channel to a gray or RGB grid.
///
/// Alpha varies per pixel (`(row * 17 + col * 29) % 256`) so that a
/// stripped alpha channel cannot be mistaken for an opaque one.
pub fn with_alpha(grid: &PixelGrid) -> TestResult<PixelGrid> {
    let channels = match grid.channels() {
        Channels::Gray => Channels::GrayAlpha,
        Channels::Rgb => Channels::Rgba,
        other => {
            return Err(TestError::ImageBuild {
                name: "with_alpha".to_string(),
                message: format!("{:?} already has alpha", other),
            });
        }
    };
    let color = grid.channels().count();
    build("with_alpha", grid.width(), grid.height(), channels, |r, c, ch| {
        match grid.get(r, c) {
            Some(px) if ch < color => px[ch],
            _ => ((r * 17 + c * 29) % 256) as u8,
        }
    })
}
