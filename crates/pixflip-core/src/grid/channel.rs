//! Channel operations on pixel grids

use super::{Channels, PixelGrid};
use crate::error::{Error, Result};

/// Drop the alpha sample of an RGBA grid.
///
/// Only a 4-channel grid is truncated (to its first three samples). Gray,
/// gray+alpha and RGB grids are returned unchanged, as a copy.
pub fn strip_alpha(grid: &PixelGrid) -> Result<PixelGrid> {
    if grid.channels() != Channels::Rgba {
        return Ok(grid.clone());
    }

    let data: Vec<u8> = grid
        .data()
        .chunks_exact(4)
        .flat_map(|px| [px[0], px[1], px[2]])
        .collect();
    PixelGrid::from_raw(grid.width(), grid.height(), Channels::Rgb, data)
}

/// Extract one sample plane as a single-channel grid.
///
/// # Errors
///
/// Returns [`Error::IndexOutOfBounds`] if `index` is not a channel of `grid`.
pub fn extract_channel(grid: &PixelGrid, index: usize) -> Result<PixelGrid> {
    let spp = grid.channels().count();
    if index >= spp {
        return Err(Error::IndexOutOfBounds { index, len: spp });
    }

    let data: Vec<u8> = grid.data().chunks_exact(spp).map(|px| px[index]).collect();
    PixelGrid::from_raw(grid.width(), grid.height(), Channels::Gray, data)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgba_2x2() -> PixelGrid {
        PixelGrid::from_raw(
            2,
            2,
            Channels::Rgba,
            vec![
                1, 2, 3, 255, 4, 5, 6, 128, //
                7, 8, 9, 0, 10, 11, 12, 64,
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_strip_alpha_rgba() {
        let stripped = strip_alpha(&rgba_2x2()).unwrap();
        assert_eq!(stripped.channels(), Channels::Rgb);
        assert_eq!(stripped.shape(), (2, 2, 3));
        assert_eq!(
            stripped.data(),
            &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12]
        );
    }

    #[test]
    fn test_strip_alpha_passes_other_layouts() {
        for channels in [Channels::Gray, Channels::GrayAlpha, Channels::Rgb] {
            let grid = PixelGrid::from_fn(3, 2, channels, |r, c, ch| (r + c) as u8 * 7 + ch as u8)
                .unwrap();
            let out = strip_alpha(&grid).unwrap();
            assert!(out.equals(&grid), "{:?} should pass through", channels);
        }
    }

    #[test]
    fn test_extract_channel() {
        let alpha = extract_channel(&rgba_2x2(), 3).unwrap();
        assert_eq!(alpha.channels(), Channels::Gray);
        assert_eq!(alpha.data(), &[255, 128, 0, 64]);

        let red = extract_channel(&rgba_2x2(), 0).unwrap();
        assert_eq!(red.data(), &[1, 4, 7, 10]);
    }

    #[test]
    fn test_extract_channel_out_of_range() {
        let grid = PixelGrid::new(1, 1, Channels::Rgb).unwrap();
        assert!(matches!(
            extract_channel(&grid, 3),
            Err(Error::IndexOutOfBounds { index: 3, len: 3 })
        ));
    }
}
