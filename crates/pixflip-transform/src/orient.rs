//! Flip, transpose and quarter-turn operations
//!
//! This module provides the eight orthogonal orientations of a grid:
//! - Horizontal and vertical flips
//! - Transposes across the main diagonal and the anti-diagonal
//! - Rotations by multiples of 90 degrees
//!
//! Every operation copies whole pixels, so the channel layout of the input
//! is preserved and no sample value is ever changed.

use crate::TransformResult;
use pixflip_core::PixelGrid;

/// Copy every pixel of `src` into a new `out_w` x `out_h` grid.
///
/// `dest(row, col)` returns the destination `(row, col)` of the source
/// pixel at (`row`, `col`).
fn remap<F>(src: &PixelGrid, out_w: u32, out_h: u32, dest: F) -> TransformResult<PixelGrid>
where
    F: Fn(u32, u32) -> (u32, u32),
{
    let mut out = PixelGrid::new(out_w, out_h, src.channels())?;
    for (row, samples) in src.rows().enumerate() {
        let row = row as u32;
        for (col, px) in samples.chunks_exact(src.channels().count()).enumerate() {
            let (nr, nc) = dest(row, col as u32);
            out.set(nr, nc, px)?;
        }
    }
    Ok(out)
}

/// Flip an image left-right (horizontal mirror)
pub fn flip_lr(grid: &PixelGrid) -> TransformResult<PixelGrid> {
    let w = grid.width();
    let h = grid.height();
    remap(grid, w, h, |r, c| (r, w - 1 - c))
}

/// Flip an image top-bottom (vertical mirror)
pub fn flip_tb(grid: &PixelGrid) -> TransformResult<PixelGrid> {
    let w = grid.width();
    let h = grid.height();
    remap(grid, w, h, |r, c| (h - 1 - r, c))
}

/// Rotate an image 180 degrees
pub fn rotate_180(grid: &PixelGrid) -> TransformResult<PixelGrid> {
    // 180 rotation = horizontal flip + vertical flip
    let flipped_h = flip_lr(grid)?;
    flip_tb(&flipped_h)
}

/// Swap the row and column axes (mirror across the main diagonal).
///
/// The pixel at `(r, c)` moves to `(c, r)`; an `H x W` grid becomes
/// `W x H`.
pub fn transpose(grid: &PixelGrid) -> TransformResult<PixelGrid> {
    remap(grid, grid.height(), grid.width(), |r, c| (c, r))
}

/// Mirror an image across its anti-diagonal.
///
/// The axis runs from the bottom-left corner to the top-right corner. The
/// pixel at `(r, c)` of an `H x W` grid moves to `(W-1-c, H-1-r)` and the
/// result is `W x H`. Equivalent to flipping both axes and then
/// transposing; applying it twice restores the input.
///
/// # Examples
///
/// ```
/// use pixflip_core::{Channels, PixelGrid};
/// use pixflip_transform::mirror_anti_diagonal;
///
/// // [1, 2, 3]      [6, 3]
/// // [4, 5, 6]  ->  [5, 2]
/// //                [4, 1]
/// let grid = PixelGrid::from_raw(3, 2, Channels::Gray, vec![1, 2, 3, 4, 5, 6]).unwrap();
/// let mirrored = mirror_anti_diagonal(&grid).unwrap();
/// assert_eq!(mirrored.data(), &[6, 3, 5, 2, 4, 1]);
/// ```
pub fn mirror_anti_diagonal(grid: &PixelGrid) -> TransformResult<PixelGrid> {
    let w = grid.width();
    let h = grid.height();
    remap(grid, h, w, |r, c| (w - 1 - c, h - 1 - r))
}

/// Rotate an image 90 degrees
///
/// # Arguments
/// * `grid` - Input image
/// * `clockwise` - If true, rotate clockwise; otherwise counterclockwise
pub fn rotate_90(grid: &PixelGrid, clockwise: bool) -> TransformResult<PixelGrid> {
    let w = grid.width();
    let h = grid.height();

    // Output dimensions are swapped
    if clockwise {
        remap(grid, h, w, |r, c| (c, h - 1 - r))
    } else {
        remap(grid, h, w, |r, c| (w - 1 - c, r))
    }
}

/// Rotate an image by 90-degree increments
///
/// # Arguments
/// * `grid` - Input image
/// * `quads` - Number of 90-degree clockwise rotations, taken modulo 4
pub fn rotate_orth(grid: &PixelGrid, quads: u32) -> TransformResult<PixelGrid> {
    match quads % 4 {
        0 => Ok(grid.clone()),
        1 => rotate_90(grid, true),
        2 => rotate_180(grid),
        _ => rotate_90(grid, false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixflip_core::Channels;

    // [1, 2]
    // [3, 4]
    // [5, 6]
    fn gray_2x3() -> PixelGrid {
        PixelGrid::from_raw(2, 3, Channels::Gray, vec![1, 2, 3, 4, 5, 6]).unwrap()
    }

    #[test]
    fn test_flip_lr() {
        let flipped = flip_lr(&gray_2x3()).unwrap();
        assert_eq!(flipped.data(), &[2, 1, 4, 3, 6, 5]);
    }

    #[test]
    fn test_flip_tb() {
        let flipped = flip_tb(&gray_2x3()).unwrap();
        assert_eq!(flipped.data(), &[5, 6, 3, 4, 1, 2]);
    }

    #[test]
    fn test_rotate_180() {
        let rotated = rotate_180(&gray_2x3()).unwrap();
        assert_eq!((rotated.width(), rotated.height()), (2, 3));
        assert_eq!(rotated.data(), &[6, 5, 4, 3, 2, 1]);
    }

    #[test]
    fn test_transpose() {
        let t = transpose(&gray_2x3()).unwrap();
        // [1, 3, 5]
        // [2, 4, 6]
        assert_eq!((t.width(), t.height()), (3, 2));
        assert_eq!(t.data(), &[1, 3, 5, 2, 4, 6]);
    }

    #[test]
    fn test_mirror_anti_diagonal() {
        let m = mirror_anti_diagonal(&gray_2x3()).unwrap();
        // [6, 4, 2]
        // [5, 3, 1]
        assert_eq!((m.width(), m.height()), (3, 2));
        assert_eq!(m.data(), &[6, 4, 2, 5, 3, 1]);
    }

    #[test]
    fn test_mirror_anti_diagonal_keeps_pixels_whole() {
        let grid = PixelGrid::from_raw(
            2,
            1,
            Channels::Rgb,
            vec![10, 20, 30, 40, 50, 60],
        )
        .unwrap();
        let m = mirror_anti_diagonal(&grid).unwrap();
        assert_eq!((m.width(), m.height()), (1, 2));
        assert_eq!(m.get(0, 0), Some(&[40u8, 50, 60][..]));
        assert_eq!(m.get(1, 0), Some(&[10u8, 20, 30][..]));
    }

    #[test]
    fn test_rotate_90_clockwise() {
        let rotated = rotate_90(&gray_2x3(), true).unwrap();
        // [5, 3, 1]
        // [6, 4, 2]
        assert_eq!((rotated.width(), rotated.height()), (3, 2));
        assert_eq!(rotated.data(), &[5, 3, 1, 6, 4, 2]);
    }

    #[test]
    fn test_rotate_90_counterclockwise() {
        let rotated = rotate_90(&gray_2x3(), false).unwrap();
        // [2, 4, 6]
        // [1, 3, 5]
        assert_eq!((rotated.width(), rotated.height()), (3, 2));
        assert_eq!(rotated.data(), &[2, 4, 6, 1, 3, 5]);
    }

    #[test]
    fn test_rotate_orth_wraps() {
        let grid = gray_2x3();
        assert!(rotate_orth(&grid, 0).unwrap().equals(&grid));
        assert!(rotate_orth(&grid, 4).unwrap().equals(&grid));
        assert!(
            rotate_orth(&grid, 5)
                .unwrap()
                .equals(&rotate_90(&grid, true).unwrap())
        );
    }
}
