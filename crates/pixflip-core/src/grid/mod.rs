//! PixelGrid - The decoded image container
//!
//! A `PixelGrid` holds an image as a dense array of 8-bit samples.
//!
//! # Sample layout
//!
//! - Axis order is (row, column, channel)
//! - Rows are stored top to bottom, with no padding between rows
//! - Channels are interleaved within each pixel (`RGBRGB...`)
//!
//! A grayscale grid has a single channel and corresponds to a 2-D
//! `(height, width)` array; every other layout is 3-D
//! `(height, width, channels)`.
//!
//! # Ownership model
//!
//! Grids own their samples. Transforms borrow an input grid and return a
//! freshly allocated output; nothing is modified in place.

mod channel;

pub use channel::{extract_channel, strip_alpha};

use crate::error::{Error, Result};

/// Channel layout of a pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum Channels {
    /// Single luminance sample
    Gray = 1,
    /// Luminance followed by alpha
    GrayAlpha = 2,
    /// Red, green, blue
    Rgb = 3,
    /// Red, green, blue, alpha
    Rgba = 4,
}

impl Channels {
    /// Create `Channels` from a raw sample count.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidChannels`] if `count` is not 1, 2, 3 or 4.
    pub fn from_count(count: u32) -> Result<Self> {
        match count {
            1 => Ok(Channels::Gray),
            2 => Ok(Channels::GrayAlpha),
            3 => Ok(Channels::Rgb),
            4 => Ok(Channels::Rgba),
            _ => Err(Error::InvalidChannels(count)),
        }
    }

    /// Number of samples per pixel.
    #[inline]
    pub fn count(self) -> usize {
        self as usize
    }

    /// Whether the last sample of each pixel is alpha.
    #[inline]
    pub fn has_alpha(self) -> bool {
        matches!(self, Channels::GrayAlpha | Channels::Rgba)
    }

    /// The same layout with the alpha sample removed.
    pub fn without_alpha(self) -> Self {
        match self {
            Channels::GrayAlpha => Channels::Gray,
            Channels::Rgba => Channels::Rgb,
            other => other,
        }
    }
}

/// Decoded image as a dense array of 8-bit samples
///
/// # Examples
///
/// ```
/// use pixflip_core::{Channels, PixelGrid};
///
/// let grid = PixelGrid::new(4, 2, Channels::Rgb).unwrap();
/// assert_eq!(grid.shape(), (2, 4, 3));
/// assert_eq!(grid.get(1, 3), Some(&[0u8, 0, 0][..]));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    channels: Channels,
    data: Vec<u8>,
}

impl PixelGrid {
    /// Create a zero-filled grid.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32, channels: Channels) -> Result<Self> {
        let len = Self::sample_count(width, height, channels)?;
        Ok(PixelGrid {
            width,
            height,
            channels,
            data: vec![0u8; len],
        })
    }

    /// Wrap an existing row-major, channel-interleaved sample buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0, or
    /// [`Error::DataLength`] if `data` does not hold exactly
    /// `width * height * channels` samples.
    pub fn from_raw(width: u32, height: u32, channels: Channels, data: Vec<u8>) -> Result<Self> {
        let expected = Self::sample_count(width, height, channels)?;
        if data.len() != expected {
            return Err(Error::DataLength {
                expected,
                actual: data.len(),
            });
        }
        Ok(PixelGrid {
            width,
            height,
            channels,
            data,
        })
    }

    /// Build a grid by evaluating `f(row, col, channel)` for every sample.
    pub fn from_fn<F>(width: u32, height: u32, channels: Channels, mut f: F) -> Result<Self>
    where
        F: FnMut(u32, u32, usize) -> u8,
    {
        let mut grid = Self::new(width, height, channels)?;
        let spp = channels.count();
        for (i, px) in grid.data.chunks_exact_mut(spp).enumerate() {
            let row = (i / width as usize) as u32;
            let col = (i % width as usize) as u32;
            for (ch, sample) in px.iter_mut().enumerate() {
                *sample = f(row, col, ch);
            }
        }
        Ok(grid)
    }

    fn sample_count(width: u32, height: u32, channels: Channels) -> Result<usize> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(channels.count()))
            .ok_or(Error::InvalidDimension { width, height })
    }

    /// Get the image width in pixels (number of columns).
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the image height in pixels (number of rows).
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the channel layout.
    #[inline]
    pub fn channels(&self) -> Channels {
        self.channels
    }

    /// Array shape as `(height, width, channels)`.
    #[inline]
    pub fn shape(&self) -> (u32, u32, usize) {
        (self.height, self.width, self.channels.count())
    }

    /// Raw samples, row-major and channel-interleaved.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Consume the grid and return its sample buffer.
    #[inline]
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    #[inline]
    fn offset(&self, row: u32, col: u32) -> usize {
        (row as usize * self.width as usize + col as usize) * self.channels.count()
    }

    /// Samples of the pixel at (`row`, `col`).
    ///
    /// Returns `None` if the position is outside the grid.
    pub fn get(&self, row: u32, col: u32) -> Option<&[u8]> {
        if row >= self.height || col >= self.width {
            return None;
        }
        let start = self.offset(row, col);
        Some(&self.data[start..start + self.channels.count()])
    }

    /// Overwrite the pixel at (`row`, `col`).
    ///
    /// # Errors
    ///
    /// Returns [`Error::PixelOutOfBounds`] for a position outside the grid
    /// and [`Error::DataLength`] if `pixel` has the wrong number of samples.
    pub fn set(&mut self, row: u32, col: u32, pixel: &[u8]) -> Result<()> {
        if row >= self.height || col >= self.width {
            return Err(Error::PixelOutOfBounds {
                row,
                col,
                height: self.height,
                width: self.width,
            });
        }
        let spp = self.channels.count();
        if pixel.len() != spp {
            return Err(Error::DataLength {
                expected: spp,
                actual: pixel.len(),
            });
        }
        let start = self.offset(row, col);
        self.data[start..start + spp].copy_from_slice(pixel);
        Ok(())
    }

    /// Samples of one row.
    ///
    /// # Panics
    ///
    /// Panics if `row >= height`.
    #[inline]
    pub fn row(&self, row: u32) -> &[u8] {
        assert!(row < self.height, "row {} >= height {}", row, self.height);
        let stride = self.width as usize * self.channels.count();
        let start = row as usize * stride;
        &self.data[start..start + stride]
    }

    /// Iterate over the pixels of each row, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.data
            .chunks_exact(self.width as usize * self.channels.count())
    }

    /// Whether two grids have the same shape and samples.
    pub fn equals(&self, other: &PixelGrid) -> bool {
        self == other
    }
}
