//! PNG image format support
//!
//! Decoding normalizes every PNG to 8-bit samples: palettes and low bit
//! depths are expanded and 16-bit samples keep their high byte. A palette's
//! `tRNS` chunk becomes an alpha channel. Grayscale and RGB images keep the
//! layout their header declares, so their `tRNS` chunk is ignored.

use crate::{IoError, IoResult};
use log::debug;
use pixflip_core::{Channels, PixelGrid};
use png::{BitDepth, ColorType, Decoder, Encoder, Transformations};
use std::io::{BufRead, Seek, Write};

/// Read a PNG image
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<PixelGrid> {
    let mut decoder = Decoder::new(reader);
    decoder.set_transformations(Transformations::normalize_to_color8());
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;
    let source_color = reader.info().color_type;

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    let decoded = match (output_info.color_type, output_info.bit_depth) {
        (ColorType::Grayscale, BitDepth::Eight) => Channels::Gray,
        (ColorType::GrayscaleAlpha, BitDepth::Eight) => Channels::GrayAlpha,
        (ColorType::Rgb, BitDepth::Eight) => Channels::Rgb,
        (ColorType::Rgba, BitDepth::Eight) => Channels::Rgba,
        (color_type, bit_depth) => {
            return Err(IoError::UnsupportedFormat(format!(
                "unsupported PNG output format: {:?} {:?}",
                color_type, bit_depth
            )));
        }
    };

    // EXPAND turns a gray or RGB tRNS entry into an alpha channel
    let drop_alpha = decoded.has_alpha()
        && matches!(source_color, ColorType::Grayscale | ColorType::Rgb);
    let channels = if drop_alpha {
        decoded.without_alpha()
    } else {
        decoded
    };

    let width = output_info.width;
    let height = output_info.height;
    let decoded_per_row = width as usize * decoded.count();
    let bytes_per_row = width as usize * channels.count();
    let data = &buf[..output_info.buffer_size()];

    // Drop any per-row padding the decoder leaves in the frame buffer
    let mut samples = Vec::with_capacity(bytes_per_row * height as usize);
    for row in data.chunks(output_info.line_size).take(height as usize) {
        let row = row.get(..decoded_per_row).ok_or_else(|| {
            IoError::InvalidData(format!(
                "PNG row holds {} bytes, expected {}",
                row.len(),
                decoded_per_row
            ))
        })?;
        if drop_alpha {
            for px in row.chunks_exact(decoded.count()) {
                samples.extend_from_slice(&px[..channels.count()]);
            }
        } else {
            samples.extend_from_slice(row);
        }
    }

    debug!(
        "decoded PNG {}x{} ({:?} -> {:?})",
        width,
        height,
        source_color,
        channels
    );

    Ok(PixelGrid::from_raw(width, height, channels, samples)?)
}

/// Write a PNG image
pub fn write_png<W: Write>(grid: &PixelGrid, writer: W) -> IoResult<()> {
    let color_type = match grid.channels() {
        Channels::Gray => ColorType::Grayscale,
        Channels::GrayAlpha => ColorType::GrayscaleAlpha,
        Channels::Rgb => ColorType::Rgb,
        Channels::Rgba => ColorType::Rgba,
    };

    let mut encoder = Encoder::new(writer, grid.width(), grid.height());
    encoder.set_color(color_type);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;

    // The grid's row-major interleaved layout is the PNG scanline layout
    writer
        .write_image_data(grid.data())
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {}", e)))?;
    writer
        .finish()
        .map_err(|e| IoError::EncodeError(format!("PNG finish error: {}", e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn round_trip(grid: &PixelGrid) -> PixelGrid {
        let mut buffer = Vec::new();
        write_png(grid, &mut buffer).unwrap();
        read_png(Cursor::new(buffer)).unwrap()
    }

    #[test]
    fn test_png_roundtrip_grayscale() {
        let grid =
            PixelGrid::from_fn(10, 10, Channels::Gray, |r, c, _| ((r + c) * 10) as u8).unwrap();
        let grid2 = round_trip(&grid);
        assert_eq!(grid2.width(), 10);
        assert_eq!(grid2.height(), 10);
        assert!(grid2.equals(&grid));
    }

    #[test]
    fn test_png_roundtrip_rgb() {
        let mut grid = PixelGrid::new(5, 5, Channels::Rgb).unwrap();
        grid.set(0, 0, &[255, 0, 0]).unwrap();
        grid.set(1, 1, &[0, 255, 0]).unwrap();
        grid.set(2, 2, &[0, 0, 255]).unwrap();

        let grid2 = round_trip(&grid);
        assert_eq!(grid2.get(0, 0), Some(&[255u8, 0, 0][..]));
        assert_eq!(grid2.get(1, 1), Some(&[0u8, 255, 0][..]));
        assert_eq!(grid2.get(2, 2), Some(&[0u8, 0, 255][..]));
    }

    #[test]
    fn test_png_keeps_alpha_layouts() {
        for channels in [Channels::GrayAlpha, Channels::Rgba] {
            let grid = PixelGrid::from_fn(3, 4, channels, |r, c, ch| {
                (r * 40 + c * 7 + ch as u32 * 3) as u8
            })
            .unwrap();
            let grid2 = round_trip(&grid);
            assert_eq!(grid2.channels(), channels);
            assert!(grid2.equals(&grid));
        }
    }

    #[test]
    fn test_png_expands_palette() {
        // 2x1 indexed image: palette [red, blue], pixels [1, 0]
        let mut buffer = Vec::new();
        {
            let mut encoder = Encoder::new(&mut buffer, 2, 1);
            encoder.set_color(ColorType::Indexed);
            encoder.set_depth(BitDepth::Eight);
            encoder.set_palette(vec![255, 0, 0, 0, 0, 255]);
            let mut writer = encoder.write_header().unwrap();
            writer.write_image_data(&[1, 0]).unwrap();
            writer.finish().unwrap();
        }

        let grid = read_png(Cursor::new(buffer)).unwrap();
        assert_eq!(grid.channels(), Channels::Rgb);
        assert_eq!(grid.data(), &[0, 0, 255, 255, 0, 0]);
    }

    fn encode_with_trns(color: ColorType, width: u32, samples: &[u8], trns: Vec<u8>) -> Vec<u8> {
        let mut buffer = Vec::new();
        {
            let mut encoder = Encoder::new(&mut buffer, width, 1);
            encoder.set_color(color);
            encoder.set_depth(BitDepth::Eight);
            encoder.set_trns(trns);
            let mut writer = encoder.write_header().unwrap();
            writer.write_image_data(samples).unwrap();
            writer.finish().unwrap();
        }
        buffer
    }

    #[test]
    fn test_png_gray_trns_stays_gray() {
        // Gray value 7 is marked transparent
        let buffer = encode_with_trns(ColorType::Grayscale, 2, &[7, 9], vec![0, 7]);
        let grid = read_png(Cursor::new(buffer)).unwrap();
        assert_eq!(grid.channels(), Channels::Gray);
        assert_eq!(grid.data(), &[7, 9]);
    }

    #[test]
    fn test_png_rgb_trns_stays_rgb() {
        let buffer = encode_with_trns(
            ColorType::Rgb,
            2,
            &[1, 2, 3, 4, 5, 6],
            vec![0, 1, 0, 2, 0, 3],
        );
        let grid = read_png(Cursor::new(buffer)).unwrap();
        assert_eq!(grid.channels(), Channels::Rgb);
        assert_eq!(grid.data(), &[1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_png_palette_trns_becomes_alpha() {
        let mut buffer = Vec::new();
        {
            let mut encoder = Encoder::new(&mut buffer, 2, 1);
            encoder.set_color(ColorType::Indexed);
            encoder.set_depth(BitDepth::Eight);
            encoder.set_palette(vec![255, 0, 0, 0, 0, 255]);
            encoder.set_trns(vec![0]);
            let mut writer = encoder.write_header().unwrap();
            writer.write_image_data(&[0, 1]).unwrap();
            writer.finish().unwrap();
        }

        let grid = read_png(Cursor::new(buffer)).unwrap();
        assert_eq!(grid.channels(), Channels::Rgba);
        assert_eq!(grid.data(), &[255, 0, 0, 0, 0, 0, 255, 255]);
    }

    #[test]
    fn test_png_strips_16_bit() {
        let mut buffer = Vec::new();
        {
            let mut encoder = Encoder::new(&mut buffer, 2, 1);
            encoder.set_color(ColorType::Grayscale);
            encoder.set_depth(BitDepth::Sixteen);
            let mut writer = encoder.write_header().unwrap();
            writer.write_image_data(&[0x12, 0x34, 0xAB, 0xCD]).unwrap();
            writer.finish().unwrap();
        }

        let grid = read_png(Cursor::new(buffer)).unwrap();
        assert_eq!(grid.channels(), Channels::Gray);
        assert_eq!(grid.data(), &[0x12, 0xAB]);
    }

    #[test]
    fn test_read_png_rejects_garbage() {
        let err = read_png(Cursor::new(b"\x89PNG\r\n\x1a\nnot really".to_vec())).unwrap_err();
        assert!(matches!(err, IoError::DecodeError(_)));
    }
}
