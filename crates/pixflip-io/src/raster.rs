//! Non-PNG raster formats, backed by the `image` crate
//!
//! Which formats are available depends on the `image` features enabled
//! through this crate's cargo features (`jpeg`, `bmp`, `pnm`, `gif-format`,
//! `tiff-format`, `webp-format`). A disabled format surfaces as
//! [`IoError::UnsupportedFormat`].

use crate::{IoError, IoResult};
use image::error::ImageError;
use image::{ColorType, DynamicImage};
use log::debug;
use pixflip_core::{Channels, ImageFormat, PixelGrid};
use std::io::Cursor;

/// Map a pixflip format to the `image` crate's format enum.
fn codec_format(format: ImageFormat) -> IoResult<image::ImageFormat> {
    match format {
        ImageFormat::Png => Ok(image::ImageFormat::Png),
        ImageFormat::Jpeg => Ok(image::ImageFormat::Jpeg),
        ImageFormat::Bmp => Ok(image::ImageFormat::Bmp),
        ImageFormat::Gif => Ok(image::ImageFormat::Gif),
        ImageFormat::Tiff => Ok(image::ImageFormat::Tiff),
        ImageFormat::WebP => Ok(image::ImageFormat::WebP),
        ImageFormat::Pnm => Ok(image::ImageFormat::Pnm),
        ImageFormat::Unknown => Err(IoError::UnsupportedFormat(
            "unknown image format".to_string(),
        )),
    }
}

fn map_decode_error(format: ImageFormat, err: ImageError) -> IoError {
    match err {
        ImageError::Unsupported(e) => {
            IoError::UnsupportedFormat(format!("{:?} decoding: {}", format, e))
        }
        ImageError::IoError(e) => IoError::Io(e),
        e => IoError::DecodeError(format!("{:?} decode error: {}", format, e)),
    }
}

fn map_encode_error(format: ImageFormat, err: ImageError) -> IoError {
    match err {
        ImageError::Unsupported(e) => {
            IoError::UnsupportedFormat(format!("{:?} encoding: {}", format, e))
        }
        e => IoError::EncodeError(format!("{:?} encode error: {}", format, e)),
    }
}

/// Convert a decoded image to 8-bit samples, keeping its channel layout.
fn into_grid(img: DynamicImage) -> IoResult<PixelGrid> {
    let width = img.width();
    let height = img.height();
    let color = img.color();

    let (channels, data) = match color {
        ColorType::L8 | ColorType::L16 => (Channels::Gray, img.into_luma8().into_raw()),
        ColorType::La8 | ColorType::La16 => {
            (Channels::GrayAlpha, img.into_luma_alpha8().into_raw())
        }
        ColorType::Rgb8 | ColorType::Rgb16 | ColorType::Rgb32F => {
            (Channels::Rgb, img.into_rgb8().into_raw())
        }
        c if c.has_alpha() => (Channels::Rgba, img.into_rgba8().into_raw()),
        _ => (Channels::Rgb, img.into_rgb8().into_raw()),
    };

    debug!(
        "converted {:?} image {}x{} to {:?}",
        color, width, height, channels
    );
    Ok(PixelGrid::from_raw(width, height, channels, data)?)
}

/// Decode an in-memory image of a known format
pub fn read_raster(data: &[u8], format: ImageFormat) -> IoResult<PixelGrid> {
    let img = image::load_from_memory_with_format(data, codec_format(format)?)
        .map_err(|e| map_decode_error(format, e))?;
    into_grid(img)
}

/// Encode a grid into memory in the given format
pub fn write_raster(grid: &PixelGrid, format: ImageFormat) -> IoResult<Vec<u8>> {
    let color = match grid.channels() {
        Channels::Gray => ColorType::L8,
        Channels::GrayAlpha => ColorType::La8,
        Channels::Rgb => ColorType::Rgb8,
        Channels::Rgba => ColorType::Rgba8,
    };

    if format == ImageFormat::Pnm {
        return write_pnm(grid, color);
    }

    let mut out = Cursor::new(Vec::new());
    image::write_buffer_with_format(
        &mut out,
        grid.data(),
        grid.width(),
        grid.height(),
        color,
        codec_format(format)?,
    )
    .map_err(|e| map_encode_error(format, e))?;
    Ok(out.into_inner())
}

/// Encode as binary PGM (gray) or PPM (RGB).
///
/// Without an explicit subtype the `image` encoder emits PAM (`P7`), which
/// the PNM family detection does not accept. Layouts with alpha have no
/// P1..P6 representation.
#[cfg(feature = "pnm")]
fn write_pnm(grid: &PixelGrid, color: ColorType) -> IoResult<Vec<u8>> {
    use image::ImageEncoder;
    use image::codecs::pnm::{PnmEncoder, PnmSubtype, SampleEncoding};

    let subtype = match grid.channels() {
        Channels::Gray => PnmSubtype::Graymap(SampleEncoding::Binary),
        Channels::Rgb => PnmSubtype::Pixmap(SampleEncoding::Binary),
        other => {
            return Err(IoError::UnsupportedFormat(format!(
                "PNM cannot hold {:?} pixels",
                other
            )));
        }
    };

    let mut out = Vec::new();
    PnmEncoder::new(&mut out)
        .with_subtype(subtype)
        .write_image(grid.data(), grid.width(), grid.height(), color.into())
        .map_err(|e| map_encode_error(ImageFormat::Pnm, e))?;
    Ok(out)
}

#[cfg(not(feature = "pnm"))]
fn write_pnm(_grid: &PixelGrid, _color: ColorType) -> IoResult<Vec<u8>> {
    Err(IoError::UnsupportedFormat(
        "PNM support not enabled (pnm feature)".to_string(),
    ))
}
