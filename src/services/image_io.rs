//! Decoding into owned buffers and PNG encoding.

use crate::error::RecolorError;
use image::{DynamicImage, ImageReader, RgbaImage};
use std::io::Cursor;
use std::path::Path;

/// Decode `path` into an owned RGBA8 buffer.
///
/// Whatever the source layout (indexed, grayscale, RGB, 16-bit), the result
/// has four 8-bit channels per pixel. The format is sniffed from the file
/// content, not the extension.
pub fn load_rgba(path: &Path) -> Result<RgbaImage, RecolorError> {
    if !path.exists() {
        return Err(RecolorError::SourceNotFound(path.to_path_buf()));
    }

    let img = open_image(path).map_err(|source| RecolorError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(
        path = %path.display(),
        width = img.width(),
        height = img.height(),
        color = ?img.color(),
        "Decoded image"
    );

    Ok(img.to_rgba8())
}

/// Open and decode an image, guessing the format from its content.
pub fn open_image(path: &Path) -> Result<DynamicImage, image::ImageError> {
    ImageReader::open(path)?.with_guessed_format()?.decode()
}

/// Read width and height from the image header, guessing the format from
/// its content.
pub fn image_dimensions(path: &Path) -> Result<(u32, u32), image::ImageError> {
    ImageReader::open(path)?.with_guessed_format()?.into_dimensions()
}

/// Encode an interleaved RGBA8 buffer as PNG.
pub fn encode_png_rgba(width: u32, height: u32, rgba: &[u8]) -> Result<Vec<u8>, String> {
    encode_png(width, height, png::ColorType::Rgba, rgba)
}

/// Encode an interleaved RGB8 buffer as PNG.
pub fn encode_png_rgb(width: u32, height: u32, rgb: &[u8]) -> Result<Vec<u8>, String> {
    encode_png(width, height, png::ColorType::Rgb, rgb)
}

/// Encode 8-bit pixel data as a PNG and re-compress it with oxipng.
fn encode_png(
    width: u32,
    height: u32,
    color_type: png::ColorType,
    data: &[u8],
) -> Result<Vec<u8>, String> {
    let mut buf = Cursor::new(Vec::new());
    {
        // Fast settings, oxipng re-compresses below
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(color_type);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(png::Compression::Fast);
        encoder.set_filter(png::FilterType::NoFilter);
        let mut writer = encoder.write_header().map_err(|e| e.to_string())?;
        writer.write_image_data(data).map_err(|e| e.to_string())?;
    }
    let png_bytes = buf.into_inner();

    // optimize_alpha stays off: it may rewrite the color of transparent pixels
    let optimized = oxipng::optimize_from_memory(
        &png_bytes,
        &oxipng::Options {
            strip: oxipng::StripChunks::Safe,
            optimize_alpha: false,
            ..Default::default()
        },
    )
    .unwrap_or(png_bytes);

    Ok(optimized)
}
