//! HEIC to JPEG conversion.
//!
//! Decoding uses libheif through `libheif-rs` and is only available with the
//! `heic` cargo feature. Without it every file fails with
//! [`ConvertError::HeicUnsupported`] and the batch carries on.

use crate::error::ConvertError;
use crate::services::scan;
use image::codecs::jpeg::JpegEncoder;
use image::RgbImage;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Counts from a batch conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConvertSummary {
    pub converted: usize,
    pub failed: usize,
}

/// Decode a HEIC/HEIF file to RGB8.
#[cfg(feature = "heic")]
pub fn decode_heic(path: &Path) -> Result<RgbImage, ConvertError> {
    use libheif_rs::{ColorSpace, HeifContext, LibHeif, RgbChroma};

    let lib_heif = LibHeif::new();
    let path_str = path
        .to_str()
        .ok_or_else(|| ConvertError::Heic("invalid file path encoding".into()))?;

    let ctx = HeifContext::read_from_file(path_str)
        .map_err(|e| ConvertError::Heic(format!("failed to read container: {e}")))?;
    let handle = ctx
        .primary_image_handle()
        .map_err(|e| ConvertError::Heic(format!("no primary image: {e}")))?;
    let decoded = lib_heif
        .decode(&handle, ColorSpace::Rgb(RgbChroma::Rgb), None)
        .map_err(|e| ConvertError::Heic(format!("decode failed: {e}")))?;

    let planes = decoded.planes();
    let plane = planes
        .interleaved
        .ok_or_else(|| ConvertError::Heic("image has no interleaved RGB data".into()))?;

    let width = handle.width();
    let height = handle.height();
    let row_bytes = width as usize * 3;
    let stride = plane.stride as usize;

    // Rows may be padded out to the stride
    let data: Vec<u8> = if stride == row_bytes {
        plane.data[..row_bytes * height as usize].to_vec()
    } else {
        let mut rows = Vec::with_capacity(row_bytes * height as usize);
        for row in 0..height as usize {
            let start = row * stride;
            rows.extend_from_slice(&plane.data[start..start + row_bytes]);
        }
        rows
    };

    RgbImage::from_raw(width, height, data)
        .ok_or_else(|| ConvertError::Heic("decoded buffer does not match dimensions".into()))
}

#[cfg(not(feature = "heic"))]
pub fn decode_heic(path: &Path) -> Result<RgbImage, ConvertError> {
    tracing::debug!(path = %path.display(), "HEIC decoding not compiled in");
    Err(ConvertError::HeicUnsupported)
}

/// Encode `rgb` as a JPEG at `quality` and write it to `path`.
pub fn write_jpeg(rgb: &RgbImage, path: &Path, quality: u8) -> Result<(), ConvertError> {
    let mut buf = Vec::new();
    JpegEncoder::new_with_quality(&mut buf, quality.clamp(1, 100)).encode_image(rgb)?;
    std::fs::write(path, buf)?;
    Ok(())
}

/// Convert one HEIC file to a sibling `.jpg`, returning the JPEG path.
pub fn convert_file(path: &Path, quality: u8) -> Result<PathBuf, ConvertError> {
    let rgb = decode_heic(path)?;
    let jpg_path = path.with_extension("jpg");
    write_jpeg(&rgb, &jpg_path, quality)?;
    tracing::info!(
        input = %path.display(),
        output = %jpg_path.display(),
        "Converted HEIC"
    );
    Ok(jpg_path)
}

/// Convert every `*.heic` directly inside `dir`, reporting one line per file.
///
/// A failed file is reported and skipped; it never stops the batch.
pub fn run<W: Write>(dir: &Path, quality: u8, out: &mut W) -> std::io::Result<ConvertSummary> {
    let files = scan::list_files(dir, &["heic".to_string()]);
    let mut summary = ConvertSummary::default();

    for path in &files {
        let name = display_name(path);
        match convert_file(path, quality) {
            Ok(jpg_path) => {
                writeln!(out, "✓ {} → {}", name, display_name(&jpg_path))?;
                summary.converted += 1;
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), %e, "HEIC conversion failed");
                writeln!(out, "✗ Failed on {}: {}", name, e)?;
                summary.failed += 1;
            }
        }
    }

    writeln!(
        out,
        "\nConverted {} of {} HEIC files",
        summary.converted,
        files.len()
    )?;
    Ok(summary)
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
