//! Downscaling of oversized images in the asset folder.
//!
//! Runs as a dry run by default; with `apply` the files are rewritten in
//! place in their own format.

use crate::error::ConvertError;
use crate::models::{ResizeAction, ResizeConfig, ResizeOutcome};
use crate::services::{image_io, scan};
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::DynamicImage;
use std::io::{self, Write};
use std::path::Path;

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Re-encoding usually lands a bit below the pixel-count ratio
const DRY_RUN_SIZE_FACTOR: f64 = 0.8;

const RULE: &str = "============================================================";

/// Output format chosen from the file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveFormat {
    Jpeg,
    Png,
    WebP,
}

impl SaveFormat {
    /// Anything unrecognised is written as JPEG
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("png") => SaveFormat::Png,
            Some("webp") => SaveFormat::WebP,
            _ => SaveFormat::Jpeg,
        }
    }
}

/// New dimensions for an image wider than `max_width`, keeping the aspect
/// ratio (height truncated, never below 1). `None` when no resize is needed.
pub fn target_dimensions(width: u32, height: u32, max_width: u32) -> Option<(u32, u32)> {
    if width <= max_width {
        return None;
    }
    let ratio = max_width as f64 / width as f64;
    let new_height = ((height as f64 * ratio) as u32).max(1);
    Some((max_width, new_height))
}

/// "512 KB" below one megabyte, "1.25 MB" otherwise.
pub fn format_size(mb: f64) -> String {
    if mb < 1.0 {
        format!("{:.0} KB", mb * 1024.0)
    } else {
        format!("{:.2} MB", mb)
    }
}

fn file_size_mb(path: &Path) -> io::Result<f64> {
    Ok(std::fs::metadata(path)?.len() as f64 / BYTES_PER_MB)
}

/// Encode `img` in `format`.
pub fn encode(img: &DynamicImage, format: SaveFormat, quality: u8) -> Result<Vec<u8>, ConvertError> {
    let mut buf = Vec::new();
    match format {
        SaveFormat::Jpeg => {
            // JPEG has no alpha; it is dropped, not composited
            DynamicImage::ImageRgb8(img.to_rgb8()).write_with_encoder(
                JpegEncoder::new_with_quality(&mut buf, quality.clamp(1, 100)),
            )?;
        }
        SaveFormat::WebP => {
            let quality = quality.clamp(1, 100) as f32;
            let encoded = if img.color().has_alpha() {
                let rgba = img.to_rgba8();
                webp::Encoder::from_rgba(rgba.as_raw(), rgba.width(), rgba.height())
                    .encode_simple(false, quality)
            } else {
                let rgb = img.to_rgb8();
                webp::Encoder::from_rgb(rgb.as_raw(), rgb.width(), rgb.height())
                    .encode_simple(false, quality)
            }
            .map_err(|e| ConvertError::WebPEncode(format!("{e:?}")))?;
            buf = encoded.to_vec();
        }
        SaveFormat::Png => {
            buf = if img.color().has_alpha() {
                let rgba = img.to_rgba8();
                image_io::encode_png_rgba(rgba.width(), rgba.height(), rgba.as_raw())
            } else {
                let rgb = img.to_rgb8();
                image_io::encode_png_rgb(rgb.width(), rgb.height(), rgb.as_raw())
            }
            .map_err(ConvertError::PngEncode)?;
        }
    }
    Ok(buf)
}

/// Decide on, and with `apply` perform, the downscale of one file.
///
/// Never fails: problems are recorded as [`ResizeAction::Error`].
pub fn process(path: &Path, config: &ResizeConfig, apply: bool) -> ResizeOutcome {
    let size_mb = match file_size_mb(path) {
        Ok(size) => size,
        Err(e) => {
            let mut outcome = ResizeOutcome::new(path.to_path_buf(), 0.0);
            outcome.action = ResizeAction::Error;
            outcome.error = Some(e.to_string());
            return outcome;
        }
    };

    let mut outcome = ResizeOutcome::new(path.to_path_buf(), size_mb);
    if size_mb < config.min_size_mb {
        outcome.action = ResizeAction::TooSmall;
        return outcome;
    }

    if let Err(e) = downscale(path, config, apply, &mut outcome) {
        tracing::warn!(path = %path.display(), %e, "Resize failed");
        outcome.action = ResizeAction::Error;
        outcome.error = Some(e.to_string());
    }
    outcome
}

fn downscale(
    path: &Path,
    config: &ResizeConfig,
    apply: bool,
    outcome: &mut ResizeOutcome,
) -> Result<(), ConvertError> {
    let (width, height) = image_io::image_dimensions(path)?;
    outcome.original_dimensions = Some((width, height));

    let Some((new_width, new_height)) = target_dimensions(width, height, config.max_width) else {
        outcome.action = ResizeAction::AlreadySmall;
        return Ok(());
    };
    outcome.new_dimensions = Some((new_width, new_height));

    if !apply {
        let ratio = new_width as f64 / width as f64;
        outcome.action = ResizeAction::WouldResize;
        outcome.new_size_mb = Some(outcome.original_size_mb * ratio.powi(2) * DRY_RUN_SIZE_FACTOR);
        return Ok(());
    }

    let img = image_io::open_image(path)?;
    let resized = img.resize_exact(new_width, new_height, FilterType::Lanczos3);
    let bytes = encode(&resized, SaveFormat::from_path(path), config.quality)?;
    std::fs::write(path, &bytes)?;

    tracing::info!(
        path = %path.display(),
        from = ?(width, height),
        to = ?(new_width, new_height),
        "Resized image"
    );

    outcome.new_size_mb = Some(file_size_mb(path)?);
    outcome.action = ResizeAction::Resized;
    Ok(())
}

/// Scan `public_dir`, process every candidate and write the report.
pub fn run<W: Write>(
    public_dir: &Path,
    config: &ResizeConfig,
    apply: bool,
    out: &mut W,
) -> io::Result<Vec<ResizeOutcome>> {
    writeln!(out, "{RULE}")?;
    if apply {
        writeln!(out, "APPLYING CHANGES - Resizing images")?;
    } else {
        writeln!(out, "DRY RUN - No files will be modified")?;
        writeln!(out, "Run with --apply to actually resize images")?;
    }
    writeln!(out, "{RULE}")?;

    writeln!(out, "\nScanning: {}", public_dir.display())?;
    writeln!(out, "Min file size: {:?} MB", config.min_size_mb)?;
    writeln!(out, "Max width: {}px", config.max_width)?;
    writeln!(out, "JPEG quality: {}", config.quality)?;
    writeln!(out)?;

    let images = scan::collect_images(public_dir, &config.extensions, &config.skip_patterns);
    writeln!(out, "Found {} images\n", images.len())?;

    let mut outcomes = Vec::with_capacity(images.len());
    let mut total_original = 0.0;
    let mut total_new = 0.0;

    for path in &images {
        let outcome = process(path, config, apply);

        if outcome.is_resize() {
            total_original += outcome.original_size_mb;
            total_new += outcome.new_size_mb.unwrap_or(0.0);

            let tag = if apply { "[RESIZED]" } else { "[WOULD RESIZE]" };
            writeln!(out, "{tag} {}", scan::relative_display(path, public_dir))?;
            if let (Some((w, h)), Some((nw, nh))) =
                (outcome.original_dimensions, outcome.new_dimensions)
            {
                writeln!(out, "  Dimensions: {w}x{h} -> {nw}x{nh}")?;
            }
            write!(out, "  Size: {}", format_size(outcome.original_size_mb))?;
            match outcome.new_size_mb {
                Some(new) if new > 0.0 => writeln!(out, " -> {}", format_size(new))?,
                _ => writeln!(out)?,
            }
        }

        outcomes.push(outcome);
    }

    write_summary(out, public_dir, config, apply, &outcomes, total_original, total_new)?;
    Ok(outcomes)
}

fn write_summary<W: Write>(
    out: &mut W,
    public_dir: &Path,
    config: &ResizeConfig,
    apply: bool,
    outcomes: &[ResizeOutcome],
    total_original: f64,
    total_new: f64,
) -> io::Result<()> {
    let count = |action: ResizeAction| outcomes.iter().filter(|o| o.action == action).count();

    writeln!(out, "\n{RULE}")?;
    writeln!(out, "SUMMARY")?;
    writeln!(out, "{RULE}")?;

    if apply {
        writeln!(out, "Images resized: {}", count(ResizeAction::Resized))?;
    } else {
        writeln!(
            out,
            "Images that would be resized: {}",
            count(ResizeAction::WouldResize)
        )?;
    }
    writeln!(
        out,
        "Images under {:?} MB (skipped): {}",
        config.min_size_mb,
        count(ResizeAction::TooSmall)
    )?;
    writeln!(
        out,
        "Images already under {}px: {}",
        config.max_width,
        count(ResizeAction::AlreadySmall)
    )?;

    let errors: Vec<&ResizeOutcome> = outcomes
        .iter()
        .filter(|o| o.action == ResizeAction::Error)
        .collect();
    if !errors.is_empty() {
        writeln!(out, "Errors: {}", errors.len())?;
        for outcome in errors {
            writeln!(
                out,
                "  - {}: {}",
                scan::relative_display(&outcome.path, public_dir),
                outcome.error.as_deref().unwrap_or("unknown error")
            )?;
        }
    }

    if total_original > 0.0 {
        writeln!(
            out,
            "\nTotal size of large images: {}",
            format_size(total_original)
        )?;
        if total_new > 0.0 {
            let savings = total_original - total_new;
            writeln!(out, "After resizing: {}", format_size(total_new))?;
            writeln!(
                out,
                "Estimated savings: {} ({:.1}%)",
                format_size(savings),
                savings / total_original * 100.0
            )?;
        }
    }

    let would_resize = count(ResizeAction::WouldResize);
    if !apply && would_resize > 0 {
        writeln!(out, "\nRun with --apply to resize these {would_resize} images")?;
    }

    Ok(())
}
