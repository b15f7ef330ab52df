//! Image dimension and aspect-ratio report for layout decisions.

use crate::models::{DimensionEntry, DimensionsConfig, ImageInfo, Orientation};
use crate::services::{image_io, scan};
use std::io::{self, Write};
use std::path::Path;

/// Read the dimensions of one image (header only) and classify it.
pub fn inspect(path: &Path, base: &Path, config: &DimensionsConfig) -> DimensionEntry {
    match image_io::image_dimensions(path) {
        Ok((_, 0)) => DimensionEntry::Error {
            path: path.display().to_string(),
            error: "image has zero height".to_string(),
        },
        Ok((width, height)) => {
            let ratio = width as f64 / height as f64;
            DimensionEntry::Info(ImageInfo {
                path: scan::relative_display(path, base),
                width,
                height,
                ratio: round_ratio(ratio),
                orientation: Orientation::classify(
                    ratio,
                    config.landscape_ratio,
                    config.portrait_ratio,
                ),
            })
        }
        Err(e) => DimensionEntry::Error {
            path: path.display().to_string(),
            error: e.to_string(),
        },
    }
}

/// Two decimals, ties to even (0.625 -> 0.62, 1.125 -> 1.12).
fn round_ratio(ratio: f64) -> f64 {
    (ratio * 100.0).round_ties_even() / 100.0
}

/// Inspect every matching image below `public_dir`, in path order.
pub fn scan(public_dir: &Path, config: &DimensionsConfig) -> Vec<DimensionEntry> {
    scan::collect_images(public_dir, &config.extensions, &[])
        .iter()
        .map(|path| inspect(path, public_dir, config))
        .collect()
}

/// Write the grouped text report.
pub fn write_report<W: Write>(entries: &[DimensionEntry], out: &mut W) -> io::Result<()> {
    let sections = [
        (Orientation::Landscape, "LANDSCAPE PHOTOS (wide)"),
        (Orientation::Portrait, "PORTRAIT PHOTOS (tall)"),
        (Orientation::Square, "SQUARE-ISH PHOTOS"),
    ];

    for (orientation, title) in sections {
        writeln!(out, "\n=== {title} ===")?;
        for entry in entries {
            if let DimensionEntry::Info(info) = entry {
                if info.orientation == orientation {
                    writeln!(
                        out,
                        "  /{}: {}x{} (ratio: {:?})",
                        info.path, info.width, info.height, info.ratio
                    )?;
                }
            }
        }
    }

    writeln!(out, "\n=== ERRORS ===")?;
    for entry in entries {
        if let DimensionEntry::Error { path, error } = entry {
            writeln!(out, "  {path}: {error}")?;
        }
    }

    writeln!(out, "\nTotal: {} images", entries.len())
}

/// Scan `public_dir` and write either the text report or a JSON array.
pub fn run<W: Write>(
    public_dir: &Path,
    config: &DimensionsConfig,
    json: bool,
    out: &mut W,
) -> io::Result<Vec<DimensionEntry>> {
    let entries = scan(public_dir, config);

    if json {
        serde_json::to_writer_pretty(&mut *out, &entries)?;
        writeln!(out)?;
    } else {
        write_report(&entries, out)?;
    }

    Ok(entries)
}
