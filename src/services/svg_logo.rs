//! Vector logo recoloring by text substitution, plus a padded square
//! variant for repeating background patterns.

use crate::error::SvgError;
use crate::models::SvgConfig;
use pixel_recolor::TargetColor;
use regex::{Captures, Regex};
use resvg::usvg::{self, Transform};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tiny_skia::Pixmap;

/// White hex literals; `#fff` must not match the start of e.g. `#fff000`
fn white_hex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)#(?:fefefe|ffffff|fff)\b").expect("valid regex"))
}

fn white_fill() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"fill=(?:"white"|'white')"#).expect("valid regex"))
}

/// Replace white color literals in SVG source with `accent`.
///
/// Matches `#fefefe`, `#ffffff` and `#fff` in any letter case, and
/// `fill="white"` / `fill='white'`. Everything else is left byte-for-byte.
pub fn recolor_svg(svg: &str, accent: TargetColor) -> String {
    let hex = accent.to_hex();
    let replaced = white_hex().replace_all(svg, hex.as_str());
    white_fill()
        .replace_all(&replaced, |caps: &Captures| {
            // keep the attribute's own quote character
            let quote = &caps[0]["fill=".len()..="fill=".len()];
            format!("fill={quote}{hex}{quote}")
        })
        .into_owned()
}

/// Wrap the artwork in a square canvas of side `size`, shifted by
/// (`dx`, `dy`).
///
/// The root `<svg ...>` line (one that starts with `<svg` and carries both
/// `width=` and `height=`) is replaced by a square root element followed by
/// an opening translate group; a closing `</g>` is inserted before any line
/// containing `</svg>`.
pub fn pad_svg(svg: &str, size: u32, dx: f32, dy: f32) -> String {
    let mut lines = Vec::new();

    for line in svg.split('\n') {
        if line.starts_with("<svg") && line.contains("width=") && line.contains("height=") {
            lines.push(format!(
                r#"<svg version="1.1" xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 {size} {size}">"#
            ));
            lines.push(format!(r#"<g transform="translate({dx}, {dy})">"#));
        } else if line.contains("</svg>") {
            lines.push("</g>".to_string());
            lines.push(line.to_string());
        } else {
            lines.push(line.to_string());
        }
    }

    lines.join("\n")
}

/// Render SVG source to PNG bytes, scaled to `width` pixels wide.
pub fn rasterize(svg: &str, width: u32) -> Result<Vec<u8>, SvgError> {
    if width == 0 {
        return Err(SvgError::InvalidWidth(width));
    }

    let tree = usvg::Tree::from_str(svg, &usvg::Options::default())
        .map_err(|e| SvgError::Parse(e.to_string()))?;

    let svg_size = tree.size();
    let scale = width as f32 / svg_size.width();
    let height = (svg_size.height() * scale).round().max(1.0) as u32;

    let mut pixmap = Pixmap::new(width, height).ok_or(SvgError::PixmapAllocation)?;
    resvg::render(&tree, Transform::from_scale(scale, scale), &mut pixmap.as_mut());

    pixmap
        .encode_png()
        .map_err(|e| SvgError::PngEncode(e.to_string()))
}

/// Files written by [`run`]
#[derive(Debug, Clone, PartialEq)]
pub struct SvgReport {
    pub output: PathBuf,
    pub padded_output: PathBuf,
    pub raster: Option<PathBuf>,
}

/// Recolor the configured SVG logo and write the plain and padded variants,
/// optionally rasterizing the padded one to PNG at `raster_width`.
pub fn run<W: Write>(
    config: &SvgConfig,
    project_root: &Path,
    raster_width: Option<u32>,
    out: &mut W,
) -> Result<SvgReport, SvgError> {
    let input = project_root.join(&config.input);
    if !input.exists() {
        return Err(SvgError::SourceNotFound(input));
    }

    let source = std::fs::read_to_string(&input)?;
    let recolored = recolor_svg(&source, config.accent);

    let output = project_root.join(&config.output);
    std::fs::write(&output, &recolored)?;
    writeln!(out, "Created {}", file_name(&output))?;

    let padded = pad_svg(&recolored, config.pad_size, config.offset_x, config.offset_y);
    let padded_output = project_root.join(&config.padded_output);
    std::fs::write(&padded_output, &padded)?;
    writeln!(
        out,
        "Created {} (for background pattern)",
        file_name(&padded_output)
    )?;

    let raster = match raster_width {
        Some(width) => {
            let png_bytes = rasterize(&padded, width)?;
            let path = padded_output.with_extension("png");
            std::fs::write(&path, &png_bytes)?;
            writeln!(out, "Created {} ({width}px wide)", file_name(&path))?;
            Some(path)
        }
        None => None,
    };

    tracing::info!(
        input = %input.display(),
        accent = %config.accent,
        "Recolored SVG logo"
    );

    writeln!(out, "\nNext steps:")?;
    writeln!(
        out,
        "1. Use {} for the repeating background pattern",
        file_name(&padded_output)
    )?;
    writeln!(out, "2. Use {} for the spinning badge logo", file_name(&output))?;

    Ok(SvgReport {
        output,
        padded_output,
        raster,
    })
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const ACCENT: TargetColor = TargetColor::new(0x07, 0x51, 0xcf);

    const LOGO: &str = r##"<?xml version="1.0" encoding="UTF-8"?>
<svg version="1.1" xmlns="http://www.w3.org/2000/svg" width="784" height="760">
<path fill="#FEFEFE" d="M0 0h10v10z"/>
<path fill="white" d="M1 1h5v5z"/>
<path style="fill:#fff" d="M2 2h3v3z"/>
</svg>"##;

    #[test]
    fn test_recolor_replaces_white_variants() {
        let out = recolor_svg(LOGO, ACCENT);
        assert!(out.contains(r##"fill="#0751cf" d="M0"##));
        assert!(out.contains(r##"<path fill="#0751cf" d="M1"##));
        assert!(out.contains("fill:#0751cf"));
        assert!(!out.to_lowercase().contains("#fff"));
        assert!(!out.contains("white"));
    }

    #[test]
    fn test_recolor_keeps_quote_style() {
        let out = recolor_svg("<rect fill='white'/>", ACCENT);
        assert_eq!(out, "<rect fill='#0751cf'/>");
    }

    #[test]
    fn test_recolor_ignores_mismatched_quotes() {
        let svg = r#"<rect fill="white'/><rect fill='white"/>"#;
        assert_eq!(recolor_svg(svg, ACCENT), svg);
    }

    #[test]
    fn test_recolor_leaves_other_colors() {
        let svg = r##"<rect fill="#fff000"/><rect fill="#FFFFFE"/><rect fill="whitesmoke"/>"##;
        assert_eq!(recolor_svg(svg, ACCENT), svg);
    }

    #[test]
    fn test_recolor_mixed_case_hex() {
        assert_eq!(
            recolor_svg(r##"<rect fill="#FfFfFf"/>"##, ACCENT),
            r##"<rect fill="#0751cf"/>"##
        );
    }

    #[test]
    fn test_pad_wraps_root_element() {
        let padded = pad_svg(LOGO, 800, 8.0, 20.0);
        let lines: Vec<&str> = padded.lines().collect();

        assert_eq!(lines[0], r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        assert_eq!(
            lines[1],
            r#"<svg version="1.1" xmlns="http://www.w3.org/2000/svg" width="800" height="800" viewBox="0 0 800 800">"#
        );
        assert_eq!(lines[2], r#"<g transform="translate(8, 20)">"#);
        assert_eq!(lines[lines.len() - 2], "</g>");
        assert_eq!(lines[lines.len() - 1], "</svg>");
    }

    #[test]
    fn test_pad_ignores_root_without_size() {
        let svg = "<svg viewBox=\"0 0 1 1\">\n</svg>";
        let padded = pad_svg(svg, 800, 8.0, 20.0);
        assert_eq!(padded, "<svg viewBox=\"0 0 1 1\">\n</g>\n</svg>");
    }

    #[test]
    fn test_rasterize_dimensions() {
        let svg = r##"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="50"><rect width="100" height="50" fill="#0751cf"/></svg>"##;
        let png_bytes = rasterize(svg, 200).unwrap();
        let img = image::load_from_memory(&png_bytes).unwrap().to_rgba8();
        assert_eq!(img.dimensions(), (200, 100));
        assert_eq!(img.get_pixel(100, 50).0, [0x07, 0x51, 0xcf, 255]);
    }

    #[test]
    fn test_rasterize_rejects_zero_width() {
        assert!(matches!(
            rasterize(LOGO, 0),
            Err(SvgError::InvalidWidth(0))
        ));
    }

    #[test]
    fn test_rasterize_rejects_garbage() {
        assert!(matches!(rasterize("not svg", 10), Err(SvgError::Parse(_))));
    }

    #[test]
    fn test_run_writes_both_variants() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("WhiteLogoNoBackground.svg"), LOGO).unwrap();
        let mut out = Vec::new();

        let report = run(&SvgConfig::default(), dir.path(), None, &mut out).unwrap();

        let plain = std::fs::read_to_string(&report.output).unwrap();
        let padded = std::fs::read_to_string(&report.padded_output).unwrap();
        assert!(plain.contains("#0751cf"));
        assert!(padded.contains(r#"viewBox="0 0 800 800""#));
        assert!(report.raster.is_none());

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with(
            "Created PatchLogoBlue.svg\nCreated PatchLogoBlue_Padded.svg (for background pattern)\n"
        ));
        assert!(text.contains("2. Use PatchLogoBlue.svg for the spinning badge logo"));
    }

    #[test]
    fn test_run_missing_source() {
        let dir = tempfile::tempdir().unwrap();
        let err = run(&SvgConfig::default(), dir.path(), None, &mut Vec::new()).unwrap_err();
        assert!(matches!(err, SvgError::SourceNotFound(_)));
    }
}
