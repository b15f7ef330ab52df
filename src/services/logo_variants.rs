//! Produces the configured colored variants of the site logo.

use crate::error::RecolorError;
use crate::models::PipelineConfig;
use crate::services::recolor::LogoRecolorer;
use std::io::Write;
use std::path::{Path, PathBuf};

/// What a logo run did
#[derive(Debug, Clone, PartialEq)]
pub struct LogoReport {
    /// Resolved source logo path
    pub source: PathBuf,
    /// False when the source was missing and nothing was attempted
    pub source_found: bool,
    /// Written variants, in configuration order
    pub outputs: Vec<PathBuf>,
}

/// Recolor the source logo once per configured variant.
///
/// The source is `<project_root>/<public_dir>/<logo.input>`. When it does
/// not exist, a single `Error: Input logo not found at <path>` line is
/// written to `out` and the run ends successfully with no outputs. After
/// each variant a `Created <kind> logo at: <path>` line is written.
///
/// Decode or encode failures abort the run.
pub fn run<W: Write>(
    config: &PipelineConfig,
    project_root: &Path,
    out: &mut W,
) -> Result<LogoReport, RecolorError> {
    let public_dir = config.public_dir_in(project_root);
    let source = public_dir.join(&config.logo.input);

    if !source.exists() {
        tracing::warn!(path = %source.display(), "Input logo missing, nothing to do");
        writeln!(out, "Error: Input logo not found at {}", source.display())?;
        return Ok(LogoReport {
            source,
            source_found: false,
            outputs: Vec::new(),
        });
    }

    let mut outputs = Vec::with_capacity(config.logo.variants.len());
    for variant in &config.logo.variants {
        let output = public_dir.join(&variant.output);
        LogoRecolorer::new(variant.color).recolor_file(&source, &output)?;
        writeln!(out, "Created {} logo at: {}", variant.kind, output.display())?;
        outputs.push(output);
    }

    Ok(LogoReport {
        source,
        source_found: true,
        outputs,
    })
}
