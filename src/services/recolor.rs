//! Raster logo recoloring, one file at a time.

use crate::error::RecolorError;
use crate::services::image_io;
use pixel_recolor::{PixelRecolorer, TargetColor};
use std::path::{Path, PathBuf};

/// Result of one successful recolor
#[derive(Debug, Clone, PartialEq)]
pub struct RecolorOutput {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
}

/// Recolors raster logo files toward a target color.
///
/// Decodes the source into an owned RGBA8 buffer, recolors that buffer in
/// place, encodes it as PNG in memory and writes the destination with a
/// single call. The source file is never modified.
pub struct LogoRecolorer {
    recolorer: PixelRecolorer,
}

impl LogoRecolorer {
    pub fn new(target: TargetColor) -> Self {
        Self {
            recolorer: PixelRecolorer::new(target),
        }
    }

    pub fn target(&self) -> TargetColor {
        self.recolorer.target()
    }

    /// Recolor `input` and write the result to `output` as PNG.
    ///
    /// Fails with [`RecolorError::SourceNotFound`] before any decoding when
    /// `input` does not exist. Nothing is written on failure.
    pub fn recolor_file(&self, input: &Path, output: &Path) -> Result<RecolorOutput, RecolorError> {
        let mut image = image_io::load_rgba(input)?;
        let (width, height) = image.dimensions();

        self.recolorer.recolor_in_place(&mut image)?;

        let png_bytes = image_io::encode_png_rgba(width, height, image.as_raw()).map_err(
            |message| RecolorError::Encode {
                path: output.to_path_buf(),
                message,
            },
        )?;
        std::fs::write(output, &png_bytes)?;

        tracing::info!(
            input = %input.display(),
            output = %output.display(),
            color = %self.target(),
            width,
            height,
            bytes = png_bytes.len(),
            "Recolored logo"
        );

        Ok(RecolorOutput {
            path: output.to_path_buf(),
            width,
            height,
        })
    }
}
