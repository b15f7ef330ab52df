//! Records produced by the batch tools.

use serde::Serialize;
use std::path::PathBuf;

/// Layout class of an image, derived from its aspect ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Landscape,
    Portrait,
    Square,
}

impl Orientation {
    /// Classify `ratio` (width / height): above `landscape` is landscape,
    /// below `portrait` is portrait, anything in between is square.
    pub fn classify(ratio: f64, landscape: f64, portrait: f64) -> Self {
        if ratio > landscape {
            Orientation::Landscape
        } else if ratio < portrait {
            Orientation::Portrait
        } else {
            Orientation::Square
        }
    }
}

/// Dimensions of one image in the asset folder.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageInfo {
    /// Path relative to the asset folder, `/`-separated
    pub path: String,
    pub width: u32,
    pub height: u32,
    /// width / height, rounded to two decimals
    pub ratio: f64,
    pub orientation: Orientation,
}

/// One line of the dimension report.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DimensionEntry {
    Info(ImageInfo),
    Error { path: String, error: String },
}

/// What the downscaler did (or would do) with a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeAction {
    /// Below the minimum file size
    TooSmall,
    /// Already within the maximum width
    AlreadySmall,
    /// Dry run: would be resized
    WouldResize,
    Resized,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResizeOutcome {
    pub path: PathBuf,
    pub original_size_mb: f64,
    /// Estimated in a dry run, measured after resizing
    pub new_size_mb: Option<f64>,
    pub original_dimensions: Option<(u32, u32)>,
    pub new_dimensions: Option<(u32, u32)>,
    pub action: ResizeAction,
    pub error: Option<String>,
}

impl ResizeOutcome {
    pub fn new(path: PathBuf, original_size_mb: f64) -> Self {
        Self {
            path,
            original_size_mb,
            new_size_mb: None,
            original_dimensions: None,
            new_dimensions: None,
            action: ResizeAction::TooSmall,
            error: None,
        }
    }

    /// Whether the file was (or would be) scaled down
    pub fn is_resize(&self) -> bool {
        matches!(
            self.action,
            ResizeAction::WouldResize | ResizeAction::Resized
        )
    }
}
