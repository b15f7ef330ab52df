use std::path::PathBuf;
use thiserror::Error;

/// Failure of a single raster recolor invocation.
#[derive(Debug, Error)]
pub enum RecolorError {
    #[error("Source image not found: {}", .0.display())]
    SourceNotFound(PathBuf),

    #[error("Failed to decode {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to encode {}: {message}", .path.display())]
    Encode { path: PathBuf, message: String },

    #[error("Pixel buffer error: {0}")]
    Buffer(#[from] pixel_recolor::BufferError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum SvgError {
    #[error("Source SVG not found: {}", .0.display())]
    SourceNotFound(PathBuf),

    #[error("SVG parse error: {0}")]
    Parse(String),

    #[error("Invalid raster width: {0}")]
    InvalidWidth(u32),

    #[error("Failed to allocate pixmap")]
    PixmapAllocation,

    #[error("PNG encode error: {0}")]
    PngEncode(String),

    #[error("WebP encode error: {0}")]
    WebPEncode(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Per-file failure in the batch converters (HEIC, downscaling).
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("HEIC support not compiled in (rebuild with --features heic)")]
    HeicUnsupported,

    #[error("HEIC decode error: {0}")]
    Heic(String),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("PNG encode error: {0}")]
    PngEncode(String),

    #[error("WebP encode error: {0}")]
    WebPEncode(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}
