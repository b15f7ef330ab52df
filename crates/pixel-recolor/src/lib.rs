//! pixel-recolor: alpha-aware brightness remapping for logo artwork
//!
//! Turns a white (or grayscale) logo with transparency into a colored
//! variant. Only the color channels are rewritten, each scaled by the
//! pixel's own brightness; alpha is never touched.
//!
//! # Quick Start
//!
//! ```
//! use pixel_recolor::{PixelRecolorer, TargetColor};
//!
//! let target: TargetColor = "#a0c8f0".parse().unwrap();
//! let recolorer = PixelRecolorer::new(target);
//!
//! // Two pixels: opaque white, half-transparent mid gray
//! let mut rgba = vec![255, 255, 255, 255, 128, 128, 128, 128];
//! recolorer.recolor_in_place(&mut rgba).unwrap();
//!
//! assert_eq!(rgba, vec![160, 200, 240, 255, 80, 100, 120, 128]);
//! ```
//!
//! # Model
//!
//! ```text
//! brightness = (r + g + b) / 765          (0.0 ..= 1.0)
//! channel'   = floor(target * brightness)  for r, g, b
//! alpha'     = alpha
//! ```
//!
//! Fully transparent pixels are passed through unchanged. The crate does
//! no I/O: decoding and encoding image files is up to the caller, which
//! hands over an owned RGBA8 buffer.

pub mod color;
pub mod recolor;


pub use color::{ParseColorError, Pixel, TargetColor};
pub use recolor::{BufferError, PixelRecolorer};
