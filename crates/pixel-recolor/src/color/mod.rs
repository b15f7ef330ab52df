//! Color types
//!
//! - [`TargetColor`]: the RGB hue a recolor pass maps toward
//! - [`Pixel`]: one RGBA8 pixel, with its normalized brightness

mod error;
mod pixel;
mod target_color;

pub use error::ParseColorError;
pub use pixel::Pixel;
pub use target_color::TargetColor;
