//! PixelRecolorer -- brightness-multiplicative remapping onto a target hue.

use super::error::BufferError;
use crate::color::{Pixel, TargetColor};

/// Remaps pixels toward a [`TargetColor`] while keeping their brightness
/// and alpha.
///
/// For every pixel with non-zero alpha:
///
/// ```text
/// brightness = (r + g + b) / (3 * 255)
/// r' = floor(target.r * brightness)
/// g' = floor(target.g * brightness)
/// b' = floor(target.b * brightness)
/// a' = a
/// ```
///
/// Fully transparent pixels are returned unchanged. The mapping is
/// pointwise, so a recolorer can be shared and reused across images.
///
/// Because the model is multiplicative, every dark shade collapses toward
/// black: `(0, 0, 0, a)` always maps to `(0, 0, 0, a)`.
///
/// # Example
///
/// ```
/// use pixel_recolor::{Pixel, PixelRecolorer, TargetColor};
///
/// let recolorer = PixelRecolorer::new(TargetColor::new(160, 200, 240));
///
/// let white = Pixel::new(255, 255, 255, 255);
/// assert_eq!(recolorer.recolor_pixel(white), Pixel::new(160, 200, 240, 255));
///
/// let gray = Pixel::new(128, 128, 128, 128);
/// assert_eq!(recolorer.recolor_pixel(gray), Pixel::new(80, 100, 120, 128));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRecolorer {
    target: TargetColor,
}

impl PixelRecolorer {
    /// Create a recolorer mapping full-brightness pixels to `target`.
    #[inline]
    pub const fn new(target: TargetColor) -> Self {
        Self { target }
    }

    /// The color full-brightness pixels map to.
    #[inline]
    pub const fn target(&self) -> TargetColor {
        self.target
    }

    /// Recolor a single pixel.
    #[inline]
    pub fn recolor_pixel(&self, pixel: Pixel) -> Pixel {
        if pixel.is_transparent() {
            return pixel;
        }

        let brightness = pixel.brightness();
        // `as u8` truncates toward zero, which is floor for the non-negative
        // products here; the product never exceeds the target channel.
        let scale = |channel: u8| (channel as f64 * brightness) as u8;

        Pixel::new(
            scale(self.target.r),
            scale(self.target.g),
            scale(self.target.b),
            pixel.a,
        )
    }

    /// Recolor an interleaved RGBA8 buffer in place.
    ///
    /// The caller must hold the only reference to `rgba`; each pixel is read
    /// and written back before moving to the next one.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::NotRgba`] if the buffer length is not a
    /// multiple of 4. The buffer is left untouched in that case.
    pub fn recolor_in_place(&self, rgba: &mut [u8]) -> Result<(), BufferError> {
        if rgba.len() % 4 != 0 {
            return Err(BufferError::NotRgba { len: rgba.len() });
        }

        for chunk in rgba.chunks_exact_mut(4) {
            let pixel = Pixel::new(chunk[0], chunk[1], chunk[2], chunk[3]);
            chunk.copy_from_slice(&self.recolor_pixel(pixel).to_bytes());
        }

        Ok(())
    }

    /// Recolor an interleaved RGBA8 buffer into a new buffer.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::NotRgba`] if the buffer length is not a
    /// multiple of 4.
    pub fn recolor(&self, rgba: &[u8]) -> Result<Vec<u8>, BufferError> {
        let mut out = rgba.to_vec();
        self.recolor_in_place(&mut out)?;
        Ok(out)
    }
}

impl From<TargetColor> for PixelRecolorer {
    fn from(target: TargetColor) -> Self {
        Self::new(target)
    }
}
