//! RGBA pixel type

/// One pixel of an RGBA8 image.
///
/// The unit of transformation: recoloring derives new `r`, `g`, `b` values
/// and never touches `a`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Opacity: 0 is fully transparent, 255 fully opaque
    pub a: u8,
}

impl Pixel {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a pixel from interleaved bytes [R, G, B, A].
    #[inline]
    pub const fn from_bytes(bytes: [u8; 4]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2], bytes[3])
    }

    /// Convert to interleaved bytes [R, G, B, A].
    #[inline]
    pub const fn to_bytes(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Whether the pixel is fully transparent.
    #[inline]
    pub const fn is_transparent(self) -> bool {
        self.a == 0
    }

    /// Normalized average of the color channels, in `0.0..=1.0`.
    ///
    /// Computed as `(r + g + b) / (3 * 255)`. Alpha does not participate.
    ///
    /// # Example
    /// ```
    /// use pixel_recolor::Pixel;
    /// assert_eq!(Pixel::new(255, 255, 255, 0).brightness(), 1.0);
    /// assert_eq!(Pixel::new(0, 0, 0, 255).brightness(), 0.0);
    /// ```
    #[inline]
    pub fn brightness(self) -> f64 {
        let sum = self.r as u32 + self.g as u32 + self.b as u32;
        sum as f64 / (3.0 * 255.0)
    }
}

impl From<[u8; 4]> for Pixel {
    fn from(bytes: [u8; 4]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<Pixel> for [u8; 4] {
    fn from(pixel: Pixel) -> Self {
        pixel.to_bytes()
    }
}
