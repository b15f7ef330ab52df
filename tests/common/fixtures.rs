//! Image fixtures and constants.

use image::{Rgba, RgbaImage};
use std::path::Path;

/// Default target colors of the logo variants
pub mod colors {
    use pixel_recolor::TargetColor;

    pub const LIGHT_BLUE: TargetColor = TargetColor::new(160, 200, 240);
    pub const VERY_LIGHT_BLUE: TargetColor = TargetColor::new(220, 235, 255);
}

/// Pixels of the 2x2 reference logo, row-major
pub const REFERENCE_PIXELS: [[u8; 4]; 4] = [
    [255, 255, 255, 255],
    [0, 0, 0, 255],
    [128, 128, 128, 128],
    [0, 0, 0, 0],
];

/// The reference logo recolored with light blue
pub const REFERENCE_LIGHT_BLUE: [[u8; 4]; 4] = [
    [160, 200, 240, 255],
    [0, 0, 0, 255],
    [80, 100, 120, 128],
    [0, 0, 0, 0],
];

/// Write a 2x2 RGBA PNG with [`REFERENCE_PIXELS`]
pub fn write_reference_logo(path: &Path) {
    write_rgba_png(path, 2, 2, &REFERENCE_PIXELS);
}

/// Write a `width` x `height` RGBA PNG from row-major pixels
pub fn write_rgba_png(path: &Path, width: u32, height: u32, pixels: &[[u8; 4]]) {
    assert_eq!(pixels.len(), (width * height) as usize);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    let img = RgbaImage::from_fn(width, height, |x, y| {
        Rgba(pixels[(y * width + x) as usize])
    });
    img.save(path).unwrap();
}

/// A white-on-transparent gradient logo, wide enough to exercise
/// anti-aliased edges
pub fn write_gradient_logo(path: &Path, width: u32, height: u32) {
    let pixels: Vec<[u8; 4]> = (0..width * height)
        .map(|i| {
            let v = (i * 255 / (width * height - 1)) as u8;
            [v, v, v, v / 2]
        })
        .collect();
    write_rgba_png(path, width, height, &pixels);
}

/// Decode a PNG into row-major RGBA pixels
pub fn read_rgba(path: &Path) -> (u32, u32, Vec<[u8; 4]>) {
    let img = image::open(path).unwrap().to_rgba8();
    let pixels = img.pixels().map(|p| p.0).collect();
    (img.width(), img.height(), pixels)
}

/// A minimal white SVG logo with a sized root element
pub const WHITE_SVG_LOGO: &str = r##"<?xml version="1.0" encoding="UTF-8"?>
<svg version="1.1" xmlns="http://www.w3.org/2000/svg" width="100" height="50">
<rect fill="#FFFFFF" width="100" height="50"/>
<circle fill="white" cx="25" cy="25" r="10"/>
</svg>"##;
