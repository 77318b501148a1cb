//! Solid-colour fill that keeps each pixel's alpha.

use image::{DynamicImage, RgbaImage};

use crate::core::RgbColor;
use crate::processing::{FileTransform, Transform};
use crate::utils::{AssetResult, ImageFormat};

const RECOLOR_FORMATS: [ImageFormat; 4] = [
    ImageFormat::PNG,
    ImageFormat::JPEG,
    ImageFormat::GIF,
    ImageFormat::BMP,
];

/// Replaces every pixel's RGB with `color`; alpha is copied unchanged.
pub fn fill_preserving_alpha(image: &DynamicImage, color: RgbColor) -> RgbaImage {
    let mut rgba = image.to_rgba8();
    for pixel in rgba.pixels_mut() {
        let alpha = pixel.0[3];
        pixel.0 = [color.r, color.g, color.b, alpha];
    }
    rgba
}

pub struct Recolor {
    color: RgbColor,
}

impl Recolor {
    pub fn new(color: RgbColor) -> Self {
        Self { color }
    }
}

impl FileTransform for Recolor {
    fn name(&self) -> &str {
        "recolor"
    }

    fn formats(&self) -> &[ImageFormat] {
        &RECOLOR_FORMATS
    }

    fn transform(&self, image: &DynamicImage) -> AssetResult<Transform> {
        Ok(Transform::Write(DynamicImage::ImageRgba8(
            fill_preserving_alpha(image, self.color),
        )))
    }

    fn describe_output(&self, width: u32, height: u32) -> String {
        format!("Filled {width}x{height} with {}", self.color)
    }
}
