//! Crops transparent borders away.

use image::{imageops, DynamicImage, RgbaImage};

use crate::core::SkipReason;
use crate::processing::{FileTransform, Transform};
use crate::utils::{AssetResult, ImageFormat};

/// Smallest rectangle holding every pixel with non-zero alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// `None` when the image is completely transparent.
pub fn alpha_bounding_box(image: &RgbaImage) -> Option<BoundingBox> {
    let mut bounds: Option<(u32, u32, u32, u32)> = None;

    for (x, y, pixel) in image.enumerate_pixels() {
        if pixel.0[3] == 0 {
            continue;
        }
        bounds = Some(match bounds {
            None => (x, y, x, y),
            Some((min_x, min_y, max_x, max_y)) => {
                (min_x.min(x), min_y.min(y), max_x.max(x), max_y.max(y))
            }
        });
    }

    bounds.map(|(min_x, min_y, max_x, max_y)| BoundingBox {
        x: min_x,
        y: min_y,
        width: max_x - min_x + 1,
        height: max_y - min_y + 1,
    })
}

pub struct Trimmer;

impl FileTransform for Trimmer {
    fn name(&self) -> &str {
        "trim"
    }

    fn formats(&self) -> &[ImageFormat] {
        &[ImageFormat::PNG]
    }

    fn transform(&self, image: &DynamicImage) -> AssetResult<Transform> {
        let rgba = image.to_rgba8();

        let Some(bbox) = alpha_bounding_box(&rgba) else {
            return Ok(Transform::Skip(SkipReason::CompletelyTransparent));
        };

        if (bbox.width, bbox.height) == rgba.dimensions() {
            return Ok(Transform::Skip(SkipReason::AlreadyMinimallyCropped));
        }

        let cropped = imageops::crop_imm(&rgba, bbox.x, bbox.y, bbox.width, bbox.height).to_image();
        Ok(Transform::Write(DynamicImage::ImageRgba8(cropped)))
    }

    fn describe_output(&self, width: u32, height: u32) -> String {
        format!("Dimensions: {width}x{height}")
    }
}
