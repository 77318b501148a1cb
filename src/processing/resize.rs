// src/processing/resize.rs

//! Downscaling: maps a [`ResizePolicy`] onto each image's dimensions.
//!
//! Sizes are truncated towards zero, never rounded. Resampling uses Lanczos3,
//! the closest match to an area/Lanczos filter the `image` crate offers.

use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView};

use crate::core::{ResizePolicy, SkipReason};
use crate::processing::{FileTransform, Transform};
use crate::utils::{AssetError, AssetResult, ImageFormat, ValidationError};

/// New size for one image, or why it keeps its current one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResizePlan {
    Resize { width: u32, height: u32 },
    Skip(SkipReason),
}

/// Computes the target size for an image of `orig_w`×`orig_h` under `policy`.
pub fn plan_resize(policy: ResizePolicy, orig_w: u32, orig_h: u32) -> ResizePlan {
    let (new_w, new_h) = match policy {
        ResizePolicy::Scale(factor) => (
            scaled(orig_w, factor),
            scaled(orig_h, factor),
        ),
        ResizePolicy::TargetHeight(target) => {
            if target >= orig_h {
                return ResizePlan::Skip(SkipReason::TargetHeightNotSmaller {
                    target,
                    height: orig_h,
                });
            }
            let ratio = target as f64 / orig_h as f64;
            (scaled(orig_w, ratio), target)
        }
        ResizePolicy::TargetWidth(target) => {
            if target >= orig_w {
                return ResizePlan::Skip(SkipReason::TargetWidthNotSmaller {
                    target,
                    width: orig_w,
                });
            }
            let ratio = target as f64 / orig_w as f64;
            (target, scaled(orig_h, ratio))
        }
    };

    // Only degenerate inputs land here, but the skip must still be reported.
    if (new_w, new_h) == (orig_w, orig_h) {
        return ResizePlan::Skip(SkipReason::AlreadyAtTargetSize);
    }

    ResizePlan::Resize {
        width: new_w,
        height: new_h,
    }
}

fn scaled(side: u32, factor: f64) -> u32 {
    (side as f64 * factor).floor() as u32
}

/// Batch transform that shrinks PNGs according to one policy.
pub struct Resizer {
    policy: ResizePolicy,
}

impl Resizer {
    pub fn new(policy: ResizePolicy) -> Result<Self, ValidationError> {
        policy.validate()?;
        Ok(Self { policy })
    }

    pub fn policy(&self) -> ResizePolicy {
        self.policy
    }
}

impl FileTransform for Resizer {
    fn name(&self) -> &str {
        "resize"
    }

    fn formats(&self) -> &[ImageFormat] {
        &[ImageFormat::PNG]
    }

    fn transform(&self, image: &DynamicImage) -> AssetResult<Transform> {
        let (orig_w, orig_h) = image.dimensions();

        match plan_resize(self.policy, orig_w, orig_h) {
            ResizePlan::Skip(reason) => Ok(Transform::Skip(reason)),
            ResizePlan::Resize { width, height } if width == 0 || height == 0 => {
                Err(AssetError::processing(format!(
                    "{} shrinks {}x{} to an empty {}x{} image",
                    self.policy, orig_w, orig_h, width, height
                )))
            }
            ResizePlan::Resize { width, height } => Ok(Transform::Write(
                image.resize_exact(width, height, FilterType::Lanczos3),
            )),
        }
    }
}
