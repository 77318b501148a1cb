//! The seam between the directory walker and the per-image operations.

use image::DynamicImage;
use crate::core::SkipReason;
use crate::utils::{AssetResult, ImageFormat};

/// Decision for one decoded image.
pub enum Transform {
    /// Write this image to the output path
    Write(DynamicImage),
    /// Leave the file alone
    Skip(SkipReason),
}

/// A per-image operation driven by [`BatchProcessor`](super::BatchProcessor).
///
/// Implementations only see decoded pixels; locating, opening, naming and saving
/// files is the processor's job.
pub trait FileTransform {
    /// Short name used in log lines
    fn name(&self) -> &str;

    /// Formats picked up from the tree; every other file is ignored.
    fn formats(&self) -> &[ImageFormat];

    fn transform(&self, image: &DynamicImage) -> AssetResult<Transform>;

    /// Second log line after "Saved: <path>".
    fn describe_output(&self, width: u32, height: u32) -> String {
        format!("New size: {width}x{height}")
    }
}
