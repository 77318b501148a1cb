use std::path::{Path, PathBuf};
use image::{DynamicImage, GenericImageView};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::core::{BatchReport, FileOutcome};
use crate::processing::{FileTransform, Transform};
use crate::utils::{
    AssetError, AssetResult, ImageFormat, create_dir_all, has_extension_in, relocate, unique_output_path,
    validate_input_dir,
};

use super::BatchConfig;

/// Walks an input tree, mirrors it under the output root and applies one
/// [`FileTransform`] to every matching image.
///
/// Files are handled one at a time. A failure on one file is logged, recorded in
/// the report and never stops the walk.
pub struct BatchProcessor {
    config: BatchConfig,
}

impl BatchProcessor {
    pub fn new(config: BatchConfig) -> Self {
        Self { config }
    }

    /// Runs `transform` over the whole tree.
    ///
    /// Only a missing input root or an uncreatable output root fail the run.
    pub fn run<T: FileTransform + ?Sized>(&self, transform: &T) -> AssetResult<BatchReport> {
        let BatchConfig { input_root, output_root } = &self.config;

        validate_input_dir(input_root)?;
        create_dir_all(output_root)?;
        let in_place = self.config.in_place();

        debug!(
            "{}: {} -> {}{}",
            transform.name(),
            input_root.display(),
            output_root.display(),
            if in_place { " (in place)" } else { "" }
        );

        // Snapshot first so files written during the run are never picked up again.
        let entries: Vec<_> = WalkDir::new(input_root)
            .sort_by_file_name()
            .into_iter()
            .collect();

        let mut report = BatchReport::default();

        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    let path = e
                        .path()
                        .map(Path::to_path_buf)
                        .unwrap_or_else(|| input_root.clone());
                    warn!("Error processing {}: {}", path.display(), e);
                    report.record(path, FileOutcome::Failed { error: e.to_string() });
                    continue;
                }
            };

            let path = entry.path();

            if entry.file_type().is_dir() {
                if entry.depth() > 0 {
                    if let Err(e) = self.mirror_dir(path) {
                        warn!("Error processing {}: {}", path.display(), e);
                        report.record(path.to_path_buf(), FileOutcome::Failed { error: e.to_string() });
                    }
                }
                continue;
            }

            if !has_extension_in(path, transform.formats()) {
                continue;
            }

            let outcome = self.process_file(transform, path, in_place);
            report.record(path.to_path_buf(), outcome);
        }

        if report.failed > 0 {
            warn!(
                "{} completed with {} failed files ({} saved, {} skipped)",
                transform.name(),
                report.failed,
                report.saved,
                report.skipped
            );
        } else {
            debug!(
                "{} completed: {} saved, {} skipped",
                transform.name(),
                report.saved,
                report.skipped
            );
        }

        Ok(report)
    }

    fn mirror_dir(&self, input_dir: &Path) -> AssetResult<PathBuf> {
        let output_dir = relocate(input_dir, &self.config.input_root, &self.config.output_root)?;
        create_dir_all(&output_dir)?;
        Ok(output_dir)
    }

    fn process_file<T: FileTransform + ?Sized>(
        &self,
        transform: &T,
        input: &Path,
        in_place: bool,
    ) -> FileOutcome {
        match self.try_process_file(transform, input, in_place) {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!("Error processing {}: {}", input.display(), e);
                FileOutcome::Failed { error: e.to_string() }
            }
        }
    }

    fn try_process_file<T: FileTransform + ?Sized>(
        &self,
        transform: &T,
        input: &Path,
        in_place: bool,
    ) -> AssetResult<FileOutcome> {
        let image = image::open(input)?;
        let (width, height) = image.dimensions();
        debug!("Loaded '{}': {}×{}", input.display(), width, height);

        let output = match transform.transform(&image)? {
            Transform::Skip(reason) => {
                info!("Skipping {}: {}", input.display(), reason);
                return Ok(FileOutcome::Skipped { reason });
            }
            Transform::Write(output) => output,
        };

        let mut output_path =
            relocate(input, &self.config.input_root, &self.config.output_root)?;
        if in_place {
            output_path = unique_output_path(&output_path);
        }

        ensure_encodable(&output, &output_path)?;
        output.save(&output_path)?;

        let (width, height) = output.dimensions();
        info!("Saved: {}", output_path.display());
        info!("{}", transform.describe_output(width, height));

        Ok(FileOutcome::Saved {
            output_path,
            width,
            height,
        })
    }
}

/// Rejects writes that the target format would silently degrade.
///
/// The JPEG encoder accepts RGBA and drops the alpha, so an image with an
/// alpha channel bound for a `.jpg` is refused rather than flattened.
fn ensure_encodable(image: &DynamicImage, path: &Path) -> AssetResult<()> {
    match ImageFormat::from_path(path) {
        Some(format) if image.color().has_alpha() && !format.supports_alpha() => {
            Err(AssetError::processing(format!(
                "cannot write an image with alpha as {:?}: {}",
                format,
                path.display()
            )))
        }
        _ => Ok(()),
    }
}
