//! Folds OS copy-conflict duplicates (`name(1).ext`) back onto their originals.
//!
//! When both `icon.png` and `icon(1).png` exist, the `(1)` copy is treated as the
//! newer one: the original is deleted and the copy renamed into its place.

use std::fs;
use std::path::{Path, PathBuf};
use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::core::{CleanFailure, CleanReport};
use crate::utils::{AssetResult, validate_input_dir};

lazy_static! {
    static ref DUPLICATE_NAME: Regex =
        Regex::new(r"^(.+)\(1\)(\.[^.]+)$").expect("duplicate-name pattern is valid");
}

/// `icon(1).png` -> `icon.png`; `None` for names that are not first-copy duplicates.
pub fn original_name(file_name: &str) -> Option<String> {
    DUPLICATE_NAME
        .captures(file_name)
        .map(|caps| format!("{}{}", &caps[1], &caps[2]))
}

/// Replaces every original that has a `(1)` duplicate next to it with that duplicate.
pub fn clean_duplicates(folder: &Path) -> AssetResult<CleanReport> {
    validate_input_dir(folder)?;

    let mut report = CleanReport::default();
    let mut candidates: Vec<(PathBuf, PathBuf)> = Vec::new();

    for entry in WalkDir::new(folder).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                let path = e.path().map(Path::to_path_buf).unwrap_or_else(|| folder.to_path_buf());
                warn!("Error processing {}: {}", path.display(), e);
                report.failed.push(CleanFailure { path, error: e.to_string() });
                continue;
            }
        };

        if entry.file_type().is_dir() {
            continue;
        }

        let Some(original) = entry.file_name().to_str().and_then(original_name) else {
            continue;
        };

        let duplicate = entry.into_path();
        let original = duplicate.with_file_name(original);
        candidates.push((duplicate, original));
    }

    debug!("Found {} duplicate candidates under {}", candidates.len(), folder.display());

    for (duplicate, original) in candidates {
        if !original.exists() {
            continue;
        }

        match replace_with(&duplicate, &original) {
            Ok(()) => {
                info!("Cleaned: {}", original.display());
                report.cleaned.push(original);
            }
            Err(e) => {
                warn!("Error processing {}: {}", duplicate.display(), e);
                report.failed.push(CleanFailure { path: duplicate, error: e.to_string() });
            }
        }
    }

    info!("Cleanup complete");
    Ok(report)
}

fn replace_with(duplicate: &Path, original: &Path) -> std::io::Result<()> {
    fs::remove_file(original)?;
    fs::rename(duplicate, original)
}
