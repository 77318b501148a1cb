//! Core types for per-file outcomes and batch reports.

use std::fmt;
use std::path::PathBuf;
use serde::Serialize;

/// Opaque RGB colour used by the recolor tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RgbColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl RgbColor {
    pub const WHITE: Self = Self::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl Default for RgbColor {
    fn default() -> Self {
        Self::WHITE
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Why a file was left alone. Not an error: the batch reports it and moves on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum SkipReason {
    /// Height mode asked for something not smaller than the image
    TargetHeightNotSmaller { target: u32, height: u32 },
    /// Width mode asked for something not smaller than the image
    TargetWidthNotSmaller { target: u32, width: u32 },
    /// The computed size rounds back to the original size
    AlreadyAtTargetSize,
    /// No pixel has a non-zero alpha
    CompletelyTransparent,
    /// The opaque bounding box already covers the whole image
    AlreadyMinimallyCropped,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TargetHeightNotSmaller { target, .. } => {
                write!(f, "Target height ({target}) must be less than image height")
            }
            Self::TargetWidthNotSmaller { target, .. } => {
                write!(f, "Target width ({target}) must be less than image width")
            }
            Self::AlreadyAtTargetSize => write!(f, "Already at target size"),
            Self::CompletelyTransparent => write!(f, "completely transparent"),
            Self::AlreadyMinimallyCropped => write!(f, "already minimally cropped"),
        }
    }
}

/// What happened to one file of a batch.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum FileOutcome {
    #[serde(rename_all = "camelCase")]
    Saved {
        output_path: PathBuf,
        width: u32,
        height: u32,
    },
    Skipped { reason: SkipReason },
    Failed { error: String },
}

/// One processed input file and its outcome.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessedFile {
    pub input_path: PathBuf,
    #[serde(flatten)]
    pub outcome: FileOutcome,
}

/// Result of a resize/recolor/trim run over a directory tree.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchReport {
    pub saved: usize,
    pub skipped: usize,
    pub failed: usize,
    pub files: Vec<ProcessedFile>,
}

impl BatchReport {
    pub fn record(&mut self, input_path: PathBuf, outcome: FileOutcome) {
        match outcome {
            FileOutcome::Saved { .. } => self.saved += 1,
            FileOutcome::Skipped { .. } => self.skipped += 1,
            FileOutcome::Failed { .. } => self.failed += 1,
        }
        self.files.push(ProcessedFile { input_path, outcome });
    }

    /// Outcome recorded for `input_path`, if it was processed.
    pub fn outcome_for(&self, input_path: &std::path::Path) -> Option<&FileOutcome> {
        self.files
            .iter()
            .find(|f| f.input_path == input_path)
            .map(|f| &f.outcome)
    }
}

/// A duplicate that could not be folded back onto its original.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CleanFailure {
    pub path: PathBuf,
    pub error: String,
}

/// Result of a duplicate cleanup run.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CleanReport {
    /// Original paths that now hold the former `(1)` copy
    pub cleaned: Vec<PathBuf>,
    pub failed: Vec<CleanFailure>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_counts_each_outcome() {
        let mut report = BatchReport::default();
        report.record(
            "a.png".into(),
            FileOutcome::Saved { output_path: "out/a.png".into(), width: 5, height: 5 },
        );
        report.record(
            "b.png".into(),
            FileOutcome::Skipped { reason: SkipReason::AlreadyAtTargetSize },
        );
        report.record("c.png".into(), FileOutcome::Failed { error: "boom".into() });

        assert_eq!((report.saved, report.skipped, report.failed), (1, 1, 1));
        assert_eq!(
            report.outcome_for(std::path::Path::new("b.png")),
            Some(&FileOutcome::Skipped { reason: SkipReason::AlreadyAtTargetSize })
        );
    }

    #[test]
    fn report_serializes_flat_camel_case() {
        let mut report = BatchReport::default();
        report.record(
            "a.png".into(),
            FileOutcome::Skipped {
                reason: SkipReason::TargetHeightNotSmaller { target: 500, height: 300 },
            },
        );
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["skipped"], 1);
        assert_eq!(json["files"][0]["inputPath"], "a.png");
        assert_eq!(json["files"][0]["status"], "skipped");
        assert_eq!(json["files"][0]["reason"]["kind"], "targetHeightNotSmaller");
    }

    #[test]
    fn skip_messages_match_log_wording() {
        let reason = SkipReason::TargetHeightNotSmaller { target: 500, height: 300 };
        assert_eq!(reason.to_string(), "Target height (500) must be less than image height");
        assert_eq!(SkipReason::AlreadyAtTargetSize.to_string(), "Already at target size");
    }
}
