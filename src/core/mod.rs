//! Core types shared by all tools.
//!
//! - [`ResizePolicy`]: The one target-size rule of a resize run
//! - [`RgbColor`]: Fill colour for recoloring
//! - [`FileOutcome`] / [`SkipReason`]: What happened to a single file
//! - [`BatchReport`] / [`CleanReport`]: Per-run summaries, serializable for `--json`

mod policy;
mod types;

pub use policy::ResizePolicy;
pub use types::{
    BatchReport, CleanFailure, CleanReport, FileOutcome, ProcessedFile, RgbColor, SkipReason,
};
