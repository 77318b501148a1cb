// Module declarations in dependency order
pub mod utils;
pub mod core;
pub mod processing;
pub mod commands;

// Public exports for external consumers
pub use crate::core::{BatchReport, CleanReport, FileOutcome, ResizePolicy, RgbColor, SkipReason};
pub use crate::processing::{
    BatchConfig, BatchProcessor, FileTransform, Recolor, Resizer, Transform, Trimmer,
    clean_duplicates,
};
pub use crate::utils::{AssetError, AssetResult, PathError, ValidationError};
