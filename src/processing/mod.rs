//! Image operations and the batch engine that drives them.
//!
//! - [`BatchProcessor`]: Mirrors a directory tree and applies one [`FileTransform`] per file
//! - [`Resizer`], [`Recolor`], [`Trimmer`]: The per-image transforms
//! - [`clean_duplicates`]: Filesystem-only duplicate cleanup, no decoding

mod batch;
mod transform;
pub mod duplicates;
pub mod recolor;
pub mod resize;
pub mod trim;

pub use batch::{BatchConfig, BatchProcessor};
pub use transform::{FileTransform, Transform};
pub use duplicates::clean_duplicates;
pub use recolor::Recolor;
pub use resize::{ResizePlan, Resizer, plan_resize};
pub use trim::Trimmer;
