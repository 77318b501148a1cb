use std::path::PathBuf;
use anyhow::Result;
use clap::Args;
use tracing::debug;

use crate::core::{BatchReport, ResizePolicy};
use crate::processing::{BatchConfig, BatchProcessor, Resizer};

#[derive(Args, Debug)]
pub struct ResizeArgs {
    /// Resize mode: s=<factor>, h=<pixels> or w=<pixels>
    #[arg(value_name = "MODE")]
    pub mode: ResizePolicy,

    /// Folder to scan for PNGs (recursively)
    #[arg(value_name = "INPUT_FOLDER")]
    pub input: PathBuf,

    /// Where to write results; defaults to INPUT_FOLDER (never overwrites)
    #[arg(value_name = "OUTPUT_FOLDER")]
    pub output: Option<PathBuf>,
}

pub fn run(args: ResizeArgs) -> Result<BatchReport> {
    let resizer = Resizer::new(args.mode)?;
    debug!("Resizing with {}", resizer.policy());

    let processor = BatchProcessor::new(BatchConfig::new(args.input, args.output));
    Ok(processor.run(&resizer)?)
}
