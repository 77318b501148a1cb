use std::path::PathBuf;
use anyhow::Result;
use clap::Args;

use crate::core::BatchReport;
use crate::processing::{BatchConfig, BatchProcessor, Trimmer};

#[derive(Args, Debug)]
pub struct TrimArgs {
    /// Folder to scan for PNGs (recursively)
    #[arg(value_name = "INPUT_FOLDER")]
    pub input: PathBuf,

    /// Where to write results; defaults to INPUT_FOLDER (never overwrites)
    #[arg(value_name = "OUTPUT_FOLDER")]
    pub output: Option<PathBuf>,
}

pub fn run(args: TrimArgs) -> Result<BatchReport> {
    let processor = BatchProcessor::new(BatchConfig::new(args.input, args.output));
    Ok(processor.run(&Trimmer)?)
}
