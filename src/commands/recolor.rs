use std::path::PathBuf;
use anyhow::Result;
use clap::Args;
use tracing::debug;

use crate::core::BatchReport;
use crate::processing::{BatchConfig, BatchProcessor, Recolor};
use crate::utils::validate_color;

#[derive(Args, Debug)]
pub struct RecolorArgs {
    /// Folder to scan for png/jpg/jpeg/gif/bmp images (recursively)
    #[arg(value_name = "INPUT_FOLDER")]
    pub input: PathBuf,

    /// Output folder; defaults to the input folder (never overwrites)
    #[arg(long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// RGB values (0-255), e.g. --color 255 255 255 for white
    #[arg(
        long,
        num_args = 3,
        value_names = ["R", "G", "B"],
        default_values_t = [255, 255, 255],
        allow_negative_numbers = true
    )]
    pub color: Vec<i64>,
}

pub fn run(args: RecolorArgs) -> Result<BatchReport> {
    let color = validate_color(&args.color)?;
    debug!("Recoloring to {}", color);

    let processor = BatchProcessor::new(BatchConfig::new(args.input, args.output));
    Ok(processor.run(&Recolor::new(color))?)
}
