use std::path::PathBuf;
use anyhow::Result;
use clap::Args;

use crate::core::CleanReport;
use crate::processing::clean_duplicates;

#[derive(Args, Debug)]
pub struct CleanArgs {
    /// Folder to clean (recursively)
    #[arg(value_name = "FOLDER")]
    pub folder: PathBuf,
}

pub fn run(args: CleanArgs) -> Result<CleanReport> {
    Ok(clean_duplicates(&args.folder)?)
}
