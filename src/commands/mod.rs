//! Command-line interface for the texture tools.
//!
//! Each subcommand validates its arguments up front, then hands a typed
//! configuration to the library. Nothing touches the filesystem before
//! validation passes.

use anyhow::Result;
use clap::{Parser, Subcommand};
use serde::Serialize;

mod clean;
mod recolor;
mod resize;
mod trim;

pub use clean::CleanArgs;
pub use recolor::RecolorArgs;
pub use resize::ResizeArgs;
pub use trim::TrimArgs;

/// Batch maintenance for texture folders: resize, trim, recolor, de-duplicate
#[derive(Parser, Debug)]
#[command(name = "texture-tools", author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable debug output
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only print warnings and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Print a JSON report of every processed file when done
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Downscale PNGs by factor (s=0.5), height (h=300) or width (w=500)
    #[command(after_help = "Only downscaling is allowed: s must be strictly between 0 and 1.")]
    Resize(ResizeArgs),
    /// Replace `name.ext` with `name(1).ext` wherever both exist
    Clean(CleanArgs),
    /// Fill images with a solid colour, keeping transparency
    Recolor(RecolorArgs),
    /// Crop transparent borders from PNGs
    Trim(TrimArgs),
}

impl Cli {
    /// Default log directive for the chosen verbosity; `RUST_LOG` still wins.
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "warn"
        } else {
            "info"
        }
    }

    pub fn run(self) -> Result<()> {
        let json = self.json;
        match self.command {
            Commands::Resize(args) => emit(json, &resize::run(args)?),
            Commands::Clean(args) => emit(json, &clean::run(args)?),
            Commands::Recolor(args) => emit(json, &recolor::run(args)?),
            Commands::Trim(args) => emit(json, &trim::run(args)?),
        }
    }
}

fn emit<T: Serialize>(json: bool, report: &T) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    }
    Ok(())
}
