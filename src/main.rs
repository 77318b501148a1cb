// Entry point for the texture-tools command line.
// Argument parsing lives in `commands`; the work itself in the library.

use std::io::IsTerminal;
use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

use texture_tools::commands::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level()));

    // With --json, stdout carries only the report.
    let (writer, ansi) = if cli.json {
        (BoxMakeWriter::new(std::io::stderr), std::io::stderr().is_terminal())
    } else {
        (BoxMakeWriter::new(std::io::stdout), std::io::stdout().is_terminal())
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)         // Remove file path
        .with_line_number(false)  // Remove line numbers
        .with_thread_ids(false)   // Remove thread IDs
        .with_thread_names(false) // Remove thread names
        .with_target(false)       // Remove module path
        .without_time()
        .with_level(false)
        .with_ansi(ansi)
        .with_writer(writer)
        .compact()
        .init();

    cli.run()
}
