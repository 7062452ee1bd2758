//! Resequence CLI.
//!
//! The `resequence` command renumbers a directory of sequentially
//! named image files into a gap-free `1.jpg, 2.jpg, ...` sequence,
//! preserving relative order.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(name = "resequence")]
#[command(about = "Renumber sequentially named files into a gap-free sequence")]
#[command(version)]
struct Cli {
    /// Directory to renumber (defaults to the current directory)
    directory: Option<PathBuf>,

    /// File extension to select, case-insensitive
    #[arg(long, default_value = "jpg")]
    ext: String,

    /// Print the planned renames without touching the filesystem
    #[arg(long)]
    dry_run: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity
    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level)),
        )
        .init();

    commands::execute(cli.directory, &cli.ext, cli.dry_run)
}
