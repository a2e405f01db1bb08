//! Shelf CLI - convert a Markdown table of books into static-site content.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use shelf_table::DEFAULT_CONFIG_PATH;
use tracing_subscriber::{fmt, EnvFilter};

mod commands;

#[derive(Parser)]
#[command(name = "shelf")]
#[command(about = "Convert Markdown table to Hugo content files")]
#[command(version)]
pub struct Cli {
    /// Input Markdown file containing the table
    filename: PathBuf,

    /// JSON configuration file for column mapping
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    commands::convert::run(&cli.filename, &cli.config)
}
