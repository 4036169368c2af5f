//! Zipman CLI - zipman command

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod cmd;

/// Zipman - manifest generator for proxy-streamed ZIP downloads
#[derive(Parser)]
#[command(name = "zipman")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a manifest from files and directories
    Build {
        /// Files or directories to include
        #[arg(required = true)]
        paths: Vec<String>,

        /// Root for archive member names (default: detected common prefix)
        #[arg(long)]
        base_dir: Option<String>,

        /// Skip CRC-32 computation and emit "-" placeholders
        #[arg(long)]
        no_crc: bool,

        /// JSON file mapping file paths to precomputed CRC-32 strings
        #[arg(long)]
        crc_cache: Option<PathBuf>,

        /// Print the X-Archive-Files header line before the manifest
        #[arg(long)]
        with_header: bool,
    },
    /// Print the response header that enables archive streaming
    Header,
    /// Percent-encode a path for use in a manifest line
    Encode {
        /// Path to encode
        path: String,
    },
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Build { paths, base_dir, no_crc, crc_cache, with_header } => {
            cmd::build::run(&paths, base_dir, no_crc, crc_cache.as_deref(), with_header)
        }
        Commands::Header => cmd::header::run(),
        Commands::Encode { path } => cmd::encode::run(&path),
    }
}
