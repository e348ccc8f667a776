//! LXRHash CLI
//!
//! File hashing and lookup-table management for the LXRHash PoW hash.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{check_mode, hash_files, table_mode, TableParams};
use std::path::PathBuf;

// =============================================================================
// CLI DEFINITION
// =============================================================================

#[derive(Parser)]
#[command(name = "lxrhash")]
#[command(about = "Memory-latency-bound lookup-table hash", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Files to hash (if no subcommand)
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    #[command(flatten)]
    table: TableParams,
}

#[derive(Subcommand)]
enum Commands {
    /// Verify checksums from file (like sha256sum -c)
    Check {
        #[arg(value_name = "FILE")]
        checksum_file: PathBuf,
    },
    /// Build the lookup table and cache it on disk
    Table,
}

// =============================================================================
// ENTRY POINT
// =============================================================================

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Some(Commands::Check { checksum_file }) => check_mode(checksum_file, &cli.table)?,
        Some(Commands::Table) => table_mode(&cli.table)?,
        None => {
            if cli.files.is_empty() {
                eprintln!("Error: No files specified");
                eprintln!("Usage: lxrhash [FILE]... or lxrhash --help");
                std::process::exit(1);
            }

            hash_files(&cli.files, &cli.table)?;
        }
    }

    Ok(())
}
