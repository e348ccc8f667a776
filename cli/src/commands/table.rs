//! Table Command
//!
//! Builds the lookup table for a parameter set and caches it on disk. The
//! cache file is the raw table bytes, nothing else: the content is
//! reproducible from the parameters, so a missing or wrong-sized file is
//! simply rebuilt.

use anyhow::{Context, Result};
use clap::Args;
use lxrhash::{constants, LxrError, LxrHash};
use std::path::{Path, PathBuf};

// =============================================================================
// PARAMETERS
// =============================================================================

/// Hash parameters shared by every subcommand.
#[derive(Args, Clone)]
pub struct TableParams {
    /// Table seed (decimal or 0x-prefixed hex)
    #[arg(long, value_parser = parse_u64, default_value = "0xfafaececfafaecec")]
    pub seed: u64,

    /// Table size exponent: the table holds 2^BITS bytes
    #[arg(long, value_name = "BITS", default_value_t = constants::DEFAULT_MAP_SIZE_BITS)]
    pub map_bits: u64,

    /// Digest length in bytes
    #[arg(long, default_value_t = constants::DEFAULT_HASH_SIZE)]
    pub hash_size: u64,

    /// Shuffle passes used to build the table
    #[arg(long, default_value_t = constants::DEFAULT_PASSES)]
    pub passes: u64,

    /// Directory for cached tables (default: $LXRHASH_PATH or .lxrhash)
    #[arg(long, value_name = "DIR")]
    pub table_dir: Option<PathBuf>,

    /// Always rebuild; never read or write the cache
    #[arg(long)]
    pub no_cache: bool,
}

impl TableParams {
    /// Produce a ready hasher, from cache when possible.
    pub fn load(&self) -> Result<LxrHash> {
        load_or_build(self).map(|(lx, _)| lx)
    }

    fn cache_dir(&self) -> PathBuf {
        self.table_dir.clone().unwrap_or_else(|| {
            std::env::var_os("LXRHASH_PATH")
                .map_or_else(|| PathBuf::from(".lxrhash"), PathBuf::from)
        })
    }

    fn cache_file(&self, dir: &Path) -> PathBuf {
        dir.join(format!(
            "lxrmap-{:016x}-{}-{}.dat",
            self.seed, self.map_bits, self.passes
        ))
    }
}

fn parse_u64(s: &str) -> Result<u64, String> {
    let s = s.trim();
    match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16).map_err(|e| e.to_string()),
        None => s.parse().map_err(|e: std::num::ParseIntError| e.to_string()),
    }
}

// =============================================================================
// CACHE
// =============================================================================

fn load_or_build(params: &TableParams) -> Result<(LxrHash, Option<PathBuf>)> {
    if params.no_cache {
        return Ok((build(params)?, None));
    }

    let dir = params.cache_dir();
    let path = params.cache_file(&dir);

    if path.is_file() {
        let table = std::fs::read(&path)
            .with_context(|| format!("Failed to read cached table: {}", path.display()))?;
        match LxrHash::with_table(
            params.seed,
            params.map_bits,
            params.hash_size,
            params.passes,
            table,
        ) {
            Ok(lx) => return Ok((lx, Some(path))),
            Err(LxrError::TableLength { expected, actual }) => {
                eprintln!(
                    "Warning: cached table {} holds {actual} bytes, expected {expected}; rebuilding",
                    path.display()
                );
            }
            Err(e) => return Err(e.into()),
        }
    }

    let lx = build(params)?;

    if let Err(e) = std::fs::create_dir_all(&dir)
        .and_then(|()| std::fs::write(&path, lx.byte_map()))
    {
        eprintln!("Warning: could not cache table at {}: {e}", path.display());
        return Ok((lx, None));
    }

    Ok((lx, Some(path)))
}

fn build(params: &TableParams) -> Result<LxrHash> {
    eprintln!(
        "Building 2^{} byte map, {} passes (seed {:#018x})...",
        params.map_bits, params.passes, params.seed
    );
    LxrHash::new(params.seed, params.map_bits, params.hash_size, params.passes)
        .context("Failed to build lookup table")
}

// =============================================================================
// TABLE MODE
// =============================================================================

/// Build (or load) the table and report where it is cached.
pub fn table_mode(params: &TableParams) -> Result<()> {
    let (lx, path) = load_or_build(params)?;

    match path {
        Some(path) => println!(
            "{}  ({} bytes, seed {:#018x}, {} passes)",
            path.display(),
            lx.map_size(),
            lx.seed(),
            lx.passes()
        ),
        None => println!(
            "table built in memory only ({} bytes, seed {:#018x}, {} passes)",
            lx.map_size(),
            lx.seed(),
            lx.passes()
        ),
    }

    Ok(())
}
