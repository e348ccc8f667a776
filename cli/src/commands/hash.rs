//! Hash Command
//!
//! File hashing with automatic parallelization via Rayon. The table is built
//! (or loaded from cache) once and shared read-only by every worker.

use anyhow::{Context, Result};
use rayon::prelude::*;
use std::path::PathBuf;
use std::sync::Mutex;

use crate::commands::TableParams;

/// Hash files (Rayon parallelizes automatically when beneficial).
pub fn hash_files(files: &[PathBuf], params: &TableParams) -> Result<()> {
    let lx = params.load()?;

    let results = Mutex::new(Vec::with_capacity(files.len()));
    let errors = Mutex::new(Vec::new());

    files.par_iter().for_each(|file_path| {
        let result = (|| -> Result<String> {
            let data = std::fs::read(file_path)
                .with_context(|| format!("Failed to read: {}", file_path.display()))?;
            Ok(hex::encode(lx.hash(&data)))
        })();

        match result {
            Ok(hex_hash) => {
                results.lock().unwrap().push((file_path.clone(), hex_hash));
            }
            Err(e) => {
                errors.lock().unwrap().push((file_path.clone(), e));
            }
        }
    });

    // Print in original order
    let mut results = results.into_inner().unwrap();
    results.sort_by_key(|(path, _)| files.iter().position(|p| p == path).unwrap_or(usize::MAX));

    for (file_path, hex_hash) in results {
        println!("{}  {}", hex_hash, file_path.display());
    }

    let errors = errors.into_inner().unwrap();
    for (file_path, error) in &errors {
        eprintln!("Error: {}: {}", file_path.display(), error);
    }

    if !errors.is_empty() {
        anyhow::bail!("Failed to hash {} file(s)", errors.len());
    }

    Ok(())
}
