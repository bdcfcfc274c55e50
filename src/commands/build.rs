//! Corpus build command
//!
//! Builds a clue database from raw puzzle files and writes the snapshot.

use crate::builder::CorpusBuilder;
use crate::store::{DatabaseStats, save_to_file};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::info;

/// Configuration for a corpus build
pub struct BuildConfig {
    pub input_dir: PathBuf,
    pub output: PathBuf,
    pub show_progress: bool,
}

impl BuildConfig {
    #[must_use]
    pub const fn new(input_dir: PathBuf, output: PathBuf) -> Self {
        Self {
            input_dir,
            output,
            show_progress: true,
        }
    }
}

/// Result of a corpus build
pub struct BuildReport {
    pub files: usize,
    pub stats: DatabaseStats,
    pub output: PathBuf,
    pub duration: Duration,
}

/// Build the corpus described by `config` and save it
///
/// # Errors
///
/// Returns an error if the input directory cannot be scanned or the snapshot
/// cannot be written.
pub fn build_corpus(config: &BuildConfig) -> Result<BuildReport> {
    let start = Instant::now();

    ensure_dir(&config.input_dir)?;

    let builder = CorpusBuilder::new()?.show_progress(config.show_progress);
    let build = builder
        .build_from_dir(&config.input_dir)
        .with_context(|| format!("failed to scan {}", config.input_dir.display()))?;
    let db = build.db;

    save_to_file(&db, &config.output)
        .with_context(|| format!("failed to save {}", config.output.display()))?;
    info!(path = %config.output.display(), "snapshot written");

    Ok(BuildReport {
        files: build.files,
        stats: db.stats(),
        output: config.output.clone(),
        duration: start.elapsed(),
    })
}

fn ensure_dir(path: &Path) -> Result<()> {
    if path.is_dir() {
        Ok(())
    } else {
        anyhow::bail!("puzzle directory {} does not exist", path.display())
    }
}
