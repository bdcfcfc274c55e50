//! Corpus builder
//!
//! Scans a directory tree of puzzle records and collects every usable
//! answer/clue pair into a `ClueDatabase`. Files are parsed in parallel and the
//! partial databases merged at the end.

use super::filter::ClueFilter;
use crate::store::ClueDatabase;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

/// Errors that stop a corpus build
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("invalid puzzle file pattern: {0}")]
    Pattern(#[from] glob::PatternError),
    #[error("invalid clue filter pattern: {0}")]
    Filter(#[from] regex::Error),
}

/// Parallel across/down arrays
#[derive(Debug, Default, Deserialize)]
pub struct Directions {
    #[serde(default)]
    pub across: Vec<String>,
    #[serde(default)]
    pub down: Vec<String>,
}

/// The parts of a puzzle record the builder reads
///
/// Other fields in the file are ignored.
#[derive(Debug, Default, Deserialize)]
pub struct PuzzleRecord {
    pub answers: Directions,
    pub clues: Directions,
}

/// A built database with the number of puzzle files scanned
#[derive(Debug)]
pub struct CorpusBuild {
    pub db: ClueDatabase,
    pub files: usize,
}

/// Builds a clue database from puzzle records
pub struct CorpusBuilder {
    filter: ClueFilter,
    show_progress: bool,
}

impl CorpusBuilder {
    /// Create a builder with the standard clue filter
    ///
    /// # Errors
    /// Returns `BuildError::Filter` if the denylist fails to compile.
    pub fn new() -> Result<Self, BuildError> {
        Ok(Self::with_filter(ClueFilter::new()?))
    }

    #[must_use]
    pub const fn with_filter(filter: ClueFilter) -> Self {
        Self {
            filter,
            show_progress: false,
        }
    }

    /// Show a progress bar while scanning files
    #[must_use]
    pub const fn show_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Add every accepted pair of one puzzle to the database
    ///
    /// Across entries are processed before down entries. Mismatched array
    /// lengths are truncated to the shorter side.
    pub fn add_record(&self, record: &PuzzleRecord, db: &mut ClueDatabase) {
        let across = record.answers.across.iter().zip(&record.clues.across);
        let down = record.answers.down.iter().zip(&record.clues.down);

        for (answer, clue) in across.chain(down) {
            let Some(answer) = self.filter.accept_answer(answer) else {
                continue;
            };
            if let Some(clue) = self.filter.accept_clue(clue) {
                db.insert(answer, clue);
            }
        }
    }

    /// Parse one puzzle file into a partial database
    ///
    /// Returns `None`, after logging a warning, if the file cannot be read or
    /// parsed.
    pub fn process_file(&self, path: &Path) -> Option<ClueDatabase> {
        let record: PuzzleRecord = match fs::read_to_string(path)
            .map_err(|e| e.to_string())
            .and_then(|content| serde_json::from_str(&content).map_err(|e| e.to_string()))
        {
            Ok(record) => record,
            Err(reason) => {
                warn!(path = %path.display(), %reason, "skipped puzzle file");
                return None;
            }
        };

        let mut db = ClueDatabase::new();
        self.add_record(&record, &mut db);
        Some(db)
    }

    /// Build a database from every `*.json` file below `input_dir`
    ///
    /// # Errors
    /// Returns `BuildError::Pattern` if `input_dir` cannot be turned into a
    /// glob pattern.
    pub fn build_from_dir(&self, input_dir: &Path) -> Result<CorpusBuild, BuildError> {
        let files = find_puzzle_files(input_dir)?;
        info!(dir = %input_dir.display(), files = files.len(), "scanning puzzle files");
        Ok(CorpusBuild {
            db: self.build_from_files(&files),
            files: files.len(),
        })
    }

    /// Build a database from an explicit list of puzzle files
    ///
    /// Unreadable files are skipped with a warning.
    pub fn build_from_files(&self, files: &[PathBuf]) -> ClueDatabase {
        let progress = if self.show_progress {
            let bar = ProgressBar::new(files.len() as u64);
            bar.set_style(
                ProgressStyle::default_bar()
                    .template(
                        "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}",
                    )
                    .unwrap_or_else(|_| ProgressStyle::default_bar())
                    .progress_chars("█▓▒░"),
            );
            bar
        } else {
            ProgressBar::hidden()
        };

        let db = files
            .par_iter()
            .filter_map(|path| {
                let partial = self.process_file(path);
                progress.inc(1);
                partial
            })
            .reduce(ClueDatabase::new, |mut acc, partial| {
                acc.merge(partial);
                acc
            });

        progress.finish_with_message("done");

        let stats = db.stats();
        info!(
            buckets = stats.buckets,
            answers = stats.answers,
            clues = stats.clues,
            "corpus built"
        );

        db
    }
}

/// Find puzzle files recursively, sorted by path
///
/// # Errors
/// Returns `BuildError::Pattern` if the directory name breaks the glob syntax.
pub fn find_puzzle_files(input_dir: &Path) -> Result<Vec<PathBuf>, BuildError> {
    let pattern = input_dir.join("**").join("*.json");
    let mut files: Vec<PathBuf> = glob::glob(&pattern.to_string_lossy())?
        .filter_map(|entry| match entry {
            Ok(path) => Some(path),
            Err(e) => {
                warn!(error = %e, "unreadable path while scanning puzzles");
                None
            }
        })
        .collect();
    files.sort();
    Ok(files)
}
