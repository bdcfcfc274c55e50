//! Snapshot loading and saving
//!
//! The snapshot is a JSON object `{ "<length>": { "<ANSWER>": ["clue", ...] } }`.
//! Loading validates every entry against the database invariants, so a snapshot
//! that parses but breaks them is rejected rather than half-loaded.

use super::database::{AnswerMap, ClueDatabase};
use crate::core::{AnswerError, answer_length, validate_answer};
use rustc_hash::FxHashMap;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fs;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// On-disk shape of the snapshot
type RawSnapshot = BTreeMap<String, BTreeMap<String, Vec<String>>>;

/// The clue snapshot is missing, unreadable or malformed
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read clue snapshot {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write clue snapshot {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("clue snapshot JSON error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid length key {0:?} in clue snapshot")]
    InvalidLengthKey(String),
    #[error("answer {answer:?} is stored under length {bucket} but has length {actual}")]
    LengthMismatch {
        answer: String,
        bucket: usize,
        actual: usize,
    },
    #[error("invalid answer {answer:?} in clue snapshot: {source}")]
    InvalidAnswer {
        answer: String,
        source: AnswerError,
    },
    #[error("answer {0:?} has no clues in clue snapshot")]
    NoClues(String),
}

/// Load a clue database from a snapshot file
///
/// # Errors
///
/// Returns `StoreError` if the file cannot be read, is not valid JSON, or
/// violates the database invariants.
///
/// # Examples
/// ```no_run
/// use crossword_clues::store::load_from_file;
///
/// let db = load_from_file("clues.json").unwrap();
/// println!("Loaded {} answer lengths", db.lengths().len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<ClueDatabase, StoreError> {
    let path = path.as_ref();
    let file = fs::File::open(path).map_err(|source| StoreError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let raw: RawSnapshot = serde_json::from_reader(BufReader::new(file))?;
    from_raw(raw)
}

/// Parse a clue database from an in-memory JSON string
///
/// # Errors
///
/// Returns `StoreError` if the string is not valid JSON or violates the database
/// invariants.
pub fn from_json_str(json: &str) -> Result<ClueDatabase, StoreError> {
    let raw: RawSnapshot = serde_json::from_str(json)?;
    from_raw(raw)
}

fn from_raw(raw: RawSnapshot) -> Result<ClueDatabase, StoreError> {
    let mut buckets: FxHashMap<usize, AnswerMap> = FxHashMap::default();

    for (key, answers) in raw {
        let length: usize = key
            .trim()
            .parse()
            .map_err(|_| StoreError::InvalidLengthKey(key.clone()))?;

        let bucket = buckets.entry(length).or_default();
        for (answer, clues) in answers {
            validate_answer(&answer).map_err(|source| StoreError::InvalidAnswer {
                answer: answer.clone(),
                source,
            })?;

            let actual = answer_length(&answer);
            if actual != length {
                return Err(StoreError::LengthMismatch {
                    answer,
                    bucket: length,
                    actual,
                });
            }

            if clues.is_empty() {
                return Err(StoreError::NoClues(answer));
            }

            bucket.entry(answer).or_default().extend(clues);
        }
    }

    // A length key with an empty object carries no answers
    buckets.retain(|_, bucket| !bucket.is_empty());

    Ok(ClueDatabase::from_buckets(buckets))
}

/// Write a clue database to a snapshot file
///
/// Lengths, answers and clues are written in sorted order.
///
/// # Errors
///
/// Returns `StoreError::Write` if the file cannot be created or written.
pub fn save_to_file<P: AsRef<Path>>(db: &ClueDatabase, path: P) -> Result<(), StoreError> {
    let path = path.as_ref();
    let write_error = |source| StoreError::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = fs::File::create(path).map_err(write_error)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, &OrderedSnapshot(db)).map_err(|e| {
        if e.is_io() {
            write_error(e.into())
        } else {
            StoreError::Parse(e)
        }
    })?;
    writer.flush().map_err(write_error)?;

    Ok(())
}

/// Serialize a clue database to a JSON string
///
/// # Errors
///
/// Returns `StoreError::Parse` if serialization fails.
pub fn to_json_string(db: &ClueDatabase) -> Result<String, StoreError> {
    Ok(serde_json::to_string(&OrderedSnapshot(db))?)
}

/// Serializes a database with lengths in numeric order, so "10" follows "9"
struct OrderedSnapshot<'a>(&'a ClueDatabase);

impl Serialize for OrderedSnapshot<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(
            self.0
                .iter()
                .map(|(length, bucket)| (length.to_string(), bucket)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "3": {"CAT": ["feline pet", "mouser"], "DOG": ["canine"]},
        "4": {"CART": ["shopping vehicle"]}
    }"#;

    #[test]
    fn parses_sample_snapshot() {
        let db = from_json_str(SAMPLE).unwrap();

        assert_eq!(db.lengths(), vec![3, 4]);
        assert_eq!(db.clues_for("CAT").unwrap().len(), 2);
        assert!(db.clues_for("CART").unwrap().contains("shopping vehicle"));
    }

    #[test]
    fn duplicate_clues_collapse() {
        let db = from_json_str(r#"{"3": {"CAT": ["pet", "pet"]}}"#).unwrap();
        assert_eq!(db.clues_for("CAT").unwrap().len(), 1);
    }

    #[test]
    fn empty_buckets_are_dropped() {
        let db = from_json_str(r#"{"3": {"CAT": ["pet"]}, "7": {}}"#).unwrap();
        assert_eq!(db.lengths(), vec![3]);
        assert!(db.bucket(7).is_none());
    }

    #[test]
    fn rejects_invalid_json() {
        assert!(matches!(from_json_str("{not json"), Err(StoreError::Parse(_))));
        assert!(matches!(from_json_str("[]"), Err(StoreError::Parse(_))));
    }

    #[test]
    fn rejects_bad_length_key() {
        let result = from_json_str(r#"{"three": {"CAT": ["pet"]}}"#);
        assert!(matches!(result, Err(StoreError::InvalidLengthKey(key)) if key == "three"));
    }

    #[test]
    fn rejects_length_mismatch() {
        let result = from_json_str(r#"{"4": {"CAT": ["pet"]}}"#);
        assert!(matches!(
            result,
            Err(StoreError::LengthMismatch {
                bucket: 4,
                actual: 3,
                ..
            })
        ));
    }

    #[test]
    fn rejects_invalid_answer() {
        let result = from_json_str(r#"{"3": {"cat": ["pet"]}}"#);
        assert!(matches!(result, Err(StoreError::InvalidAnswer { .. })));

        let result = from_json_str(r#"{"3": {"C4T": ["pet"]}}"#);
        assert!(matches!(result, Err(StoreError::InvalidAnswer { .. })));
    }

    #[test]
    fn rejects_answer_without_clues() {
        let result = from_json_str(r#"{"3": {"CAT": []}}"#);
        assert!(matches!(result, Err(StoreError::NoClues(answer)) if answer == "CAT"));
    }

    #[test]
    fn missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_from_file(dir.path().join("missing.json"));
        assert!(matches!(result, Err(StoreError::Read { .. })));
    }

    #[test]
    fn save_then_load_preserves_contents() {
        let db = from_json_str(SAMPLE).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clues.json");

        save_to_file(&db, &path).unwrap();
        let reloaded = load_from_file(&path).unwrap();

        assert_eq!(reloaded, db);
    }

    #[test]
    fn serialized_lengths_are_numerically_ordered() {
        let mut db = ClueDatabase::new();
        db.insert("ABCDEFGHIJ", "ten");
        db.insert("ABCDEFGHI", "nine");

        let json = to_json_string(&db).unwrap();
        let nine = json.find("\"9\"").unwrap();
        let ten = json.find("\"10\"").unwrap();
        assert!(nine < ten);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn full_disk_is_write_error() {
        let mut db = ClueDatabase::new();
        for i in 0..2000 {
            db.insert("CAT", format!("clue number {i}"));
        }

        let target = Path::new("/dev/full");
        let result = save_to_file(&db, target);
        assert!(
            matches!(&result, Err(StoreError::Write { path, .. }) if path == target),
            "{result:?}"
        );
    }
}
