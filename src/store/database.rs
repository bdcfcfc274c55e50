//! In-memory clue database
//!
//! Answers are bucketed by length. Inside a bucket the answers and their clues are
//! kept in ordered collections so that iteration order is stable, which makes
//! random picks reproducible under a seeded source.

use crate::core::answer_length;
use rustc_hash::FxHashMap;
use std::collections::{BTreeMap, BTreeSet};

/// The set of known clues for one answer
pub type ClueSet = BTreeSet<String>;

/// All answers of one length, each with its clues
pub type AnswerMap = BTreeMap<String, ClueSet>;

/// Answers grouped by length, then answer text
///
/// Every answer stored under length `n` has exactly `n` characters and at least
/// one clue.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClueDatabase {
    buckets: FxHashMap<usize, AnswerMap>,
}

/// Summary counts for a database
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DatabaseStats {
    pub buckets: usize,
    pub answers: usize,
    pub clues: usize,
}

impl ClueDatabase {
    /// Create an empty database
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_buckets(buckets: FxHashMap<usize, AnswerMap>) -> Self {
        Self { buckets }
    }

    /// Add a clue for an answer, creating the bucket and entry as needed
    ///
    /// The caller is responsible for passing a normalized answer.
    pub fn insert(&mut self, answer: impl Into<String>, clue: impl Into<String>) {
        let answer = answer.into();
        self.buckets
            .entry(answer_length(&answer))
            .or_default()
            .entry(answer)
            .or_default()
            .insert(clue.into());
    }

    /// Union another database into this one
    pub fn merge(&mut self, other: Self) {
        for (length, bucket) in other.buckets {
            let target = self.buckets.entry(length).or_default();
            for (answer, clues) in bucket {
                target.entry(answer).or_default().extend(clues);
            }
        }
    }

    /// Get the bucket for a length, if any answers of that length exist
    #[inline]
    #[must_use]
    pub fn bucket(&self, length: usize) -> Option<&AnswerMap> {
        self.buckets.get(&length)
    }

    /// Iterate over the answers of a given length
    ///
    /// Yields nothing if the bucket is absent.
    pub fn answers_of_length(&self, length: usize) -> impl Iterator<Item = &str> {
        self.bucket(length)
            .into_iter()
            .flat_map(|bucket| bucket.keys().map(String::as_str))
    }

    /// Get the clues for an answer
    ///
    /// Returns `None` if the answer is unknown.
    #[must_use]
    pub fn clues_for(&self, answer: &str) -> Option<&ClueSet> {
        self.bucket(answer_length(answer))?.get(answer)
    }

    /// Lengths that have at least one answer, in ascending order
    #[must_use]
    pub fn lengths(&self) -> Vec<usize> {
        let mut lengths: Vec<usize> = self.buckets.keys().copied().collect();
        lengths.sort_unstable();
        lengths
    }

    /// Iterate over `(length, bucket)` pairs in ascending length order
    pub fn iter(&self) -> impl Iterator<Item = (usize, &AnswerMap)> {
        self.lengths()
            .into_iter()
            .filter_map(move |length| self.bucket(length).map(|bucket| (length, bucket)))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Count buckets, answers and clues
    #[must_use]
    pub fn stats(&self) -> DatabaseStats {
        self.buckets
            .values()
            .fold(DatabaseStats::default(), |mut stats, bucket| {
                stats.buckets += 1;
                stats.answers += bucket.len();
                stats.clues += bucket.values().map(BTreeSet::len).sum::<usize>();
                stats
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ClueDatabase {
        let mut db = ClueDatabase::new();
        db.insert("CAT", "feline pet");
        db.insert("DOG", "canine");
        db.insert("CART", "shopping vehicle");
        db
    }

    #[test]
    fn insert_buckets_by_length() {
        let db = sample();
        assert_eq!(db.lengths(), vec![3, 4]);
        assert_eq!(db.bucket(3).map(BTreeMap::len), Some(2));
        assert_eq!(db.bucket(4).map(BTreeMap::len), Some(1));
    }

    #[test]
    fn insert_collapses_duplicate_clues() {
        let mut db = sample();
        db.insert("CAT", "feline pet");
        db.insert("CAT", "mouser");

        let clues = db.clues_for("CAT").unwrap();
        assert_eq!(clues.len(), 2);
        assert!(clues.contains("mouser"));
    }

    #[test]
    fn answers_of_length_present_and_absent() {
        let db = sample();
        let answers: Vec<&str> = db.answers_of_length(3).collect();
        assert_eq!(answers, vec!["CAT", "DOG"]);
        assert_eq!(db.answers_of_length(5).count(), 0);
    }

    #[test]
    fn clues_for_unknown_answer() {
        let db = sample();
        assert!(db.clues_for("COW").is_none());
        assert!(db.clues_for("ELEPHANT").is_none());
        assert!(db.clues_for("").is_none());
    }

    #[test]
    fn merge_unions_clues() {
        let mut left = sample();
        let mut right = ClueDatabase::new();
        right.insert("CAT", "mouser");
        right.insert("HORSE", "stable resident");

        left.merge(right);

        assert_eq!(left.clues_for("CAT").unwrap().len(), 2);
        assert!(left.clues_for("HORSE").is_some());
        assert_eq!(left.lengths(), vec![3, 4, 5]);
    }

    #[test]
    fn stats_counts_everything() {
        let mut db = sample();
        db.insert("CAT", "mouser");

        let stats = db.stats();
        assert_eq!(
            stats,
            DatabaseStats {
                buckets: 2,
                answers: 3,
                clues: 4,
            }
        );
        assert!(!db.is_empty());
        assert!(ClueDatabase::new().is_empty());
    }

    #[test]
    fn iter_is_length_ordered() {
        let mut db = sample();
        db.insert("A", "first letter");
        let lengths: Vec<usize> = db.iter().map(|(len, _)| len).collect();
        assert_eq!(lengths, vec![1, 3, 4]);
    }
}
