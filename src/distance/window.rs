//! Windowed any-length candidate search

use super::levenshtein_distance;
use crate::store::ClueDatabase;

/// Collect answers whose edit distance from `previous` is exactly `distance`
///
/// Scans every bucket with a length in `[length - distance, length + distance]`
/// (the lower bound saturates at zero). Absent buckets contribute nothing.
/// Answers are returned bucket by bucket in ascending length order.
///
/// Only lengths present in `db` are visited, so cost is bounded by the number
/// of buckets whatever the distance.
#[must_use]
pub fn collect_any_length_candidates<'a>(
    previous: &str,
    length: usize,
    distance: usize,
    db: &'a ClueDatabase,
) -> Vec<&'a str> {
    db.iter()
        .filter(|(len, _)| len.abs_diff(length) <= distance)
        .flat_map(|(_, bucket)| bucket.keys())
        .filter(|answer| levenshtein_distance(answer, previous) == distance)
        .map(String::as_str)
        .collect()
}
