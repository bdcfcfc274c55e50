//! Snapshot statistics command

use crate::store::{ClueDatabase, DatabaseStats};

/// Answer and clue counts for one length
pub struct BucketRow {
    pub length: usize,
    pub answers: usize,
    pub clues: usize,
}

/// Per-length breakdown of a database
pub struct StatsReport {
    pub rows: Vec<BucketRow>,
    pub totals: DatabaseStats,
}

impl StatsReport {
    /// Size of the largest bucket, for scaling bars
    #[must_use]
    pub fn max_answers(&self) -> usize {
        self.rows.iter().map(|row| row.answers).max().unwrap_or(0)
    }
}

/// Summarize a database bucket by bucket
#[must_use]
pub fn database_stats(db: &ClueDatabase) -> StatsReport {
    let rows = db
        .iter()
        .map(|(length, bucket)| BucketRow {
            length,
            answers: bucket.len(),
            clues: bucket.values().map(std::collections::BTreeSet::len).sum(),
        })
        .collect();

    StatsReport {
        rows,
        totals: db.stats(),
    }
}
