//! Command implementations

pub mod build;
pub mod random;
pub mod stats;

pub use build::{BuildConfig, BuildReport, build_corpus};
pub use random::{ChainResult, draw_chain, draw_clue};
pub use stats::{BucketRow, StatsReport, database_stats};
