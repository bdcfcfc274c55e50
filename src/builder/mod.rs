//! Offline corpus building
//!
//! Turns a directory of raw puzzle records into a clue snapshot.

mod corpus;
pub mod filter;

pub use corpus::{
    BuildError, CorpusBuild, CorpusBuilder, Directions, PuzzleRecord, find_puzzle_files,
};
pub use filter::{ClueFilter, DENYLIST};
