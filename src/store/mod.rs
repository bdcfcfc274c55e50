//! Clue storage
//!
//! The answer→clues database and its JSON snapshot format.

mod database;
mod snapshot;

pub use database::{AnswerMap, ClueDatabase, ClueSet, DatabaseStats};
pub use snapshot::{StoreError, from_json_str, load_from_file, save_to_file, to_json_string};
