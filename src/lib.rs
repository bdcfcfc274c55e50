//! Crossword Clues
//!
//! Clue lookup over a crossword answer corpus, with random answers that can be
//! chained by edit distance from a previous answer.
//!
//! # Quick Start
//!
//! ```rust
//! use crossword_clues::resolver::{DistanceMode, RandomQuery, Resolver, ThreadRandom};
//! use crossword_clues::store::ClueDatabase;
//!
//! let mut db = ClueDatabase::new();
//! db.insert("CAT", "Feline pet");
//! db.insert("COT", "Camp bed");
//!
//! let resolver = Resolver::new(&db);
//! let query = RandomQuery::chained("cat", 1, DistanceMode::Same);
//! let outcome = resolver.random(&query, &mut ThreadRandom);
//! assert_eq!(outcome.answer(), Some("COT"));
//!
//! assert_eq!(resolver.clues("c-a-t").clues, vec!["Feline pet"]);
//! ```

// Answer normalization
pub mod core;

// Positional and edit distances
pub mod distance;

// Clue database and snapshot format
pub mod store;

// Random and clue-lookup queries
pub mod resolver;

// Offline corpus building
pub mod builder;

// HTTP boundary
pub mod server;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
