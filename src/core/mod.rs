//! Core domain types for crossword answers
//!
//! Normalization and validation rules shared by the store, the resolver and the
//! corpus builder. Nothing here touches I/O.

mod answer;

pub use answer::{AnswerError, answer_length, normalize_anchor, normalize_answer, validate_answer};
