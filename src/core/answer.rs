//! Crossword answer normalization
//!
//! Answers are stored as uppercase ASCII letters. User input is normalized before
//! any lookup so that `"ca-t!"` and `"CAT"` resolve to the same entry.

use thiserror::Error;

/// Error type for strings that cannot be stored as answers
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnswerError {
    #[error("Answer must not be empty")]
    Empty,
    #[error("Answer must contain only ASCII letters")]
    NonAscii,
    #[error("Answer contains non-alphabetic characters")]
    InvalidCharacters,
    #[error("Answer must be uppercase")]
    NotUppercase,
}

/// Normalize a raw answer for clue lookup
///
/// Keeps only alphabetic characters and uppercases them. Normalizing an
/// already-normalized answer returns it unchanged.
///
/// # Examples
/// ```
/// use crossword_clues::core::normalize_answer;
///
/// assert_eq!(normalize_answer("ca-t!"), "CAT");
/// assert_eq!(normalize_answer("New York"), "NEWYORK");
/// ```
#[must_use]
pub fn normalize_answer(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_alphabetic())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Normalize a `previous` anchor answer
///
/// Only case is changed; other characters are kept so that the anchor's length
/// matches what the caller sent.
#[must_use]
pub fn normalize_anchor(raw: &str) -> String {
    raw.to_uppercase()
}

/// Check that a string satisfies the stored-answer invariant
///
/// # Errors
/// Returns `AnswerError` if the answer is empty, contains non-ASCII or
/// non-alphabetic characters, or is not uppercase.
pub fn validate_answer(answer: &str) -> Result<(), AnswerError> {
    if answer.is_empty() {
        return Err(AnswerError::Empty);
    }

    if !answer.is_ascii() {
        return Err(AnswerError::NonAscii);
    }

    if !answer.bytes().all(|b| b.is_ascii_alphabetic()) {
        return Err(AnswerError::InvalidCharacters);
    }

    if !answer.bytes().all(|b| b.is_ascii_uppercase()) {
        return Err(AnswerError::NotUppercase);
    }

    Ok(())
}

/// Number of characters in an answer, as used for bucket keys
#[inline]
#[must_use]
pub fn answer_length(answer: &str) -> usize {
    answer.chars().count()
}
