//! Answer and clue filtering for corpus building
//!
//! Clues that only make sense inside their own puzzle ("See 12-Across", "this
//! puzzle's theme") are useless out of context and get dropped.

use regex::{Regex, RegexSet};

/// Patterns matched against the lowercased clue
pub const DENYLIST: &[&str] = &[
    "-across",
    "-down",
    "this puzzle",
    "today's theme",
    "hidden theme",
    "starred clue",
    "this crossword",
    "with [0-9]+ (down|across)",
];

/// Decides which answer/clue pairs enter the database
#[derive(Debug, Clone)]
pub struct ClueFilter {
    clue_number: Regex,
    denylist: RegexSet,
}

impl ClueFilter {
    /// Build a filter with the standard denylist
    ///
    /// # Errors
    /// Returns a regex error if a pattern fails to compile.
    pub fn new() -> Result<Self, regex::Error> {
        Self::with_denylist(DENYLIST)
    }

    /// Build a filter with a custom denylist
    ///
    /// # Errors
    /// Returns a regex error if a pattern fails to compile.
    pub fn with_denylist(patterns: &[&str]) -> Result<Self, regex::Error> {
        Ok(Self {
            clue_number: Regex::new(r"^[0-9]+\. ")?,
            denylist: RegexSet::new(patterns)?,
        })
    }

    /// Normalize an answer, or reject it
    ///
    /// Accepts only non-empty ASCII alphabetic answers and uppercases them.
    #[must_use]
    pub fn accept_answer(&self, answer: &str) -> Option<String> {
        if answer.is_empty() || !answer.bytes().all(|b| b.is_ascii_alphabetic()) {
            return None;
        }
        Some(answer.to_ascii_uppercase())
    }

    /// Strip a leading clue number, or reject the clue
    ///
    /// Returns `None` if the stripped clue matches the denylist.
    #[must_use]
    pub fn accept_clue(&self, clue: &str) -> Option<String> {
        let stripped = self.clue_number.replace(clue, "");
        if self.denylist.is_match(&stripped.to_lowercase()) {
            return None;
        }
        Some(stripped.into_owned())
    }
}
