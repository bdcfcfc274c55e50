//! String distances used to chain answers
//!
//! Two notions of distance: positional (same length, character by character) and
//! Levenshtein (insertions, deletions and substitutions). The window search
//! applies Levenshtein across the neighbouring length buckets.

mod levenshtein;
mod positional;
mod window;

pub use levenshtein::levenshtein_distance;
pub use positional::positional_distance;
pub use window::collect_any_length_candidates;
