//! Positional ("same length") distance

/// Count the positions where two strings differ
///
/// Characters are compared pairwise up to the shorter length, so the result is
/// only meaningful for strings of equal length. The resolver only calls it on
/// answers drawn from the anchor's own bucket.
///
/// # Examples
/// ```
/// use crossword_clues::distance::positional_distance;
///
/// assert_eq!(positional_distance("CAT", "COT"), 1);
/// assert_eq!(positional_distance("CAT", "DOG"), 3);
/// assert_eq!(positional_distance("CAT", "CAT"), 0);
/// ```
#[must_use]
pub fn positional_distance(x: &str, y: &str) -> usize {
    x.chars().zip(y.chars()).filter(|(a, b)| a != b).count()
}
