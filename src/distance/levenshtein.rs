//! Levenshtein edit distance
//!
//! Single-row dynamic programming: the longer string is walked against a rolling
//! row sized to the shorter one, so memory is `O(min(m, n))`.

/// Compute the Levenshtein distance between two strings
///
/// Returns the minimum number of single-character insertions, deletions and
/// substitutions turning `x` into `y`. Operates on `char`s.
///
/// # Examples
/// ```
/// use crossword_clues::distance::levenshtein_distance;
///
/// assert_eq!(levenshtein_distance("CAT", "CART"), 1);
/// assert_eq!(levenshtein_distance("", "CAT"), 3);
/// assert_eq!(levenshtein_distance("KITTEN", "SITTING"), 3);
/// ```
#[must_use]
pub fn levenshtein_distance(x: &str, y: &str) -> usize {
    let x: Vec<char> = x.chars().collect();
    let y: Vec<char> = y.chars().collect();

    let (shorter, longer) = if x.len() > y.len() { (&y, &x) } else { (&x, &y) };

    // row[i] = distance between shorter[..i] and the prefix of `longer` seen so far
    let mut row: Vec<usize> = (0..=shorter.len()).collect();

    for (j, &cl) in longer.iter().enumerate() {
        let mut diag = row[0];
        row[0] = j + 1;

        for (i, &cs) in shorter.iter().enumerate() {
            let up = row[i + 1];
            row[i + 1] = if cs == cl {
                diag
            } else {
                1 + diag.min(up).min(row[i])
            };
            diag = up;
        }
    }

    row[shorter.len()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn known_distances() {
        assert_eq!(levenshtein_distance("KITTEN", "SITTING"), 3);
        assert_eq!(levenshtein_distance("FLAW", "LAWN"), 2);
        assert_eq!(levenshtein_distance("CAT", "DOG"), 3);
        assert_eq!(levenshtein_distance("CAT", "CAT"), 0);
    }

    #[test]
    fn insertions_and_deletions() {
        assert_eq!(levenshtein_distance("CAT", "CATS"), 1);
        assert_eq!(levenshtein_distance("CATS", "CAT"), 1);
        assert_eq!(levenshtein_distance("CAT", "SCAT"), 1);
        assert_eq!(levenshtein_distance("CAT", "CHAT"), 1);
        assert_eq!(levenshtein_distance("CAT", "CHART"), 2);
    }

    #[test]
    fn empty_inputs() {
        assert_eq!(levenshtein_distance("", ""), 0);
        assert_eq!(levenshtein_distance("", "ABC"), 3);
        assert_eq!(levenshtein_distance("ABC", ""), 3);
    }

    #[test]
    fn counts_chars_not_bytes() {
        assert_eq!(levenshtein_distance("ÉTÉ", "ETE"), 2);
        assert_eq!(levenshtein_distance("", "ÉTÉ"), 3);
    }

    #[test]
    fn shift_is_cheaper_than_positional() {
        assert_eq!(levenshtein_distance("ABCD", "XABC"), 2);
    }

    fn word() -> impl Strategy<Value = String> {
        "[A-E]{0,8}"
    }

    proptest! {
        #[test]
        fn symmetric(x in word(), y in word()) {
            prop_assert_eq!(levenshtein_distance(&x, &y), levenshtein_distance(&y, &x));
        }

        #[test]
        fn identity(x in word()) {
            prop_assert_eq!(levenshtein_distance(&x, &x), 0);
        }

        #[test]
        fn distance_from_empty_is_length(y in word()) {
            prop_assert_eq!(levenshtein_distance("", &y), y.chars().count());
        }

        #[test]
        fn triangle_inequality(x in word(), y in word(), z in word()) {
            prop_assert!(
                levenshtein_distance(&x, &z)
                    <= levenshtein_distance(&x, &y) + levenshtein_distance(&y, &z)
            );
        }

        #[test]
        fn bounded_by_length_difference_and_max(x in word(), y in word()) {
            let d = levenshtein_distance(&x, &y);
            prop_assert!(d >= x.len().abs_diff(y.len()));
            prop_assert!(d <= x.len().max(y.len()));
        }
    }
}
