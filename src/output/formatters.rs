//! Formatting utilities for terminal output

/// Spell an answer out as grid cells, e.g. `C A T`
#[must_use]
pub fn grid_cells(answer: &str) -> String {
    let mut result = String::with_capacity(answer.len() * 2);
    for (i, ch) in answer.chars().enumerate() {
        if i > 0 {
            result.push(' ');
        }
        result.push(ch);
    }
    result
}

/// Create a bar of `width` cells filled in proportion to `value / max`
#[must_use]
pub fn proportion_bar(value: usize, max: usize, width: usize) -> String {
    let filled = if max == 0 {
        0
    } else {
        // Cast is safe: the ratio is at most 1, so the product is at most `width`
        ((value as f64 / max as f64) * width as f64).round() as usize
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Pluralize a count, e.g. `1 clue`, `3 clues`
#[must_use]
pub fn count_noun(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_cells_spaces_letters() {
        assert_eq!(grid_cells("CAT"), "C A T");
        assert_eq!(grid_cells("A"), "A");
        assert_eq!(grid_cells(""), "");
    }

    #[test]
    fn proportion_bar_empty() {
        assert_eq!(proportion_bar(0, 100, 10), "░░░░░░░░░░");
    }

    #[test]
    fn proportion_bar_full() {
        assert_eq!(proportion_bar(100, 100, 10), "██████████");
    }

    #[test]
    fn proportion_bar_half() {
        assert_eq!(proportion_bar(50, 100, 10), "█████░░░░░");
    }

    #[test]
    fn proportion_bar_zero_max() {
        assert_eq!(proportion_bar(5, 0, 4), "░░░░");
    }

    #[test]
    fn count_noun_pluralizes() {
        assert_eq!(count_noun(1, "clue"), "1 clue");
        assert_eq!(count_noun(0, "clue"), "0 clues");
        assert_eq!(count_noun(12, "answer"), "12 answers");
    }
}
