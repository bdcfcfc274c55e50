//! Pluggable randomness for answer and clue selection

use rand::Rng;
use rand::rngs::StdRng;

/// A source of uniform random indices
///
/// The resolver draws every random choice (length, answer, clue) through this
/// trait so that callers can substitute a seeded or scripted source.
pub trait RandomSource {
    /// Return an index uniformly distributed in `0..upper`
    ///
    /// Only called with `upper > 0`.
    fn index(&mut self, upper: usize) -> usize;
}

/// Thread-local generator, used for live queries
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn index(&mut self, upper: usize) -> usize {
        rand::rng().random_range(0..upper)
    }
}

impl RandomSource for StdRng {
    fn index(&mut self, upper: usize) -> usize {
        self.random_range(0..upper)
    }
}

/// Pick one element uniformly from an iterator of known length
///
/// Returns `None` if the iterator is empty.
pub(crate) fn choose<I, R>(rng: &mut R, items: I) -> Option<I::Item>
where
    I: IntoIterator,
    I::IntoIter: ExactSizeIterator,
    R: RandomSource + ?Sized,
{
    let mut items = items.into_iter();
    let len = items.len();
    if len == 0 {
        return None;
    }
    items.nth(rng.index(len))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn thread_random_stays_in_range() {
        let mut rng = ThreadRandom;
        for upper in 1..20 {
            assert!(rng.index(upper) < upper);
        }
    }

    #[test]
    fn seeded_source_is_reproducible() {
        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);
        let xs: Vec<usize> = (0..10).map(|_| a.index(100)).collect();
        let ys: Vec<usize> = (0..10).map(|_| b.index(100)).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn choose_from_empty_is_none() {
        let empty: Vec<u8> = Vec::new();
        assert_eq!(choose(&mut ThreadRandom, &empty), None);
    }

    #[test]
    fn choose_single_element() {
        assert_eq!(choose(&mut ThreadRandom, &["only"]), Some(&"only"));
    }

    #[test]
    fn choose_covers_every_element() {
        let items = ["a", "b", "c"];
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = std::collections::BTreeSet::new();
        for _ in 0..200 {
            seen.insert(*choose(&mut rng, &items).unwrap());
        }
        assert_eq!(seen.len(), 3);
    }
}
