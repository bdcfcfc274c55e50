//! Random clue command
//!
//! Draws one answer/clue pair, or a ladder of them where each answer becomes
//! the `previous` anchor of the next draw.

use crate::resolver::{RandomOutcome, RandomPick, RandomQuery, RandomSource, Resolver};
use crate::store::ClueDatabase;

/// Result of a chained draw
pub struct ChainResult {
    /// Anchor of the first step, if one was given
    pub start: Option<String>,
    pub steps: Vec<RandomPick>,
    /// Why the chain stopped early, if it did
    pub stopped: Option<RandomOutcome>,
}

/// Draw a single answer and clue
pub fn draw_clue<R: RandomSource + ?Sized>(
    db: &ClueDatabase,
    query: &RandomQuery,
    rng: &mut R,
) -> RandomOutcome {
    Resolver::new(db).random(query, rng)
}

/// Draw up to `steps` answers, each anchored on the previous one
///
/// The first draw uses `query` as given. Later draws keep its distance and mode
/// but replace `previous` with the last answer. Stops at the first empty outcome.
pub fn draw_chain<R: RandomSource + ?Sized>(
    db: &ClueDatabase,
    query: &RandomQuery,
    steps: usize,
    rng: &mut R,
) -> ChainResult {
    let resolver = Resolver::new(db);
    let mut current = query.clone();
    let mut picks = Vec::with_capacity(steps);

    for _ in 0..steps {
        match resolver.random(&current, rng) {
            RandomOutcome::Found(pick) => {
                current.previous = Some(pick.answer.clone());
                picks.push(pick);
            }
            empty @ RandomOutcome::Empty(_) => {
                return ChainResult {
                    start: query.previous.clone(),
                    steps: picks,
                    stopped: Some(empty),
                };
            }
        }
    }

    ChainResult {
        start: query.previous.clone(),
        steps: picks,
        stopped: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::positional_distance;
    use crate::resolver::{DistanceMode, NoResult, ThreadRandom};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn ladder() -> ClueDatabase {
        let mut db = ClueDatabase::new();
        for (answer, clue) in [
            ("CAT", "Feline pet"),
            ("COT", "Camp bed"),
            ("COG", "Gear tooth"),
            ("DOG", "Canine"),
        ] {
            db.insert(answer, clue);
        }
        db
    }

    #[test]
    fn draw_clue_returns_known_pair() {
        let db = ladder();
        let outcome = draw_clue(&db, &RandomQuery::with_length(3), &mut ThreadRandom);
        let RandomOutcome::Found(pick) = outcome else {
            panic!("expected an answer");
        };
        assert!(db.clues_for(&pick.answer).unwrap().contains(&pick.clue));
    }

    #[test]
    fn chain_steps_are_one_letter_apart() {
        let db = ladder();
        let query = RandomQuery::chained("CAT", 1, DistanceMode::Same);
        let mut rng = StdRng::seed_from_u64(3);

        let chain = draw_chain(&db, &query, 6, &mut rng);

        assert_eq!(chain.start.as_deref(), Some("CAT"));
        assert_eq!(chain.steps.len(), 6);
        assert!(chain.stopped.is_none());

        let mut previous = "CAT".to_string();
        for step in &chain.steps {
            assert_eq!(positional_distance(&previous, &step.answer), 1);
            previous.clone_from(&step.answer);
        }
    }

    #[test]
    fn chain_stops_on_empty_outcome() {
        let db = ladder();
        let query = RandomQuery::chained("CAT", 1, DistanceMode::Longer);

        let chain = draw_chain(&db, &query, 3, &mut ThreadRandom);

        assert!(chain.steps.is_empty());
        assert_eq!(
            chain.stopped,
            Some(RandomOutcome::Empty(NoResult::NoCandidatesForLength))
        );
    }

    #[test]
    fn chain_of_zero_steps() {
        let db = ladder();
        let chain = draw_chain(&db, &RandomQuery::default(), 0, &mut ThreadRandom);
        assert!(chain.steps.is_empty());
        assert!(chain.stopped.is_none());
    }
}
