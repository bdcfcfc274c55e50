//! Query resolution
//!
//! Turns random-answer and clue-lookup requests into results, drawing every
//! random choice through an injected `RandomSource`.

mod query;
mod random;

pub use query::{
    CluesResult, DistanceMode, NoResult, RandomOutcome, RandomPick, RandomQuery, RandomResult,
    Resolver, SUCCESS_MESSAGE, resolve_clues, resolve_random,
};
pub use random::{RandomSource, ThreadRandom};
