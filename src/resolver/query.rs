//! Query resolution over a loaded clue database

use super::random::{RandomSource, choose};
use crate::core::{answer_length, normalize_anchor, normalize_answer};
use crate::distance::{collect_any_length_candidates, levenshtein_distance, positional_distance};
use crate::store::ClueDatabase;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// How a random answer may relate to the `previous` anchor
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum DistanceMode {
    /// Same length, `distance` differing positions
    #[default]
    Same,
    /// `distance` letters longer, at edit distance `distance`
    Longer,
    /// `distance` letters shorter, at edit distance `distance`
    Shorter,
    /// Any length within `distance`, at edit distance `distance`
    Any,
}

impl DistanceMode {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Same => "same",
            Self::Longer => "longer",
            Self::Shorter => "shorter",
            Self::Any => "any",
        }
    }
}

impl fmt::Display for DistanceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parameters of a random-answer query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RandomQuery {
    /// Answer length; ignored when `previous` is given
    pub length: Option<usize>,
    /// Anchor answer the result must be `distance` away from
    pub previous: Option<String>,
    /// Required distance from `previous`
    pub distance: usize,
    pub mode: DistanceMode,
}

impl Default for RandomQuery {
    fn default() -> Self {
        Self {
            length: None,
            previous: None,
            distance: 1,
            mode: DistanceMode::Same,
        }
    }
}

impl RandomQuery {
    /// Query for any answer of the given length
    #[must_use]
    pub fn with_length(length: usize) -> Self {
        Self {
            length: Some(length),
            ..Self::default()
        }
    }

    /// Query for an answer `distance` away from `previous`
    #[must_use]
    pub fn chained(previous: impl Into<String>, distance: usize, mode: DistanceMode) -> Self {
        Self {
            length: None,
            previous: Some(previous.into()),
            distance,
            mode,
        }
    }
}

/// Why a random query produced no answer
///
/// These are expected outcomes, not failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoResult {
    /// No bucket for the requested length (no anchor given)
    NoAnswersForLength,
    /// No bucket for the length the distance mode targets
    NoCandidatesForLength,
    /// Buckets exist but no answer is at the requested distance
    NoCandidatesForDistance,
}

impl NoResult {
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::NoAnswersForLength => "No known answers for the given length.",
            Self::NoCandidatesForLength => "No possible answers with the expected length.",
            Self::NoCandidatesForDistance => "No possible answers with the expected distance.",
        }
    }
}

impl fmt::Display for NoResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// An answer with one of its clues
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RandomPick {
    pub answer: String,
    pub clue: String,
}

/// Outcome of a random-answer query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RandomOutcome {
    Found(RandomPick),
    Empty(NoResult),
}

impl RandomOutcome {
    /// The picked answer, if any
    #[must_use]
    pub fn answer(&self) -> Option<&str> {
        match self {
            Self::Found(pick) => Some(&pick.answer),
            Self::Empty(_) => None,
        }
    }
}

/// Message reported alongside a found answer
pub const SUCCESS_MESSAGE: &str = "Success";

/// Boundary shape of a random-answer result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RandomResult {
    pub answer: Option<String>,
    pub clue: Option<String>,
    pub msg: String,
}

impl From<RandomOutcome> for RandomResult {
    fn from(outcome: RandomOutcome) -> Self {
        match outcome {
            RandomOutcome::Found(RandomPick { answer, clue }) => Self {
                answer: Some(answer),
                clue: Some(clue),
                msg: SUCCESS_MESSAGE.to_string(),
            },
            RandomOutcome::Empty(reason) => Self {
                answer: None,
                clue: None,
                msg: reason.message().to_string(),
            },
        }
    }
}

/// Boundary shape of a clue lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CluesResult {
    /// The normalized answer that was looked up
    pub answer: String,
    /// All known clues, sorted; empty for unknown answers
    pub clues: Vec<String>,
}

/// Resolves queries against a borrowed clue database
///
/// Holds no state of its own, so one resolver can serve any number of queries.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    db: &'a ClueDatabase,
}

impl<'a> Resolver<'a> {
    #[must_use]
    pub const fn new(db: &'a ClueDatabase) -> Self {
        Self { db }
    }

    /// Pick a random answer and clue satisfying the query
    pub fn random<R: RandomSource + ?Sized>(
        &self,
        query: &RandomQuery,
        rng: &mut R,
    ) -> RandomOutcome {
        match self.try_random(query, rng) {
            Ok(pick) => RandomOutcome::Found(pick),
            Err(reason) => {
                debug!(?query, %reason, "random query found nothing");
                RandomOutcome::Empty(reason)
            }
        }
    }

    fn try_random<R: RandomSource + ?Sized>(
        &self,
        query: &RandomQuery,
        rng: &mut R,
    ) -> Result<RandomPick, NoResult> {
        let length = match (&query.previous, query.length) {
            (Some(previous), _) => answer_length(previous),
            (None, Some(length)) => length,
            (None, None) => {
                let lengths = self.db.lengths();
                *choose(rng, &lengths).ok_or(NoResult::NoAnswersForLength)?
            }
        };

        let candidates = match query.previous.as_deref().map(normalize_anchor) {
            Some(anchor) => self.candidates(&anchor, length, query.distance, query.mode)?,
            None => self
                .db
                .bucket(length)
                .ok_or(NoResult::NoAnswersForLength)?
                .keys()
                .map(String::as_str)
                .collect(),
        };

        debug!(length, candidates = candidates.len(), "random query candidates");

        let answer = *choose(rng, &candidates).ok_or(NoResult::NoCandidatesForDistance)?;
        let clue = self
            .db
            .clues_for(answer)
            .and_then(|clues| choose(rng, clues))
            .ok_or(NoResult::NoCandidatesForDistance)?;

        Ok(RandomPick {
            answer: answer.to_string(),
            clue: clue.clone(),
        })
    }

    /// Answers at the required distance from the anchor
    ///
    /// Fails with `NoCandidatesForLength` when the mode's target bucket is absent.
    fn candidates(
        &self,
        anchor: &str,
        length: usize,
        distance: usize,
        mode: DistanceMode,
    ) -> Result<Vec<&'a str>, NoResult> {
        match mode {
            DistanceMode::Same => {
                self.filter_bucket(Some(length), |a| positional_distance(a, anchor) == distance)
            }
            DistanceMode::Longer => self.filter_bucket(length.checked_add(distance), |a| {
                levenshtein_distance(a, anchor) == distance
            }),
            DistanceMode::Shorter => self.filter_bucket(length.checked_sub(distance), |a| {
                levenshtein_distance(a, anchor) == distance
            }),
            DistanceMode::Any => Ok(collect_any_length_candidates(
                anchor, length, distance, self.db,
            )),
        }
    }

    fn filter_bucket(
        &self,
        length: Option<usize>,
        keep: impl Fn(&str) -> bool,
    ) -> Result<Vec<&'a str>, NoResult> {
        let bucket = length
            .and_then(|length| self.db.bucket(length))
            .ok_or(NoResult::NoCandidatesForLength)?;

        Ok(bucket
            .keys()
            .map(String::as_str)
            .filter(|answer| keep(answer))
            .collect())
    }

    /// Look up every clue for a raw answer
    ///
    /// The answer is normalized first; unknown answers yield an empty list.
    #[must_use]
    pub fn clues(&self, raw: &str) -> CluesResult {
        let answer = normalize_answer(raw);
        let clues = self
            .db
            .clues_for(&answer)
            .map(|clues| clues.iter().cloned().collect())
            .unwrap_or_default();

        CluesResult { answer, clues }
    }
}

/// Resolve a random-answer query into its boundary shape
pub fn resolve_random<R: RandomSource + ?Sized>(
    db: &ClueDatabase,
    query: &RandomQuery,
    rng: &mut R,
) -> RandomResult {
    Resolver::new(db).random(query, rng).into()
}

/// Resolve a clue lookup into its boundary shape
#[must_use]
pub fn resolve_clues(db: &ClueDatabase, raw: &str) -> CluesResult {
    Resolver::new(db).clues(raw)
}
