use std::sync::Arc;

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::AppState;
use crate::resolver::{
    CluesResult, DistanceMode, RandomQuery, RandomResult, ThreadRandom, resolve_clues,
    resolve_random,
};

// ─── Request / Response types ────────────────────────────────

const fn default_distance() -> usize {
    1
}

/// Query string of `GET /random`
#[derive(Debug, Deserialize)]
pub struct RandomParams {
    /// Answer length; ignored if `previous` is given
    pub length: Option<usize>,
    /// The returned answer will be `distance` away from this answer
    pub previous: Option<String>,
    #[serde(default = "default_distance")]
    pub distance: usize,
    #[serde(default)]
    pub distance_mode: DistanceMode,
}

impl From<RandomParams> for RandomQuery {
    fn from(params: RandomParams) -> Self {
        Self {
            length: params.length,
            previous: params.previous,
            distance: params.distance,
            mode: params.distance_mode,
        }
    }
}

/// Query string of `GET /clues`
#[derive(Debug, Deserialize)]
pub struct CluesParams {
    pub answer: String,
}

#[derive(Serialize)]
struct ServiceInfo {
    description: &'static str,
    version: &'static str,
    routes: Vec<RouteInfo>,
}

#[derive(Serialize)]
struct RouteInfo {
    path: &'static str,
    description: &'static str,
}

// ─── Routes ──────────────────────────────────────────────────

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(index))
        .route("/random", get(random_answer))
        .route("/clues", get(all_clues))
}

async fn index() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        description: "An API to find clues for crossword answers.",
        version: env!("CARGO_PKG_VERSION"),
        routes: vec![
            RouteInfo {
                path: "/random",
                description: "Return a random answer-clue combination.",
            },
            RouteInfo {
                path: "/clues",
                description: "Return all known clues for the given `answer`.",
            },
        ],
    })
}

async fn random_answer(
    State(state): State<Arc<AppState>>,
    Query(params): Query<RandomParams>,
) -> Json<RandomResult> {
    debug!(?params, "GET /random");
    let query = RandomQuery::from(params);
    Json(resolve_random(&state.db, &query, &mut ThreadRandom))
}

async fn all_clues(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CluesParams>,
) -> Json<CluesResult> {
    debug!(answer = %params.answer, "GET /clues");
    Json(resolve_clues(&state.db, &params.answer))
}
