//! HTTP boundary
//!
//! Exposes the resolver over `GET /random` and `GET /clues`. The database is
//! loaded once before the server starts and shared read-only between requests.

mod routes;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::store::ClueDatabase;

pub use routes::{CluesParams, RandomParams};

/// State shared by every request
#[derive(Debug)]
pub struct AppState {
    pub db: ClueDatabase,
}

impl AppState {
    #[must_use]
    pub const fn new(db: ClueDatabase) -> Self {
        Self { db }
    }
}

/// Build the application router
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(routes::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind to `addr` and serve until the process is stopped
///
/// # Errors
/// Returns an I/O error if the address cannot be bound or the server fails.
pub async fn serve(db: ClueDatabase, addr: SocketAddr) -> std::io::Result<()> {
    let state = Arc::new(AppState::new(db));
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await
}
