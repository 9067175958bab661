//! HTTP API route definitions.

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use super::handlers::{greeting, info, AppState};

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(greeting))
        .route("/info", get(info))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
