use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;
use showtracker_db::repositories::ShowRepo;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Number of shows currently stored.
    pub shows: usize,
}

/// GET /health -- returns service health and the size of the show collection.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        shows: ShowRepo::count(state.store()).await,
    })
}

/// Mount health check routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .method_not_allowed_fallback(crate::handlers::index::method_not_allowed)
}
