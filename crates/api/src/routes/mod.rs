pub mod health;
pub mod index;
pub mod shows;

use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the application route tree.
///
/// Route hierarchy:
///
/// ```text
/// /                                                greeting (GET)
/// /mirror/{name}                                   echo name (GET)
///
/// /shows                                           list, create
/// /shows/{id}                                      get, modify (POST), delete
/// ```
///
/// Unmatched paths fall through to a 404 envelope.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(index::router())
        .nest("/shows", shows::router())
        .fallback(handlers::index::not_found)
}
