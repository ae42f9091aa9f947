use axum::routing::get;
use axum::Router;

use crate::handlers::index;
use crate::state::AppState;

/// Greeting and mirror routes mounted at the root.
///
/// ```text
/// GET    /                  -> hello_world
/// GET    /mirror/{name}     -> mirror
///
/// Other methods on these paths answer a 405 envelope.
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index::hello_world))
        .route("/mirror/{name}", get(index::mirror))
        .method_not_allowed_fallback(index::method_not_allowed)
}
