//! Route definitions for the show collection.

use axum::routing::get;
use axum::Router;

use crate::handlers::{index, shows};
use crate::state::AppState;

/// Show routes mounted at `/shows`.
///
/// ```text
/// GET    /                  -> list_shows (?minEpisodes=)
/// POST   /                  -> create_show
/// GET    /{id}              -> get_show
/// POST   /{id}              -> modify_show
/// DELETE /{id}              -> delete_show
/// ```
///
/// Other methods on these paths answer a 405 envelope.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(shows::list_shows).post(shows::create_show))
        .route(
            "/{id}",
            get(shows::get_show)
                .post(shows::modify_show)
                .delete(shows::delete_show),
        )
        .method_not_allowed_fallback(index::method_not_allowed)
}
