//! Handlers for the `/shows` collection.
//!
//! Create, list (optionally filtered by `minEpisodes`), get, modify and
//! delete. Every response is an [`ApiResponse`] envelope; unknown ids
//! answer 404 "No show with this id exists".

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use showtracker_core::envelope::Payload;
use showtracker_core::error::CoreError;
use showtracker_core::show::ShowFields;
use showtracker_core::types::DbId;
use showtracker_db::repositories::ShowRepo;

use crate::error::{AppError, AppResult};
use crate::query::ShowListParams;
use crate::response::ApiResponse;
use crate::state::AppState;

const ENTITY: &str = "show";

/// Parse a `{id}` path segment. A non-integer id cannot name a record.
fn parse_show_id(raw: &str) -> AppResult<DbId> {
    raw.trim().parse().map_err(|_| AppError::InvalidId {
        entity: ENTITY,
        raw: raw.to_string(),
    })
}

fn show_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: ENTITY, id })
}

/// POST /shows
///
/// Requires both `name` and `episodes_seen`. Responds 201 with the stored
/// record as read back from the store.
pub async fn create_show(
    State(state): State<AppState>,
    body: Result<Json<ShowFields>, JsonRejection>,
) -> AppResult<ApiResponse> {
    let Json(fields) = body?;
    let input = fields.into_new_show()?;

    let created = ShowRepo::create(state.store(), &input).await?;
    let show = ShowRepo::find_by_id(state.store(), created.id)
        .await?
        .ok_or_else(|| {
            AppError::InternalError(format!("show {} missing right after create", created.id))
        })?;

    tracing::info!(show_id = show.id, name = %show.name, "Show created");

    ApiResponse::new(Payload::Show(show), StatusCode::CREATED, "")
}

/// POST /shows/{id}
///
/// Replace whichever of `name` and `episodes_seen` the body contains.
pub async fn modify_show(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    body: Result<Json<ShowFields>, JsonRejection>,
) -> AppResult<ApiResponse> {
    let Path(raw_id) = path?;
    let id = parse_show_id(&raw_id)?;
    if ShowRepo::find_by_id(state.store(), id).await?.is_none() {
        return Err(show_not_found(id));
    }

    let Json(fields) = body?;
    let update = fields.into_update();
    let show = ShowRepo::update(state.store(), id, &update)
        .await?
        .ok_or_else(|| show_not_found(id))?;

    tracing::info!(show_id = id, fields = ?update, "Show updated");

    ApiResponse::ok(Payload::Show(show))
}

/// GET /shows
///
/// Without `minEpisodes`, every show. With it, only shows having
/// `episodes_seen >= minEpisodes`; an empty match answers 200 with the
/// message "No such shows found" and no result.
pub async fn list_shows(
    State(state): State<AppState>,
    query: Result<Query<ShowListParams>, QueryRejection>,
) -> AppResult<ApiResponse> {
    let Query(params) = query?;
    let Some(raw_min) = params.min_episodes else {
        let shows = ShowRepo::list(state.store()).await?;
        return ApiResponse::ok(Payload::Shows(shows));
    };

    let min_episodes: i64 = raw_min.trim().parse().map_err(|_| {
        CoreError::Validation("minEpisodes must be an integer".to_string())
    })?;

    let shows = ShowRepo::list_min_episodes(state.store(), min_episodes).await?;
    if shows.is_empty() {
        return Ok(ApiResponse::message(StatusCode::OK, "No such shows found"));
    }

    ApiResponse::ok(Payload::Shows(shows))
}

/// GET /shows/{id}
pub async fn get_show(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> AppResult<ApiResponse> {
    let Path(raw_id) = path?;
    let id = parse_show_id(&raw_id)?;
    let show = ShowRepo::find_by_id(state.store(), id)
        .await?
        .ok_or_else(|| show_not_found(id))?;

    ApiResponse::ok(Payload::Show(show))
}

/// DELETE /shows/{id}
pub async fn delete_show(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> AppResult<ApiResponse> {
    let Path(raw_id) = path?;
    let id = parse_show_id(&raw_id)?;

    if !ShowRepo::delete(state.store(), id).await {
        return Err(show_not_found(id));
    }

    tracing::info!(show_id = id, "Show deleted");

    Ok(ApiResponse::message(StatusCode::OK, "Show deleted"))
}
