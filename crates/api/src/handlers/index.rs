//! Handlers for the greeting and mirror endpoints, and the catch-all
//! 404 / 405 responses.

use axum::extract::rejection::PathRejection;
use axum::extract::Path;
use axum::http::StatusCode;
use showtracker_core::envelope::Payload;

use crate::error::AppResult;
use crate::response::ApiResponse;

/// GET /
pub async fn hello_world() -> AppResult<ApiResponse> {
    ApiResponse::ok(Payload::Greeting)
}

/// GET /mirror/{name}
///
/// Echo the path segment back as `{"name": ...}`.
pub async fn mirror(path: Result<Path<String>, PathRejection>) -> AppResult<ApiResponse> {
    let Path(name) = path?;
    ApiResponse::ok(Payload::Mirror(name))
}

/// Fallback for unmatched routes.
pub async fn not_found() -> ApiResponse {
    ApiResponse::message(StatusCode::NOT_FOUND, "Not found")
}

/// Fallback for a known route hit with an unsupported method.
pub async fn method_not_allowed() -> ApiResponse {
    ApiResponse::message(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
}
