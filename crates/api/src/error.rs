use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use showtracker_core::error::CoreError;
use showtracker_core::show::MissingFields;
use showtracker_db::StoreError;

use crate::response::ApiResponse;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] so every failure is sent as the standard
/// envelope with `success: false`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `showtracker_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A record store error.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// A path id that is not an integer, so it cannot name any record.
    #[error("Invalid {entity} id: {raw}")]
    InvalidId { entity: &'static str, raw: String },

    /// A request the framework could not decode (bad JSON, wrong content
    /// type, malformed query string or path segment).
    #[error("Bad request: {message}")]
    BadRequest { status: StatusCode, message: String },

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<MissingFields> for AppError {
    fn from(missing: MissingFields) -> Self {
        AppError::Core(CoreError::Validation(missing.message().to_string()))
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

const INTERNAL_MESSAGE: &str = "An internal error occurred";

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, .. } => {
                    (StatusCode::NOT_FOUND, not_found_message(entity))
                }
                CoreError::Validation(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg.clone()),
                CoreError::InvalidArgument(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MESSAGE.to_string())
                }
            },

            // --- Store errors ---
            AppError::Store(err) => {
                tracing::error!(error = %err, "Store error");
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MESSAGE.to_string())
            }

            // --- HTTP-specific errors ---
            AppError::InvalidId { entity, .. } => {
                (StatusCode::NOT_FOUND, not_found_message(entity))
            }
            AppError::BadRequest { status, message } => (*status, message.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MESSAGE.to_string())
            }
        };

        ApiResponse::message(status, message).into_response()
    }
}

fn not_found_message(entity: &str) -> String {
    format!("No {entity} with this id exists")
}
