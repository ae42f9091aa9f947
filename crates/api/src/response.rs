//! HTTP rendering of the response envelope.
//!
//! Every handler returns an [`ApiResponse`], which serializes the
//! [`Envelope`] as the body and uses its `code` as the HTTP status.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use showtracker_core::envelope::{Envelope, Payload};

use crate::error::AppResult;

/// An [`Envelope`] ready to be sent.
#[derive(Debug)]
pub struct ApiResponse(pub Envelope);

impl ApiResponse {
    pub fn new(payload: Payload, status: StatusCode, message: &str) -> AppResult<Self> {
        Ok(Self(Envelope::new(payload, status.as_u16(), message)?))
    }

    /// `200 OK` with a payload and no message.
    pub fn ok(payload: Payload) -> AppResult<Self> {
        Ok(Self(Envelope::ok(payload)?))
    }

    /// A result-less response carrying only a status and message.
    pub fn message(status: StatusCode, message: impl Into<String>) -> Self {
        Self(Envelope::message(status.as_u16(), message))
    }
}

impl IntoResponse for ApiResponse {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.0.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self.0)).into_response()
    }
}
