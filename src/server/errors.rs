//! API error type mapped to HTTP status codes.
//!
//! Responses carry a JSON body `{"error": "message"}`.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::error::AlumniError;

#[derive(Debug)]
pub enum ApiError {
    /// Invalid request parameters (400).
    BadRequest(String),
    /// Unexpected server error (500).
    Internal(String),
}

impl ApiError {
    /// Map a service error; anything that is not the caller's fault becomes
    /// `Internal(message)` and is logged.
    pub fn from_service(err: &AlumniError, message: &str) -> Self {
        if err.is_client_error() {
            Self::BadRequest(err.to_string())
        } else {
            tracing::error!(error = %err, code = %err.code(), "{message}");
            Self::Internal(message.to_string())
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}
