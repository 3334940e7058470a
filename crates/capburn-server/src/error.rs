//! Request error taxonomy
//!
//! Three caller-visible classes: bad input (400, rejected before any work),
//! render-engine failure (500, carries the engine's diagnostic), and
//! transcription-service failure (502, distinct so callers can tell a bad
//! recording from a bad render). Every failure is per-request; nothing here
//! takes the process down.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ApiError>;

/// Uniform failure body: `{"success": false, "error": "..."}`
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid request: {0}")]
    BadRequest(String),

    #[error("render failed: {0}")]
    Engine(String),

    #[error("transcription failed: {0}")]
    Transcribe(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl From<std::io::Error> for ApiError {
    fn from(err: std::io::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transcribe(err.to_string())
    }
}

impl From<axum::extract::multipart::MultipartError> for ApiError {
    fn from(err: axum::extract::multipart::MultipartError) -> Self {
        Self::BadRequest(format!("malformed multipart body: {err}"))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Engine(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Transcribe(_) => StatusCode::BAD_GATEWAY,
        };
        if status.is_server_error() {
            tracing::error!(error = %self, "request_failed");
        }
        let body = Json(ErrorResponse {
            success: false,
            error: self.to_string(),
        });
        (status, body).into_response()
    }
}
