//! # Application Error
//!
//! Maps internal failures to HTTP responses. Page routes have almost
//! no failure path — the only runtime errors here are a missing route
//! entry (a wiring bug) or an asset read failure, both of which map
//! to 500 with a structured JSON body. Internal details are logged
//! but never returned to clients.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured JSON error response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

/// Inner error detail.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Machine-readable error code.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

/// Application-level error type implementing [`IntoResponse`].
#[derive(Error, Debug)]
pub enum AppError {
    /// No route for the requested path (404).
    #[error("not found: {0}")]
    NotFound(String),

    /// Internal server error (500). Message is logged, never returned.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            Self::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            Self::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        // Never expose internal error messages to clients.
        let message = match &self {
            Self::Internal(_) => "An internal error occurred".to_string(),
            other => other.to_string(),
        };

        if let Self::Internal(_) = &self {
            tracing::error!(error = %self, "internal server error");
        }

        let body = ErrorBody {
            error: ErrorDetail {
                code: code.to_string(),
                message,
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<atrium_core::assets::AssetError> for AppError {
    fn from(err: atrium_core::assets::AssetError) -> Self {
        Self::Internal(err.to_string())
    }
}

impl From<atrium_core::placeholder::PlaceholderError> for AppError {
    fn from(err: atrium_core::placeholder::PlaceholderError) -> Self {
        Self::Internal(err.to_string())
    }
}
