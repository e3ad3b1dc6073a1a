//! Gateway error types and wire translation.
//!
//! Engine failures are translated at the boundary into the wire shape
//! `{"status":"error","message":...}`: InvalidArgument-class failures map
//! to 400, internal failures (buffer or accumulator limits) to 500.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use duplex_engine::EngineError;
use thiserror::Error;

/// Service-level errors raised while constructing or running the gateway
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Server error: {0}")]
    Server(#[from] std::io::Error),
}

/// Request-level error rendered to the client
#[derive(Debug, Clone)]
pub struct ApiError {
    /// HTTP status for the response
    pub status: StatusCode,
    /// Human-readable message placed in the error body
    pub message: String,
}

impl ApiError {
    /// Caller-side fault: malformed body, empty input, digit out of range.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    /// Server-side fault.
    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
        }
    }
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        if err.is_invalid_argument() {
            Self::invalid_argument(err.to_string())
        } else {
            Self::internal(err.to_string())
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({
            "status": "error",
            "message": self.message,
        }));
        (self.status, body).into_response()
    }
}
