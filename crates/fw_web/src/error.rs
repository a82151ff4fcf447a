//! Error envelope shared by every endpoint.
//!
//! Upstream failures never reach this type; they degrade to empty results
//! inside the fetchers. Only unknown routes and unexpected handler
//! failures are reported here, always as `{ "error", "message" }`.

use std::any::Any;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

const UNEXPECTED: &str = "An unexpected error occurred";

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    /// Details are logged, never sent to the client.
    #[error("Internal error: {0}")]
    Internal(String),
}

#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub error: &'static str,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, envelope) = match self {
            AppError::NotFound(message) => (
                StatusCode::NOT_FOUND,
                ErrorEnvelope {
                    error: "Not found",
                    message,
                },
            ),
            AppError::Internal(detail) => {
                tracing::error!("request failed: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorEnvelope {
                        error: "Internal server error",
                        message: UNEXPECTED.to_string(),
                    },
                )
            }
        };

        (status, Json(envelope)).into_response()
    }
}

/// Renders a caught handler panic as the generic 500 envelope.
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "handler panicked".to_string()
    };
    AppError::Internal(detail).into_response()
}
