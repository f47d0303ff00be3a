//! Mapping of request failures onto HTTP responses.

use std::any::Any;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;
use vocative::GreetingError;

/// Error body shared by every failing endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}

/// Failure of a single HTTP request.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Greeting(#[from] GreetingError),

    /// Body was not valid JSON or did not match the request shape.
    #[error(transparent)]
    Rejected(#[from] JsonRejection),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Greeting(GreetingError::InvalidInput) => StatusCode::BAD_REQUEST,
            ApiError::Greeting(GreetingError::Internal { .. }) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ApiError::Rejected(rejection) => rejection.status(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self, "request failed");
        }
        let detail = match &self {
            ApiError::Rejected(rejection) => rejection.body_text(),
            ApiError::Greeting(e) => e.to_string(),
        };
        (status, Json(ErrorBody { detail })).into_response()
    }
}

/// Converts a handler panic into an internal error response.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = panic.downcast_ref::<&str>() {
        (*message).to_string()
    } else {
        "unknown panic".to_string()
    };
    ApiError::from(GreetingError::internal(message)).into_response()
}
