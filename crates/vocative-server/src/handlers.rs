//! Endpoint handlers.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use vocative::{GreetingRequest, GreetingResponse};

use crate::error::ApiError;
use crate::router::AppState;

/// Identifier reported by the health probe; existing callers match on it.
pub const SERVICE_ID: &str = "morfeusz2";

pub const SERVICE_NAME: &str = "Morfeusz 2 - Odmiana Imion";

/// API version reported by `GET /`, independent of the crate version.
pub const SERVICE_VERSION: &str = "1.0.0";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
}

/// POST /vocative
pub async fn vocative(
    State(state): State<AppState>,
    payload: Result<Json<GreetingRequest>, JsonRejection>,
) -> Result<Json<GreetingResponse>, ApiError> {
    let Json(request) = payload?;
    let response = state.service.respond(&request)?;
    Ok(Json(response))
}

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: SERVICE_ID.to_string(),
    })
}

/// GET /
pub async fn info() -> Json<Value> {
    Json(json!({
        "service": SERVICE_NAME,
        "version": SERVICE_VERSION,
        "endpoints": {
            "POST /vocative": "Pobierz formę wołacza",
            "GET /health": "Sprawdzenie stanu",
            "GET /": "Informacje o serwisie",
        },
    }))
}
