//! Router construction for the vocative server.

use axum::Router;
use axum::routing::{get, post};
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use vocative::VocativeService;

use crate::error::panic_response;
use crate::handlers;

/// Shared handler state. Cloned per request; the engine data is behind `Arc`.
#[derive(Debug, Clone)]
pub struct AppState {
    pub service: VocativeService,
}

impl AppState {
    pub fn new(service: VocativeService) -> Self {
        Self { service }
    }
}

/// Build the full router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let routes = Router::new()
        .route("/", get(handlers::info))
        .route("/health", get(handlers::health))
        .route("/vocative", post(handlers::vocative))
        .with_state(state);
    with_middleware(routes)
}

/// Wrap routes in tracing, CORS and panic capture.
pub fn with_middleware(routes: Router) -> Router {
    routes.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CatchPanicLayer::custom(panic_response))
            .layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            ),
    )
}
