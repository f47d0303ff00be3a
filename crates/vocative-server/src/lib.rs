//! HTTP transport for the vocative engine.
//!
//! Routes:
//! - `POST /vocative` - inflect a first name and compose a greeting
//! - `GET /health` - liveness probe
//! - `GET /` - service metadata

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;

pub use config::ServerConfig;
pub use error::ApiError;
pub use router::{AppState, build_router};
