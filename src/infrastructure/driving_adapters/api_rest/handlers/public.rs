//! Public Handlers
//!
//! Unauthenticated health and info endpoints. The router is mounted under
//! both `/api/public` and `/public`.

use axum::{extract::State, routing::get, Json, Router};

use crate::infrastructure::driving_adapters::api_rest::dto::{HealthResponseDto, InfoResponseDto};
use crate::infrastructure::driving_adapters::api_rest::AppState;

/// Create the router for public endpoints
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/info", get(info))
}

/// GET /health - Liveness probe
///
/// # Responses
///
/// * 200 OK - `{status: "UP", timestamp, application, version}`
async fn health(State(state): State<AppState>) -> Json<HealthResponseDto> {
    Json(HealthResponseDto::up(&state.config.app))
}

/// GET /info - Application name, version and description
///
/// # Responses
///
/// * 200 OK - `{name, version, description, timestamp}`
async fn info(State(state): State<AppState>) -> Json<InfoResponseDto> {
    Json(InfoResponseDto::from(&state.config.app))
}
