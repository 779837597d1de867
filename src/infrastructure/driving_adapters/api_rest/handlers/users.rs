//! User Handlers

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};

use super::parse_id;
use crate::infrastructure::driving_adapters::api_rest::dto::UserResponseDto;
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

/// Create the router for user endpoints
pub fn router() -> Router<AppState> {
    Router::new().route("/:id", get(get_user_by_id))
}

/// GET /users/:id - Public profile of a user
///
/// # Responses
///
/// * 200 OK - User found
/// * 400 Bad Request - Malformed id
/// * 404 Not Found - User does not exist
#[axum::debug_handler]
async fn get_user_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<UserResponseDto>, ApiError> {
    let user = state.get_user_by_id_use_case.execute(parse_id(&id)?).await?;

    Ok(Json(UserResponseDto::from(user)))
}
