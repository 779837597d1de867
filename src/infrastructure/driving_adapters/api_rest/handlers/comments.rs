//! Comment Handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, put},
    Json, Router,
};

use super::parse_id;
use crate::domain::models::VoteTarget;
use crate::infrastructure::driving_adapters::api_rest::dto::{CastVoteDto, VoteTallyDto};
use crate::infrastructure::driving_adapters::api_rest::middleware::JwtAuth;
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

/// Create the router for comment endpoints
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/:id", delete(delete_comment))
        .route("/:id/vote", put(vote_on_comment))
}

/// DELETE /comments/:id - Soft delete the caller's own comment
///
/// # Authentication
///
/// Requires valid JWT token in Authorization header.
///
/// # Responses
///
/// * 204 No Content - Comment deleted (or already deleted)
/// * 401 Unauthorized - Missing or invalid JWT token
/// * 403 Forbidden - Caller is not the author
/// * 404 Not Found - Comment does not exist
#[axum::debug_handler]
async fn delete_comment(
    JwtAuth(user): JwtAuth,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state
        .delete_comment_use_case
        .execute(parse_id(&id)?, user.id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// PUT /comments/:id/vote - Up, down or clear the caller's vote on a comment
///
/// # Authentication
///
/// Requires valid JWT token in Authorization header.
///
/// # Responses
///
/// * 200 OK - Counters after the vote
/// * 401 Unauthorized - Missing or invalid JWT token
/// * 404 Not Found - Comment does not exist
/// * 422 Unprocessable Entity - Comment was deleted
#[axum::debug_handler]
async fn vote_on_comment(
    JwtAuth(user): JwtAuth,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(dto): Json<CastVoteDto>,
) -> Result<Json<VoteTallyDto>, ApiError> {
    let target = VoteTarget::Comment(parse_id(&id)?);

    let tally = state
        .cast_vote_use_case
        .execute(user.id, target, dto.direction)
        .await?;

    Ok(Json(VoteTallyDto::from(tally)))
}
