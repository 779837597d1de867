//! Post Handlers
//!
//! Single post reads, the comment tree of a post, and post votes.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};

use super::parse_id;
use crate::domain::models::{PostId, VoteTarget};
use crate::infrastructure::driving_adapters::api_rest::dto::{
    CastVoteDto, CommentResponseDto, CreateCommentDto, PostResponseDto, VoteTallyDto,
};
use crate::infrastructure::driving_adapters::api_rest::middleware::JwtAuth;
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

/// Create the router for post endpoints
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/:id", get(get_post_by_id))
        .route("/:id/comments", get(get_comment_thread).post(create_comment))
        .route("/:id/vote", put(vote_on_post))
}

/// GET /posts/:id - Fetch a post
///
/// # Responses
///
/// * 200 OK - Post found
/// * 400 Bad Request - Malformed id
/// * 404 Not Found - Post does not exist
#[axum::debug_handler]
async fn get_post_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PostResponseDto>, ApiError> {
    let post = state.get_post_by_id_use_case.execute(parse_id(&id)?).await?;

    Ok(Json(PostResponseDto::from(post)))
}

/// GET /posts/:id/comments - Comments of a post as reply trees
///
/// # Responses
///
/// * 200 OK - Top-level comments, each with nested `replies`
/// * 404 Not Found - Post does not exist
#[axum::debug_handler]
async fn get_comment_thread(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<CommentResponseDto>>, ApiError> {
    let threads = state.get_comment_thread_use_case.execute(parse_id(&id)?).await?;

    Ok(Json(threads.into_iter().map(CommentResponseDto::from).collect()))
}

/// POST /posts/:id/comments - Comment on a post or reply to a comment
///
/// # Authentication
///
/// Requires valid JWT token in Authorization header.
///
/// # Responses
///
/// * 201 Created - Comment created
/// * 400 Bad Request - Blank content
/// * 401 Unauthorized - Missing or invalid JWT token
/// * 404 Not Found - Post or parent comment does not exist
/// * 422 Unprocessable Entity - Post is locked or parent comment was deleted
#[axum::debug_handler]
async fn create_comment(
    JwtAuth(user): JwtAuth,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(dto): Json<CreateCommentDto>,
) -> Result<(StatusCode, Json<CommentResponseDto>), ApiError> {
    let post_id: PostId = parse_id(&id)?;

    let comment = state
        .create_comment_use_case
        .execute(dto.into_new_comment(user.id, post_id))
        .await?;

    Ok((StatusCode::CREATED, Json(CommentResponseDto::from(comment))))
}

/// PUT /posts/:id/vote - Up, down or clear the caller's vote on a post
///
/// # Authentication
///
/// Requires valid JWT token in Authorization header.
///
/// # Responses
///
/// * 200 OK - Counters after the vote
/// * 401 Unauthorized - Missing or invalid JWT token
/// * 404 Not Found - Post does not exist
#[axum::debug_handler]
async fn vote_on_post(
    JwtAuth(user): JwtAuth,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(dto): Json<CastVoteDto>,
) -> Result<Json<VoteTallyDto>, ApiError> {
    let target = VoteTarget::Post(parse_id(&id)?);

    let tally = state
        .cast_vote_use_case
        .execute(user.id, target, dto.direction)
        .await?;

    Ok(Json(VoteTallyDto::from(tally)))
}
