//! Subreddit Handlers
//!
//! Subreddit listing and creation, subscriptions, and the posts of a
//! subreddit. Reads are public; writes require JWT authentication.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use validator::Validate;

use crate::infrastructure::driving_adapters::api_rest::dto::{
    CreatePostDto, CreateSubredditDto, PaginationQuery, PostResponseDto, SubredditResponseDto,
    SubscriptionResponseDto,
};
use crate::infrastructure::driving_adapters::api_rest::middleware::JwtAuth;
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

/// Create the router for subreddit endpoints
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_subreddits).post(create_subreddit))
        .route("/:name", get(get_subreddit_by_name))
        .route("/:name/subscription", post(subscribe).delete(unsubscribe))
        .route("/:name/posts", get(list_subreddit_posts).post(create_post))
}

/// GET /subreddits - Page through subreddits, most subscribed first
///
/// # Responses
///
/// * 200 OK - List of subreddits
/// * 400 Bad Request - `limit` outside 1..=100 or negative `offset`
#[axum::debug_handler]
async fn list_subreddits(
    State(state): State<AppState>,
    Query(query): Query<PaginationQuery>,
) -> Result<Json<Vec<SubredditResponseDto>>, ApiError> {
    query.validate()?;

    let subreddits = state.list_subreddits_use_case.execute(query.into()).await?;

    Ok(Json(subreddits.into_iter().map(SubredditResponseDto::from).collect()))
}

/// POST /subreddits - Create a subreddit owned by the caller
///
/// # Authentication
///
/// Requires valid JWT token in Authorization header.
///
/// # Responses
///
/// * 201 Created - Subreddit created
/// * 400 Bad Request - Validation error
/// * 401 Unauthorized - Missing or invalid JWT token
/// * 409 Conflict - Name already taken (case-insensitive)
#[axum::debug_handler]
async fn create_subreddit(
    JwtAuth(user): JwtAuth,
    State(state): State<AppState>,
    Json(dto): Json<CreateSubredditDto>,
) -> Result<(StatusCode, Json<SubredditResponseDto>), ApiError> {
    let subreddit = state
        .create_subreddit_use_case
        .execute(dto.into_new_subreddit(user.id))
        .await?;

    Ok((StatusCode::CREATED, Json(SubredditResponseDto::from(subreddit))))
}

/// GET /subreddits/:name - Fetch a subreddit by name
///
/// # Responses
///
/// * 200 OK - Subreddit found
/// * 404 Not Found - No subreddit with that name
#[axum::debug_handler]
async fn get_subreddit_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<SubredditResponseDto>, ApiError> {
    let subreddit = state.get_subreddit_by_name_use_case.execute(&name).await?;

    Ok(Json(SubredditResponseDto::from(subreddit)))
}

/// POST /subreddits/:name/subscription - Subscribe the caller
///
/// # Authentication
///
/// Requires valid JWT token in Authorization header.
///
/// # Responses
///
/// * 201 Created - Subscribed
/// * 401 Unauthorized - Missing or invalid JWT token
/// * 404 Not Found - Subreddit does not exist
/// * 409 Conflict - Already subscribed
#[axum::debug_handler]
async fn subscribe(
    JwtAuth(user): JwtAuth,
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<(StatusCode, Json<SubscriptionResponseDto>), ApiError> {
    let subscription = state.subscribe_use_case.execute(user.id, &name).await?;

    Ok((StatusCode::CREATED, Json(SubscriptionResponseDto::from(subscription))))
}

/// DELETE /subreddits/:name/subscription - Unsubscribe the caller
///
/// # Authentication
///
/// Requires valid JWT token in Authorization header.
///
/// # Responses
///
/// * 204 No Content - Unsubscribed
/// * 401 Unauthorized - Missing or invalid JWT token
/// * 404 Not Found - Subreddit does not exist or caller is not subscribed
#[axum::debug_handler]
async fn unsubscribe(
    JwtAuth(user): JwtAuth,
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.unsubscribe_use_case.execute(user.id, &name).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// GET /subreddits/:name/posts - Page through posts, stickied first then newest
///
/// # Responses
///
/// * 200 OK - List of posts
/// * 400 Bad Request - Invalid pagination
/// * 404 Not Found - Subreddit does not exist
#[axum::debug_handler]
async fn list_subreddit_posts(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(query): Query<PaginationQuery>,
) -> Result<Json<Vec<PostResponseDto>>, ApiError> {
    query.validate()?;

    let posts = state
        .list_subreddit_posts_use_case
        .execute(&name, query.into())
        .await?;

    Ok(Json(posts.into_iter().map(PostResponseDto::from).collect()))
}

/// POST /subreddits/:name/posts - Submit a post
///
/// # Authentication
///
/// Requires valid JWT token in Authorization header.
///
/// # Responses
///
/// * 201 Created - Post created
/// * 400 Bad Request - Validation error
/// * 401 Unauthorized - Missing or invalid JWT token
/// * 404 Not Found - Subreddit does not exist
#[axum::debug_handler]
async fn create_post(
    JwtAuth(user): JwtAuth,
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(dto): Json<CreatePostDto>,
) -> Result<(StatusCode, Json<PostResponseDto>), ApiError> {
    let subreddit = state.get_subreddit_by_name_use_case.execute(&name).await?;

    let post = state
        .create_post_use_case
        .execute(dto.into_new_post(user.id, subreddit.id()))
        .await?;

    Ok((StatusCode::CREATED, Json(PostResponseDto::from(post))))
}
