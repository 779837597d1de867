//! Authentication Handlers
//!
//! Account registration and login. Both endpoints are public.

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use validator::Validate;

use crate::infrastructure::driving_adapters::api_rest::dto::{
    LoginDto, RegisterUserDto, TokenResponseDto, UserResponseDto,
};
use crate::infrastructure::driving_adapters::api_rest::middleware::issue_token;
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

/// Create the router for authentication endpoints
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}

/// POST /auth/register - Create an account
///
/// # Responses
///
/// * 201 Created - Account created
/// * 400 Bad Request - Validation error
/// * 409 Conflict - Username or email already taken
#[axum::debug_handler]
async fn register(
    State(state): State<AppState>,
    Json(dto): Json<RegisterUserDto>,
) -> Result<(StatusCode, Json<UserResponseDto>), ApiError> {
    dto.validate()?;

    let user = state.register_user_use_case.execute(dto.into()).await?;

    Ok((StatusCode::CREATED, Json(UserResponseDto::from(user))))
}

/// POST /auth/login - Exchange credentials for a bearer token
///
/// # Responses
///
/// * 200 OK - Token issued
/// * 400 Bad Request - Blank username or password
/// * 401 Unauthorized - Wrong credentials
/// * 403 Forbidden - Account deactivated
#[axum::debug_handler]
async fn login(
    State(state): State<AppState>,
    Json(dto): Json<LoginDto>,
) -> Result<Json<TokenResponseDto>, ApiError> {
    dto.validate()?;

    let user = state
        .authenticate_user_use_case
        .execute(&dto.username, &dto.password)
        .await?;
    let (token, expires_in) = issue_token(&state.config.jwt, &user)?;

    Ok(Json(TokenResponseDto::bearer(token, expires_in, UserResponseDto::from(user))))
}
