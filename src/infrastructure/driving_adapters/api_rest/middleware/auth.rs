//! JWT Authentication Middleware
//!
//! Issues access tokens at login and validates them on protected routes.

use std::sync::Arc;

use axum::{
    async_trait,
    extract::{FromRequestParts, State},
    http::{header::AUTHORIZATION, request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::domain::models::{User, UserId};
use crate::infrastructure::driven_adapters::config::{AppConfig, JwtConfig};
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::{ApiError, ErrorResponse};

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    pub username: String,
    pub email: String,
    /// Issued at timestamp
    pub iat: i64,
    /// Expiration timestamp
    pub exp: i64,
}

/// Authenticated user extracted from JWT
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub id: UserId,
    pub username: String,
    pub email: String,
}

impl TryFrom<Claims> for AuthenticatedUser {
    type Error = uuid::Error;

    fn try_from(claims: Claims) -> Result<Self, Self::Error> {
        Ok(Self {
            id: UserId::try_from(claims.sub.as_str())?,
            username: claims.username,
            email: claims.email,
        })
    }
}

/// Sign an HS256 access token for a user; returns the token and its lifetime in seconds
///
/// # Errors
///
/// Returns `ApiError::Internal` if the token cannot be encoded.
pub fn issue_token(config: &JwtConfig, user: &User) -> Result<(String, i64), ApiError> {
    let now = Utc::now().timestamp();
    let claims = Claims {
        sub: user.id().to_string(),
        username: user.username().to_string(),
        email: user.email().to_string(),
        iat: now,
        exp: now + config.expires_in_secs,
    };

    let token = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(config.secret.expose().as_bytes()),
    )
    .map_err(|e| ApiError::Internal(anyhow::Error::new(e).context("failed to sign access token")))?;

    Ok((token, config.expires_in_secs))
}

/// JWT authentication extractor
pub struct JwtAuth(pub AuthenticatedUser);

/// Error type for authentication failures
pub struct AuthError {
    message: String,
}

impl AuthError {
    fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let body = ErrorResponse::new("UNAUTHORIZED", self.message, None);
        (StatusCode::UNAUTHORIZED, Json(body)).into_response()
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for JwtAuth
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let config = parts
            .extensions
            .get::<Arc<AppConfig>>()
            .cloned()
            .ok_or_else(|| AuthError::new("Configuration not available"))?;

        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .ok_or_else(|| AuthError::new("Missing Authorization header"))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AuthError::new("Invalid Authorization header format"))?;

        // Pin the algorithm so a token cannot pick its own
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 60;

        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(config.jwt.secret.expose().as_bytes()),
            &validation,
        )
        .map_err(|e| {
            tracing::debug!(error = %e, "Rejected access token");
            AuthError::new("Invalid or expired token")
        })?;

        let user = AuthenticatedUser::try_from(token_data.claims)
            .map_err(|_| AuthError::new("Invalid or expired token"))?;

        Ok(JwtAuth(user))
    }
}

/// Middleware layer that adds config to request extensions for JWT validation
pub async fn add_config_extension(
    State(state): State<AppState>,
    mut request: axum::http::Request<axum::body::Body>,
    next: axum::middleware::Next,
) -> Response {
    request.extensions_mut().insert(state.config.clone());
    next.run(request).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::NewUser;
    use crate::infrastructure::driven_adapters::config::SecretString;

    fn jwt_config(expires_in_secs: i64) -> JwtConfig {
        JwtConfig {
            secret: SecretString::new("unit-test-secret-with-at-least-32-bytes"),
            expires_in_secs,
        }
    }

    fn user() -> User {
        User::new(NewUser {
            username: "ferris".to_string(),
            email: "ferris@freddit.test".to_string(),
            password_hash: "hash".to_string(),
            first_name: None,
            last_name: None,
            bio: None,
            avatar_url: None,
        })
        .unwrap()
    }

    fn decode_with(config: &JwtConfig, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        decode::<Claims>(
            token,
            &DecodingKey::from_secret(config.secret.expose().as_bytes()),
            &Validation::new(Algorithm::HS256),
        )
        .map(|data| data.claims)
    }

    #[test]
    fn test_issued_token_carries_user_claims() {
        let config = jwt_config(3600);
        let user = user();

        let (token, expires_in) = issue_token(&config, &user).unwrap();
        let claims = decode_with(&config, &token).unwrap();

        assert_eq!(expires_in, 3600);
        assert_eq!(claims.sub, user.id().to_string());
        assert_eq!(claims.username, "ferris");
        assert_eq!(claims.exp - claims.iat, 3600);

        let authenticated = AuthenticatedUser::try_from(claims).unwrap();
        assert_eq!(authenticated.id, user.id());
    }

    #[test]
    fn test_token_signed_with_other_secret_is_rejected() {
        let (token, _) = issue_token(&jwt_config(3600), &user()).unwrap();
        let other = JwtConfig {
            secret: SecretString::new("a-completely-different-secret-value"),
            expires_in_secs: 3600,
        };

        assert!(decode_with(&other, &token).is_err());
    }
}
