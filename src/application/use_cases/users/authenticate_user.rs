//! Authenticate User Use Case
//!
//! Verifies a username/password pair.

use std::sync::Arc;

use crate::domain::gateways::{PasswordHasher, UserRepository};
use crate::domain::models::User;
use crate::shared::errors::UseCaseError;

const INVALID_CREDENTIALS: &str = "Invalid username or password";

/// Use case for checking user credentials
pub struct AuthenticateUserUseCase {
    user_repository: Arc<dyn UserRepository>,
    password_hasher: Arc<dyn PasswordHasher>,
}

impl AuthenticateUserUseCase {
    /// Create a new AuthenticateUserUseCase
    #[must_use]
    pub fn new(user_repository: Arc<dyn UserRepository>, password_hasher: Arc<dyn PasswordHasher>) -> Self {
        Self {
            user_repository,
            password_hasher,
        }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Unauthorized` if the username is unknown or the password is wrong.
    /// Returns `UseCaseError::Forbidden` if the account has been deactivated.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, username: &str, password: &str) -> Result<User, UseCaseError> {
        let username = username.trim();
        tracing::debug!(username = %username, "Authenticating user");

        let Some(user) = self.user_repository.find_by_username(username).await? else {
            tracing::warn!(username = %username, "Login attempt for unknown user");
            return Err(UseCaseError::Unauthorized(INVALID_CREDENTIALS.to_string()));
        };

        if !self.password_hasher.verify(password, user.password_hash()).await {
            tracing::warn!(user_id = %user.id(), "Login attempt with wrong password");
            return Err(UseCaseError::Unauthorized(INVALID_CREDENTIALS.to_string()));
        }

        if !user.is_active() {
            tracing::warn!(user_id = %user.id(), "Login attempt for deactivated account");
            return Err(UseCaseError::Forbidden("Account is deactivated".to_string()));
        }

        tracing::info!(user_id = %user.id(), "User authenticated");
        Ok(user)
    }
}
