//! Register User Use Case
//!
//! Creates a new account with a hashed password.

use std::sync::Arc;

use validator::Validate;
use zeroize::Zeroizing;

use crate::domain::gateways::{PasswordHasher, UserRepository};
use crate::domain::models::{NewUser, User};
use crate::shared::errors::{DomainError, UseCaseError};

/// Registration input; `password` is plain text and is wiped when the command is consumed
#[derive(Debug, Clone)]
pub struct RegisterUser {
    pub username: String,
    pub email: String,
    pub password: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
}

/// Use case for registering a new user
pub struct RegisterUserUseCase {
    user_repository: Arc<dyn UserRepository>,
    password_hasher: Arc<dyn PasswordHasher>,
}

impl RegisterUserUseCase {
    /// Create a new RegisterUserUseCase
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
    /// Returns `UseCaseError::Domain` if the user data fails validation.
    /// Returns `UseCaseError::Conflict` if the username or email is already taken.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, command: RegisterUser) -> Result<User, UseCaseError> {
        let RegisterUser {
            username,
            email,
            password,
            first_name,
            last_name,
            bio,
            avatar_url,
        } = command;

        let password = Zeroizing::new(password);
        tracing::info!(username = %username, "Registering new user");

        // Hash only once the registration can succeed
        let mut new_user = NewUser {
            username,
            email,
            password_hash: String::new(),
            first_name,
            last_name,
            bio,
            avatar_url,
        }
        .normalized();
        new_user.validate().map_err(DomainError::from)?;

        if self.user_repository.exists_by_username(&new_user.username).await? {
            tracing::warn!(username = %new_user.username, "Username already taken");
            return Err(UseCaseError::Conflict(format!(
                "Username '{}' is already taken",
                new_user.username
            )));
        }

        if self.user_repository.exists_by_email(&new_user.email).await? {
            tracing::warn!("Email already registered");
            return Err(UseCaseError::Conflict("Email is already registered".to_string()));
        }

        new_user.password_hash = self.password_hasher.hash(&password).await?;

        let user = User::new(new_user)?;
        let created = self.user_repository.create(&user).await?;

        tracing::info!(user_id = %created.id(), "User registered successfully");
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::use_cases::test_support::{InMemoryStore, PlainPasswordHasher};

    fn command(username: &str, email: &str) -> RegisterUser {
        RegisterUser {
            username: username.to_string(),
            email: email.to_string(),
            password: "hunter22".to_string(),
            first_name: Some("Ada".to_string()),
            last_name: None,
            bio: None,
            avatar_url: None,
        }
    }

    fn use_case(store: &Arc<InMemoryStore>) -> RegisterUserUseCase {
        RegisterUserUseCase::new(store.clone(), Arc::new(PlainPasswordHasher::default()))
    }

    #[tokio::test]
    async fn should_register_user_with_hashed_password() {
        let store = Arc::new(InMemoryStore::default());

        let user = use_case(&store).execute(command("ada", "ada@example.com")).await.unwrap();

        assert_eq!(user.username(), "ada");
        assert_eq!(user.password_hash(), "hashed:hunter22");
        assert!(user.is_active());
        assert_eq!(store.users.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn should_return_conflict_when_username_taken() {
        let store = Arc::new(InMemoryStore::default());
        store.add_user("ada");

        let result = use_case(&store).execute(command("ada", "other@example.com")).await;

        assert!(matches!(result, Err(UseCaseError::Conflict(_))));
    }

    #[tokio::test]
    async fn should_return_conflict_when_email_taken() {
        let store = Arc::new(InMemoryStore::default());
        store.add_user("ada");

        let result = use_case(&store).execute(command("lovelace", "ADA@freddit.test")).await;

        assert!(matches!(result, Err(UseCaseError::Conflict(_))));
    }

    #[tokio::test]
    async fn should_reject_invalid_username() {
        let store = Arc::new(InMemoryStore::default());

        let result = use_case(&store).execute(command("ab", "ab@example.com")).await;

        assert!(matches!(result, Err(UseCaseError::Domain(DomainError::Validation(_)))));
        assert!(store.users.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_not_hash_password_for_rejected_registrations() {
        let store = Arc::new(InMemoryStore::default());
        store.add_user("ada");
        let hasher = Arc::new(PlainPasswordHasher::default());
        let use_case = RegisterUserUseCase::new(store.clone(), hasher.clone());

        let invalid = use_case.execute(command("ab", "ab@example.com")).await;
        assert!(matches!(invalid, Err(UseCaseError::Domain(DomainError::Validation(_)))));

        let bad_email = use_case.execute(command("grace", "not-an-email")).await;
        assert!(matches!(bad_email, Err(UseCaseError::Domain(DomainError::Validation(_)))));

        let taken = use_case.execute(command("ada", "other@example.com")).await;
        assert!(matches!(taken, Err(UseCaseError::Conflict(_))));

        assert_eq!(hasher.hash_calls(), 0);

        use_case.execute(command("grace", "grace@example.com")).await.unwrap();
        assert_eq!(hasher.hash_calls(), 1);
    }

    #[tokio::test]
    async fn should_propagate_repository_failure() {
        let store = Arc::new(InMemoryStore::failing());

        let result = use_case(&store).execute(command("ada", "ada@example.com")).await;

        assert!(matches!(result, Err(UseCaseError::Repository(_))));
    }
}
