//! User Domain Model
//!
//! A registered account that authors posts and comments, casts votes and
//! subscribes to subreddits.

use chrono::{DateTime, Utc};
use validator::Validate;

use super::ids::UserId;
use super::validation::validate_not_blank;
use crate::shared::errors::DomainError;

/// Data required to register a new User
///
/// The password arrives here already hashed; the plain text never enters the domain.
#[derive(Debug, Clone, Validate)]
pub struct NewUser {
    #[validate(custom(function = "validate_not_blank", message = "Username is required"))]
    #[validate(length(min = 3, max = 50, message = "Username must be between 3 and 50 characters"))]
    pub username: String,

    #[validate(custom(function = "validate_not_blank", message = "Email is required"))]
    #[validate(email(message = "Email should be valid"))]
    pub email: String,

    pub password_hash: String,

    #[validate(length(max = 50, message = "First name must not exceed 50 characters"))]
    pub first_name: Option<String>,

    #[validate(length(max = 50, message = "Last name must not exceed 50 characters"))]
    pub last_name: Option<String>,

    pub bio: Option<String>,

    #[validate(length(max = 255, message = "Avatar URL must not exceed 255 characters"))]
    pub avatar_url: Option<String>,
}

impl NewUser {
    /// Trimmed username and trimmed, lowercased email
    #[must_use]
    pub fn normalized(self) -> Self {
        Self {
            username: self.username.trim().to_string(),
            email: self.email.trim().to_lowercase(),
            ..self
        }
    }
}

/// User domain entity
#[derive(Debug, Clone)]
pub struct User {
    id: UserId,
    username: String,
    email: String,
    password_hash: String,
    first_name: Option<String>,
    last_name: Option<String>,
    bio: Option<String>,
    avatar_url: Option<String>,
    is_active: bool,
    is_verified: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new active, unverified User
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if any field violates its constraints.
    pub fn new(data: NewUser) -> Result<Self, DomainError> {
        let data = data.normalized();
        data.validate()?;

        let now = Utc::now();
        Ok(Self {
            id: UserId::new(),
            username: data.username,
            email: data.email,
            password_hash: data.password_hash,
            first_name: data.first_name,
            last_name: data.last_name,
            bio: data.bio,
            avatar_url: data.avatar_url,
            is_active: true,
            is_verified: false,
            created_at: now,
            updated_at: now,
        })
    }

    /// Restore a User from persisted data
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn restore(
        id: UserId,
        username: String,
        email: String,
        password_hash: String,
        first_name: Option<String>,
        last_name: Option<String>,
        bio: Option<String>,
        avatar_url: Option<String>,
        is_active: bool,
        is_verified: bool,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            username,
            email,
            password_hash,
            first_name,
            last_name,
            bio,
            avatar_url,
            is_active,
            is_verified,
            created_at,
            updated_at,
        }
    }

    // Getters

    #[must_use]
    pub fn id(&self) -> UserId {
        self.id
    }

    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    #[must_use]
    pub fn first_name(&self) -> Option<&str> {
        self.first_name.as_deref()
    }

    #[must_use]
    pub fn last_name(&self) -> Option<&str> {
        self.last_name.as_deref()
    }

    #[must_use]
    pub fn bio(&self) -> Option<&str> {
        self.bio.as_deref()
    }

    #[must_use]
    pub fn avatar_url(&self) -> Option<&str> {
        self.avatar_url.as_deref()
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.is_active
    }

    #[must_use]
    pub fn is_verified(&self) -> bool {
        self.is_verified
    }

    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    #[must_use]
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user(username: &str, email: &str) -> NewUser {
        NewUser {
            username: username.to_string(),
            email: email.to_string(),
            password_hash: "$argon2id$v=19$stub".to_string(),
            first_name: None,
            last_name: None,
            bio: None,
            avatar_url: None,
        }
    }

    fn failed_fields(result: Result<User, DomainError>) -> Vec<String> {
        match result {
            Err(DomainError::Validation(errors)) => {
                errors.field_errors().keys().map(ToString::to_string).collect()
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_user_new_defaults() {
        let user = User::new(new_user("spez", "spez@freddit.com")).unwrap();

        assert_eq!(user.username(), "spez");
        assert!(user.is_active());
        assert!(!user.is_verified());
        assert_eq!(user.created_at(), user.updated_at());
    }

    #[test]
    fn test_blank_username_fails_validation() {
        assert_eq!(failed_fields(User::new(new_user("", "a@b.com"))), vec!["username"]);
        assert_eq!(failed_fields(User::new(new_user("    ", "a@b.com"))), vec!["username"]);
    }

    #[test]
    fn test_two_character_username_fails_length() {
        assert_eq!(failed_fields(User::new(new_user("ab", "a@b.com"))), vec!["username"]);
    }

    #[test]
    fn test_username_length_bounds() {
        assert!(User::new(new_user("abc", "a@b.com")).is_ok());
        assert!(User::new(new_user(&"a".repeat(50), "a@b.com")).is_ok());
        assert!(User::new(new_user(&"a".repeat(51), "a@b.com")).is_err());
    }

    #[test]
    fn test_well_formed_email_passes() {
        assert!(User::new(new_user("alice", "alice@example.org")).is_ok());
    }

    #[test]
    fn test_malformed_email_fails() {
        assert_eq!(failed_fields(User::new(new_user("alice", "not-an-email"))), vec!["email"]);
    }

    #[test]
    fn test_email_is_normalized() {
        let user = User::new(new_user(" alice ", " Alice@Example.ORG ")).unwrap();
        assert_eq!(user.username(), "alice");
        assert_eq!(user.email(), "alice@example.org");
    }

    #[test]
    fn test_first_name_too_long_fails() {
        let mut data = new_user("alice", "alice@example.org");
        data.first_name = Some("x".repeat(51));
        assert_eq!(failed_fields(User::new(data)), vec!["first_name"]);
    }
}
