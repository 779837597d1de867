//! User Repository Gateway

use async_trait::async_trait;

use crate::domain::models::{User, UserId};
use crate::shared::errors::RepositoryError;

/// Repository trait for User persistence operations
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by its ID
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, RepositoryError>;

    /// Find a user by exact username
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError>;

    /// Check whether a username is taken
    async fn exists_by_username(&self, username: &str) -> Result<bool, RepositoryError>;

    /// Check whether an email is taken
    async fn exists_by_email(&self, email: &str) -> Result<bool, RepositoryError>;

    /// Create a new user
    async fn create(&self, user: &User) -> Result<User, RepositoryError>;
}
