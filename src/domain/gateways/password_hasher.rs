//! Password Hasher Gateway

use async_trait::async_trait;

use crate::shared::errors::DomainError;

/// One-way password hashing
///
/// Hashing is CPU-bound; implementations keep it off the async executor.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    /// Hash a plain-text password into a self-describing hash string
    ///
    /// # Errors
    ///
    /// Returns `DomainError::PasswordHash` if hashing fails.
    async fn hash(&self, password: &str) -> Result<String, DomainError>;

    /// Check a plain-text password against a stored hash
    async fn verify(&self, password: &str, hash: &str) -> bool;
}
