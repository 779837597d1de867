//! Argon2 Password Hasher
//!
//! Argon2id with a random salt per password, stored in PHC string format.
//! Both operations run on tokio's blocking pool.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString};
use argon2::Argon2;
use async_trait::async_trait;
use zeroize::Zeroizing;

use crate::domain::gateways::PasswordHasher;
use crate::shared::errors::DomainError;

/// Argon2id implementation of the PasswordHasher gateway
#[derive(Debug, Default, Clone, Copy)]
pub struct Argon2PasswordHasher;

impl Argon2PasswordHasher {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

fn hash_blocking(password: &str) -> Result<String, DomainError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| DomainError::PasswordHash(e.to_string()))
}

fn verify_blocking(password: &str, hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(hash) else {
        tracing::warn!("Stored password hash is not in PHC format");
        return false;
    };
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

#[async_trait]
impl PasswordHasher for Argon2PasswordHasher {
    async fn hash(&self, password: &str) -> Result<String, DomainError> {
        let password = Zeroizing::new(password.to_owned());
        tokio::task::spawn_blocking(move || hash_blocking(&password))
            .await
            .map_err(|e| DomainError::PasswordHash(format!("hashing task failed: {e}")))?
    }

    async fn verify(&self, password: &str, hash: &str) -> bool {
        let password = Zeroizing::new(password.to_owned());
        let hash = hash.to_owned();
        match tokio::task::spawn_blocking(move || verify_blocking(&password, &hash)).await {
            Ok(matches) => matches,
            Err(e) => {
                tracing::error!(error = %e, "Password verification task failed");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_hash_and_verify() {
        let hasher = Argon2PasswordHasher::new();
        let hash = hasher.hash("hunter22").await.unwrap();

        assert!(hash.starts_with("$argon2id$"));
        assert!(hasher.verify("hunter22", &hash).await);
        assert!(!hasher.verify("hunter23", &hash).await);
    }

    #[tokio::test]
    async fn test_same_password_gets_distinct_salts() {
        let hasher = Argon2PasswordHasher::new();
        assert_ne!(hasher.hash("hunter22").await.unwrap(), hasher.hash("hunter22").await.unwrap());
    }

    #[tokio::test]
    async fn test_malformed_hash_never_verifies() {
        assert!(!Argon2PasswordHasher::new().verify("hunter22", "plain-text").await);
    }
}
