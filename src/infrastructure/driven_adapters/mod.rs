//! Driven Adapters
//!
//! Implementations of gateway traits for external systems:
//! - PostgreSQL repositories
//! - Password hashing
//! - Configuration

pub mod config;
pub mod database;
pub mod password_hasher;
pub mod postgres;

pub use config::AppConfig;
pub use password_hasher::Argon2PasswordHasher;
pub use postgres::{
    PostgresCommentRepository, PostgresPostRepository, PostgresSubredditRepository,
    PostgresSubscriptionRepository, PostgresUserRepository, PostgresVoteRepository,
};
