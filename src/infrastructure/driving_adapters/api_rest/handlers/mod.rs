//! HTTP Handlers
//!
//! One module per resource; each exposes a `router()` nested by
//! [`super::router`].

pub mod auth;
pub mod comments;
pub mod posts;
pub mod public;
pub mod subreddits;
pub mod users;

use uuid::Uuid;

use crate::shared::errors::ApiError;

/// Parse a path segment into a typed entity id
fn parse_id<T: From<Uuid>>(raw: &str) -> Result<T, ApiError> {
    Ok(T::from(Uuid::parse_str(raw)?))
}
