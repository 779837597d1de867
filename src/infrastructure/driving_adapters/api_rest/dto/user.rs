//! User DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::domain::models::User;

/// Public view of a user; the password hash is never serialized
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponseDto {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub is_active: bool,
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponseDto {
    fn from(user: User) -> Self {
        Self {
            id: *user.id().as_uuid(),
            username: user.username().to_string(),
            email: user.email().to_string(),
            first_name: user.first_name().map(str::to_string),
            last_name: user.last_name().map(str::to_string),
            bio: user.bio().map(str::to_string),
            avatar_url: user.avatar_url().map(str::to_string),
            is_active: user.is_active(),
            is_verified: user.is_verified(),
            created_at: user.created_at(),
            updated_at: user.updated_at(),
        }
    }
}
