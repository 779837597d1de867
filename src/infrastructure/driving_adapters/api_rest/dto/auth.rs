//! Authentication DTOs

use serde::{Deserialize, Serialize};
use validator::Validate;
use zeroize::ZeroizeOnDrop;

use super::user::UserResponseDto;
use crate::application::use_cases::users::RegisterUser;
use crate::domain::models::validation::validate_not_blank;

/// DTO for registering a new account
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserDto {
    pub username: String,

    pub email: String,

    #[validate(custom(function = "validate_not_blank", message = "Password is required"))]
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,

    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
}

impl From<RegisterUserDto> for RegisterUser {
    fn from(dto: RegisterUserDto) -> Self {
        Self {
            username: dto.username,
            email: dto.email,
            password: dto.password,
            first_name: dto.first_name,
            last_name: dto.last_name,
            bio: dto.bio,
            avatar_url: dto.avatar_url,
        }
    }
}

/// DTO for logging in
#[derive(Deserialize, Validate, ZeroizeOnDrop)]
#[serde(rename_all = "camelCase")]
pub struct LoginDto {
    #[validate(custom(function = "validate_not_blank", message = "Username is required"))]
    pub username: String,

    #[validate(custom(function = "validate_not_blank", message = "Password is required"))]
    pub password: String,
}

/// Access token issued on successful login
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponseDto {
    pub access_token: String,
    pub token_type: &'static str,
    pub expires_in: i64,
    pub user: UserResponseDto,
}

impl TokenResponseDto {
    #[must_use]
    pub fn bearer(access_token: String, expires_in: i64, user: UserResponseDto) -> Self {
        Self {
            access_token,
            token_type: "Bearer",
            expires_in,
            user,
        }
    }
}
