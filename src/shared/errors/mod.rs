//! Error Types
//!
//! Layered error types with HTTP status code mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use validator::ValidationErrors;

use crate::infrastructure::driving_adapters::api_rest::middleware::request_id;

/// Postgres SQLSTATE for unique constraint violations
const UNIQUE_VIOLATION: &str = "23505";

/// Domain-level errors representing business rule violations
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Password hashing failed: {0}")]
    PasswordHash(String),
}

/// Repository-level errors for data access failures
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Database(sqlx::Error),

    #[error("Unique constraint violated: {0}")]
    UniqueViolation(String),

    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Data mapping error: {0}")]
    Mapping(String),
}

impl From<sqlx::Error> for RepositoryError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.code().as_deref() == Some(UNIQUE_VIOLATION) {
                let constraint = db_err.constraint().unwrap_or("unknown").to_string();
                return Self::UniqueViolation(constraint);
            }
        }
        Self::Database(err)
    }
}

/// Use case-level errors for application logic failures
#[derive(Debug, Error)]
pub enum UseCaseError {
    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    #[error("{resource} with id '{id}' not found")]
    NotFound { resource: String, id: String },

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl UseCaseError {
    /// Shorthand for a missing resource
    pub fn not_found(resource: &str, id: impl ToString) -> Self {
        Self::NotFound {
            resource: resource.to_string(),
            id: id.to_string(),
        }
    }

    /// Get the HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::Domain(DomainError::Validation(_)) => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } | Self::Repository(RepositoryError::NotFound(_)) => StatusCode::NOT_FOUND,
            Self::Conflict(_) | Self::Repository(RepositoryError::UniqueViolation(_)) => StatusCode::CONFLICT,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::Domain(DomainError::InvalidState(_)) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Domain(DomainError::PasswordHash(_))
            | Self::Repository(RepositoryError::Database(_) | RepositoryError::Mapping(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the error code for this error
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) | Self::Domain(DomainError::Validation(_)) => "VALIDATION_ERROR",
            Self::NotFound { .. } | Self::Repository(RepositoryError::NotFound(_)) => "NOT_FOUND",
            Self::Conflict(_) | Self::Repository(RepositoryError::UniqueViolation(_)) => "CONFLICT",
            Self::Unauthorized(_) => "UNAUTHORIZED",
            Self::Forbidden(_) => "FORBIDDEN",
            Self::Domain(DomainError::InvalidState(_)) => "INVALID_STATE",
            Self::Domain(DomainError::PasswordHash(_))
            | Self::Repository(RepositoryError::Database(_) | RepositoryError::Mapping(_)) => "INTERNAL_ERROR",
        }
    }

    /// Message safe to show to API clients; constraint names stay server-side
    #[must_use]
    pub fn client_message(&self) -> String {
        match self {
            Self::Repository(RepositoryError::UniqueViolation(_)) => "Conflict: Resource already exists".to_string(),
            _ => self.to_string(),
        }
    }

    fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            Self::Validation(errors) | Self::Domain(DomainError::Validation(errors)) => Some(errors),
            _ => None,
        }
    }
}

/// API error response for HTTP responses
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    UseCase(#[from] UseCaseError),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Invalid UUID: {0}")]
    InvalidUuid(String),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

/// Error response body structure
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub error: ErrorDetail,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    pub timestamp: String,
}

impl ErrorResponse {
    /// Build a response body stamped with the current request id, if any
    #[must_use]
    pub fn new(code: &str, message: String, details: Option<Vec<FieldError>>) -> Self {
        Self {
            error: ErrorDetail {
                code: code.to_string(),
                message,
                details,
            },
            request_id: request_id::current(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error detail structure
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldError>>,
}

/// Field-level error for validation errors
#[derive(Debug, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Flatten validator errors into field/message pairs, sorted by field name
fn field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut fields: Vec<FieldError> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |e| FieldError {
                field: (*field).to_string(),
                message: e
                    .message
                    .as_ref()
                    .map_or_else(|| e.code.to_string(), ToString::to_string),
            })
        })
        .collect();
    fields.sort_by(|a, b| a.field.cmp(&b.field));
    fields
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ApiError::UseCase(uc_error) => {
                let status = uc_error.status_code();
                let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
                    tracing::error!(error = %uc_error, "Request failed with internal error");
                    "An unexpected error occurred".to_string()
                } else {
                    if let UseCaseError::Repository(RepositoryError::UniqueViolation(constraint)) = uc_error {
                        tracing::warn!(constraint = %constraint, "Write rejected by unique constraint");
                    }
                    uc_error.client_message()
                };
                let details = uc_error.validation_errors().map(field_errors);
                (status, ErrorResponse::new(uc_error.error_code(), message, details))
            }
            ApiError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new("BAD_REQUEST", msg.clone(), None),
            ),
            ApiError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                ErrorResponse::new("UNAUTHORIZED", "Unauthorized".to_string(), None),
            ),
            ApiError::InvalidUuid(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new("INVALID_UUID", msg.clone(), None),
            ),
            ApiError::Internal(err) => {
                tracing::error!(error = ?err, "Unhandled internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new("INTERNAL_ERROR", "An unexpected error occurred".to_string(), None),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<uuid::Error> for ApiError {
    fn from(err: uuid::Error) -> Self {
        ApiError::InvalidUuid(err.to_string())
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(err: ValidationErrors) -> Self {
        ApiError::UseCase(UseCaseError::Validation(err))
    }
}
