//! Create Subreddit Use Case
//!
//! Creates a new community owned by an existing user.

use std::sync::Arc;

use crate::domain::gateways::{SubredditRepository, UserRepository};
use crate::domain::models::{NewSubreddit, Subreddit};
use crate::shared::errors::UseCaseError;

/// Use case for creating a new subreddit
pub struct CreateSubredditUseCase {
    subreddit_repository: Arc<dyn SubredditRepository>,
    user_repository: Arc<dyn UserRepository>,
}

impl CreateSubredditUseCase {
    /// Create a new CreateSubredditUseCase
    #[must_use]
    pub fn new(
        subreddit_repository: Arc<dyn SubredditRepository>,
        user_repository: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            subreddit_repository,
            user_repository,
        }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Domain` if the subreddit data fails validation.
    /// Returns `UseCaseError::NotFound` if the creator doesn't exist.
    /// Returns `UseCaseError::Conflict` if the name is already taken (case-insensitive).
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, data: NewSubreddit) -> Result<Subreddit, UseCaseError> {
        tracing::info!(name = %data.name, created_by = %data.created_by, "Creating new subreddit");

        let subreddit = Subreddit::new(data)?;

        if self
            .user_repository
            .find_by_id(subreddit.created_by())
            .await?
            .is_none()
        {
            return Err(UseCaseError::not_found("User", subreddit.created_by()));
        }

        if self.subreddit_repository.exists_by_name(subreddit.name()).await? {
            tracing::warn!(name = %subreddit.name(), "Subreddit name already taken");
            return Err(UseCaseError::Conflict(format!(
                "Subreddit '{}' already exists",
                subreddit.name()
            )));
        }

        let created = self.subreddit_repository.create(&subreddit).await?;

        tracing::info!(subreddit_id = %created.id(), name = %created.name(), "Subreddit created successfully");
        Ok(created)
    }
}
