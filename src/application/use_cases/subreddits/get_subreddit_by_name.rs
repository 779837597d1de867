//! Get Subreddit By Name Use Case

use std::sync::Arc;

use crate::domain::gateways::SubredditRepository;
use crate::domain::models::Subreddit;
use crate::shared::errors::UseCaseError;

/// Use case for fetching a subreddit by its (case-insensitive) name
pub struct GetSubredditByNameUseCase {
    subreddit_repository: Arc<dyn SubredditRepository>,
}

impl GetSubredditByNameUseCase {
    /// Create a new GetSubredditByNameUseCase
    #[must_use]
    pub fn new(subreddit_repository: Arc<dyn SubredditRepository>) -> Self {
        Self { subreddit_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if no subreddit has this name.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, name: &str) -> Result<Subreddit, UseCaseError> {
        tracing::debug!(name = %name, "Fetching subreddit");

        self.subreddit_repository
            .find_by_name(name)
            .await?
            .ok_or_else(|| UseCaseError::not_found("Subreddit", name))
    }
}
