//! List Subreddit Posts Use Case
//!
//! Lists the posts of a subreddit: stickied first, then newest first.

use std::sync::Arc;

use crate::domain::gateways::{PostRepository, SubredditRepository};
use crate::domain::models::{Page, Post};
use crate::shared::errors::UseCaseError;

/// Use case for listing the posts of one subreddit
pub struct ListSubredditPostsUseCase {
    post_repository: Arc<dyn PostRepository>,
    subreddit_repository: Arc<dyn SubredditRepository>,
}

impl ListSubredditPostsUseCase {
    /// Create a new ListSubredditPostsUseCase
    #[must_use]
    pub fn new(post_repository: Arc<dyn PostRepository>, subreddit_repository: Arc<dyn SubredditRepository>) -> Self {
        Self {
            post_repository,
            subreddit_repository,
        }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the subreddit doesn't exist.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, subreddit_name: &str, page: Page) -> Result<Vec<Post>, UseCaseError> {
        tracing::debug!(subreddit = %subreddit_name, limit = page.limit(), offset = page.offset(), "Listing posts");

        let subreddit = self
            .subreddit_repository
            .find_by_name(subreddit_name)
            .await?
            .ok_or_else(|| UseCaseError::not_found("Subreddit", subreddit_name))?;

        let posts = self.post_repository.list_by_subreddit(subreddit.id(), page).await?;

        tracing::debug!(subreddit_id = %subreddit.id(), count = posts.len(), "Posts retrieved");
        Ok(posts)
    }
}
