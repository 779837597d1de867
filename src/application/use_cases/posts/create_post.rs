//! Create Post Use Case
//!
//! Submits a new post to an existing subreddit.

use std::sync::Arc;

use crate::domain::gateways::{PostRepository, SubredditRepository};
use crate::domain::models::{NewPost, Post};
use crate::shared::errors::UseCaseError;

/// Use case for creating a new post
pub struct CreatePostUseCase {
    post_repository: Arc<dyn PostRepository>,
    subreddit_repository: Arc<dyn SubredditRepository>,
}

impl CreatePostUseCase {
    /// Create a new CreatePostUseCase
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
    /// Returns `UseCaseError::Domain` if the post data fails validation.
    /// Returns `UseCaseError::NotFound` if the subreddit doesn't exist.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, data: NewPost) -> Result<Post, UseCaseError> {
        tracing::info!(
            subreddit_id = %data.subreddit_id,
            author_id = %data.author_id,
            post_type = %data.post_type,
            "Creating new post"
        );

        let post = Post::new(data)?;

        if self
            .subreddit_repository
            .find_by_id(post.subreddit_id())
            .await?
            .is_none()
        {
            tracing::warn!(subreddit_id = %post.subreddit_id(), "Subreddit not found for new post");
            return Err(UseCaseError::not_found("Subreddit", post.subreddit_id()));
        }

        let created = self.post_repository.create(&post).await?;

        tracing::info!(post_id = %created.id(), "Post created successfully");
        Ok(created)
    }
}
