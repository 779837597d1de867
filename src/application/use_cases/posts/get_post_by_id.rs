//! Get Post By ID Use Case

use std::sync::Arc;

use crate::domain::gateways::PostRepository;
use crate::domain::models::{Post, PostId};
use crate::shared::errors::UseCaseError;

/// Use case for fetching a single post
pub struct GetPostByIdUseCase {
    post_repository: Arc<dyn PostRepository>,
}

impl GetPostByIdUseCase {
    /// Create a new GetPostByIdUseCase
    #[must_use]
    pub fn new(post_repository: Arc<dyn PostRepository>) -> Self {
        Self { post_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the post doesn't exist.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, id: PostId) -> Result<Post, UseCaseError> {
        tracing::debug!(post_id = %id, "Fetching post");

        self.post_repository.find_by_id(id).await?.ok_or_else(|| {
            tracing::warn!(post_id = %id, "Post not found");
            UseCaseError::not_found("Post", id)
        })
    }
}
