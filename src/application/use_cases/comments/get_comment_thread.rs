//! Get Comment Thread Use Case
//!
//! Loads every comment of a post and arranges them into reply trees.

use std::sync::Arc;

use crate::domain::gateways::{CommentRepository, PostRepository};
use crate::domain::models::{CommentThread, PostId};
use crate::shared::errors::UseCaseError;

/// Use case for reading the threaded comments of a post
pub struct GetCommentThreadUseCase {
    comment_repository: Arc<dyn CommentRepository>,
    post_repository: Arc<dyn PostRepository>,
}

impl GetCommentThreadUseCase {
    /// Create a new GetCommentThreadUseCase
    #[must_use]
    pub fn new(comment_repository: Arc<dyn CommentRepository>, post_repository: Arc<dyn PostRepository>) -> Self {
        Self {
            comment_repository,
            post_repository,
        }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the post doesn't exist.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, post_id: PostId) -> Result<Vec<CommentThread>, UseCaseError> {
        tracing::debug!(post_id = %post_id, "Loading comment thread");

        if self.post_repository.find_by_id(post_id).await?.is_none() {
            return Err(UseCaseError::not_found("Post", post_id));
        }

        let comments = self.comment_repository.list_by_post(post_id).await?;
        let total = comments.len();
        let threads = CommentThread::build(comments);

        tracing::debug!(post_id = %post_id, comments = total, roots = threads.len(), "Comment thread built");
        Ok(threads)
    }
}
