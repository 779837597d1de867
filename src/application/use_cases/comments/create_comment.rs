//! Create Comment Use Case
//!
//! Adds a comment to a post, optionally as a reply to another comment.

use std::sync::Arc;

use crate::domain::gateways::{CommentRepository, PostRepository};
use crate::domain::models::{Comment, NewComment};
use crate::shared::errors::{DomainError, UseCaseError};

/// Use case for commenting on a post
pub struct CreateCommentUseCase {
    comment_repository: Arc<dyn CommentRepository>,
    post_repository: Arc<dyn PostRepository>,
}

impl CreateCommentUseCase {
    /// Create a new CreateCommentUseCase
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
    /// Returns `UseCaseError::Domain` if the content is blank, the post is locked,
    /// or the parent comment is deleted or belongs to another post.
    /// Returns `UseCaseError::NotFound` if the post or parent comment doesn't exist.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, data: NewComment) -> Result<Comment, UseCaseError> {
        tracing::info!(
            post_id = %data.post_id,
            author_id = %data.author_id,
            parent_comment_id = ?data.parent_comment_id,
            "Creating new comment"
        );

        let comment = Comment::new(data)?;

        let post = self
            .post_repository
            .find_by_id(comment.post_id())
            .await?
            .ok_or_else(|| UseCaseError::not_found("Post", comment.post_id()))?;

        if post.is_locked() {
            tracing::warn!(post_id = %post.id(), "Rejected comment on locked post");
            return Err(DomainError::InvalidState("Post is locked".to_string()).into());
        }

        if let Some(parent_id) = comment.parent_comment_id() {
            let parent = self
                .comment_repository
                .find_by_id(parent_id)
                .await?
                .ok_or_else(|| UseCaseError::not_found("Comment", parent_id))?;

            if parent.post_id() != post.id() {
                return Err(DomainError::InvalidState(
                    "Parent comment belongs to a different post".to_string(),
                )
                .into());
            }
            if parent.is_deleted() {
                return Err(DomainError::InvalidState("Cannot reply to a deleted comment".to_string()).into());
            }
        }

        let created = self.comment_repository.create(&comment).await?;

        tracing::info!(comment_id = %created.id(), post_id = %created.post_id(), "Comment created successfully");
        Ok(created)
    }
}
