//! Delete Comment Use Case (Soft Delete)
//!
//! Hides a comment's content while keeping its replies in place.

use std::sync::Arc;

use crate::domain::gateways::CommentRepository;
use crate::domain::models::{CommentId, UserId};
use crate::shared::errors::UseCaseError;

/// Use case for soft deleting a comment
pub struct DeleteCommentUseCase {
    comment_repository: Arc<dyn CommentRepository>,
}

impl DeleteCommentUseCase {
    /// Create a new DeleteCommentUseCase
    #[must_use]
    pub fn new(comment_repository: Arc<dyn CommentRepository>) -> Self {
        Self { comment_repository }
    }

    /// Execute the use case. Deleting an already deleted comment succeeds.
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the comment doesn't exist.
    /// Returns `UseCaseError::Forbidden` if the requester is not the author.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, id: CommentId, requested_by: UserId) -> Result<(), UseCaseError> {
        tracing::info!(comment_id = %id, requested_by = %requested_by, "Soft deleting comment");

        let comment = self
            .comment_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| UseCaseError::not_found("Comment", id))?;

        if comment.author_id() != requested_by {
            tracing::warn!(comment_id = %id, requested_by = %requested_by, "Delete denied: not the author");
            return Err(UseCaseError::Forbidden(
                "Only the author can delete this comment".to_string(),
            ));
        }

        if comment.is_deleted() {
            return Ok(());
        }

        if !self.comment_repository.soft_delete(id).await? {
            return Err(UseCaseError::not_found("Comment", id));
        }

        tracing::info!(comment_id = %id, "Comment soft deleted successfully");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::use_cases::test_support::InMemoryStore;

    fn seeded() -> (Arc<InMemoryStore>, UserId, CommentId) {
        let store = Arc::new(InMemoryStore::default());
        let author = store.add_user("ferris").id();
        let rust = store.add_subreddit("rust", author);
        let post = store.add_post(author, rust.id(), "Lifetimes");
        let comment = store.add_comment(author, post.id(), None);
        (store, author, comment.id())
    }

    #[tokio::test]
    async fn should_soft_delete_own_comment() {
        let (store, author, comment_id) = seeded();

        DeleteCommentUseCase::new(store.clone())
            .execute(comment_id, author)
            .await
            .unwrap();

        assert!(store.comment(comment_id).unwrap().is_deleted());
    }

    #[tokio::test]
    async fn should_be_idempotent() {
        let (store, author, comment_id) = seeded();
        let use_case = DeleteCommentUseCase::new(store.clone());

        use_case.execute(comment_id, author).await.unwrap();
        assert!(use_case.execute(comment_id, author).await.is_ok());
    }

    #[tokio::test]
    async fn should_forbid_deleting_someone_elses_comment() {
        let (store, _author, comment_id) = seeded();
        let stranger = store.add_user("stranger").id();

        let result = DeleteCommentUseCase::new(store.clone()).execute(comment_id, stranger).await;

        assert!(matches!(result, Err(UseCaseError::Forbidden(_))));
        assert!(!store.comment(comment_id).unwrap().is_deleted());
    }

    #[tokio::test]
    async fn should_return_not_found_for_missing_comment() {
        let (store, author, _) = seeded();

        let result = DeleteCommentUseCase::new(store).execute(CommentId::new(), author).await;

        assert!(matches!(result, Err(UseCaseError::NotFound { .. })));
    }
}
