//! Comment Repository Gateway

use async_trait::async_trait;

use crate::domain::models::{Comment, CommentId, PostId};
use crate::shared::errors::RepositoryError;

/// Repository trait for Comment persistence operations
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Find a comment by its ID
    async fn find_by_id(&self, id: CommentId) -> Result<Option<Comment>, RepositoryError>;

    /// All comments of a post, oldest first
    async fn list_by_post(&self, post_id: PostId) -> Result<Vec<Comment>, RepositoryError>;

    /// Create a comment and increment the post's comment count atomically
    async fn create(&self, comment: &Comment) -> Result<Comment, RepositoryError>;

    /// Soft delete a comment (sets is_deleted=true)
    async fn soft_delete(&self, id: CommentId) -> Result<bool, RepositoryError>;
}
