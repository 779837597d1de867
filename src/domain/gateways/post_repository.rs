//! Post Repository Gateway

use async_trait::async_trait;

use crate::domain::models::{Page, Post, PostId, SubredditId};
use crate::shared::errors::RepositoryError;

/// Repository trait for Post persistence operations
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Find a post by its ID
    async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, RepositoryError>;

    /// List posts of a subreddit, stickied first, then newest first
    async fn list_by_subreddit(
        &self,
        subreddit_id: SubredditId,
        page: Page,
    ) -> Result<Vec<Post>, RepositoryError>;

    /// Create a new post
    async fn create(&self, post: &Post) -> Result<Post, RepositoryError>;
}
