//! Subreddit Repository Gateway

use async_trait::async_trait;

use crate::domain::models::{Page, Subreddit, SubredditId};
use crate::shared::errors::RepositoryError;

/// Repository trait for Subreddit persistence operations
#[async_trait]
pub trait SubredditRepository: Send + Sync {
    /// Find a subreddit by its ID
    async fn find_by_id(&self, id: SubredditId) -> Result<Option<Subreddit>, RepositoryError>;

    /// Find a subreddit by name, ignoring case
    async fn find_by_name(&self, name: &str) -> Result<Option<Subreddit>, RepositoryError>;

    /// List subreddits, most subscribed first, then by name ascending
    async fn list(&self, page: Page) -> Result<Vec<Subreddit>, RepositoryError>;

    /// Check whether a name is taken, ignoring case
    async fn exists_by_name(&self, name: &str) -> Result<bool, RepositoryError>;

    /// Create a new subreddit
    async fn create(&self, subreddit: &Subreddit) -> Result<Subreddit, RepositoryError>;
}
