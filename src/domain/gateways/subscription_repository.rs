//! Subscription Repository Gateway

use async_trait::async_trait;

use crate::domain::models::{SubredditId, Subscription, UserId};
use crate::shared::errors::RepositoryError;

/// Repository trait for Subscription persistence operations
///
/// Creating and deleting keep `subreddits.subscriber_count` in step.
#[async_trait]
pub trait SubscriptionRepository: Send + Sync {
    /// Find the subscription of a user to a subreddit
    async fn find(
        &self,
        user_id: UserId,
        subreddit_id: SubredditId,
    ) -> Result<Option<Subscription>, RepositoryError>;

    /// Create a subscription and increment the subscriber count
    async fn create(&self, subscription: &Subscription) -> Result<Subscription, RepositoryError>;

    /// Delete a subscription and decrement the subscriber count
    async fn delete(&self, user_id: UserId, subreddit_id: SubredditId) -> Result<bool, RepositoryError>;
}
