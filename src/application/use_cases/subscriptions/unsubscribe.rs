//! Unsubscribe Use Case

use std::sync::Arc;

use crate::domain::gateways::{SubredditRepository, SubscriptionRepository};
use crate::domain::models::UserId;
use crate::shared::errors::UseCaseError;

/// Use case for leaving a subreddit
pub struct UnsubscribeUseCase {
    subscription_repository: Arc<dyn SubscriptionRepository>,
    subreddit_repository: Arc<dyn SubredditRepository>,
}

impl UnsubscribeUseCase {
    /// Create a new UnsubscribeUseCase
    #[must_use]
    pub fn new(
        subscription_repository: Arc<dyn SubscriptionRepository>,
        subreddit_repository: Arc<dyn SubredditRepository>,
    ) -> Self {
        Self {
            subscription_repository,
            subreddit_repository,
        }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the subreddit or the subscription doesn't exist.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, user_id: UserId, subreddit_name: &str) -> Result<(), UseCaseError> {
        tracing::info!(user_id = %user_id, subreddit = %subreddit_name, "Unsubscribing from subreddit");

        let subreddit = self
            .subreddit_repository
            .find_by_name(subreddit_name)
            .await?
            .ok_or_else(|| UseCaseError::not_found("Subreddit", subreddit_name))?;

        if !self.subscription_repository.delete(user_id, subreddit.id()).await? {
            tracing::warn!(user_id = %user_id, subreddit_id = %subreddit.id(), "Subscription not found");
            return Err(UseCaseError::not_found(
                "Subscription",
                format!("{}:{}", user_id, subreddit.id()),
            ));
        }

        tracing::info!(user_id = %user_id, subreddit_id = %subreddit.id(), "Unsubscribed successfully");
        Ok(())
    }
}
