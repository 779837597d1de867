//! Subscribe Use Case
//!
//! Subscribes a user to a subreddit and bumps its subscriber count.

use std::sync::Arc;

use crate::domain::gateways::{SubredditRepository, SubscriptionRepository};
use crate::domain::models::{Subscription, UserId};
use crate::shared::errors::{RepositoryError, UseCaseError};

/// Use case for subscribing to a subreddit
pub struct SubscribeUseCase {
    subscription_repository: Arc<dyn SubscriptionRepository>,
    subreddit_repository: Arc<dyn SubredditRepository>,
}

impl SubscribeUseCase {
    /// Create a new SubscribeUseCase
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
    /// Returns `UseCaseError::NotFound` if the subreddit doesn't exist.
    /// Returns `UseCaseError::Conflict` if the user is already subscribed.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, user_id: UserId, subreddit_name: &str) -> Result<Subscription, UseCaseError> {
        tracing::info!(user_id = %user_id, subreddit = %subreddit_name, "Subscribing to subreddit");

        let subreddit = self
            .subreddit_repository
            .find_by_name(subreddit_name)
            .await?
            .ok_or_else(|| UseCaseError::not_found("Subreddit", subreddit_name))?;

        let already_subscribed = || {
            UseCaseError::Conflict(format!("Already subscribed to '{}'", subreddit.name()))
        };

        if self
            .subscription_repository
            .find(user_id, subreddit.id())
            .await?
            .is_some()
        {
            return Err(already_subscribed());
        }

        let subscription = Subscription::new(user_id, subreddit.id());
        let created = match self.subscription_repository.create(&subscription).await {
            Ok(created) => created,
            Err(RepositoryError::UniqueViolation(_)) => return Err(already_subscribed()),
            Err(err) => return Err(err.into()),
        };

        tracing::info!(subscription_id = %created.id(), subreddit_id = %subreddit.id(), "Subscribed successfully");
        Ok(created)
    }
}
