//! Subscription Domain Model
//!
//! Join record linking a User to a Subreddit.

use chrono::{DateTime, Utc};

use super::ids::{SubredditId, SubscriptionId, UserId};

/// Subscription domain entity
#[derive(Debug, Clone)]
pub struct Subscription {
    id: SubscriptionId,
    user_id: UserId,
    subreddit_id: SubredditId,
    created_at: DateTime<Utc>,
}

impl Subscription {
    #[must_use]
    pub fn new(user_id: UserId, subreddit_id: SubredditId) -> Self {
        Self {
            id: SubscriptionId::new(),
            user_id,
            subreddit_id,
            created_at: Utc::now(),
        }
    }

    /// Restore a Subscription from persisted data
    #[must_use]
    pub fn restore(
        id: SubscriptionId,
        user_id: UserId,
        subreddit_id: SubredditId,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            subreddit_id,
            created_at,
        }
    }

    #[must_use]
    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    #[must_use]
    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    #[must_use]
    pub fn subreddit_id(&self) -> SubredditId {
        self.subreddit_id
    }

    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
