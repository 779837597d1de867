//! Subreddit DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::models::{NewSubreddit, Subreddit, Subscription, UserId};

/// DTO for creating a subreddit
///
/// Field rules live on [`NewSubreddit`]; violations surface as 400 with details.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSubredditDto {
    pub name: String,
    pub title: String,
    pub description: Option<String>,
    pub sidebar_content: Option<String>,
    pub icon_url: Option<String>,
    pub banner_url: Option<String>,
    #[serde(default)]
    pub is_private: bool,
    #[serde(default)]
    pub is_nsfw: bool,
}

impl CreateSubredditDto {
    /// Attach the creating user
    #[must_use]
    pub fn into_new_subreddit(self, created_by: UserId) -> NewSubreddit {
        NewSubreddit {
            name: self.name.trim().to_string(),
            title: self.title,
            description: self.description,
            sidebar_content: self.sidebar_content,
            icon_url: self.icon_url,
            banner_url: self.banner_url,
            is_private: self.is_private,
            is_nsfw: self.is_nsfw,
            created_by,
        }
    }
}

/// DTO for subreddit responses
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubredditResponseDto {
    pub id: Uuid,
    pub name: String,
    pub title: String,
    pub description: Option<String>,
    pub sidebar_content: Option<String>,
    pub icon_url: Option<String>,
    pub banner_url: Option<String>,
    pub is_private: bool,
    pub is_nsfw: bool,
    pub subscriber_count: i32,
    pub created_by: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Subreddit> for SubredditResponseDto {
    fn from(subreddit: Subreddit) -> Self {
        Self {
            id: *subreddit.id().as_uuid(),
            name: subreddit.name().to_string(),
            title: subreddit.title().to_string(),
            description: subreddit.description().map(str::to_string),
            sidebar_content: subreddit.sidebar_content().map(str::to_string),
            icon_url: subreddit.icon_url().map(str::to_string),
            banner_url: subreddit.banner_url().map(str::to_string),
            is_private: subreddit.is_private(),
            is_nsfw: subreddit.is_nsfw(),
            subscriber_count: subreddit.subscriber_count(),
            created_by: *subreddit.created_by().as_uuid(),
            created_at: subreddit.created_at(),
            updated_at: subreddit.updated_at(),
        }
    }
}

/// DTO for subscription responses
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionResponseDto {
    pub id: Uuid,
    pub user_id: Uuid,
    pub subreddit_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl From<Subscription> for SubscriptionResponseDto {
    fn from(subscription: Subscription) -> Self {
        Self {
            id: *subscription.id().as_uuid(),
            user_id: *subscription.user_id().as_uuid(),
            subreddit_id: *subscription.subreddit_id().as_uuid(),
            created_at: subscription.created_at(),
        }
    }
}
