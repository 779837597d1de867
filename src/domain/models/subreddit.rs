//! Subreddit Domain Model
//!
//! A named community that owns posts and collects subscriptions.

use chrono::{DateTime, Utc};
use validator::Validate;

use super::ids::{SubredditId, UserId};
use super::validation::{validate_not_blank, validate_subreddit_name};
use crate::shared::errors::DomainError;

/// Data required to create a new Subreddit
#[derive(Debug, Clone, Validate)]
pub struct NewSubreddit {
    #[validate(custom(function = "validate_not_blank", message = "Name is required"))]
    #[validate(length(min = 3, max = 50, message = "Name must be between 3 and 50 characters"))]
    #[validate(custom(function = "validate_subreddit_name"))]
    pub name: String,

    #[validate(custom(function = "validate_not_blank", message = "Title is required"))]
    #[validate(length(max = 100, message = "Title must not exceed 100 characters"))]
    pub title: String,

    pub description: Option<String>,

    pub sidebar_content: Option<String>,

    #[validate(length(max = 255, message = "Icon URL must not exceed 255 characters"))]
    pub icon_url: Option<String>,

    #[validate(length(max = 255, message = "Banner URL must not exceed 255 characters"))]
    pub banner_url: Option<String>,

    pub is_private: bool,

    pub is_nsfw: bool,

    pub created_by: UserId,
}

/// Subreddit domain entity
#[derive(Debug, Clone)]
pub struct Subreddit {
    id: SubredditId,
    name: String,
    title: String,
    description: Option<String>,
    sidebar_content: Option<String>,
    icon_url: Option<String>,
    banner_url: Option<String>,
    is_private: bool,
    is_nsfw: bool,
    subscriber_count: i32,
    created_by: UserId,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Subreddit {
    /// Create a new Subreddit with no subscribers
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if any field violates its constraints.
    pub fn new(data: NewSubreddit) -> Result<Self, DomainError> {
        let data = NewSubreddit {
            title: data.title.trim().to_string(),
            ..data
        };
        data.validate()?;

        let now = Utc::now();
        Ok(Self {
            id: SubredditId::new(),
            name: data.name,
            title: data.title,
            description: data.description,
            sidebar_content: data.sidebar_content,
            icon_url: data.icon_url,
            banner_url: data.banner_url,
            is_private: data.is_private,
            is_nsfw: data.is_nsfw,
            subscriber_count: 0,
            created_by: data.created_by,
            created_at: now,
            updated_at: now,
        })
    }

    /// Restore a Subreddit from persisted data
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn restore(
        id: SubredditId,
        name: String,
        title: String,
        description: Option<String>,
        sidebar_content: Option<String>,
        icon_url: Option<String>,
        banner_url: Option<String>,
        is_private: bool,
        is_nsfw: bool,
        subscriber_count: i32,
        created_by: UserId,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            title,
            description,
            sidebar_content,
            icon_url,
            banner_url,
            is_private,
            is_nsfw,
            subscriber_count,
            created_by,
            created_at,
            updated_at,
        }
    }

    /// Adjust the subscriber count, never going below zero
    #[must_use]
    pub fn with_subscriber_delta(self, delta: i32) -> Self {
        Self {
            subscriber_count: (self.subscriber_count + delta).max(0),
            updated_at: Utc::now(),
            ..self
        }
    }

    // Getters

    #[must_use]
    pub fn id(&self) -> SubredditId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    #[must_use]
    pub fn sidebar_content(&self) -> Option<&str> {
        self.sidebar_content.as_deref()
    }

    #[must_use]
    pub fn icon_url(&self) -> Option<&str> {
        self.icon_url.as_deref()
    }

    #[must_use]
    pub fn banner_url(&self) -> Option<&str> {
        self.banner_url.as_deref()
    }

    #[must_use]
    pub fn is_private(&self) -> bool {
        self.is_private
    }

    #[must_use]
    pub fn is_nsfw(&self) -> bool {
        self.is_nsfw
    }

    #[must_use]
    pub fn subscriber_count(&self) -> i32 {
        self.subscriber_count
    }

    #[must_use]
    pub fn created_by(&self) -> UserId {
        self.created_by
    }

    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    #[must_use]
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
