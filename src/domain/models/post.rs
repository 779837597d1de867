//! Post Domain Model
//!
//! A submission to a subreddit: text, link, image or video.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use super::ids::{PostId, SubredditId, UserId};
use super::validation::validate_not_blank;
use super::vote::VoteDelta;
use crate::shared::errors::DomainError;

/// Kind of content a post carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PostType {
    #[default]
    Text,
    Link,
    Image,
    Video,
}

impl PostType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "TEXT",
            Self::Link => "LINK",
            Self::Image => "IMAGE",
            Self::Video => "VIDEO",
        }
    }
}

impl fmt::Display for PostType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PostType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "TEXT" => Ok(Self::Text),
            "LINK" => Ok(Self::Link),
            "IMAGE" => Ok(Self::Image),
            "VIDEO" => Ok(Self::Video),
            other => Err(format!("unknown post type '{other}'")),
        }
    }
}

/// Link, image and video posts must carry the matching URL
fn validate_post_media(post: &NewPost) -> Result<(), ValidationError> {
    let (required, field) = match post.post_type {
        PostType::Text => return Ok(()),
        PostType::Link => (&post.url, "url"),
        PostType::Image => (&post.image_url, "image_url"),
        PostType::Video => (&post.video_url, "video_url"),
    };

    if required.as_deref().is_some_and(|u| !u.trim().is_empty()) {
        Ok(())
    } else {
        let mut error = ValidationError::new("post_media");
        error.message = Some(format!("{} posts require {}", post.post_type, field).into());
        Err(error)
    }
}

/// Data required to create a new Post
#[derive(Debug, Clone, Validate)]
#[validate(schema(function = "validate_post_media"))]
pub struct NewPost {
    #[validate(custom(function = "validate_not_blank", message = "Title is required"))]
    #[validate(length(max = 300, message = "Title must not exceed 300 characters"))]
    pub title: String,

    pub content: Option<String>,

    pub post_type: PostType,

    #[validate(length(max = 500, message = "URL must not exceed 500 characters"))]
    pub url: Option<String>,

    #[validate(length(max = 500, message = "Image URL must not exceed 500 characters"))]
    pub image_url: Option<String>,

    #[validate(length(max = 500, message = "Video URL must not exceed 500 characters"))]
    pub video_url: Option<String>,

    pub is_nsfw: bool,

    pub author_id: UserId,

    pub subreddit_id: SubredditId,
}

impl NewPost {
    /// A plain text post with every optional field unset
    #[must_use]
    pub fn new(author_id: UserId, subreddit_id: SubredditId, title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: None,
            post_type: PostType::default(),
            url: None,
            image_url: None,
            video_url: None,
            is_nsfw: false,
            author_id,
            subreddit_id,
        }
    }
}

/// Post domain entity
#[derive(Debug, Clone)]
pub struct Post {
    id: PostId,
    title: String,
    content: Option<String>,
    post_type: PostType,
    url: Option<String>,
    image_url: Option<String>,
    video_url: Option<String>,
    upvotes: i32,
    downvotes: i32,
    comment_count: i32,
    is_nsfw: bool,
    is_locked: bool,
    is_stickied: bool,
    author_id: UserId,
    subreddit_id: SubredditId,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Post {
    /// Create a new Post with zeroed counters, unlocked and not stickied
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if any field violates its constraints.
    pub fn new(data: NewPost) -> Result<Self, DomainError> {
        let data = NewPost {
            title: data.title.trim().to_string(),
            ..data
        };
        data.validate()?;

        let now = Utc::now();
        Ok(Self {
            id: PostId::new(),
            title: data.title,
            content: data.content,
            post_type: data.post_type,
            url: data.url,
            image_url: data.image_url,
            video_url: data.video_url,
            upvotes: 0,
            downvotes: 0,
            comment_count: 0,
            is_nsfw: data.is_nsfw,
            is_locked: false,
            is_stickied: false,
            author_id: data.author_id,
            subreddit_id: data.subreddit_id,
            created_at: now,
            updated_at: now,
        })
    }

    /// Restore a Post from persisted data
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn restore(
        id: PostId,
        title: String,
        content: Option<String>,
        post_type: PostType,
        url: Option<String>,
        image_url: Option<String>,
        video_url: Option<String>,
        upvotes: i32,
        downvotes: i32,
        comment_count: i32,
        is_nsfw: bool,
        is_locked: bool,
        is_stickied: bool,
        author_id: UserId,
        subreddit_id: SubredditId,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title,
            content,
            post_type,
            url,
            image_url,
            video_url,
            upvotes,
            downvotes,
            comment_count,
            is_nsfw,
            is_locked,
            is_stickied,
            author_id,
            subreddit_id,
            created_at,
            updated_at,
        }
    }

    /// Apply a vote transition to the counters
    #[must_use]
    pub fn with_vote_delta(self, delta: VoteDelta) -> Self {
        Self {
            upvotes: self.upvotes + delta.upvotes,
            downvotes: self.downvotes + delta.downvotes,
            updated_at: Utc::now(),
            ..self
        }
    }

    /// Count one more comment on this post
    #[must_use]
    pub fn with_comment_added(self) -> Self {
        Self {
            comment_count: self.comment_count + 1,
            updated_at: Utc::now(),
            ..self
        }
    }

    /// Net score shown to readers
    #[must_use]
    pub fn score(&self) -> i32 {
        self.upvotes - self.downvotes
    }

    // Getters

    #[must_use]
    pub fn id(&self) -> PostId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    #[must_use]
    pub fn post_type(&self) -> PostType {
        self.post_type
    }

    #[must_use]
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    #[must_use]
    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }

    #[must_use]
    pub fn video_url(&self) -> Option<&str> {
        self.video_url.as_deref()
    }

    #[must_use]
    pub fn upvotes(&self) -> i32 {
        self.upvotes
    }

    #[must_use]
    pub fn downvotes(&self) -> i32 {
        self.downvotes
    }

    #[must_use]
    pub fn comment_count(&self) -> i32 {
        self.comment_count
    }

    #[must_use]
    pub fn is_nsfw(&self) -> bool {
        self.is_nsfw
    }

    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.is_locked
    }

    #[must_use]
    pub fn is_stickied(&self) -> bool {
        self.is_stickied
    }

    #[must_use]
    pub fn author_id(&self) -> UserId {
        self.author_id
    }

    #[must_use]
    pub fn subreddit_id(&self) -> SubredditId {
        self.subreddit_id
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

#[cfg(test)]
mod tests {
    use super::*;

    fn new_post() -> NewPost {
        NewPost::new(UserId::new(), SubredditId::new(), "Announcing Rust 2.0")
    }

    #[test]
    fn test_post_new_defaults() {
        let post = Post::new(new_post()).unwrap();

        assert_eq!(post.upvotes(), 0);
        assert_eq!(post.downvotes(), 0);
        assert_eq!(post.comment_count(), 0);
        assert_eq!(post.score(), 0);
        assert!(!post.is_nsfw());
        assert!(!post.is_locked());
        assert!(!post.is_stickied());
        assert_eq!(post.post_type(), PostType::Text);
    }

    #[test]
    fn test_post_title_required() {
        let data = NewPost {
            title: " ".to_string(),
            ..new_post()
        };
        assert!(matches!(Post::new(data), Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_post_title_max_length() {
        let ok = NewPost {
            title: "t".repeat(300),
            ..new_post()
        };
        assert!(Post::new(ok).is_ok());

        let too_long = NewPost {
            title: "t".repeat(301),
            ..new_post()
        };
        assert!(Post::new(too_long).is_err());
    }

    #[test]
    fn test_post_title_trimmed_before_length_check() {
        let padded = NewPost {
            title: format!("  {}\n", "t".repeat(300)),
            ..new_post()
        };
        let post = Post::new(padded).unwrap();
        assert_eq!(post.title().len(), 300);
    }

    #[test]
    fn test_link_post_requires_url() {
        let missing = NewPost {
            post_type: PostType::Link,
            ..new_post()
        };
        assert!(Post::new(missing).is_err());

        let present = NewPost {
            post_type: PostType::Link,
            url: Some("https://www.rust-lang.org".to_string()),
            ..new_post()
        };
        assert!(Post::new(present).is_ok());
    }

    #[test]
    fn test_url_max_length() {
        let data = NewPost {
            post_type: PostType::Image,
            image_url: Some(format!("https://img.example/{}", "x".repeat(500))),
            ..new_post()
        };
        assert!(Post::new(data).is_err());
    }

    #[test]
    fn test_post_counters() {
        let post = Post::new(new_post())
            .unwrap()
            .with_vote_delta(VoteDelta { upvotes: 3, downvotes: 1 })
            .with_comment_added();

        assert_eq!(post.upvotes(), 3);
        assert_eq!(post.downvotes(), 1);
        assert_eq!(post.score(), 2);
        assert_eq!(post.comment_count(), 1);
    }

    #[test]
    fn test_post_type_round_trips_through_str() {
        for post_type in [PostType::Text, PostType::Link, PostType::Image, PostType::Video] {
            assert_eq!(post_type.as_str().parse::<PostType>().unwrap(), post_type);
        }
        assert!("POLL".parse::<PostType>().is_err());
    }

    #[test]
    fn test_post_type_serializes_uppercase() {
        assert_eq!(serde_json::to_string(&PostType::Image).unwrap(), "\"IMAGE\"");
    }
}
