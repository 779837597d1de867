//! Post DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::models::{NewPost, Post, PostType, SubredditId, UserId};

/// DTO for submitting a post to a subreddit
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostDto {
    pub title: String,
    pub content: Option<String>,
    #[serde(default)]
    pub post_type: PostType,
    pub url: Option<String>,
    pub image_url: Option<String>,
    pub video_url: Option<String>,
    #[serde(default)]
    pub is_nsfw: bool,
}

impl CreatePostDto {
    /// Attach the author and the resolved subreddit
    #[must_use]
    pub fn into_new_post(self, author_id: UserId, subreddit_id: SubredditId) -> NewPost {
        NewPost {
            title: self.title,
            content: self.content,
            post_type: self.post_type,
            url: self.url,
            image_url: self.image_url,
            video_url: self.video_url,
            is_nsfw: self.is_nsfw,
            author_id,
            subreddit_id,
        }
    }
}

/// DTO for post responses
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponseDto {
    pub id: Uuid,
    pub title: String,
    pub content: Option<String>,
    pub post_type: PostType,
    pub url: Option<String>,
    pub image_url: Option<String>,
    pub video_url: Option<String>,
    pub upvotes: i32,
    pub downvotes: i32,
    pub score: i32,
    pub comment_count: i32,
    pub is_nsfw: bool,
    pub is_locked: bool,
    pub is_stickied: bool,
    pub author_id: Uuid,
    pub subreddit_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Post> for PostResponseDto {
    fn from(post: Post) -> Self {
        Self {
            id: *post.id().as_uuid(),
            title: post.title().to_string(),
            content: post.content().map(str::to_string),
            post_type: post.post_type(),
            url: post.url().map(str::to_string),
            image_url: post.image_url().map(str::to_string),
            video_url: post.video_url().map(str::to_string),
            upvotes: post.upvotes(),
            downvotes: post.downvotes(),
            score: post.score(),
            comment_count: post.comment_count(),
            is_nsfw: post.is_nsfw(),
            is_locked: post.is_locked(),
            is_stickied: post.is_stickied(),
            author_id: *post.author_id().as_uuid(),
            subreddit_id: *post.subreddit_id().as_uuid(),
            created_at: post.created_at(),
            updated_at: post.updated_at(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_type_defaults_to_text() {
        let dto: CreatePostDto = serde_json::from_value(serde_json::json!({ "title": "Hello" })).unwrap();
        assert_eq!(dto.post_type, PostType::Text);
        assert!(!dto.is_nsfw);
    }

    #[test]
    fn test_link_post_reads_camel_case() {
        let dto: CreatePostDto = serde_json::from_value(serde_json::json!({
            "title": "Rust 2024",
            "postType": "LINK",
            "url": "https://blog.rust-lang.org",
            "isNsfw": false,
        }))
        .unwrap();
        let new_post = dto.into_new_post(UserId::new(), SubredditId::new());

        assert_eq!(new_post.post_type, PostType::Link);
        assert!(Post::new(new_post).is_ok());
    }
}
