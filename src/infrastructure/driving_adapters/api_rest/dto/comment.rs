//! Comment DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::models::{Comment, CommentId, CommentThread, NewComment, PostId, UserId};

/// DTO for replying to a post or to another comment
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentDto {
    pub content: String,
    pub parent_comment_id: Option<Uuid>,
}

impl CreateCommentDto {
    #[must_use]
    pub fn into_new_comment(self, author_id: UserId, post_id: PostId) -> NewComment {
        NewComment {
            content: self.content,
            parent_comment_id: self.parent_comment_id.map(CommentId::from_uuid),
            author_id,
            post_id,
        }
    }
}

/// DTO for comment responses; threaded listings fill `replies`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentResponseDto {
    pub id: Uuid,
    pub content: String,
    pub upvotes: i32,
    pub downvotes: i32,
    pub score: i32,
    pub is_deleted: bool,
    pub parent_comment_id: Option<Uuid>,
    pub author_id: Uuid,
    pub post_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub replies: Vec<CommentResponseDto>,
}

impl From<Comment> for CommentResponseDto {
    fn from(comment: Comment) -> Self {
        Self {
            id: *comment.id().as_uuid(),
            content: comment.visible_content().to_string(),
            upvotes: comment.upvotes(),
            downvotes: comment.downvotes(),
            score: comment.score(),
            is_deleted: comment.is_deleted(),
            parent_comment_id: comment.parent_comment_id().map(|id| *id.as_uuid()),
            author_id: *comment.author_id().as_uuid(),
            post_id: *comment.post_id().as_uuid(),
            created_at: comment.created_at(),
            updated_at: comment.updated_at(),
            replies: Vec::new(),
        }
    }
}

impl From<CommentThread> for CommentResponseDto {
    fn from(thread: CommentThread) -> Self {
        Self {
            replies: thread.replies.into_iter().map(Self::from).collect(),
            ..Self::from(thread.comment)
        }
    }
}
