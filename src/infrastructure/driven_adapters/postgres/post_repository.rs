//! PostgreSQL Post Repository Implementation

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::gateways::PostRepository;
use crate::domain::models::{Page, Post, PostId, PostType, SubredditId, UserId};
use crate::shared::errors::RepositoryError;

const POST_COLUMNS: &str = "id, title, content, post_type, url, image_url, video_url, upvotes, downvotes, \
                            comment_count, is_nsfw, is_locked, is_stickied, author_id, subreddit_id, \
                            created_at, updated_at";

/// Database row representation for posts table
#[derive(Debug, sqlx::FromRow)]
struct PostRow {
    id: Uuid,
    title: String,
    content: Option<String>,
    post_type: String,
    url: Option<String>,
    image_url: Option<String>,
    video_url: Option<String>,
    upvotes: i32,
    downvotes: i32,
    comment_count: i32,
    is_nsfw: bool,
    is_locked: bool,
    is_stickied: bool,
    author_id: Uuid,
    subreddit_id: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<PostRow> for Post {
    type Error = RepositoryError;

    fn try_from(row: PostRow) -> Result<Self, Self::Error> {
        let post_type: PostType = row
            .post_type
            .parse()
            .map_err(|e| RepositoryError::Mapping(format!("Failed to parse post_type: {e}")))?;

        Ok(Post::restore(
            PostId::from_uuid(row.id),
            row.title,
            row.content,
            post_type,
            row.url,
            row.image_url,
            row.video_url,
            row.upvotes,
            row.downvotes,
            row.comment_count,
            row.is_nsfw,
            row.is_locked,
            row.is_stickied,
            UserId::from_uuid(row.author_id),
            SubredditId::from_uuid(row.subreddit_id),
            row.created_at,
            row.updated_at,
        ))
    }
}

/// PostgreSQL implementation of PostRepository
pub struct PostgresPostRepository {
    pool: PgPool,
}

impl PostgresPostRepository {
    /// Create a new PostgresPostRepository
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, RepositoryError> {
        let row = sqlx::query_as::<_, PostRow>(&format!("SELECT {POST_COLUMNS} FROM posts WHERE id = $1"))
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await?;

        row.map(Post::try_from).transpose()
    }

    async fn list_by_subreddit(
        &self,
        subreddit_id: SubredditId,
        page: Page,
    ) -> Result<Vec<Post>, RepositoryError> {
        let rows = sqlx::query_as::<_, PostRow>(&format!(
            r#"
            SELECT {POST_COLUMNS}
            FROM posts
            WHERE subreddit_id = $1
            ORDER BY is_stickied DESC, created_at DESC, id ASC
            LIMIT $2 OFFSET $3
            "#
        ))
        .bind(subreddit_id.as_uuid())
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Post::try_from).collect()
    }

    async fn create(&self, post: &Post) -> Result<Post, RepositoryError> {
        let row = sqlx::query_as::<_, PostRow>(&format!(
            r#"
            INSERT INTO posts (
                id, title, content, post_type, url, image_url, video_url, upvotes, downvotes,
                comment_count, is_nsfw, is_locked, is_stickied, author_id, subreddit_id,
                created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17)
            RETURNING {POST_COLUMNS}
            "#
        ))
        .bind(post.id().as_uuid())
        .bind(post.title())
        .bind(post.content())
        .bind(post.post_type().as_str())
        .bind(post.url())
        .bind(post.image_url())
        .bind(post.video_url())
        .bind(post.upvotes())
        .bind(post.downvotes())
        .bind(post.comment_count())
        .bind(post.is_nsfw())
        .bind(post.is_locked())
        .bind(post.is_stickied())
        .bind(post.author_id().as_uuid())
        .bind(post.subreddit_id().as_uuid())
        .bind(post.created_at())
        .bind(post.updated_at())
        .fetch_one(&self.pool)
        .await?;

        Post::try_from(row)
    }
}
