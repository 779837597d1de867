//! PostgreSQL Comment Repository Implementation

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::gateways::CommentRepository;
use crate::domain::models::{Comment, CommentId, PostId, UserId};
use crate::shared::errors::RepositoryError;

const COMMENT_COLUMNS: &str = "id, content, upvotes, downvotes, is_deleted, parent_comment_id, \
                               author_id, post_id, created_at, updated_at";

/// Database row representation for comments table
#[derive(Debug, sqlx::FromRow)]
struct CommentRow {
    id: Uuid,
    content: String,
    upvotes: i32,
    downvotes: i32,
    is_deleted: bool,
    parent_comment_id: Option<Uuid>,
    author_id: Uuid,
    post_id: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<CommentRow> for Comment {
    fn from(row: CommentRow) -> Self {
        Comment::restore(
            CommentId::from_uuid(row.id),
            row.content,
            row.upvotes,
            row.downvotes,
            row.is_deleted,
            row.parent_comment_id.map(CommentId::from_uuid),
            UserId::from_uuid(row.author_id),
            PostId::from_uuid(row.post_id),
            row.created_at,
            row.updated_at,
        )
    }
}

/// PostgreSQL implementation of CommentRepository
pub struct PostgresCommentRepository {
    pool: PgPool,
}

impl PostgresCommentRepository {
    /// Create a new PostgresCommentRepository
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for PostgresCommentRepository {
    async fn find_by_id(&self, id: CommentId) -> Result<Option<Comment>, RepositoryError> {
        let row = sqlx::query_as::<_, CommentRow>(&format!(
            "SELECT {COMMENT_COLUMNS} FROM comments WHERE id = $1"
        ))
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Comment::from))
    }

    async fn list_by_post(&self, post_id: PostId) -> Result<Vec<Comment>, RepositoryError> {
        let rows = sqlx::query_as::<_, CommentRow>(&format!(
            "SELECT {COMMENT_COLUMNS} FROM comments WHERE post_id = $1 ORDER BY created_at ASC, id ASC"
        ))
        .bind(post_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Comment::from).collect())
    }

    async fn create(&self, comment: &Comment) -> Result<Comment, RepositoryError> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, CommentRow>(&format!(
            r#"
            INSERT INTO comments (
                id, content, upvotes, downvotes, is_deleted, parent_comment_id,
                author_id, post_id, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING {COMMENT_COLUMNS}
            "#
        ))
        .bind(comment.id().as_uuid())
        .bind(comment.content())
        .bind(comment.upvotes())
        .bind(comment.downvotes())
        .bind(comment.is_deleted())
        .bind(comment.parent_comment_id().map(|id| *id.as_uuid()))
        .bind(comment.author_id().as_uuid())
        .bind(comment.post_id().as_uuid())
        .bind(comment.created_at())
        .bind(comment.updated_at())
        .fetch_one(&mut *tx)
        .await?;

        let updated = sqlx::query(
            "UPDATE posts SET comment_count = comment_count + 1, updated_at = NOW() WHERE id = $1",
        )
        .bind(comment.post_id().as_uuid())
        .execute(&mut *tx)
        .await?;

        if updated.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!("post {}", comment.post_id())));
        }

        tx.commit().await?;
        Ok(Comment::from(row))
    }

    async fn soft_delete(&self, id: CommentId) -> Result<bool, RepositoryError> {
        let result = sqlx::query(
            r#"
            UPDATE comments
            SET is_deleted = true, updated_at = NOW()
            WHERE id = $1 AND is_deleted = false
            "#,
        )
        .bind(id.as_uuid())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
