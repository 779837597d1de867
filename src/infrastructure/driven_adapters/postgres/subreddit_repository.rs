//! PostgreSQL Subreddit Repository Implementation

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::gateways::SubredditRepository;
use crate::domain::models::{Page, Subreddit, SubredditId, UserId};
use crate::shared::errors::RepositoryError;

const SUBREDDIT_COLUMNS: &str = "id, name, title, description, sidebar_content, icon_url, banner_url, \
                                 is_private, is_nsfw, subscriber_count, created_by, created_at, updated_at";

/// Database row representation for subreddits table
#[derive(Debug, sqlx::FromRow)]
struct SubredditRow {
    id: Uuid,
    name: String,
    title: String,
    description: Option<String>,
    sidebar_content: Option<String>,
    icon_url: Option<String>,
    banner_url: Option<String>,
    is_private: bool,
    is_nsfw: bool,
    subscriber_count: i32,
    created_by: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<SubredditRow> for Subreddit {
    fn from(row: SubredditRow) -> Self {
        Subreddit::restore(
            SubredditId::from_uuid(row.id),
            row.name,
            row.title,
            row.description,
            row.sidebar_content,
            row.icon_url,
            row.banner_url,
            row.is_private,
            row.is_nsfw,
            row.subscriber_count,
            UserId::from_uuid(row.created_by),
            row.created_at,
            row.updated_at,
        )
    }
}

/// PostgreSQL implementation of SubredditRepository
pub struct PostgresSubredditRepository {
    pool: PgPool,
}

impl PostgresSubredditRepository {
    /// Create a new PostgresSubredditRepository
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SubredditRepository for PostgresSubredditRepository {
    async fn find_by_id(&self, id: SubredditId) -> Result<Option<Subreddit>, RepositoryError> {
        let row = sqlx::query_as::<_, SubredditRow>(&format!(
            "SELECT {SUBREDDIT_COLUMNS} FROM subreddits WHERE id = $1"
        ))
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Subreddit::from))
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Subreddit>, RepositoryError> {
        let row = sqlx::query_as::<_, SubredditRow>(&format!(
            "SELECT {SUBREDDIT_COLUMNS} FROM subreddits WHERE LOWER(name) = LOWER($1)"
        ))
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Subreddit::from))
    }

    async fn list(&self, page: Page) -> Result<Vec<Subreddit>, RepositoryError> {
        let rows = sqlx::query_as::<_, SubredditRow>(&format!(
            r#"
            SELECT {SUBREDDIT_COLUMNS}
            FROM subreddits
            ORDER BY subscriber_count DESC, name ASC
            LIMIT $1 OFFSET $2
            "#
        ))
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Subreddit::from).collect())
    }

    async fn exists_by_name(&self, name: &str) -> Result<bool, RepositoryError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM subreddits WHERE LOWER(name) = LOWER($1))",
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn create(&self, subreddit: &Subreddit) -> Result<Subreddit, RepositoryError> {
        let row = sqlx::query_as::<_, SubredditRow>(&format!(
            r#"
            INSERT INTO subreddits (
                id, name, title, description, sidebar_content, icon_url, banner_url,
                is_private, is_nsfw, subscriber_count, created_by, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            RETURNING {SUBREDDIT_COLUMNS}
            "#
        ))
        .bind(subreddit.id().as_uuid())
        .bind(subreddit.name())
        .bind(subreddit.title())
        .bind(subreddit.description())
        .bind(subreddit.sidebar_content())
        .bind(subreddit.icon_url())
        .bind(subreddit.banner_url())
        .bind(subreddit.is_private())
        .bind(subreddit.is_nsfw())
        .bind(subreddit.subscriber_count())
        .bind(subreddit.created_by().as_uuid())
        .bind(subreddit.created_at())
        .bind(subreddit.updated_at())
        .fetch_one(&self.pool)
        .await?;

        Ok(Subreddit::from(row))
    }
}
