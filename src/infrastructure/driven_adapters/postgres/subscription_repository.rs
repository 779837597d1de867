//! PostgreSQL Subscription Repository Implementation

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::gateways::SubscriptionRepository;
use crate::domain::models::{SubredditId, Subscription, SubscriptionId, UserId};
use crate::shared::errors::RepositoryError;

/// Database row representation for subscriptions table
#[derive(Debug, sqlx::FromRow)]
struct SubscriptionRow {
    id: Uuid,
    user_id: Uuid,
    subreddit_id: Uuid,
    created_at: DateTime<Utc>,
}

impl From<SubscriptionRow> for Subscription {
    fn from(row: SubscriptionRow) -> Self {
        Subscription::restore(
            SubscriptionId::from_uuid(row.id),
            UserId::from_uuid(row.user_id),
            SubredditId::from_uuid(row.subreddit_id),
            row.created_at,
        )
    }
}

/// PostgreSQL implementation of SubscriptionRepository
pub struct PostgresSubscriptionRepository {
    pool: PgPool,
}

impl PostgresSubscriptionRepository {
    /// Create a new PostgresSubscriptionRepository
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SubscriptionRepository for PostgresSubscriptionRepository {
    async fn find(
        &self,
        user_id: UserId,
        subreddit_id: SubredditId,
    ) -> Result<Option<Subscription>, RepositoryError> {
        let row = sqlx::query_as::<_, SubscriptionRow>(
            r#"
            SELECT id, user_id, subreddit_id, created_at
            FROM subscriptions
            WHERE user_id = $1 AND subreddit_id = $2
            "#,
        )
        .bind(user_id.as_uuid())
        .bind(subreddit_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Subscription::from))
    }

    async fn create(&self, subscription: &Subscription) -> Result<Subscription, RepositoryError> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, SubscriptionRow>(
            r#"
            INSERT INTO subscriptions (id, user_id, subreddit_id, created_at)
            VALUES ($1, $2, $3, $4)
            RETURNING id, user_id, subreddit_id, created_at
            "#,
        )
        .bind(subscription.id().as_uuid())
        .bind(subscription.user_id().as_uuid())
        .bind(subscription.subreddit_id().as_uuid())
        .bind(subscription.created_at())
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query(
            "UPDATE subreddits SET subscriber_count = subscriber_count + 1, updated_at = NOW() WHERE id = $1",
        )
        .bind(subscription.subreddit_id().as_uuid())
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(Subscription::from(row))
    }

    async fn delete(&self, user_id: UserId, subreddit_id: SubredditId) -> Result<bool, RepositoryError> {
        let mut tx = self.pool.begin().await?;

        let deleted = sqlx::query("DELETE FROM subscriptions WHERE user_id = $1 AND subreddit_id = $2")
            .bind(user_id.as_uuid())
            .bind(subreddit_id.as_uuid())
            .execute(&mut *tx)
            .await?;

        if deleted.rows_affected() == 0 {
            return Ok(false);
        }

        sqlx::query(
            r#"
            UPDATE subreddits
            SET subscriber_count = GREATEST(subscriber_count - 1, 0), updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(subreddit_id.as_uuid())
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(true)
    }
}
