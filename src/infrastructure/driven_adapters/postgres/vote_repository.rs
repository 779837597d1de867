//! PostgreSQL Vote Repository Implementation
//!
//! A cast locks the target row, compares the user's previous vote with the new
//! one and applies the resulting [`VoteDelta`] to the target's counters, all in
//! one transaction.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use crate::domain::gateways::VoteRepository;
use crate::domain::models::{UserId, VoteDelta, VoteDirection, VoteId, VoteTally, VoteTarget};
use crate::shared::errors::RepositoryError;

/// Table and vote column for a target kind
fn target_columns(target: VoteTarget) -> (&'static str, &'static str, Uuid) {
    match target {
        VoteTarget::Post(id) => ("posts", "post_id", *id.as_uuid()),
        VoteTarget::Comment(id) => ("comments", "comment_id", *id.as_uuid()),
    }
}

#[derive(Debug, sqlx::FromRow)]
struct ExistingVoteRow {
    id: Uuid,
    vote_type: String,
}

#[derive(Debug, sqlx::FromRow)]
struct CountersRow {
    upvotes: i32,
    downvotes: i32,
}

/// PostgreSQL implementation of VoteRepository
pub struct PostgresVoteRepository {
    pool: PgPool,
}

impl PostgresVoteRepository {
    /// Create a new PostgresVoteRepository
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn lock_target(
        tx: &mut Transaction<'_, Postgres>,
        target: VoteTarget,
    ) -> Result<(), RepositoryError> {
        let (table, _, id) = target_columns(target);
        let locked = sqlx::query(&format!("SELECT id FROM {table} WHERE id = $1 FOR UPDATE"))
            .bind(id)
            .fetch_optional(&mut **tx)
            .await?;

        locked
            .map(|_| ())
            .ok_or_else(|| RepositoryError::NotFound(target.to_string()))
    }
}

#[async_trait]
impl VoteRepository for PostgresVoteRepository {
    async fn cast(
        &self,
        user_id: UserId,
        target: VoteTarget,
        direction: Option<VoteDirection>,
    ) -> Result<VoteTally, RepositoryError> {
        let (table, column, target_id) = target_columns(target);
        let mut tx = self.pool.begin().await?;

        Self::lock_target(&mut tx, target).await?;

        let existing = sqlx::query_as::<_, ExistingVoteRow>(&format!(
            "SELECT id, vote_type FROM votes WHERE user_id = $1 AND {column} = $2"
        ))
        .bind(user_id.as_uuid())
        .bind(target_id)
        .fetch_optional(&mut *tx)
        .await?;

        let previous = existing
            .as_ref()
            .map(|row| row.vote_type.parse::<VoteDirection>())
            .transpose()
            .map_err(|e| RepositoryError::Mapping(format!("Failed to parse vote_type: {e}")))?;

        match (&existing, direction) {
            (Some(row), Some(next)) if previous != Some(next) => {
                sqlx::query("UPDATE votes SET vote_type = $2, updated_at = NOW() WHERE id = $1")
                    .bind(row.id)
                    .bind(next.as_str())
                    .execute(&mut *tx)
                    .await?;
            }
            (Some(row), None) => {
                sqlx::query("DELETE FROM votes WHERE id = $1")
                    .bind(row.id)
                    .execute(&mut *tx)
                    .await?;
            }
            (None, Some(next)) => {
                sqlx::query(&format!(
                    r#"
                    INSERT INTO votes (id, user_id, {column}, vote_type, created_at, updated_at)
                    VALUES ($1, $2, $3, $4, NOW(), NOW())
                    "#
                ))
                .bind(*VoteId::new().as_uuid())
                .bind(user_id.as_uuid())
                .bind(target_id)
                .bind(next.as_str())
                .execute(&mut *tx)
                .await?;
            }
            _ => {}
        }

        let delta = VoteDelta::between(previous, direction);
        let counters = sqlx::query_as::<_, CountersRow>(&format!(
            r#"
            UPDATE {table}
            SET upvotes = upvotes + $2,
                downvotes = downvotes + $3,
                updated_at = CASE WHEN $2 = 0 AND $3 = 0 THEN updated_at ELSE NOW() END
            WHERE id = $1
            RETURNING upvotes, downvotes
            "#
        ))
        .bind(target_id)
        .bind(delta.upvotes)
        .bind(delta.downvotes)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(VoteTally {
            upvotes: counters.upvotes,
            downvotes: counters.downvotes,
            direction,
        })
    }
}
