//! Vote Repository Gateway

use async_trait::async_trait;

use crate::domain::models::{UserId, VoteDirection, VoteTally, VoteTarget};
use crate::shared::errors::RepositoryError;

/// Repository trait for Vote persistence operations
#[async_trait]
pub trait VoteRepository: Send + Sync {
    /// Record a user's vote on a target, replacing any previous vote.
    ///
    /// `None` clears the vote. The target's counters are adjusted in the same
    /// transaction and the resulting tally is returned.
    async fn cast(
        &self,
        user_id: UserId,
        target: VoteTarget,
        direction: Option<VoteDirection>,
    ) -> Result<VoteTally, RepositoryError>;
}
