//! Cast Vote Use Case
//!
//! Records, changes or clears a user's vote on a post or comment.

use std::sync::Arc;

use crate::domain::gateways::{CommentRepository, PostRepository, VoteRepository};
use crate::domain::models::{UserId, VoteDirection, VoteTally, VoteTarget};
use crate::shared::errors::{DomainError, UseCaseError};

/// Use case for voting on posts and comments
pub struct CastVoteUseCase {
    vote_repository: Arc<dyn VoteRepository>,
    post_repository: Arc<dyn PostRepository>,
    comment_repository: Arc<dyn CommentRepository>,
}

impl CastVoteUseCase {
    /// Create a new CastVoteUseCase
    #[must_use]
    pub fn new(
        vote_repository: Arc<dyn VoteRepository>,
        post_repository: Arc<dyn PostRepository>,
        comment_repository: Arc<dyn CommentRepository>,
    ) -> Self {
        Self {
            vote_repository,
            post_repository,
            comment_repository,
        }
    }

    /// Execute the use case; `direction = None` clears the user's vote
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the target doesn't exist.
    /// Returns `UseCaseError::Domain` if the target is a deleted comment.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(
        &self,
        user_id: UserId,
        target: VoteTarget,
        direction: Option<VoteDirection>,
    ) -> Result<VoteTally, UseCaseError> {
        tracing::info!(user_id = %user_id, target = %target, direction = ?direction, "Casting vote");

        match target {
            VoteTarget::Post(post_id) => {
                if self.post_repository.find_by_id(post_id).await?.is_none() {
                    return Err(UseCaseError::not_found("Post", post_id));
                }
            }
            VoteTarget::Comment(comment_id) => {
                let comment = self
                    .comment_repository
                    .find_by_id(comment_id)
                    .await?
                    .ok_or_else(|| UseCaseError::not_found("Comment", comment_id))?;
                if comment.is_deleted() {
                    return Err(DomainError::InvalidState("Cannot vote on a deleted comment".to_string()).into());
                }
            }
        }

        let tally = self.vote_repository.cast(user_id, target, direction).await?;

        tracing::info!(
            target = %target,
            upvotes = tally.upvotes,
            downvotes = tally.downvotes,
            "Vote recorded"
        );
        Ok(tally)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::use_cases::test_support::InMemoryStore;
    use crate::domain::models::{CommentId, PostId};
    use VoteDirection::{Down, Up};

    fn use_case(store: &Arc<InMemoryStore>) -> CastVoteUseCase {
        CastVoteUseCase::new(store.clone(), store.clone(), store.clone())
    }

    fn seeded() -> (Arc<InMemoryStore>, UserId, PostId) {
        let store = Arc::new(InMemoryStore::default());
        let author = store.add_user("ferris").id();
        let rust = store.add_subreddit("rust", author);
        let post = store.add_post(author, rust.id(), "Vote on me");
        (store, author, post.id())
    }

    #[tokio::test]
    async fn should_count_first_upvote() {
        let (store, user, post_id) = seeded();

        let tally = use_case(&store)
            .execute(user, VoteTarget::Post(post_id), Some(Up))
            .await
            .unwrap();

        assert_eq!((tally.upvotes, tally.downvotes), (1, 0));
        assert_eq!(tally.direction, Some(Up));
        assert_eq!(store.post(post_id).unwrap().upvotes(), 1);
    }

    #[tokio::test]
    async fn should_not_double_count_repeated_vote() {
        let (store, user, post_id) = seeded();
        let use_case = use_case(&store);

        use_case.execute(user, VoteTarget::Post(post_id), Some(Up)).await.unwrap();
        let tally = use_case.execute(user, VoteTarget::Post(post_id), Some(Up)).await.unwrap();

        assert_eq!((tally.upvotes, tally.downvotes), (1, 0));
        assert_eq!(store.votes.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn should_switch_and_clear_vote() {
        let (store, user, post_id) = seeded();
        let other = store.add_user("other").id();
        let use_case = use_case(&store);
        let target = VoteTarget::Post(post_id);

        use_case.execute(other, target, Some(Up)).await.unwrap();
        use_case.execute(user, target, Some(Up)).await.unwrap();
        let switched = use_case.execute(user, target, Some(Down)).await.unwrap();
        assert_eq!((switched.upvotes, switched.downvotes), (1, 1));
        assert_eq!(switched.score(), 0);

        let cleared = use_case.execute(user, target, None).await.unwrap();
        assert_eq!((cleared.upvotes, cleared.downvotes), (1, 0));
        assert_eq!(cleared.direction, None);
        assert_eq!(store.votes.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn should_vote_on_comment() {
        let (store, user, post_id) = seeded();
        let comment = store.add_comment(user, post_id, None);

        let tally = use_case(&store)
            .execute(user, VoteTarget::Comment(comment.id()), Some(Down))
            .await
            .unwrap();

        assert_eq!((tally.upvotes, tally.downvotes), (0, 1));
        assert_eq!(store.comment(comment.id()).unwrap().downvotes(), 1);
    }

    #[tokio::test]
    async fn should_reject_vote_on_deleted_comment() {
        let (store, user, post_id) = seeded();
        let comment = store.add_comment(user, post_id, None);
        {
            let mut comments = store.comments.lock().unwrap();
            let deleted = comments.remove(0).mark_deleted();
            comments.push(deleted);
        }

        let result = use_case(&store)
            .execute(user, VoteTarget::Comment(comment.id()), Some(Up))
            .await;

        assert!(matches!(result, Err(UseCaseError::Domain(DomainError::InvalidState(_)))));
    }

    #[tokio::test]
    async fn should_return_not_found_for_missing_targets() {
        let (store, user, _) = seeded();
        let use_case = use_case(&store);

        let post = use_case.execute(user, VoteTarget::Post(PostId::new()), Some(Up)).await;
        let comment = use_case
            .execute(user, VoteTarget::Comment(CommentId::new()), Some(Up))
            .await;

        assert!(matches!(post, Err(UseCaseError::NotFound { .. })));
        assert!(matches!(comment, Err(UseCaseError::NotFound { .. })));
    }
}
