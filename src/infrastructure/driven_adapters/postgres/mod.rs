//! PostgreSQL Repository Implementations
//!
//! SQLx-backed implementations of the domain gateways. Counter columns are
//! adjusted with relative updates inside the transaction that changes the row.

mod comment_repository;
mod post_repository;
mod subreddit_repository;
mod subscription_repository;
mod user_repository;
mod vote_repository;

pub use comment_repository::PostgresCommentRepository;
pub use post_repository::PostgresPostRepository;
pub use subreddit_repository::PostgresSubredditRepository;
pub use subscription_repository::PostgresSubscriptionRepository;
pub use user_repository::PostgresUserRepository;
pub use vote_repository::PostgresVoteRepository;
