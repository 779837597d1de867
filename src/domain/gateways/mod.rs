//! Gateway Traits (Ports)
//!
//! Abstract interfaces defining contracts for external dependencies.
//! These are implemented by driven adapters in the infrastructure layer.

pub mod comment_repository;
pub mod password_hasher;
pub mod post_repository;
pub mod subreddit_repository;
pub mod subscription_repository;
pub mod user_repository;
pub mod vote_repository;

pub use comment_repository::CommentRepository;
pub use password_hasher::PasswordHasher;
pub use post_repository::PostRepository;
pub use subreddit_repository::SubredditRepository;
pub use subscription_repository::SubscriptionRepository;
pub use user_repository::UserRepository;
pub use vote_repository::VoteRepository;
