//! Domain Models
//!
//! Pure domain entities and value objects representing business concepts.

pub mod comment;
pub mod ids;
pub mod page;
pub mod post;
pub mod subreddit;
pub mod subscription;
pub mod user;
pub mod validation;
pub mod vote;

pub use comment::{Comment, CommentThread, NewComment};
pub use ids::{CommentId, PostId, SubredditId, SubscriptionId, UserId, VoteId};
pub use page::Page;
pub use post::{NewPost, Post, PostType};
pub use subreddit::{NewSubreddit, Subreddit};
pub use subscription::Subscription;
pub use user::{NewUser, User};
pub use vote::{Vote, VoteDelta, VoteDirection, VoteTally, VoteTarget};
